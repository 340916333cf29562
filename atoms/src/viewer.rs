//! Window, GPU, camera and UI state owned by the running viewer

use common::{Camera3D, GraphicsContext};
use winit::{dpi::PhysicalSize, event::WindowEvent, event_loop::EventLoop};

use crate::error::AtomError;
use crate::renderer::Renderer;
use crate::scene::AtomScene;
use crate::ui::{draw_element_info, PeriodicTableView};

#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Instance buffer capacity; spheres beyond this are not drawn
    pub max_spheres: usize,
    pub camera_distance: f32,
    pub min_camera_distance: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Atom Viewer".to_string(),
            width: 1280,
            height: 720,
            max_spheres: 1024,
            camera_distance: 15.0,
            min_camera_distance: 2.0,
        }
    }
}

struct EguiState {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

/// Everything needed to draw frames, created once by [`ViewerContext::init`]
pub struct ViewerContext {
    pub ctx: GraphicsContext,
    pub camera: Camera3D,
    renderer: Renderer,
    egui: EguiState,
    table: PeriodicTableView,
    min_camera_distance: f32,
}

impl ViewerContext {
    pub fn init(config: &ViewerConfig) -> Result<(Self, EventLoop<()>), AtomError> {
        let (ctx, event_loop) = pollster::block_on(GraphicsContext::new(
            &config.title,
            config.width,
            config.height,
        ))?;

        let mut camera = Camera3D::new(ctx.aspect_ratio());
        camera.distance = config.camera_distance;
        camera.update_orbital();

        let renderer = Renderer::new(&ctx, &camera, config.max_spheres);

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &ctx.window,
            Some(ctx.window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&ctx.device, ctx.config.format, None, 1);

        log::info!("Viewer initialised at {}x{}", ctx.size.width, ctx.size.height);

        Ok((
            Self {
                ctx,
                camera,
                renderer,
                egui: EguiState {
                    ctx: egui_ctx,
                    state: egui_state,
                    renderer: egui_renderer,
                },
                table: PeriodicTableView::default(),
                min_camera_distance: config.min_camera_distance,
            },
            event_loop,
        ))
    }

    /// Wait for in-flight GPU work, then release every resource
    pub fn teardown(self) {
        log::info!("Shutting down viewer");
        let _ = self.ctx.device.poll(wgpu::Maintain::Wait);
        drop(self);
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.ctx.resize(new_size);
        self.renderer
            .resize(&self.ctx.device, self.ctx.size.width, self.ctx.size.height);
        self.camera.update_aspect_ratio(self.ctx.aspect_ratio());
    }

    /// Feed an event to egui; returns true if the UI consumed it
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.egui.state.on_window_event(&self.ctx.window, event).consumed
    }

    pub fn orbit_camera(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.camera.orbit(delta_yaw, delta_pitch);
    }

    pub fn zoom_camera(&mut self, delta: f32) {
        self.camera.zoom(delta, self.min_camera_distance);
    }

    /// Draw one frame of `scene` with the UI on top.
    ///
    /// Returns the atomic number clicked in the periodic table, if any.
    pub fn render(&mut self, scene: &AtomScene) -> Result<Option<u8>, wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let atom = scene.current();
        self.renderer.update_camera(&self.ctx.queue, &self.camera);
        self.renderer.update_atom(&self.ctx.queue, atom);

        // Build egui UI
        let mut clicked = None;
        let selected = atom.map(|a| a.element.atomic_number);
        let table = &self.table;
        let raw_input = self.egui.state.take_egui_input(&self.ctx.window);
        let full_output = self.egui.ctx.run(raw_input, |ctx| {
            draw_element_info(ctx, atom, &scene.nucleus_config, scene.paused);
            table.show(ctx, selected, |z| clicked = Some(z));
        });

        self.egui
            .state
            .handle_platform_output(&self.ctx.window, full_output.platform_output);
        let tris = self
            .egui
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui
                .renderer
                .update_texture(&self.ctx.device, &self.ctx.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.ctx.size.width, self.ctx.size.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.renderer.render(&mut encoder, &view);

        self.egui.renderer.update_buffers(
            &self.ctx.device,
            &self.ctx.queue,
            &mut encoder,
            &tris,
            &screen_descriptor,
        );
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.egui
                .renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui.renderer.free_texture(id);
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(clicked)
    }
}
