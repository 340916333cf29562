//! Atom Viewer
//!
//! Click an element in the periodic table to build and animate its atom.
//!
//! Controls:
//! - Click: Select element
//! - Arrow keys: Orbit camera
//! - Scroll: Zoom in/out
//! - Space: Pause/resume animation
//! - R: Rebuild current atom
//! - G: Toggle Grid/HCP packing
//! - 1/2/3: Packing presets (HCP, sparse grid, dense grid)

use atoms::{AtomScene, NucleusConfig, ViewerConfig, ViewerContext};
use winit::{
    event::{ElementState, Event, KeyEvent, MouseScrollDelta, WindowEvent},
    event_loop::ControlFlow,
    keyboard::{KeyCode, PhysicalKey},
};

struct App {
    viewer: ViewerContext,
    scene: AtomScene,
}

impl App {
    fn select(&mut self, atomic_number: u8) {
        if let Err(e) = self.scene.select(atomic_number) {
            log::warn!("Selection ignored: {e}");
        }
    }

    fn set_nucleus_config(&mut self, config: NucleusConfig) {
        if let Err(e) = self.scene.set_nucleus_config(config) {
            log::warn!("Rebuild failed: {e}");
        }
    }

    fn handle_key(&mut self, key: KeyCode, state: ElementState) {
        if state != ElementState::Pressed {
            return;
        }

        match key {
            KeyCode::Space => self.scene.paused = !self.scene.paused,
            KeyCode::KeyR => {
                if let Err(e) = self.scene.rebuild() {
                    log::warn!("Rebuild failed: {e}");
                }
            }
            KeyCode::KeyG => {
                let config = NucleusConfig {
                    strategy: self.scene.nucleus_config.strategy.toggled(),
                    ..self.scene.nucleus_config
                };
                self.set_nucleus_config(config);
            }
            KeyCode::Digit1 => self.set_nucleus_config(NucleusConfig::hcp()),
            KeyCode::Digit2 => self.set_nucleus_config(NucleusConfig::sparse_grid()),
            KeyCode::Digit3 => self.set_nucleus_config(NucleusConfig::dense_grid()),
            KeyCode::ArrowLeft => self.viewer.orbit_camera(-0.1, 0.0),
            KeyCode::ArrowRight => self.viewer.orbit_camera(0.1, 0.0),
            KeyCode::ArrowUp => self.viewer.orbit_camera(0.0, 0.1),
            KeyCode::ArrowDown => self.viewer.orbit_camera(0.0, -0.1),
            _ => {}
        }
    }

    fn redraw(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.scene.update();
        if let Some(atomic_number) = self.viewer.render(&self.scene)? {
            self.select(atomic_number);
        }
        Ok(())
    }
}

fn main() {
    println!("Atom Viewer");
    println!();
    println!("Controls:");
    println!("  Click   - Select element in the periodic table");
    println!("  Arrows  - Orbit camera");
    println!("  Scroll  - Zoom");
    println!("  Space   - Pause/Resume");
    println!("  R       - Rebuild atom");
    println!("  G       - Toggle Grid/HCP packing");
    println!("  1/2/3   - Packing presets (HCP, sparse grid, dense grid)");
    println!();

    let (viewer, event_loop) = match ViewerContext::init(&ViewerConfig::default()) {
        Ok(init) => init,
        Err(e) => {
            log::error!("Failed to start viewer: {e}");
            std::process::exit(1);
        }
    };

    let mut app = Some(App {
        viewer,
        scene: AtomScene::from_entropy(),
    });

    let result = event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

        if let Event::LoopExiting = event {
            if let Some(app) = app.take() {
                app.viewer.teardown();
            }
            return;
        }
        let Some(app) = app.as_mut() else {
            return;
        };

        match event {
            Event::WindowEvent { ref event, .. } => {
                if app.viewer.handle_window_event(event) {
                    return;
                }

                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::Resized(size) => app.viewer.resize(*size),
                    WindowEvent::KeyboardInput {
                        event:
                            KeyEvent {
                                physical_key: PhysicalKey::Code(key),
                                state,
                                ..
                            },
                        ..
                    } => app.handle_key(*key, *state),
                    WindowEvent::MouseWheel { delta, .. } => {
                        let scroll = match delta {
                            MouseScrollDelta::LineDelta(_, y) => *y,
                            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                        };
                        app.viewer.zoom_camera(scroll);
                    }
                    WindowEvent::RedrawRequested => match app.redraw() {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            let size = app.viewer.ctx.size;
                            app.viewer.resize(size);
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                        Err(e) => log::warn!("Render error: {e:?}"),
                    },
                    _ => {}
                }
            }
            Event::AboutToWait => {
                app.viewer.ctx.window.request_redraw();
            }
            _ => {}
        }
    });

    if let Err(e) = result {
        log::error!("Event loop error: {e}");
        std::process::exit(1);
    }
}
