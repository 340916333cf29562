//! Rendering system for the atom viewer
//!
//! Every particle is a camera-facing quad shaded as a lit sphere in the
//! fragment shader, with per-fragment depth so overlapping nucleons
//! intersect correctly. The boundary sphere is drawn last without depth
//! writes so the nucleus shows through it.

use common::{create_depth_view, create_uniform_buffer, Camera3D, CameraUniform, GraphicsContext, DEPTH_FORMAT};
use wgpu::util::DeviceExt;

use crate::atom::AtomGroup;
use crate::nucleus::Nucleon;

/// Instance data for GPU rendering
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereInstance {
    pub position: [f32; 3],
    pub radius: f32,
    pub color: [f32; 4],
}

impl SphereInstance {
    const ATTRIBS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        2 => Float32x3,
        3 => Float32,
        4 => Float32x4,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SphereInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Quad vertex for instanced rendering
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
}

impl QuadVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

// Unit quad vertices
const QUAD_VERTICES: &[QuadVertex] = &[
    QuadVertex { position: [-1.0, -1.0] },
    QuadVertex { position: [1.0, -1.0] },
    QuadVertex { position: [1.0, 1.0] },
    QuadVertex { position: [-1.0, -1.0] },
    QuadVertex { position: [1.0, 1.0] },
    QuadVertex { position: [-1.0, 1.0] },
];

/// Convert a `0xRRGGBB` sRGB color to linear RGBA
pub fn hex_color(hex: u32, alpha: f32) -> [f32; 4] {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xff) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [channel(16), channel(8), channel(0), alpha]
}

/// Colors and sizes used to draw an atom
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub proton: [f32; 4],
    pub neutron: [f32; 4],
    pub electron: [f32; 4],
    pub electron_radius: f32,
    pub boundary: [f32; 4],
    pub background: wgpu::Color,
}

impl Default for Palette {
    fn default() -> Self {
        let [r, g, b, _] = hex_color(0x0e0e0e, 1.0);
        Self {
            proton: hex_color(0x008000, 1.0),
            neutron: hex_color(0xadd8e6, 1.0),
            electron: hex_color(0xff0000, 1.0),
            electron_radius: 0.1,
            boundary: hex_color(0xffffff, 0.1),
            background: wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: 1.0,
            },
        }
    }
}

/// Sphere instances for one frame, split by blending mode
#[derive(Debug, Default)]
pub struct SphereBatch {
    pub opaque: Vec<SphereInstance>,
    pub translucent: Vec<SphereInstance>,
}

impl SphereBatch {
    pub fn from_atom(atom: &AtomGroup, palette: &Palette) -> Self {
        let nucleus = &atom.nucleus;

        let particles = nucleus.world_particles().map(|p| SphereInstance {
            position: p.position.to_array(),
            radius: nucleus.particle_radius,
            color: match p.kind {
                Nucleon::Proton => palette.proton,
                Nucleon::Neutron => palette.neutron,
            },
        });
        let electrons = atom.electrons.electrons.iter().map(|e| SphereInstance {
            position: e.position.to_array(),
            radius: palette.electron_radius,
            color: palette.electron,
        });

        Self {
            opaque: particles.chain(electrons).collect(),
            translucent: vec![SphereInstance {
                position: [0.0; 3],
                radius: nucleus.boundary_radius,
                color: palette.boundary,
            }],
        }
    }

    pub fn len(&self) -> usize {
        self.opaque.len() + self.translucent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct Renderer {
    opaque_pipeline: wgpu::RenderPipeline,
    translucent_pipeline: wgpu::RenderPipeline,
    quad_buffer: wgpu::Buffer,
    sphere_buffer: wgpu::Buffer,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    depth_view: wgpu::TextureView,
    max_spheres: usize,
    opaque_count: u32,
    translucent_count: u32,
    pub palette: Palette,
}

impl Renderer {
    pub fn new(ctx: &GraphicsContext, camera: &Camera3D, max_spheres: usize) -> Self {
        let device = &ctx.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Sphere Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/sphere.wgsl").into()),
        });

        let camera_buffer = create_uniform_buffer(device, &CameraUniform::from_camera_3d(camera));

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Sphere Pipeline Layout"),
            bind_group_layouts: &[&camera_bind_group_layout],
            push_constant_ranges: &[],
        });

        let opaque_pipeline = sphere_pipeline(
            device,
            &pipeline_layout,
            &shader,
            ctx.config.format,
            "Opaque Sphere Pipeline",
            true,
        );
        let translucent_pipeline = sphere_pipeline(
            device,
            &pipeline_layout,
            &shader,
            ctx.config.format,
            "Translucent Sphere Pipeline",
            false,
        );

        let quad_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad Buffer"),
            contents: bytemuck::cast_slice(QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let sphere_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Sphere Instance Buffer"),
            size: (std::mem::size_of::<SphereInstance>() * max_spheres) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let depth_view = create_depth_view(device, ctx.size.width, ctx.size.height);

        Self {
            opaque_pipeline,
            translucent_pipeline,
            quad_buffer,
            sphere_buffer,
            camera_buffer,
            camera_bind_group,
            depth_view,
            max_spheres,
            opaque_count: 0,
            translucent_count: 0,
            palette: Palette::default(),
        }
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_view = create_depth_view(device, width, height);
    }

    pub fn update_camera(&self, queue: &wgpu::Queue, camera: &Camera3D) {
        let uniform = CameraUniform::from_camera_3d(camera);
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::cast_slice(&[uniform]));
    }

    /// Upload this frame's spheres; `None` clears the scene
    pub fn update_atom(&mut self, queue: &wgpu::Queue, atom: Option<&AtomGroup>) {
        let batch = atom
            .map(|atom| SphereBatch::from_atom(atom, &self.palette))
            .unwrap_or_default();

        let opaque = batch.opaque.len().min(self.max_spheres);
        let translucent = batch.translucent.len().min(self.max_spheres - opaque);
        if batch.len() > self.max_spheres {
            log::warn!("{} spheres exceed the instance buffer, {} drawn", batch.len(), self.max_spheres);
        }

        let instances: Vec<SphereInstance> = batch.opaque[..opaque]
            .iter()
            .chain(&batch.translucent[..translucent])
            .copied()
            .collect();
        if !instances.is_empty() {
            queue.write_buffer(&self.sphere_buffer, 0, bytemuck::cast_slice(&instances));
        }

        self.opaque_count = opaque as u32;
        self.translucent_count = translucent as u32;
    }

    pub fn render(&self, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Atom Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.palette.background),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if self.opaque_count + self.translucent_count == 0 {
            return;
        }

        render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.quad_buffer.slice(..));
        render_pass.set_vertex_buffer(1, self.sphere_buffer.slice(..));

        if self.opaque_count > 0 {
            render_pass.set_pipeline(&self.opaque_pipeline);
            render_pass.draw(0..6, 0..self.opaque_count);
        }

        if self.translucent_count > 0 {
            let end = self.opaque_count + self.translucent_count;
            render_pass.set_pipeline(&self.translucent_pipeline);
            render_pass.draw(0..6, self.opaque_count..end);
        }
    }
}

fn sphere_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
    label: &str,
    depth_write_enabled: bool,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: "vs_sphere",
            buffers: &[QuadVertex::layout(), SphereInstance::layout()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: "fs_sphere",
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::assemble;
    use crate::electrons::OrbitConfig;
    use crate::elements::{self, ParticleCounts};
    use crate::nucleus::NucleusConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn atom(z: u8) -> AtomGroup {
        let element = elements::element(z).unwrap();
        let counts = ParticleCounts::for_element(element).unwrap();
        assemble(
            element,
            counts,
            NucleusConfig::default(),
            &OrbitConfig::default(),
            &mut StdRng::seed_from_u64(9),
        )
    }

    #[test]
    fn one_sphere_per_particle_and_electron() {
        let atom = atom(8);
        let batch = SphereBatch::from_atom(&atom, &Palette::default());
        assert_eq!(batch.opaque.len(), atom.nucleus.placed() + atom.electrons.len());
        assert_eq!(batch.translucent.len(), 1);
        assert_eq!(batch.translucent[0].radius, atom.nucleus.boundary_radius);
    }

    #[test]
    fn colors_follow_particle_kind() {
        let palette = Palette::default();
        let atom = atom(8);
        let batch = SphereBatch::from_atom(&atom, &palette);
        let protons = batch.opaque.iter().filter(|s| s.color == palette.proton).count();
        let neutrons = batch.opaque.iter().filter(|s| s.color == palette.neutron).count();
        let electrons = batch.opaque.iter().filter(|s| s.color == palette.electron).count();
        assert_eq!((protons, neutrons, electrons), (8, 8, 8));
    }

    #[test]
    fn hex_colors_are_linearized() {
        assert_eq!(hex_color(0xffffff, 0.5), [1.0, 1.0, 1.0, 0.5]);
        assert_eq!(hex_color(0x000000, 1.0), [0.0, 0.0, 0.0, 1.0]);
        let [_, g, _, _] = hex_color(0x008000, 1.0);
        assert!(g > 0.2 && g < 0.25);
    }
}
