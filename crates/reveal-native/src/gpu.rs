use crate::batch::{ColorVertex, FrameBatch};
use wgpu::util::DeviceExt;

pub static REVEAL_WGSL: &str = include_str!("../shaders/reveal.wgsl");

const STENCIL_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Stencil8;

// What shows through the hole
const BACKDROP: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.02,
    b: 0.04,
    a: 1.0,
};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    resolution: [f32; 2],
    center: [f32; 2],
    radii: [f32; 2],
    _pad: [f32; 2],
    inner_color: [f32; 4],
    outer_color: [f32; 4],
}

pub struct GpuState<'w> {
    pub window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    erase_pipeline: wgpu::RenderPipeline,
    veil_pipeline: wgpu::RenderPipeline,
    over_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    stencil_view: wgpu::TextureView,
}

fn create_stencil_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("stencil"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: STENCIL_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    tex.create_view(&wgpu::TextureViewDescriptor::default())
}

fn stencil_state(compare: wgpu::CompareFunction, pass_op: wgpu::StencilOperation) -> wgpu::DepthStencilState {
    let face = wgpu::StencilFaceState {
        compare,
        fail_op: wgpu::StencilOperation::Keep,
        depth_fail_op: wgpu::StencilOperation::Keep,
        pass_op,
    };
    let writes = pass_op != wgpu::StencilOperation::Keep;
    wgpu::DepthStencilState {
        format: STENCIL_FORMAT,
        depth_write_enabled: false,
        depth_compare: wgpu::CompareFunction::Always,
        stencil: wgpu::StencilState {
            front: face,
            back: face,
            read_mask: 0xff,
            write_mask: if writes { 0xff } else { 0 },
        },
        bias: wgpu::DepthBiasState::default(),
    }
}

struct PipelineSpec<'a> {
    label: &'a str,
    vs_entry: &'a str,
    fs_entry: &'a str,
    with_vertices: bool,
    blend: Option<wgpu::BlendState>,
    write_mask: wgpu::ColorWrites,
    depth_stencil: wgpu::DepthStencilState,
}

fn make_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
    spec: PipelineSpec<'_>,
) -> wgpu::RenderPipeline {
    let vertex_layout = [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<ColorVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 0,
                shader_location: 0,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 8,
                shader_location: 1,
            },
        ],
    }];
    let buffers: &[wgpu::VertexBufferLayout] = if spec.with_vertices {
        &vertex_layout
    } else {
        &[]
    };
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(spec.label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some(spec.vs_entry),
            buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: Some(spec.depth_stencil),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(spec.fs_entry),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: spec.blend,
                write_mask: spec.write_mask,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}

impl<'w> GpuState<'w> {
    pub async fn new(window: &'w winit::window::Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        // Colors are authored for canvas, i.e. already gamma encoded.
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("reveal_shader"),
            source: wgpu::ShaderSource::Wgsl(REVEAL_WGSL.into()),
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("reveal_uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("reveal_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("reveal_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("reveal_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        use wgpu::{CompareFunction as Cmp, StencilOperation as Op};
        let erase_pipeline = make_pipeline(
            &device,
            &layout,
            &shader,
            format,
            PipelineSpec {
                label: "erase_pipeline",
                vs_entry: "vs_shape",
                fs_entry: "fs_shape",
                with_vertices: true,
                blend: None,
                write_mask: wgpu::ColorWrites::empty(),
                depth_stencil: stencil_state(Cmp::Always, Op::Invert),
            },
        );
        let veil_pipeline = make_pipeline(
            &device,
            &layout,
            &shader,
            format,
            PipelineSpec {
                label: "veil_pipeline",
                vs_entry: "vs_fullscreen",
                fs_entry: "fs_veil",
                with_vertices: false,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
                depth_stencil: stencil_state(Cmp::Equal, Op::Keep),
            },
        );
        let over_pipeline = make_pipeline(
            &device,
            &layout,
            &shader,
            format,
            PipelineSpec {
                label: "over_pipeline",
                vs_entry: "vs_shape",
                fs_entry: "fs_shape",
                with_vertices: true,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
                depth_stencil: stencil_state(Cmp::Always, Op::Keep),
            },
        );

        let stencil_view = create_stencil_view(&device, config.width, config.height);
        log::info!(
            "[gpu] adapter={} format={:?} size={}x{}",
            adapter.get_info().name,
            format,
            config.width,
            config.height
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            erase_pipeline,
            veil_pipeline,
            over_pipeline,
            uniform_buffer,
            bind_group,
            stencil_view,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.stencil_view = create_stencil_view(&self.device, new_size.width, new_size.height);
        log::info!("[gpu] resized to {}x{}", new_size.width, new_size.height);
    }

    fn vertex_buffer(&self, label: &str, vertices: &[ColorVertex]) -> Option<wgpu::Buffer> {
        (!vertices.is_empty()).then(|| {
            self.device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(label),
                    contents: bytemuck::cast_slice(vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                })
        })
    }

    /// Draw a recorded frame: stencil cut-out, veil outside it, then particles.
    pub fn render(&mut self, batch: &FrameBatch) -> Result<(), wgpu::SurfaceError> {
        let mut uniforms = Uniforms {
            resolution: [self.config.width as f32, self.config.height as f32],
            center: [0.0; 2],
            radii: [0.0; 2],
            _pad: [0.0; 2],
            inner_color: [0.0; 4],
            outer_color: [0.0; 4],
        };
        if let Some(veil) = &batch.veil {
            uniforms.center = veil.center.to_array();
            uniforms.radii = [veil.inner_radius, veil.outer_radius];
            uniforms.inner_color = veil.inner_color.to_f32_array();
            uniforms.outer_color = veil.outer_color.to_f32_array();
        }
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let erase_vb = self.vertex_buffer("erase_vb", &batch.erase);
        let over_vb = self.vertex_buffer("over_vb", &batch.over);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("reveal_encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("reveal_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(BACKDROP),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.stencil_view,
                    depth_ops: None,
                    stencil_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(0),
                        store: wgpu::StoreOp::Discard,
                    }),
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_stencil_reference(0);

            if let Some(vb) = &erase_vb {
                rpass.set_pipeline(&self.erase_pipeline);
                rpass.set_vertex_buffer(0, vb.slice(..));
                rpass.draw(0..batch.erase.len() as u32, 0..1);
            }
            if batch.veil.is_some() {
                rpass.set_pipeline(&self.veil_pipeline);
                rpass.draw(0..3, 0..1);
            }
            if let Some(vb) = &over_vb {
                rpass.set_pipeline(&self.over_pipeline);
                rpass.set_vertex_buffer(0, vb.slice(..));
                rpass.draw(0..batch.over.len() as u32, 0..1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
