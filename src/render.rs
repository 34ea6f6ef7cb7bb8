use crate::constants::{CLEAR_COLOR, INITIAL_INSTANCE_CAPACITY};
use crate::dom;
use fnv::FnvHashMap;
use std::ops::Range;
use std::rc::Rc;
use valentine_core::{Camera, Geometry, Renderer, Scene, Texture, Viewport};
use web_sys as web;

mod helpers;
mod targets;
use targets::RenderTargets;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct CameraUniforms {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
}

/// Vertex buffer for one shared geometry. Holds the `Rc` so the cache key
/// stays unique while the entry lives.
struct GpuMesh {
    _source: Rc<Geometry>,
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
}

struct GpuMatcap {
    _source: Rc<Texture>,
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

struct Batch {
    geometry: usize,
    matcap: usize,
    instances: Range<u32>,
}

pub struct GpuRenderer {
    canvas: web::HtmlCanvasElement,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    width: u32,
    height: u32,
    targets: RenderTargets,

    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    matcap_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,

    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    instances: Vec<[[f32; 4]; 4]>,
    batches: Vec<Batch>,

    meshes: FnvHashMap<usize, GpuMesh>,
    matcaps: FnvHashMap<usize, GpuMatcap>,
}

impl GpuRenderer {
    pub async fn new(canvas: web::HtmlCanvasElement, viewport: &Viewport) -> anyhow::Result<Self> {
        dom::sync_canvas_backing_size(&canvas, viewport);
        let (width, height) = viewport.backing_size();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
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
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let targets = RenderTargets::new(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("mesh_wgsl"),
            source: wgpu::ShaderSource::Wgsl(valentine_core::MESH_WGSL.into()),
        });
        let camera_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("camera_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let matcap_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("matcap_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mesh_pl"),
            bind_group_layouts: &[&camera_layout, &matcap_layout],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_mesh_pipeline(&device, &pipeline_layout, &shader, format);

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("camera_uniforms"),
            size: std::mem::size_of::<CameraUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("camera_bg"),
            layout: &camera_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("matcap_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });
        let instance_buffer = helpers::create_instance_buffer(&device, INITIAL_INSTANCE_CAPACITY);

        log::info!("[gpu] surface {}x{} {:?}", width, height, format);
        Ok(Self {
            canvas,
            surface,
            device,
            queue,
            config,
            width,
            height,
            targets,
            pipeline,
            uniform_buffer,
            camera_bind_group,
            matcap_layout,
            sampler,
            instance_buffer,
            instance_capacity: INITIAL_INSTANCE_CAPACITY,
            instances: Vec::with_capacity(INITIAL_INSTANCE_CAPACITY),
            batches: Vec::new(),
            meshes: FnvHashMap::default(),
            matcaps: FnvHashMap::default(),
        })
    }

    fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
            self.targets.recreate(&self.device, width, height);
        }
    }

    /// Uploads any geometry or matcap seen for the first time and groups the
    /// scene's meshes into instanced draws.
    fn prepare(&mut self, scene: &Scene) {
        self.instances.clear();
        self.batches.clear();
        for mesh in scene.meshes() {
            if mesh.geometry.is_empty() {
                continue;
            }
            let geometry = Rc::as_ptr(&mesh.geometry) as usize;
            let matcap = Rc::as_ptr(&mesh.material.matcap) as usize;

            if !self.meshes.contains_key(&geometry) {
                let data = mesh.geometry.interleaved();
                let vertex_buffer = helpers::create_vertex_buffer(
                    &self.device,
                    "mesh_vertices",
                    bytemuck::cast_slice(&data),
                );
                self.meshes.insert(
                    geometry,
                    GpuMesh {
                        _source: mesh.geometry.clone(),
                        vertex_buffer,
                        vertex_count: mesh.geometry.vertex_count() as u32,
                    },
                );
            }
            if !self.matcaps.contains_key(&matcap) {
                let (texture, view) =
                    helpers::upload_matcap(&self.device, &self.queue, &mesh.material.matcap);
                let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("matcap_bg"),
                    layout: &self.matcap_layout,
                    entries: &[
                        wgpu::BindGroupEntry {
                            binding: 0,
                            resource: wgpu::BindingResource::TextureView(&view),
                        },
                        wgpu::BindGroupEntry {
                            binding: 1,
                            resource: wgpu::BindingResource::Sampler(&self.sampler),
                        },
                    ],
                });
                self.matcaps.insert(
                    matcap,
                    GpuMatcap {
                        _source: mesh.material.matcap.clone(),
                        _texture: texture,
                        bind_group,
                    },
                );
            }

            let index = self.instances.len() as u32;
            self.instances.push(mesh.transform.matrix().to_cols_array_2d());
            match self.batches.last_mut() {
                Some(b) if b.geometry == geometry && b.matcap == matcap => {
                    b.instances.end = index + 1;
                }
                _ => self.batches.push(Batch {
                    geometry,
                    matcap,
                    instances: index..index + 1,
                }),
            }
        }

        if self.instances.len() > self.instance_capacity {
            self.instance_capacity = self.instances.len().next_power_of_two();
            self.instance_buffer =
                helpers::create_instance_buffer(&self.device, self.instance_capacity);
            log::debug!("[gpu] instance buffer grown to {}", self.instance_capacity);
        }
        if !self.instances.is_empty() {
            self.queue.write_buffer(
                &self.instance_buffer,
                0,
                bytemuck::cast_slice(&self.instances),
            );
        }
    }
}

impl Renderer for GpuRenderer {
    type Error = wgpu::SurfaceError;

    fn resize(&mut self, viewport: &Viewport) {
        dom::sync_canvas_backing_size(&self.canvas, viewport);
        let (w, h) = viewport.backing_size();
        self.resize_if_needed(w, h);
    }

    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<(), wgpu::SurfaceError> {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // Skip this frame; the next one draws to the fresh surface.
                self.reconfigure();
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let uniforms = CameraUniforms {
            view: camera.view_matrix().to_cols_array_2d(),
            proj: camera.projection_matrix().to_cols_array_2d(),
        };
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        self.prepare(scene);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.camera_bind_group, &[]);
            rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            for batch in &self.batches {
                let (Some(mesh), Some(matcap)) = (
                    self.meshes.get(&batch.geometry),
                    self.matcaps.get(&batch.matcap),
                ) else {
                    continue;
                };
                rpass.set_bind_group(1, &matcap.bind_group, &[]);
                rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                rpass.draw(0..mesh.vertex_count, batch.instances.clone());
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
