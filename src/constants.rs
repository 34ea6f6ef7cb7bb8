// Page wiring and GPU output constants for the web frontend.

// The canvas the page provides for WebGPU output
pub const CANVAS_SELECTOR: &str = "canvas.webgl";

// Background behind the scene (renderer default: opaque black)
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

// Extruded meshes wind outward faces counter-clockwise; inner faces are culled
pub const MESH_FRONT_FACE: wgpu::FrontFace = wgpu::FrontFace::Ccw;
pub const MESH_CULL_MODE: Option<wgpu::Face> = Some(wgpu::Face::Back);

// Initial instance buffer capacity (text + 100 hearts fit without regrowth)
pub const INITIAL_INSTANCE_CAPACITY: usize = 128;

