/// Surface texture, its view and an encoder for one frame.
///
/// Hold it only until [`Gpu::submit`](super::Gpu::submit); the next texture
/// cannot be acquired while this one is alive.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
