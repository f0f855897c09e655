use crate::coords::Viewport;

/// What the line renderer needs from a frame: device/queue for uploads, the
/// swapchain format for pipeline compatibility, and the logical viewport
/// the shader maps into NDC.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    pub viewport: Viewport, // logical px
}

/// Where a frame's draw commands land.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}
