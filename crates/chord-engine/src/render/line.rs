use bytemuck::{Pod, Zeroable};

use crate::coords::{Vec2, Viewport};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};

/// Stroked line segment renderer.
///
/// Geometry is provided as logical pixels, converted to NDC in the vertex
/// shader using the viewport uniform. The stroke is the GPU hairline
/// (`PrimitiveTopology::LineList`); color is linear premultiplied RGBA.
#[derive(Default)]
pub struct LineRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    uniform_ubo: Option<wgpu::Buffer>,

    vertex_vbo: Option<wgpu::Buffer>,
}

impl LineRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strokes the full-viewport diagonal: top-left to bottom-right corner.
    pub fn render_diagonal(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        color: Color,
    ) {
        let [from, to] = diagonal_endpoints(ctx.viewport);
        self.render(ctx, target, from, to, color);
    }

    /// Strokes a single segment from `from` to `to` (logical pixels).
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        from: Vec2,
        to: Vec2,
        color: Color,
    ) {
        if !ctx.viewport.is_valid() {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_vertex_buffer(ctx);
        self.ensure_bindings(ctx);

        // Mutating uploads happen before taking immutable borrows below.
        self.write_uniform(ctx, color);
        self.write_vertices(ctx, from, to);

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(vertex_vbo) = self.vertex_vbo.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("chord line pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vertex_vbo.slice(..));
        rpass.draw(0..2, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader_src = include_str!("shaders/line.wgsl");
        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("chord line shader"),
            source: wgpu::ShaderSource::Wgsl(shader_src.into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("chord line bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: Some(line_ubo_min_binding_size()),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("chord line pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("chord line pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[LineVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),

            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        self.uniform_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.uniform_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let uniform_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("chord line ubo"),
            size: std::mem::size_of::<LineUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("chord line bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_ubo.as_entire_binding(),
            }],
        });

        self.uniform_ubo = Some(uniform_ubo);
        self.bind_group = Some(bind_group);
    }

    fn ensure_vertex_buffer(&mut self, ctx: &RenderCtx<'_>) {
        if self.vertex_vbo.is_some() {
            return;
        }

        self.vertex_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("chord line vbo"),
            size: (2 * std::mem::size_of::<LineVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
    }

    fn write_uniform(&mut self, ctx: &RenderCtx<'_>, color: Color) {
        let Some(ubo) = self.uniform_ubo.as_ref() else { return };
        let u = LineUniform {
            viewport: [ctx.viewport.width.max(1.0), ctx.viewport.height.max(1.0)],
            _pad: [0.0; 2],
            color: [color.r, color.g, color.b, color.a],
        };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));
    }

    fn write_vertices(&mut self, ctx: &RenderCtx<'_>, from: Vec2, to: Vec2) {
        let Some(vbo) = self.vertex_vbo.as_ref() else { return };
        let verts = segment_vertices(from, to);
        ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&verts));
    }
}

fn premul_alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

/// Endpoints of the full-viewport diagonal in logical pixels.
///
/// Always `(0, 0)` to `(viewport.width, viewport.height)`, whatever the
/// density ratio — the shader's viewport uniform carries the same logical
/// extents, so the mapping to NDC corners is scale-independent.
#[inline]
pub fn diagonal_endpoints(viewport: Viewport) -> [Vec2; 2] {
    [Vec2::zero(), Vec2::new(viewport.width, viewport.height)]
}

fn segment_vertices(from: Vec2, to: Vec2) -> [LineVertex; 2] {
    [
        LineVertex { pos: [from.x, from.y] },
        LineVertex { pos: [to.x, to.y] },
    ]
}

/// Returns the `wgpu` minimum binding size for the line uniform buffer.
///
/// `LineUniform` is 32 bytes by construction, so the size is always non-zero.
fn line_ubo_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<LineUniform>() as u64)
        .expect("LineUniform has non-zero size by construction")
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct LineVertex {
    pos: [f32; 2], // logical px
}

impl LineVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct LineUniform {
    viewport: [f32; 2],
    _pad: [f32; 2], // 16-byte alignment
    color: [f32; 4],
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mirror of the vertex shader's logical-px to NDC mapping.
    fn to_ndc(p: [f32; 2], viewport: Viewport) -> [f32; 2] {
        [
            p[0] / viewport.width * 2.0 - 1.0,
            1.0 - p[1] / viewport.height * 2.0,
        ]
    }

    // ── diagonal endpoints ────────────────────────────────────────────────

    #[test]
    fn diagonal_spans_the_viewport() {
        let [from, to] = diagonal_endpoints(Viewport::new(800.0, 600.0));
        assert_eq!(from, Vec2::zero());
        assert_eq!(to, Vec2::new(800.0, 600.0));
    }

    #[test]
    fn diagonal_is_independent_of_density_ratio() {
        // Same logical viewport regardless of backing-store resolution.
        for scale in [1.0, 1.5, 2.0, 3.0] {
            let (pw, ph) = Viewport::new(800.0, 600.0).to_physical(scale);
            let viewport = Viewport::from_physical(pw, ph, scale);
            let [from, to] = diagonal_endpoints(viewport);
            assert_eq!(from, Vec2::zero());
            assert_eq!(to, Vec2::new(800.0, 600.0));
        }
    }

    #[test]
    fn diagonal_maps_to_ndc_corners() {
        // Whatever the aspect ratio, the diagonal always connects the
        // top-left and bottom-right NDC corners.
        for viewport in [Viewport::new(800.0, 600.0), Viewport::new(1024.0, 768.0)] {
            let [from, to] = diagonal_endpoints(viewport);
            assert_eq!(to_ndc([from.x, from.y], viewport), [-1.0, 1.0]);
            assert_eq!(to_ndc([to.x, to.y], viewport), [1.0, -1.0]);
        }
    }

    // ── vertex generation ─────────────────────────────────────────────────

    #[test]
    fn segment_vertices_preserve_endpoints() {
        let verts = segment_vertices(Vec2::zero(), Vec2::new(800.0, 600.0));
        assert_eq!(verts[0].pos, [0.0, 0.0]);
        assert_eq!(verts[1].pos, [800.0, 600.0]);
    }

    #[test]
    fn unchanged_viewport_yields_identical_vertices() {
        // Drawing twice without a resize uploads byte-identical geometry.
        let viewport = Viewport::new(1024.0, 768.0);
        let [a0, a1] = diagonal_endpoints(viewport);
        let first = segment_vertices(a0, a1);
        let [b0, b1] = diagonal_endpoints(viewport);
        let second = segment_vertices(b0, b1);
        assert_eq!(bytemuck::cast_slice::<_, u8>(&first), bytemuck::cast_slice::<_, u8>(&second));
    }
}
