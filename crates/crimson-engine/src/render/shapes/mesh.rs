use std::ops::Range;

use bytemuck::{Pod, Zeroable};

use crate::paint::CompositeMode;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};

use super::common::{
    align_copy_size, blend_for, viewport_ubo_min_binding_size, ViewportUniform,
};

/// Flat-colored triangle renderer for `DrawCmd::Mesh`.
///
/// All meshes of a frame are packed into one vertex/index buffer pair. Consecutive
/// commands sharing a compositing mode are drawn with a single indexed call, so
/// paint order is preserved while pipeline switches are kept to a minimum.
#[derive(Default)]
pub struct MeshRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline_over: Option<wgpu::RenderPipeline>,
    pipeline_lighter: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,

    vbo: Option<wgpu::Buffer>,
    vbo_capacity: usize,
    ibo: Option<wgpu::Buffer>,
    ibo_capacity: usize,

    // Per-frame scratch, reused to avoid reallocating.
    vertices: Vec<MeshVertex>,
    indices: Vec<u32>,
    batches: Vec<Batch>,
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders every mesh in `draw_list` into `target`, in list order.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &DrawList,
    ) {
        build_batches(draw_list, &mut self.vertices, &mut self.indices, &mut self.batches);
        if self.batches.is_empty() {
            return;
        }

        self.ensure_pipelines(ctx);
        self.ensure_bindings(ctx);
        self.ensure_capacity(ctx);

        // Mutating methods must happen before borrowing pipelines/buffers immutably.
        if let Some(ubo) = self.viewport_ubo.as_ref() {
            ctx.queue
                .write_buffer(ubo, 0, bytemuck::bytes_of(&ViewportUniform::new(ctx.viewport)));
        }

        let (Some(vbo), Some(ibo)) = (self.vbo.as_ref(), self.ibo.as_ref()) else { return };
        ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&self.vertices));
        ctx.queue.write_buffer(ibo, 0, bytemuck::cast_slice(&self.indices));

        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(over) = self.pipeline_over.as_ref() else { return };
        let Some(lighter) = self.pipeline_lighter.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("crimson mesh pass"),
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

        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint32);

        for batch in &self.batches {
            let pipeline = match batch.blend {
                CompositeMode::SourceOver => over,
                CompositeMode::Lighter => lighter,
            };
            rpass.set_pipeline(pipeline);
            rpass.draw_indexed(batch.indices.clone(), 0, 0..1);
        }
    }

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format)
            && self.pipeline_over.is_some()
            && self.pipeline_lighter.is_some()
        {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("crimson mesh shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/mesh.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("crimson mesh bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: viewport_ubo_min_binding_size(),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("crimson mesh pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let make = |blend: CompositeMode| {
            let label = format!("crimson mesh pipeline ({})", blend.as_str());
            ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(&label),
                layout: Some(&pipeline_layout),

                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[MeshVertex::layout()],
                },

                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: Some(blend_for(blend)),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),

                // Ribbon strips alternate winding, so culling must stay off.
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
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
            })
        };

        self.pipeline_over = Some(make(CompositeMode::SourceOver));
        self.pipeline_lighter = Some(make(CompositeMode::Lighter));
        self.pipeline_format = Some(ctx.surface_format);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        self.viewport_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.viewport_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("crimson mesh viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("crimson mesh bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        self.viewport_ubo = Some(viewport_ubo);
        self.bind_group = Some(bind_group);
    }

    fn ensure_capacity(&mut self, ctx: &RenderCtx<'_>) {
        if self.vertices.len() > self.vbo_capacity || self.vbo.is_none() {
            let cap = self.vertices.len().next_power_of_two().max(256);
            self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("crimson mesh vbo"),
                size: align_copy_size((cap * std::mem::size_of::<MeshVertex>()) as u64),
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.vbo_capacity = cap;
        }

        if self.indices.len() > self.ibo_capacity || self.ibo.is_none() {
            let cap = self.indices.len().next_power_of_two().max(512);
            self.ibo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("crimson mesh ibo"),
                size: align_copy_size((cap * std::mem::size_of::<u32>()) as u64),
                usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.ibo_capacity = cap;
        }
    }
}

/// Contiguous index range drawn with one pipeline.
#[derive(Debug, Clone, PartialEq)]
struct Batch {
    blend: CompositeMode,
    indices: Range<u32>,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct MeshVertex {
    pos: [f32; 2],
    color: [f32; 4],
}

impl MeshVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color (premultiplied)
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Flattens `draw_list` into shared vertex/index arrays plus per-blend batches.
fn build_batches(
    draw_list: &DrawList,
    vertices: &mut Vec<MeshVertex>,
    indices: &mut Vec<u32>,
    batches: &mut Vec<Batch>,
) {
    vertices.clear();
    indices.clear();
    batches.clear();

    for cmd in draw_list.items() {
        let DrawCmd::Mesh(mesh) = cmd;
        if mesh.indices.is_empty() || !mesh.color.is_finite() {
            continue;
        }

        let base = vertices.len() as u32;
        let color = mesh.color.clamped().to_array();
        vertices.extend(mesh.vertices.iter().map(|v| MeshVertex {
            pos: [v.x, v.y],
            color,
        }));

        let start = indices.len() as u32;
        indices.extend(mesh.indices.iter().map(|&i| base + i));
        let end = indices.len() as u32;

        match batches.last_mut() {
            Some(last) if last.blend == mesh.blend && last.indices.end == start => {
                last.indices.end = end;
            }
            _ => batches.push(Batch {
                blend: mesh.blend,
                indices: start..end,
            }),
        }
    }
}
