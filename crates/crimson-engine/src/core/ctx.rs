use winit::window::Window;

use crate::coords::Viewport;
use crate::device::{Gpu, SurfaceErrorAction};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};

use super::app::AppControl;

/// Handed to [`App::on_frame`](super::App::on_frame) for one redraw.
///
/// `'a` is the callback; `'w` is the window borrow held by `Gpu<'w>`.
pub struct FrameCtx<'a, 'w> {
    pub window: &'a Window,
    pub gpu: &'a mut Gpu<'w>,
    /// Redraws so far, starting at 0.
    pub frame_index: u64,
}

impl FrameCtx<'_, '_> {
    /// Window size in logical pixels.
    pub fn logical_size(&self) -> Viewport {
        let size: winit::dpi::LogicalSize<f32> =
            self.window.inner_size().to_logical(self.window.scale_factor());
        Viewport::new(size.width, size.height)
    }

    /// Clears to `clear`, lets `draw` record passes, then presents.
    ///
    /// A minimized window or a transient surface error skips the frame; only an
    /// unrecoverable surface error returns [`AppControl::Exit`].
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let viewport = self.logical_size();
        if !viewport.is_valid() {
            return AppControl::Continue;
        }

        let mut frame = match self.gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => {
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => AppControl::Exit,
                    SurfaceErrorAction::Reconfigured => {
                        self.window.request_redraw();
                        AppControl::Continue
                    }
                    SurfaceErrorAction::SkipFrame => AppControl::Continue,
                };
            }
        };

        let [r, g, b, a] = clear.to_array().map(f64::from);
        frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("crimson clear"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &frame.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        let rctx = RenderCtx {
            device: self.gpu.device(),
            queue: self.gpu.queue(),
            surface_format: self.gpu.surface_format(),
            viewport,
        };
        draw(
            &rctx,
            &mut RenderTarget {
                encoder: &mut frame.encoder,
                color_view: &frame.view,
            },
        );

        self.window.pre_present_notify();
        self.gpu.submit(frame);
        AppControl::Continue
    }
}
