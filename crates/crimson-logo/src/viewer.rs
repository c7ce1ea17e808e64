use crimson_engine::canvas::SceneCanvas;
use crimson_engine::coords::Viewport;
use crimson_engine::core::{App as EngineApp, AppControl, FrameCtx};
use crimson_engine::device::GpuInit;
use crimson_engine::render::shapes::mesh::MeshRenderer;
use crimson_engine::scene::DrawList;
use crimson_engine::window::{LogicalSize, Runtime, RuntimeConfig};

use crate::config::LogoConfig;
use crate::logo::LogoRenderer;

/// Window that shows the logo, redrawn whenever the window needs it.
///
/// ```rust,ignore
/// LogoViewer::new()
///     .title("Crimson")
///     .size(640.0, 640.0)
///     .run()?;
/// ```
pub struct LogoViewer {
    title: String,
    width: f64,
    height: f64,
    config: LogoConfig,
}

impl LogoViewer {
    pub fn new() -> Self {
        Self {
            title: "crimson".to_string(),
            width: 640.0,
            height: 640.0,
            config: LogoConfig::default(),
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn config(mut self, config: LogoConfig) -> Self {
        self.config = config;
        self
    }

    /// Opens the window and blocks until it is closed.
    pub fn run(self) -> anyhow::Result<()> {
        self.config.validate()?;

        let runtime = RuntimeConfig {
            title: self.title,
            initial_size: LogicalSize::new(self.width, self.height),
        };
        log::info!(
            "opening logo viewer ({}x{})",
            runtime.initial_size.width,
            runtime.initial_size.height
        );
        Runtime::run(runtime, GpuInit::default(), ViewerApp::new(self.config))
    }
}

impl Default for LogoViewer {
    fn default() -> Self {
        Self::new()
    }
}

struct ViewerApp {
    logo: LogoRenderer,
    draw_list: DrawList,
    mesh_renderer: MeshRenderer,
    /// Size of the last failed draw, so a persistent failure is logged once.
    failed_size: Option<(f32, f32)>,
}

impl ViewerApp {
    fn new(config: LogoConfig) -> Self {
        Self {
            logo: LogoRenderer::new(config),
            draw_list: DrawList::new(),
            mesh_renderer: MeshRenderer::new(),
            failed_size: None,
        }
    }

    /// Rebuilds the draw list for a window of `viewport` logical size.
    ///
    /// A minimized (0x0) window records nothing. A draw error leaves the list
    /// empty so only the background shows, and is logged once per size.
    fn record(&mut self, viewport: Viewport) {
        self.draw_list.clear();
        if !viewport.is_valid() {
            return;
        }

        let drawn = {
            let mut canvas = SceneCanvas::new(&mut self.draw_list);
            self.logo.draw_logo(&mut canvas, viewport.width, viewport.height)
        };

        match drawn {
            Ok(()) => self.failed_size = None,
            Err(err) => {
                self.draw_list.clear();
                let size = (viewport.width, viewport.height);
                if self.failed_size != Some(size) {
                    log::warn!("logo not drawn at {}x{}: {err}", size.0, size.1);
                    self.failed_size = Some(size);
                }
            }
        }
    }
}

impl EngineApp for ViewerApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let viewport = ctx.logical_size();
        if !viewport.is_valid() {
            return AppControl::Continue;
        }
        self.record(viewport);

        let background = self.logo.config().background;
        let (mesh_renderer, draw_list) = (&mut self.mesh_renderer, &self.draw_list);
        ctx.render(background, |rctx, target| {
            mesh_renderer.render(rctx, target, draw_list);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimized_window_records_nothing() {
        let mut app = ViewerApp::new(LogoConfig::default());
        app.record(Viewport::new(0.0, 0.0));
        assert!(app.draw_list.is_empty());
        assert_eq!(app.failed_size, None);
    }

    #[test]
    fn visible_window_records_logo() {
        let mut app = ViewerApp::new(LogoConfig::default());
        app.record(Viewport::new(200.0, 200.0));
        assert_eq!(app.draw_list.len(), 35);

        // Restoring from minimized redraws the same logo.
        app.record(Viewport::new(0.0, 0.0));
        app.record(Viewport::new(200.0, 200.0));
        assert_eq!(app.draw_list.len(), 35);
    }

    #[test]
    fn draw_error_leaves_background_only() {
        let mut app = ViewerApp::new(LogoConfig::default().with_segment_count(1));
        app.record(Viewport::new(320.0, 240.0));
        assert!(app.draw_list.is_empty());
        assert_eq!(app.failed_size, Some((320.0, 240.0)));
    }
}
