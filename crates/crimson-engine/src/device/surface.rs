use winit::dpi::PhysicalSize;

/// What the frame loop should do after failing to acquire a surface texture.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; the next redraw can try again.
    Reconfigured,
    /// Transient; drop this frame.
    SkipFrame,
    /// Out of memory. Stop rendering.
    Fatal,
}

/// Picks the surface format, preferring sRGB variants when asked to.
pub(super) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    let srgb = formats.iter().copied().find(|f| f.is_srgb());
    match (prefer_srgb, srgb) {
        (true, Some(f)) => Some(f),
        _ => formats.first().copied(),
    }
}

/// Opaque when the surface offers it; every frame clears to an opaque background.
pub(super) fn choose_alpha_mode(supported: &[wgpu::CompositeAlphaMode]) -> wgpu::CompositeAlphaMode {
    if supported.contains(&wgpu::CompositeAlphaMode::Opaque) {
        wgpu::CompositeAlphaMode::Opaque
    } else {
        supported.first().copied().unwrap_or(wgpu::CompositeAlphaMode::Auto)
    }
}

/// Surface extent for a window of `size`, limited to `max_dim` per side.
pub(super) fn clamp_extent(size: PhysicalSize<u32>, max_dim: u32) -> (u32, u32) {
    (size.width.min(max_dim), size.height.min(max_dim))
}

/// Maps a surface error to a frame-loop action, reconfiguring when that can help.
pub(super) fn map_surface_error(
    surface: &wgpu::Surface<'_>,
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    err: wgpu::SurfaceError,
) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
            if size.width > 0 && size.height > 0 {
                surface.configure(device, config);
            }
            SurfaceErrorAction::Reconfigured
        }
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srgb_preferred_when_available() {
        let formats = [
            wgpu::TextureFormat::Bgra8Unorm,
            wgpu::TextureFormat::Bgra8UnormSrgb,
        ];
        assert_eq!(
            choose_surface_format(&formats, true),
            Some(wgpu::TextureFormat::Bgra8UnormSrgb)
        );
        assert_eq!(
            choose_surface_format(&formats, false),
            Some(wgpu::TextureFormat::Bgra8Unorm)
        );
        assert_eq!(
            choose_surface_format(&[wgpu::TextureFormat::Rgba8Unorm], true),
            Some(wgpu::TextureFormat::Rgba8Unorm)
        );
        assert_eq!(choose_surface_format(&[], true), None);
    }

    #[test]
    fn extent_is_clamped_to_device_limit() {
        assert_eq!(clamp_extent(PhysicalSize::new(2560, 1440), 2048), (2048, 1440));
        assert_eq!(clamp_extent(PhysicalSize::new(640, 9000), 8192), (640, 8192));
        assert_eq!(clamp_extent(PhysicalSize::new(800, 600), 8192), (800, 600));
    }

    #[test]
    fn alpha_mode_prefers_opaque() {
        let supported = [
            wgpu::CompositeAlphaMode::PreMultiplied,
            wgpu::CompositeAlphaMode::Opaque,
        ];
        assert_eq!(choose_alpha_mode(&supported), wgpu::CompositeAlphaMode::Opaque);
        assert_eq!(
            choose_alpha_mode(&[wgpu::CompositeAlphaMode::PostMultiplied]),
            wgpu::CompositeAlphaMode::PostMultiplied
        );
        assert_eq!(choose_alpha_mode(&[]), wgpu::CompositeAlphaMode::Auto);
    }
}
