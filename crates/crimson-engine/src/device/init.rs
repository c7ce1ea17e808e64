/// GPU setup knobs. `Default` suits a single opaque window redrawn on demand.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an sRGB surface format when one exists. Colors are linear, so this
    /// is what makes named colors come out right on screen.
    pub prefer_srgb: bool,
    pub present_mode: wgpu::PresentMode,
    pub power_preference: wgpu::PowerPreference,
    pub required_limits: wgpu::Limits,
    /// Hint only; backends may ignore it.
    pub frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            power_preference: wgpu::PowerPreference::LowPower,
            required_limits: wgpu::Limits::default(),
            frame_latency: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_allow_large_windows() {
        // A maximized 1440p window, or 1280 logical px at 2x scale.
        let init = GpuInit::default();
        assert!(init.required_limits.max_texture_dimension_2d >= 2560);
    }
}
