use crimson_engine::logging::{init_logging, LoggingConfig};
use crimson_logo::{LogoConfig, LogoViewer};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = LogoConfig::default();
    log::info!(
        "crimson studio: {} arc points, stroke {}",
        config.segment_count,
        config.stroke_width
    );

    LogoViewer::new()
        .title("Crimson")
        .size(640.0, 640.0)
        .config(config)
        .run()
}
