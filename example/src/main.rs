//! Headless storefront carousel session.
//!
//! Builds one carousel from the command line, replays a script of clicks,
//! swipes, drags and resizes against it and logs every rendered frame.
//!
//! ```text
//! example --slides 7 --viewport 1280 next next swipe:300:100:230:105 resize:375:343
//! ```

mod script;
mod sink;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use vitrine::{Carousel, CarouselConfig, Measurements};

use crate::{script::Step, sink::LogSink};

/// Horizontal padding between the viewport edge and the carousel container.
const PAGE_GUTTER: f32 = 32.0;
/// Log filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "error,vitrine=debug,example=info";

#[derive(Debug, Parser)]
#[command(version, about = "Replay a scripted session against a storefront carousel")]
struct Cli {
    /// Number of slides in the carousel.
    #[arg(long, default_value_t = 7)]
    slides: usize,
    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1280.0)]
    viewport: f32,
    /// Container width in pixels; defaults to the viewport minus page gutters.
    #[arg(long)]
    container: Option<f32>,
    /// TOML file overriding breakpoints, gap and swipe threshold.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Script steps: next, prev, goto:<i>, dot:<i>, resize:<vw>:<cw>,
    /// swipe:<x0>:<y0>:<x1>:<y1>, drag:<x0>:<x1>.
    steps: Vec<Step>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let container = cli
        .container
        .unwrap_or((cli.viewport - PAGE_GUTTER).max(0.0));
    let mut carousel = Carousel::new(
        config,
        cli.slides,
        Measurements::new(cli.viewport, container),
        LogSink::default(),
    )
    .context("carousel configuration rejected")?;

    for step in cli.steps {
        let transition = step.run(&mut carousel);
        info!(?step, ?transition, "step");
    }

    let state = carousel.state();
    println!(
        "index {}/{} ({} per view, slide {:.1}px, gap {}px) after {} frames",
        state.current_index,
        state.max_index,
        state.slides_per_view,
        state.slide_width,
        state.gap,
        carousel.sink().frames()
    );
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<CarouselConfig> {
    let Some(path) = path else {
        return Ok(CarouselConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("failed to parse config {}", path.display()))
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(DEFAULT_FILTER) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_parses_and_validates() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("carousel.toml");
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.gap, 16.0);
        assert_eq!(config.swipe_threshold, 40.0);
        assert_eq!(config.breakpoints.slides_per_view(1500.0), 4);
        assert_eq!(config.breakpoints.slides_per_view(320.0), 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_config_uses_defaults() {
        assert_eq!(load_config(None).unwrap(), CarouselConfig::default());
    }

    #[test]
    fn default_filter_parses_and_shows_engine_transitions() {
        let filter = tracing_subscriber::EnvFilter::try_new(DEFAULT_FILTER).unwrap();
        assert_eq!(filter.max_level_hint(), Some(tracing::level_filters::LevelFilter::DEBUG));
        assert!(DEFAULT_FILTER.split(',').any(|directive| directive == "vitrine=debug"));
    }

    #[test]
    fn cli_accepts_a_script() {
        let cli = Cli::try_parse_from(["example", "--slides", "5", "next", "goto:-1"]).unwrap();
        assert_eq!(cli.slides, 5);
        assert_eq!(cli.steps, vec![Step::Next, Step::GoTo(-1)]);
    }
}
