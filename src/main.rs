//! Terminal cube runner (default binary).
//!
//! Parses flags, optionally installs a file logger, takes over the terminal
//! and runs the fixed-rate driver until Esc/q/Ctrl-C.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use spincube::core::config::{
    DEFAULT_AMBIENT, DEFAULT_CAMERA_DISTANCE, DEFAULT_RAMP, DEFAULT_SAMPLE_STEP,
};
use spincube::core::RenderConfig;
use spincube::engine::{AnimationState, Driver};
use spincube::input::KeyboardState;
use spincube::term::{TerminalMetrics, TerminalRenderer};
use spincube::types::TICK_MS;

/// Spinning shaded cube rendered in the terminal.
///
/// Keys: `+`/`-` scale, `[`/`]` rotation speed, Esc or `q` to quit.
#[derive(Debug, Parser)]
#[command(name = "spincube", version, about)]
struct Cli {
    /// Glyphs from light to heavy
    #[arg(long, env = "SPINCUBE_RAMP", default_value = DEFAULT_RAMP)]
    ramp: String,

    /// Ambient light floor in [0, 1]
    #[arg(long, env = "SPINCUBE_AMBIENT", default_value_t = DEFAULT_AMBIENT)]
    ambient: f32,

    /// Face sampling step in (u, v) space; smaller is smoother and slower
    #[arg(long, env = "SPINCUBE_STEP", default_value_t = DEFAULT_SAMPLE_STEP)]
    step: f32,

    /// Distance from the camera to the cube center
    #[arg(long, env = "SPINCUBE_DISTANCE", default_value_t = DEFAULT_CAMERA_DISTANCE)]
    distance: f32,

    /// Sleep between frames in milliseconds
    #[arg(long, env = "SPINCUBE_FRAME_MS", default_value_t = TICK_MS)]
    frame_ms: u64,

    /// Initial cube scale
    #[arg(long, env = "SPINCUBE_SCALE", default_value_t = 1.0)]
    scale: f32,

    /// Initial rotation speed multiplier
    #[arg(long, env = "SPINCUBE_SPEED", default_value_t = 1.0)]
    speed: f32,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, env = "SPINCUBE_LOG_PATH")]
    log_path: Option<PathBuf>,
}

impl Cli {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            ramp: self.ramp.clone(),
            ambient: self.ambient,
            sample_step: self.step,
            camera_distance: self.distance,
            frame_interval: Duration::from_millis(self.frame_ms),
            ..RenderConfig::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = cli.log_path.as_deref() {
        init_logging(path)?;
    }

    let config = cli.render_config();
    config.validate().context("invalid render configuration")?;
    let animation = AnimationState::new(cli.scale, cli.speed);
    info!(
        "starting: step={} ambient={} distance={} frame={:?} scale={:.2} speed={:.2}",
        config.sample_step,
        config.ambient,
        config.camera_distance,
        config.frame_interval,
        animation.cube_scale(),
        animation.speed()
    );

    // The renderer restores the terminal when dropped, including on error.
    let renderer = TerminalRenderer::enter().context("failed to set up terminal")?;
    let mut driver = Driver::new(config, TerminalMetrics::new(), KeyboardState::new(), renderer)
        .with_animation(animation);

    let result = driver.run();

    let (_, _, mut renderer) = driver.into_parts();
    let restored = renderer.exit();
    result?;
    restored
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENV_VARS: [&str; 8] = [
        "SPINCUBE_RAMP",
        "SPINCUBE_AMBIENT",
        "SPINCUBE_STEP",
        "SPINCUBE_DISTANCE",
        "SPINCUBE_FRAME_MS",
        "SPINCUBE_SCALE",
        "SPINCUBE_SPEED",
        "SPINCUBE_LOG_PATH",
    ];

    /// Parse flags with any exported `SPINCUBE_*` variables cleared first.
    fn parse<const N: usize>(args: [&str; N]) -> Cli {
        for var in ENV_VARS {
            std::env::remove_var(var);
        }
        Cli::parse_from(args)
    }

    #[test]
    fn defaults_match_render_config() {
        let cli = parse(["spincube"]);
        let cfg = cli.render_config();
        assert_eq!(cfg, RenderConfig::default());
        assert!(cli.log_path.is_none());
    }

    #[test]
    fn flags_override_config() {
        let cli = parse([
            "spincube",
            "--ramp",
            " .:#",
            "--ambient",
            "0.5",
            "--step",
            "0.05",
            "--frame-ms",
            "33",
        ]);
        let cfg = cli.render_config();
        assert_eq!(cfg.ramp, " .:#");
        assert_eq!(cfg.ambient, 0.5);
        assert_eq!(cfg.sample_step, 0.05);
        assert_eq!(cfg.frame_interval, Duration::from_millis(33));
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn every_flag_has_a_cleared_env_var() {
        use clap::CommandFactory;
        let cmd = Cli::command();
        let mut envs: Vec<&str> = cmd
            .get_arguments()
            .filter_map(|arg| arg.get_env())
            .filter_map(|env| env.to_str())
            .collect();
        envs.sort_unstable();
        let mut expected = ENV_VARS.to_vec();
        expected.sort_unstable();
        assert_eq!(envs, expected);
    }

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
