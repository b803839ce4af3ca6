//! # Sidestep Main Entry Point
//!
//! Parses the command line, builds the scene, and drives it with macroquad
//! until the player quits.

use clap::Parser;
use log::{info, LevelFilter};
use macroquad::prelude::*;
use sidestep::config::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, WINDOW_TITLE};
use sidestep::{
    render_scene, FrameInput, MacroquadDisplay, MacroquadInput, MovementPolicy, Scene,
    SceneConfig, SidestepResult,
};
use std::path::PathBuf;

/// Command line arguments for Sidestep.
#[derive(Parser, Debug)]
#[command(name = "sidestep")]
#[command(about = "Move a box around without walking through walls")]
#[command(version)]
struct Args {
    /// Movement policy (axis-separated or heading)
    #[arg(short, long)]
    policy: Option<MovementPolicy>,

    /// JSON layout file describing the actor and obstacles
    #[arg(short, long)]
    layout: Option<PathBuf>,

    /// Movement speed in pixels per frame
    #[arg(short, long)]
    speed: Option<f32>,

    /// Log level (off, error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: DEFAULT_WINDOW_WIDTH,
        window_height: DEFAULT_WINDOW_HEIGHT,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() -> SidestepResult<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    info!("Starting Sidestep v{}", sidestep::VERSION);

    let config = SceneConfig::load_or_default(args.layout.as_deref())?
        .with_overrides(args.policy, args.speed);
    let mut scene = config.build()?;

    info!(
        "Scene ready: {} policy, {} obstacles",
        scene.settings().policy,
        scene.obstacles().len()
    );

    run_game_loop(&mut scene).await
}

/// Initializes env_logger with `level` unless RUST_LOG is set.
fn initialize_logging(level: LevelFilter) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
        .init();
}

/// Runs one update and one render per frame until the scene asks to stop.
async fn run_game_loop(scene: &mut Scene) -> SidestepResult<()> {
    let input = MacroquadInput::new();
    let mut display = MacroquadDisplay::new();

    loop {
        let frame_input = FrameInput::capture(&input);
        if scene.advance(&frame_input).is_terminate() {
            break;
        }

        render_scene(scene, &mut display);

        next_frame().await;
    }

    info!("Session ended after {} frames", scene.frame_count());
    Ok(())
}
