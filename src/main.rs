//! # Gridwalk Main Entry Point
//!
//! Loads the level, builds the session, and runs the macroquad frame loop.

use clap::Parser;
use gridwalk::{
    config, load_level, resolve_level_path, AppState, GridwalkResult, InputHandler,
    MacroquadDisplay, Session, StateMachine,
};
use log::{error, info};
use macroquad::prelude::*;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Command line arguments for gridwalk.
#[derive(Parser, Debug)]
#[command(name = "gridwalk")]
#[command(about = "Walk a tile level loaded from a text file")]
#[command(version)]
struct Args {
    /// Level file name, resolved against the data directory. Prompted for on stdin when omitted.
    #[arg(short, long)]
    level: Option<String>,

    /// Directory level files are looked up in
    #[arg(long, default_value = config::DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Edge length of one grid cell in pixels, greater than zero
    #[arg(long, default_value_t = config::DEFAULT_TILE_SIZE, value_parser = parse_tile_size)]
    tile_size: f32,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Accepts finite tile sizes greater than zero.
fn parse_tile_size(value: &str) -> Result<f32, String> {
    let size: f32 = value
        .parse()
        .map_err(|e| format!("'{}' is not a number: {}", value, e))?;
    if size.is_finite() && size > 0.0 {
        Ok(size)
    } else {
        Err(format!("tile size must be greater than 0, got {}", value))
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: config::WINDOW_TITLE.to_string(),
        window_width: config::WINDOW_WIDTH,
        window_height: config::WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

fn main() {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    info!("Starting gridwalk v{}", gridwalk::VERSION);

    // Startup, including the level prompt, happens before the window opens;
    // failures end the process before the loop is entered.
    let session = match prepare_session(&args) {
        Ok(session) => session,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let tile_size = args.tile_size;
    macroquad::Window::from_config(window_conf(), async move {
        run_game_loop(tile_size, session).await;
        info!("Game loop ended");
    });
}

/// Initializes env_logger, letting `RUST_LOG` override the CLI level.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_target(false)
        .init();
}

/// Reads the level named on the command line (or at the prompt) and places the player.
fn prepare_session(args: &Args) -> GridwalkResult<Session> {
    let name = match &args.level {
        Some(name) => name.clone(),
        None => prompt_level_name()?,
    };
    let path = resolve_level_path(&args.data_dir, &name);
    let level = load_level(&path)?;
    Ok(Session::from_level(level)?)
}

fn prompt_level_name() -> GridwalkResult<String> {
    print!("Enter the level file name (for example 'levelex.txt'): ");
    std::io::stdout().flush()?;

    let mut name = String::new();
    std::io::stdin().lock().read_line(&mut name)?;
    Ok(name.trim().to_string())
}

/// Main loop: drain input, advance the state machine, draw one frame.
async fn run_game_loop(tile_size: f32, mut session: Session) {
    let mut input_handler = InputHandler::new();
    let display = MacroquadDisplay::new(tile_size);
    let mut machine = StateMachine::new();

    loop {
        let events = input_handler.poll_events();
        match machine.process_events(&mut session, events) {
            AppState::Terminated => break,
            AppState::Intro => display.render_intro(),
            AppState::Playing => display.render_game(&session),
        }

        next_frame().await;
    }

    let stats = session.statistics();
    info!(
        "Player finished at {} after {} steps ({} blocked)",
        session.player_position(),
        stats.steps_taken,
        stats.blocked_moves
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_size_must_be_positive() {
        assert_eq!(parse_tile_size("50"), Ok(50.0));
        assert_eq!(parse_tile_size("12.5"), Ok(12.5));
        assert!(parse_tile_size("0").is_err());
        assert!(parse_tile_size("-10").is_err());
        assert!(parse_tile_size("NaN").is_err());
        assert!(parse_tile_size("inf").is_err());
        assert!(parse_tile_size("big").is_err());
    }

    #[test]
    fn test_args_reject_zero_tile_size() {
        assert!(Args::try_parse_from(["gridwalk", "--tile-size", "0"]).is_err());
        let args = Args::try_parse_from(["gridwalk", "--level", "levelex.txt"]).unwrap();
        assert_eq!(args.tile_size, config::DEFAULT_TILE_SIZE);
        assert_eq!(args.level.as_deref(), Some("levelex.txt"));
    }
}
