#[macro_use]
extern crate derive_more;

use crate::{
    app::{App, Prefs},
    error::{AppError, AppErrorConversion, AppResult},
};
use clap::Parser;
use ggez::{event, ContextBuilder};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod app;
mod basic;
mod color;
mod error;

#[derive(Parser)]
#[command(name = "wrap_snake")]
#[command(version, about = "Snake on a board that wraps around its edges")]
struct Cli {
    /// Window width in pixels
    #[arg(long, default_value_t = Prefs::default().window_width)]
    width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = Prefs::default().window_height)]
    height: u32,

    /// Side of a grid cell in pixels
    #[arg(long, default_value_t = Prefs::default().cell_size)]
    cell_size: u32,

    /// Game ticks per second
    #[arg(long, default_value_t = Prefs::default().fps)]
    fps: u32,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(env_filter)
        .init();
}

fn main() -> AppResult {
    init_tracing();
    let cli = Cli::parse();

    let prefs = Prefs::default()
        .window(cli.width, cli.height)
        .cell_size(cli.cell_size)
        .fps(cli.fps);
    let app = App::new(prefs).with_trace_step("main")?;
    info!(?prefs, board = ?prefs.board_dim(), "starting");

    let (ctx, event_loop) = ContextBuilder::new("wrap_snake", "wrap_snake")
        .window_mode(app.wm())
        .window_setup(app.ws())
        .build()
        .map_err(AppError::from)
        .with_trace_step("main")?;

    event::run(ctx, event_loop, app)
}
