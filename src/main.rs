//! Cuptris — classic falling-block puzzle game in the terminal.

mod app;
mod cup;
mod figure;
mod game;
mod geometry;
mod input;
mod theme;
mod ui;

use anyhow::Result;
use app::App;
use clap::{Parser, ValueEnum};

/// Options derived from CLI that affect game behaviour (cup size, frame rate,
/// gravity period).
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub fps: u32,
    pub fall_period: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let theme = theme::Theme::load(args.theme.as_deref(), args.palette).unwrap_or_default();
    let config = GameConfig {
        width: args.width.max(4),
        height: args.height.max(4),
        fps: args.fps,
        fall_period: args.fall_period.max(1),
    };
    let mut app = App::new(config, theme);
    let score = app.run()?;
    println!("your score: {score}");
    Ok(())
}

/// Classic falling-block puzzle in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "cuptris",
    version,
    about = "Classic falling-block puzzle in the terminal. Drop figures into the cup; clear full rows to score.",
    long_about = "Cuptris is a terminal falling-block puzzle game.\n\n\
        Move and rotate the falling figure into the cup. Full rows are cleared and scored; \
        clearing several rows at once scores their count squared. The game ends when the \
        cup fills to the top.\n\n\
        CONTROLS:\n  h / Left    Move left    l / Right  Move right\n  u           Rotate left  i / Up     Rotate right\n  k / Down    Soft drop    j / Space  Hard drop\n  p           Pause        q / Esc    Quit"
)]
pub struct Args {
    /// Cup width in columns (grid cells).
    #[arg(long, default_value = "10", value_name = "COLS")]
    pub width: u16,

    /// Cup height in rows (grid cells).
    #[arg(long, default_value = "20", value_name = "ROWS")]
    pub height: u16,

    /// Target frames per second; input is polled for at most 1000/fps ms per frame.
    #[arg(long, default_value = "30", value_name = "RATE")]
    pub fps: u32,

    /// Gravity period: the figure falls one row every N frames.
    #[arg(long, default_value = "15", value_name = "FRAMES")]
    pub fall_period: u64,

    /// Path to theme file (btop-style theme[key]="value"). Uses One Dark if not set.
    #[arg(short, long, value_name = "FILE")]
    pub theme: Option<std::path::PathBuf>,

    /// Colour palette: normal (theme), high-contrast, or colorblind.
    #[arg(long, default_value = "normal")]
    pub palette: Palette,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Palette {
    #[default]
    Normal,

    #[value(alias = "highcontrast", alias = "contrast")]
    HighContrast,

    #[value(alias = "colourblind")]
    Colorblind,
}
