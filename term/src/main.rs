use std::io;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use sapper_core::{BoardConfig, GameEngine, Level, RULES};

use render::{PlainRenderer, Renderer, StyledRenderer};

mod game;
mod input;
mod render;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum LevelArg {
    Novice,
    Adept,
    Master,
    MasterFullscreen,
}

impl From<LevelArg> for Level {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Novice => Level::Novice,
            LevelArg::Adept => Level::Adept,
            LevelArg::Master => Level::Master,
            LevelArg::MasterFullscreen => Level::MasterFullscreen,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Preset board to play on
    #[arg(short, long, value_enum, default_value_t = LevelArg::Novice)]
    level: LevelArg,

    /// Rows of a custom board
    #[arg(long, requires_all = ["width", "mines"])]
    height: Option<usize>,

    /// Columns of a custom board
    #[arg(long, requires_all = ["height", "mines"])]
    width: Option<usize>,

    /// Bombs on a custom board
    #[arg(long, requires_all = ["height", "width"])]
    mines: Option<usize>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print without colours
    #[arg(long)]
    plain: bool,

    /// Print the rules and exit
    #[arg(long)]
    rules: bool,
}

impl Args {
    fn board_config(&self) -> sapper_core::Result<BoardConfig> {
        match (self.height, self.width, self.mines) {
            (Some(height), Some(width), Some(mines)) => {
                BoardConfig::from_custom(height, width, mines)
            }
            _ => Ok(BoardConfig::from_preset(self.level.into())),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    log::debug!("args: {:?}", args);

    let stdout = io::stdout().lock();
    let mut renderer: Box<dyn Renderer> = if args.plain {
        Box::new(PlainRenderer::new(stdout))
    } else {
        Box::new(StyledRenderer::new(stdout))
    };

    if args.rules {
        renderer.header()?;
        renderer.rules(RULES)?;
        renderer.flush()?;
        return Ok(());
    }

    let config = args.board_config()?;
    let engine = match args.seed {
        Some(seed) => GameEngine::with_seed(config, seed),
        None => GameEngine::new(config),
    };
    log::debug!("playing {:?}", config.difficulty());

    game::Session::new(engine, io::stdin().lock(), renderer)
        .run()
        .context("terminal I/O failed")
}
