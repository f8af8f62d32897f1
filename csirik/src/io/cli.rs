use std::path::PathBuf;

use bincover_rs::algos::CoverAlgo;
use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Instance file to solve. If absent, a random instance is generated according to the config
    #[arg(short, long, value_name = "FILE")]
    pub input_file: Option<PathBuf>,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Overrides the algorithm selected in the config
    #[arg(short, long, value_name = "ALGO")]
    pub algorithm: Option<CoverAlgoArg>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

/// CLI-facing mirror of [`CoverAlgo`], keeps the library free of clap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CoverAlgoArg {
    Ordered,
    TwoThirds,
    ThreeQuarters,
}

impl From<CoverAlgoArg> for CoverAlgo {
    fn from(arg: CoverAlgoArg) -> Self {
        match arg {
            CoverAlgoArg::Ordered => CoverAlgo::Ordered,
            CoverAlgoArg::TwoThirds => CoverAlgo::TwoThirds,
            CoverAlgoArg::ThreeQuarters => CoverAlgo::ThreeQuarters,
        }
    }
}
