use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Instance with the sheet stock and the parts to cut
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder the solution JSON and one SVG per sheet are written to
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    /// JSON `SkylineConfig`, defaults are used when omitted
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Compare every sort strategy and keep the best layout, regardless of the config
    #[arg(short, long)]
    pub best_of: bool,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
