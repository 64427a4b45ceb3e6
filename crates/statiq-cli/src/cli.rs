use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "statiq")]
#[command(about = "Export StatIQ game play logs for Hudl")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to <config dir>/statiq/config.toml)
    #[arg(short, long, global = true, env = "STATIQ_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a recorded game without saving it to the export directory
    Encode {
        /// Recorded game JSON
        game: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,

        /// Double embedded quotes in CSV fields
        #[arg(long)]
        rfc4180: bool,
    },
    /// Save a recorded game as a Hudl sheet and open it
    Export {
        /// Recorded game JSON
        game: PathBuf,

        /// Export directory (overrides config)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Only save the file, don't open it
        #[arg(long)]
        no_share: bool,

        /// Double embedded quotes in CSV fields
        #[arg(long)]
        rfc4180: bool,
    },
    /// Show the scoreboard and play counts for a recorded game
    Summary {
        /// Recorded game JSON
        game: PathBuf,

        /// Print the full JSON game record
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Hudl CSV sheet
    Csv,
    /// One JSON object per play
    Json,
}
