use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;

#[derive(Parser, Debug)]
#[command(name = "trans")]
#[command(about = "Translate text from one language to another language")]
#[command(after_help = "Note: translations are provided by the Google Translate web service.\n\
                        To translate the word \"languages\" itself, run: trans -- languages")]
#[command(version)]
#[command(subcommand_negates_reqs = true)]
pub struct Args {
    /// The text to be translated
    #[arg(required = true)]
    pub text: Option<String>,

    /// Show pronunciation of the translated text
    #[arg(short = 'p')]
    pub pronunciation: bool,

    /// Display detected source and destination languages
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Translate text to the given language (code or name)
    #[arg(long)]
    pub dst: Option<String>,

    /// Path to the config file
    #[arg(short = 'c', long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Suppress notes and progress output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported language codes and names
    Languages,
}
