use anyhow::Result;
use clap::Parser;

use trans_cli::cli::commands::translate;
use trans_cli::cli::{Args, Command};
use trans_cli::output::{self, OutputConfig};
use trans_cli::translation::print_languages;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        None => {
            let text = args
                .text
                .ok_or_else(|| anyhow::anyhow!("Missing text to translate"))?;

            let options = translate::TranslateOptions {
                text,
                dst: args.dst,
                verbose: args.verbose,
                pronunciation: args.pronunciation,
                config: args.config,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
