use anyhow::{Result, bail};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::{
    ConfigManager, DEFAULT_TARGET_LANGUAGE, ResolveOptions, ResolvedConfig, TargetSource,
    resolve_config,
};
use crate::info;
use crate::translation::{GoogleTranslator, Translation, Translator, describe_language};
use crate::ui::{Spinner, Style};

pub struct TranslateOptions {
    pub text: String,
    pub dst: Option<String>,
    pub verbose: bool,
    pub pronunciation: bool,
    pub config: PathBuf,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let config_file = ConfigManager::new(&options.config).load()?;

    let resolve_options = ResolveOptions {
        dst: options.dst,
        verbose: options.verbose,
        pronunciation: options.pronunciation,
    };
    let resolved = resolve_config(&resolve_options, &config_file)?;

    if resolved.verbose && resolved.target_source == TargetSource::Default {
        info!(
            "{} Default \"dst\" not found in config, using \"{DEFAULT_TARGET_LANGUAGE}\"",
            Style::warning("Note:")
        );
    }

    let translator = GoogleTranslator::new(resolved.endpoint.clone());
    let mut stdout = io::stdout().lock();
    translate_and_print(&translator, &options.text, &resolved, &mut stdout).await
}

/// Performs one translation and writes the formatted result.
pub async fn translate_and_print<T, W>(
    translator: &T,
    text: &str,
    resolved: &ResolvedConfig,
    out: &mut W,
) -> Result<()>
where
    T: Translator,
    W: Write,
{
    if text.trim().is_empty() {
        bail!("Input text is empty");
    }

    let spinner = Spinner::new("Translating...");
    let translation = translator
        .translate(text, resolved.target_language.code)
        .await;
    spinner.stop();

    for line in format_output(&translation?, resolved) {
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    Ok(())
}

/// Renders the lines printed for a translation.
pub fn format_output(translation: &Translation, resolved: &ResolvedConfig) -> Vec<String> {
    let mut lines = Vec::new();

    if resolved.verbose {
        let (src_name, src_code) = describe_language(&translation.src);
        let (dst_name, dst_code) = describe_language(&translation.dest);
        lines.push(format!("{src_name}[{src_code}] => {dst_name}[{dst_code}]"));
    }

    if resolved.pronunciation {
        lines.push(format!("[TEXT] {}", translation.text));
        lines.push(format!("[PRON] {}", translation.pronunciation));
    } else {
        lines.push(translation.text.clone());
    }

    lines
}
