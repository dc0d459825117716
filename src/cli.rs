use crate::error::CleanError;
use crate::services::{
    clipboard::{clean_clipboard, SystemClipboard, HOLDS_SELECTION},
    file::clean_file,
    log,
    render::{render_summary, Painter, Report, SEPARATOR},
    stdin::{read_input, Terminator},
};
use crate::tools::clean::clean;
use crate::types::Options;
use anyhow::Context;
use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "clipclean",
    version,
    about = "Clean pasted text: whitespace, smart quotes, UTM parameters"
)]
pub struct Cli {
    /// Read from the clipboard and copy the cleaned text back
    #[arg(short = 'c', long, conflicts_with = "file")]
    pub clipboard: bool,

    /// Text file to clean (output: cleaned_<filename>)
    #[arg(short = 'f', long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Apply language punctuation replacements (¿ ¡ « » — – …)
    #[arg(short = 'l', long)]
    pub language: bool,

    /// Show a summary of what was changed
    #[arg(long)]
    pub summary: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Print a JSON report instead of decorated text
    #[arg(long)]
    pub json: bool,

    /// Debug logging on stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Where the raw text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Clipboard,
    File(PathBuf),
    Stdin,
}

impl Cli {
    pub fn options(&self) -> Options {
        Options::new()
            .with_language(self.language)
            .with_summary(self.summary || self.json)
    }

    /// Shown before a clipboard write that blocks until another application
    /// takes the selection over.
    pub fn handoff_notice(&self) -> Option<&'static str> {
        (HOLDS_SELECTION && !self.json).then_some(
            "Holding the clipboard until a clipboard manager or your next copy takes it over.",
        )
    }

    pub fn source(&self) -> Source {
        match (&self.file, self.clipboard) {
            (Some(path), _) => Source::File(path.clone()),
            (None, true) => Source::Clipboard,
            (None, false) => Source::Stdin,
        }
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    log::init(cli.verbose);
    let painter = Painter::detect(cli.no_color || cli.json);

    match dispatch(&cli, &painter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<CleanError>() {
                Some(err) if err.is_empty_input() => {
                    eprintln!("{}", painter.warn(&err.to_string()))
                }
                _ => eprintln!("{}", painter.error(&format!("Error: {e:#}"))),
            }
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: &Cli, painter: &Painter) -> anyhow::Result<()> {
    let opts = cli.options();

    match cli.source() {
        Source::Clipboard => {
            let mut board = SystemClipboard::new()?;
            if let Some(notice) = cli.handoff_notice() {
                eprintln!("{}", painter.info(notice));
            }
            let (raw, outcome) = clean_clipboard(&mut board, &opts)?;
            if cli.json {
                let report = Report::new("clipboard", &outcome.summary, &raw, &outcome.text);
                println!("{}", report.to_json()?);
                return Ok(());
            }
            println!("{}", painter.success("Clipboard cleaned and copied back to clipboard."));
            if cli.summary {
                println!("\n{}", render_summary(painter, &outcome.summary, &raw, &outcome.text));
            }
        }
        Source::File(path) => {
            let result = clean_file(&path, &opts)
                .with_context(|| format!("cleaning {}", path.display()))?;
            if cli.json {
                let outcome = &result.outcome;
                let report = Report::new("file", &outcome.summary, &result.raw, &outcome.text)
                    .with_output(result.output.display().to_string());
                println!("{}", report.to_json()?);
                return Ok(());
            }
            println!(
                "{}",
                painter.success(&format!("Cleaned file written: {}", result.output.display()))
            );
            if cli.summary {
                let outcome = &result.outcome;
                println!(
                    "\n{}",
                    render_summary(painter, &outcome.summary, &result.raw, &outcome.text)
                );
            }
        }
        Source::Stdin => {
            let stdin = io::stdin();
            let terminator = if stdin.is_terminal() {
                eprintln!(
                    "{}",
                    painter.info("Paste your text. Press Enter on an empty line (or Ctrl+D) to end:")
                );
                Terminator::BlankLine
            } else {
                Terminator::Eof
            };
            let raw = read_input(stdin.lock(), terminator)?;
            let outcome = clean(&raw, &opts);
            if cli.json {
                let report = Report::new("stdin", &outcome.summary, &raw, &outcome.text)
                    .with_cleaned(&outcome.text);
                println!("{}", report.to_json()?);
                return Ok(());
            }
            if terminator == Terminator::BlankLine {
                println!("\n{}\n", painter.info(&format!("{SEPARATOR} Cleaned Output {SEPARATOR}")));
            }
            println!("{}", outcome.text);
            if cli.summary {
                println!("\n{}", render_summary(painter, &outcome.summary, &raw, &outcome.text));
            }
        }
    }

    Ok(())
}
