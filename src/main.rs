//! criticmd - Main Entry Point
//!
//! CriticMarkup editing and rendering for Markdown documents: wrap text in
//! addition/deletion/substitution spans, and render marked-up documents to
//! styled HTML.

mod commands;
mod config;
mod error;
mod export;
mod markup;
mod string_utils;
mod theme;
mod watcher;

use clap::{Parser, Subcommand};
use commands::CriticCommand;
use config::{load_config, Theme};
use error::{Error, Result};
use log::{info, warn};
use markup::{insert_span, SpanKind};
use std::io::Read;
use std::path::PathBuf;
use watcher::{FileEvent, FileWatcher};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Definition
// ─────────────────────────────────────────────────────────────────────────────

/// CriticMarkup editing and rendering for Markdown
#[derive(Parser, Debug)]
#[command(name = "criticmd", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Render a markdown file to a standalone HTML document
    Render {
        /// Markdown file to render
        file: PathBuf,

        /// Output path (defaults to the input with an .html extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override the configured color theme
        #[arg(long, value_enum)]
        theme: Option<Theme>,

        /// Re-render whenever the source file changes
        #[arg(long)]
        watch: bool,

        /// Open the exported file when done
        #[arg(long)]
        open: bool,

        /// Copy the rendered HTML fragment to the clipboard instead of
        /// writing a file
        #[arg(long)]
        clipboard: bool,
    },

    /// Apply a span insertion command to text read from stdin
    Insert {
        /// Which span to insert
        #[arg(value_enum)]
        kind: SpanKind,

        /// Selection as a byte range START..END; omitted inserts the empty
        /// template at the end of the text
        #[arg(long, value_parser = parse_selection)]
        selection: Option<Selection>,
    },

    /// Flip the persisted showDeletion setting
    ToggleShowDeletion,

    /// List the command palette (ids and names)
    Commands,
}

/// A selection range in byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Selection {
    start: usize,
    end: usize,
}

/// Parse a `START..END` byte range.
fn parse_selection(s: &str) -> std::result::Result<Selection, String> {
    let (start, end) = s
        .split_once("..")
        .ok_or_else(|| format!("expected START..END, got '{}'", s))?;
    let start = start
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid start '{}': {}", start, e))?;
    let end = end
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid end '{}': {}", end, e))?;
    Ok(Selection { start, end })
}

// ─────────────────────────────────────────────────────────────────────────────
// Entry Point
// ─────────────────────────────────────────────────────────────────────────────

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        CliCommand::Render {
            file,
            output,
            theme,
            watch,
            open,
            clipboard,
        } => run_render(file, output, theme, watch, open, clipboard),
        CliCommand::Insert { kind, selection } => run_insert(kind, selection),
        CliCommand::ToggleShowDeletion => run_toggle(),
        CliCommand::Commands => {
            run_commands();
            Ok(())
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Subcommand Handlers
// ─────────────────────────────────────────────────────────────────────────────

fn run_render(
    file: PathBuf,
    output: Option<PathBuf>,
    theme_override: Option<Theme>,
    watch: bool,
    open_flag: bool,
    clipboard: bool,
) -> Result<()> {
    let mut settings = load_config();
    if let Some(theme) = theme_override {
        settings.theme = theme;
    }

    if clipboard {
        let markdown = std::fs::read_to_string(&file)?;
        export::copy_html_to_clipboard(&markdown)?;
        info!(
            "Copied rendered HTML for {} to the clipboard",
            file.display()
        );
        return Ok(());
    }

    let output = output.unwrap_or_else(|| file.with_extension("html"));

    info!("Rendering with the {} theme", settings.theme.label());
    export::export_to_html_file(&file, &output, &settings)?;

    if open_flag || settings.open_after_export {
        open::that(&output).map_err(|e| {
            Error::Application(format!("Failed to open '{}': {}", output.display(), e))
        })?;
    }

    if watch {
        let watcher = FileWatcher::new(file.clone()).map_err(Error::Application)?;
        info!("Watching {} for changes (Ctrl+C to stop)", file.display());
        while let Some(event) = watcher.recv() {
            match event {
                FileEvent::Modified => {
                    if let Err(e) = export::export_to_html_file(&file, &output, &settings) {
                        warn!("Re-render failed: {}", e);
                    }
                }
                FileEvent::Removed => {
                    warn!("{} was removed, stopping watch", file.display());
                    break;
                }
                FileEvent::Error(e) => warn!("Watcher error: {}", e),
            }
        }
    }

    Ok(())
}

fn run_insert(kind: SpanKind, selection: Option<Selection>) -> Result<()> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;

    let result = insert_span(&text, selection.map(|s| (s.start, s.end)), kind);
    info!("Cursor at byte {}", result.cursor);
    print!("{}", result.text);
    Ok(())
}

fn run_toggle() -> Result<()> {
    let mut settings = load_config();
    let display = config::toggle_show_deletion(&mut settings)?;
    println!("--deletion-display: {}", display);
    Ok(())
}

fn run_commands() {
    for command in CriticCommand::all() {
        println!("{:<22} {}", command.id(), command.name());
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_selection_valid() {
        assert_eq!(
            parse_selection("0..5"),
            Ok(Selection { start: 0, end: 5 })
        );
        assert_eq!(
            parse_selection("10..10"),
            Ok(Selection { start: 10, end: 10 })
        );
    }

    #[test]
    fn test_parse_selection_invalid() {
        assert!(parse_selection("5").is_err());
        assert!(parse_selection("a..b").is_err());
        assert!(parse_selection("..").is_err());
    }

    #[test]
    fn test_render_args_parse() {
        let cli = Cli::try_parse_from([
            "criticmd", "render", "doc.md", "-o", "out.html", "--theme", "dark", "--watch",
        ])
        .unwrap();
        match cli.command {
            CliCommand::Render {
                file,
                output,
                theme,
                watch,
                ..
            } => {
                assert_eq!(file, PathBuf::from("doc.md"));
                assert_eq!(output, Some(PathBuf::from("out.html")));
                assert_eq!(theme, Some(Theme::Dark));
                assert!(watch);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_insert_args_parse() {
        let cli =
            Cli::try_parse_from(["criticmd", "insert", "addition", "--selection", "0..5"]).unwrap();
        match cli.command {
            CliCommand::Insert { kind, selection } => {
                assert_eq!(kind, SpanKind::Addition);
                assert_eq!(selection, Some(Selection { start: 0, end: 5 }));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
