//! Interactive REPL (Read-Eval-Print Loop) mode.
//!
//! Each entered URL runs the full pipeline; the last successful table can be
//! saved as CSV until the next run replaces it.

use crate::commands::run::{build_pipeline, export_table, run_and_render, ExportTarget};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use gloss_domain::{AnnotationMode, AnnotationTable};
use gloss_pipeline::EXPORT_FILE_NAME;
use rustyline::error::ReadlineError;
use rustyline::{Config as EditorConfig, DefaultEditor};
use std::path::PathBuf;

/// Run the interactive REPL.
pub async fn run_repl(config: &Config, api_key: Option<String>, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.info("Gloss REPL - Enter a news article URL, 'help' for commands, 'exit' to quit"));
    println!();

    let pipeline = build_pipeline(config, config.pipeline.clone(), api_key)?;

    let editor_config = EditorConfig::builder()
        .max_history_size(config.settings.history_size)
        .map_err(|e| CliError::Editor(e.to_string()))?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)
        .map_err(|e| CliError::Editor(format!("Failed to initialize editor: {}", e)))?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let mut mode = config.settings.mode;
    let mut last_table: Option<AnnotationTable> = None;

    loop {
        let prompt = format!("gloss ({})> ", mode.as_str().to_lowercase());

        match editor.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => print_help(formatter),
                    Ok(ReplCommand::Mode(None)) => {
                        println!("{}", formatter.info(&format!("Current mode: {}", mode)));
                    }
                    Ok(ReplCommand::Mode(Some(new_mode))) => {
                        mode = new_mode;
                        println!("{}", formatter.success(&format!("Mode set to {}", mode)));
                    }
                    Ok(ReplCommand::Save(path)) => match &last_table {
                        Some(table) => {
                            let path = path.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
                            if let Err(e) = export_table(table, &ExportTarget::File(path), formatter) {
                                eprintln!("{}", formatter.error(&e.to_string()));
                            }
                        }
                        None => eprintln!("{}", formatter.warning("Nothing to save yet")),
                    },
                    Ok(ReplCommand::Run(url)) => {
                        match run_and_render(&pipeline, &url, mode, &ExportTarget::Skip, formatter).await {
                            Ok(output) => last_table = Some(output.table),
                            Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand {
    Exit,
    Help,
    Mode(Option<AnnotationMode>),
    Save(Option<PathBuf>),
    Run(String),
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    match parts[0] {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "mode" => match parts.get(1) {
            None => Ok(ReplCommand::Mode(None)),
            Some(name) => AnnotationMode::parse(name)
                .map(|mode| ReplCommand::Mode(Some(mode)))
                .ok_or_else(|| {
                    CliError::InvalidInput(format!(
                        "Unknown mode: {}. Use 'explanation' or 'synonym'.",
                        name
                    ))
                }),
        },
        "save" => Ok(ReplCommand::Save(parts.get(1).map(PathBuf::from))),
        "run" => match parts.get(1) {
            Some(url) => Ok(ReplCommand::Run(url.to_string())),
            None => Err(CliError::InvalidInput("Usage: run <url>".to_string())),
        },
        word if looks_like_url(word) => Ok(ReplCommand::Run(word.to_string())),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            parts[0]
        ))),
    }
}

fn looks_like_url(word: &str) -> bool {
    word.starts_with("http://") || word.starts_with("https://")
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  <url>                     - Summarize the article and annotate its keywords");
    println!("  run <url>                 - Same as entering the URL");
    println!("  mode [explanation|synonym] - Show or change the annotation mode");
    println!("  save [path]               - Save the last table as CSV");
    println!("                              (default: {})", EXPORT_FILE_NAME);
    println!("  help, ?                   - Show this help");
    println!("  exit, quit, q             - Exit REPL");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url() {
        assert_eq!(
            parse_repl_command("https://example.com/news").unwrap(),
            ReplCommand::Run("https://example.com/news".to_string())
        );
        assert_eq!(
            parse_repl_command("run http://example.com").unwrap(),
            ReplCommand::Run("http://example.com".to_string())
        );
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_repl_command("mode").unwrap(), ReplCommand::Mode(None));
        assert_eq!(
            parse_repl_command("mode Synonym").unwrap(),
            ReplCommand::Mode(Some(AnnotationMode::Synonym))
        );
        assert!(parse_repl_command("mode antonym").is_err());
    }

    #[test]
    fn test_parse_save() {
        assert_eq!(parse_repl_command("save").unwrap(), ReplCommand::Save(None));
        assert_eq!(
            parse_repl_command("save words.csv").unwrap(),
            ReplCommand::Save(Some(PathBuf::from("words.csv")))
        );
    }

    #[test]
    fn test_parse_exit_and_help() {
        assert_eq!(parse_repl_command("quit").unwrap(), ReplCommand::Exit);
        assert_eq!(parse_repl_command("?").unwrap(), ReplCommand::Help);
    }

    #[test]
    fn test_unknown_command() {
        assert!(matches!(
            parse_repl_command("example.com"),
            Err(CliError::InvalidInput(_))
        ));
        assert!(parse_repl_command("run").is_err());
    }
}
