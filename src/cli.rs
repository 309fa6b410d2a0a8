use crate::app::config::Config;
use crate::domain::candidate::{self, Candidate};
use crate::theme::PaletteType;
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

/// Fuzzy-pick one entry from a list and print it.
#[derive(Parser, Debug, Default)]
#[command(name = "quickpick", version, about)]
pub struct Cli {
    /// Candidates file: `.toml` with `[[candidate]]` tables, or one label per
    /// line. Reads stdin when omitted.
    pub input: Option<PathBuf>,

    /// Config file to use instead of `~/.config/quickpick/config.toml`
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Color theme
    #[arg(long, value_enum)]
    pub theme: Option<PaletteType>,

    /// Text shown before the query
    #[arg(long, value_name = "TEXT")]
    pub prompt: Option<String>,

    /// Log file (default: `~/.config/quickpick/quickpick.log`)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Command-line flags win over the config file.
    pub fn apply(&self, config: &mut Config) {
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if let Some(prompt) = &self.prompt {
            config.prompt.clone_from(prompt);
        }
    }

    /// Short name of the candidate source for the header.
    pub fn source_name(&self) -> String {
        self.input
            .as_ref()
            .and_then(|path| path.file_name())
            .map_or_else(|| "stdin".to_string(), |name| name.to_string_lossy().into_owned())
    }

    pub fn load_candidates(&self) -> Result<Vec<Candidate>> {
        match &self.input {
            Some(path) => candidate::load_file(path)
                .with_context(|| format!("Failed to load candidates from {}", path.display())),
            None => {
                let stdin = io::stdin();
                if stdin.is_terminal() {
                    bail!("No candidates: pass a file or pipe them on stdin");
                }
                Ok(candidate::read_lines(stdin.lock())?)
            }
        }
    }
}
