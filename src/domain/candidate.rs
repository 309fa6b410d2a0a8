//! Candidate entries and the loaders that read them.
//!
//! Candidates come either from a TOML file:
//!
//! ```toml
//! [[candidate]]
//! label = "Open File"
//! description = "Open a file from disk"
//! value = "file.open"
//! ```
//!
//! or from plain text, one label per line.

use serde::Deserialize;
use std::io::BufRead;
use std::path::Path;
use thiserror::Error;

/// Anything the palette can match against.
pub trait Labeled {
    fn label(&self) -> &str;
}

#[derive(Error, Debug)]
pub enum CandidateError {
    #[error("Failed to read candidates: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse candidates file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Candidate #{entry} has an empty label")]
    EmptyLabel { entry: usize },

    #[error("No candidates to choose from")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Candidate {
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Printed on selection; falls back to the label.
    #[serde(default)]
    pub value: Option<String>,
}

impl Candidate {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: None,
            value: None,
        }
    }

    pub fn output(&self) -> &str {
        self.value.as_deref().unwrap_or(&self.label)
    }
}

impl Labeled for Candidate {
    fn label(&self) -> &str {
        &self.label
    }
}

#[derive(Debug, Default, Deserialize)]
struct CandidateFile {
    #[serde(default)]
    candidate: Vec<Candidate>,
}

pub fn parse_toml(content: &str) -> Result<Vec<Candidate>, CandidateError> {
    let file: CandidateFile = toml::from_str(content)?;
    validate(file.candidate)
}

/// One candidate per non-blank line; surrounding whitespace is trimmed.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<Candidate>, CandidateError> {
    let mut candidates = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let label = line.trim();
        if !label.is_empty() {
            candidates.push(Candidate::new(label));
        }
    }
    validate(candidates)
}

/// Loads a `.toml` candidates file, or any other file as plain lines.
pub fn load_file(path: &Path) -> Result<Vec<Candidate>, CandidateError> {
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    if is_toml {
        parse_toml(&std::fs::read_to_string(path)?)
    } else {
        let file = std::fs::File::open(path)?;
        read_lines(std::io::BufReader::new(file))
    }
}

fn validate(candidates: Vec<Candidate>) -> Result<Vec<Candidate>, CandidateError> {
    if candidates.is_empty() {
        return Err(CandidateError::Empty);
    }
    if let Some(pos) = candidates.iter().position(|c| c.label.trim().is_empty()) {
        return Err(CandidateError::EmptyLabel { entry: pos + 1 });
    }
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_toml() {
        let candidates = parse_toml(
            r#"
            [[candidate]]
            label = "Open File"
            description = "Open a file from disk"
            value = "file.open"

            [[candidate]]
            label = "Quit"
            "#,
        )
        .unwrap();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].output(), "file.open");
        assert_eq!(candidates[1].output(), "Quit");
        assert_eq!(candidates[1].description, None);
    }

    #[test]
    fn test_missing_label_is_parse_error() {
        let err = parse_toml("[[candidate]]\ndescription = \"no label\"\n").unwrap_err();
        assert!(matches!(err, CandidateError::Parse(_)));
    }

    #[test]
    fn test_blank_label_rejected() {
        let err = parse_toml("[[candidate]]\nlabel = \"a\"\n[[candidate]]\nlabel = \"  \"\n")
            .unwrap_err();
        assert!(matches!(err, CandidateError::EmptyLabel { entry: 2 }));
    }

    #[test]
    fn test_read_lines_skips_blank() {
        let input = "Open File\n\n  Save As  \n";
        let candidates = read_lines(input.as_bytes()).unwrap();
        let labels: Vec<&str> = candidates.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Open File", "Save As"]);
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(
            read_lines("\n\n".as_bytes()),
            Err(CandidateError::Empty)
        ));
        assert!(matches!(parse_toml(""), Err(CandidateError::Empty)));
    }

    #[test]
    fn test_load_file_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("commands.toml");
        std::fs::write(&toml_path, "[[candidate]]\nlabel = \"Build\"\nvalue = \"make\"\n").unwrap();
        assert_eq!(load_file(&toml_path).unwrap()[0].output(), "make");

        let txt_path = dir.path().join("commands.txt");
        let mut f = std::fs::File::create(&txt_path).unwrap();
        writeln!(f, "Build").unwrap();
        writeln!(f, "Test").unwrap();
        assert_eq!(load_file(&txt_path).unwrap().len(), 2);

        assert!(matches!(
            load_file(&dir.path().join("missing.txt")),
            Err(CandidateError::Read(_))
        ));
    }
}
