//! Loading patterns and text from files, stdin, or the command line.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use dictscan_automaton::{Automaton, DuplicatePolicy};

use super::matches::ExitStatus;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("patterns are required: use -p/--pattern or -f/--patterns")]
    NoPatterns,

    #[error("text is required: use a positional TEXT_FILE or -t/--text")]
    NoText,

    #[error("patterns and text cannot both be read from stdin")]
    StdinTwice,
}

/// Where patterns come from.
#[derive(Clone, Debug, Default)]
pub struct PatternInput {
    /// One pattern per line; `-` reads stdin.
    pub file: Option<PathBuf>,
    /// Patterns given on the command line, after the file's.
    pub inline: Vec<String>,
    pub keep_duplicates: bool,
}

/// Where the scanned text comes from.
#[derive(Clone, Debug, Default)]
pub struct TextInput {
    /// `-` reads stdin.
    pub path: Option<PathBuf>,
    pub inline: Option<String>,
}

/// Patterns in id order, with the automaton built over them.
pub struct Dictionary {
    pub patterns: Vec<Vec<u8>>,
    pub automaton: Automaton,
}

impl PatternInput {
    pub fn policy(&self) -> DuplicatePolicy {
        if self.keep_duplicates {
            DuplicatePolicy::KeepAll
        } else {
            DuplicatePolicy::LastWins
        }
    }

    fn reads_stdin(&self) -> bool {
        self.file.as_deref().is_some_and(is_stdin)
    }

    /// All patterns in id order: file lines first, then inline patterns.
    pub fn load(&self) -> Result<Vec<Vec<u8>>, LoadError> {
        if self.file.is_none() && self.inline.is_empty() {
            return Err(LoadError::NoPatterns);
        }

        let mut patterns = match &self.file {
            Some(path) => split_lines(&read_source(path)?),
            None => Vec::new(),
        };
        patterns.extend(self.inline.iter().map(|p| p.as_bytes().to_vec()));
        Ok(patterns)
    }
}

impl TextInput {
    fn reads_stdin(&self) -> bool {
        self.inline.is_none() && self.path.as_deref().is_some_and(is_stdin)
    }

    pub fn load(&self) -> Result<Vec<u8>, LoadError> {
        if let Some(text) = &self.inline {
            return Ok(text.as_bytes().to_vec());
        }
        match &self.path {
            Some(path) => read_source(path),
            None => Err(LoadError::NoText),
        }
    }
}

impl Dictionary {
    pub fn load(input: &PatternInput) -> Result<Self, LoadError> {
        let patterns = input.load()?;
        let automaton = Automaton::builder()
            .duplicates(input.policy())
            .build(&patterns);
        Ok(Self {
            patterns,
            automaton,
        })
    }
}

/// Load the dictionary and the text for a scanning command.
pub fn load_scan(
    patterns: &PatternInput,
    text: &TextInput,
) -> Result<(Dictionary, Vec<u8>), LoadError> {
    if patterns.reads_stdin() && text.reads_stdin() {
        return Err(LoadError::StdinTwice);
    }
    let dictionary = Dictionary::load(patterns)?;
    let text = text.load()?;
    Ok((dictionary, text))
}

/// Split a pattern file into lines.
///
/// Every line is a pattern, empty ones included, except the empty piece
/// after a final `\n`. A `\r` before the `\n` stays part of the pattern.
pub fn split_lines(content: &[u8]) -> Vec<Vec<u8>> {
    if content.is_empty() {
        return Vec::new();
    }
    let body = content.strip_suffix(b"\n").unwrap_or(content);
    body.split(|&b| b == b'\n').map(<[u8]>::to_vec).collect()
}

/// Unwrap a load result or exit with status 2.
pub fn or_exit<T>(result: Result<T, LoadError>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(ExitStatus::Error.code());
    })
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_source(path: &Path) -> Result<Vec<u8>, LoadError> {
    if is_stdin(path) {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .map_err(LoadError::Stdin)?;
        return Ok(buf);
    }
    fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}
