//! Where formula text comes from: command-line words, a file, or stdin.

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("cannot read {}: {source}", .path.display())]
    File { path: PathBuf, source: io::Error },
    #[error("cannot read stdin: {0}")]
    Stdin(#[from] io::Error),
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Source {
    /// Words from the command line, joined with single spaces.
    Words(Vec<String>),
    File(PathBuf),
    Stdin,
}

impl Source {
    pub fn read(&self) -> Result<String, InputError> {
        match self {
            Source::Words(words) => Ok(words.join(" ")),
            Source::File(path) => {
                let file = File::open(path).map_err(|source| InputError::File {
                    path: path.clone(),
                    source,
                })?;
                read_formula(file).map_err(|source| InputError::File {
                    path: path.clone(),
                    source,
                })
            }
            Source::Stdin => Ok(read_formula(io::stdin())?),
        }
    }
}

/// Reads all of `reader` as formula text. Carriage returns are dropped and
/// newlines become spaces, so a formula may span several lines. Bytes that
/// are not UTF-8 survive as replacement characters, which the tokenizer
/// reports as unknown.
pub fn read_formula<R: Read>(mut reader: R) -> Result<String, io::Error> {
    let mut bytes = vec![];
    reader.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes)
        .chars()
        .filter(|&c| c != '\r')
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect())
}
