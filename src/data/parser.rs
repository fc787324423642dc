use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{Measurement, MeasurementTable};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("reading {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `line` is 1-based and counts the header.
    #[error("line {line}, column {}: '{}' {}", .token.column, .token.text, .token.reason)]
    MalformedToken { line: usize, token: TokenError },
}

/// A token that was present but did not parse as the expected number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenError {
    /// 1-based column within the line.
    pub column: usize,
    pub text: String,
    pub reason: String,
}

// ---------------------------------------------------------------------------
// Per-line classification
// ---------------------------------------------------------------------------

/// What a single data line turned into.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// Not a data line: token count other than 3, or a first token that is
    /// not an integer. Dropped without error.
    Skipped,
    Parsed(Measurement),
    Failed(TokenError),
}

/// Classify one line of `<k:int> <T1:float> <T2:float>`.
pub fn parse_line(line: &str) -> LineOutcome {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [k, t1, t2] = tokens.as_slice() else {
        return LineOutcome::Skipped;
    };
    if !is_integer_shaped(k) {
        return LineOutcome::Skipped;
    }

    match parse_row(k, t1, t2) {
        Ok(m) => LineOutcome::Parsed(m),
        Err(e) => LineOutcome::Failed(e),
    }
}

/// Optional sign followed by at least one ASCII digit.
fn is_integer_shaped(token: &str) -> bool {
    let digits = token
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_row(k: &str, t1: &str, t2: &str) -> Result<Measurement, TokenError> {
    Ok(Measurement {
        k: number(k, 1)?,
        t1: number(t1, 2)?,
        t2: number(t2, 3)?,
    })
}

fn number<T>(text: &str, column: usize) -> Result<T, TokenError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    text.parse().map_err(|e: T::Err| TokenError {
        column,
        text: text.to_string(),
        reason: e.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read a measurement log from disk.
pub fn parse_file(path: &Path) -> Result<MeasurementTable, ParseError> {
    let text = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&text)
}

/// Parse log text. The first line is always the header and never parsed.
/// Parsing stops at the first malformed numeric token.
pub fn parse_str(text: &str) -> Result<MeasurementTable, ParseError> {
    let mut rows = Vec::new();

    for (idx, line) in text.lines().enumerate().skip(1) {
        match parse_line(line) {
            LineOutcome::Parsed(m) => rows.push(m),
            LineOutcome::Skipped => log::debug!("line {}: skipped {line:?}", idx + 1),
            LineOutcome::Failed(token) => {
                return Err(ParseError::MalformedToken {
                    line: idx + 1,
                    token,
                })
            }
        }
    }

    Ok(rows.into_iter().collect())
}
