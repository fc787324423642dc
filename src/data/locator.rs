use std::io::{self, BufRead, Write};
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocateError {
    #[error("console I/O failed while choosing a file")]
    Console(#[from] io::Error),
}

// ---------------------------------------------------------------------------
// Candidate discovery
// ---------------------------------------------------------------------------

/// File names in `dir` starting with `prefix` and ending with `suffix`,
/// in the order the directory yields them.
///
/// An unreadable directory is logged and treated as empty.
pub fn list_candidates(dir: &Path, prefix: &str, suffix: &str) -> Vec<String> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Cannot list {}: {e}", dir.display());
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| match entry {
            Ok(entry) => match entry.file_name().into_string() {
                Ok(name) => Some(name),
                Err(raw) => {
                    log::debug!("Skipping non-UTF-8 name {raw:?} in {}", dir.display());
                    None
                }
            },
            Err(e) => {
                log::warn!("Skipping unreadable entry in {}: {e}", dir.display());
                None
            }
        })
        .filter(|name| name.starts_with(prefix) && name.ends_with(suffix))
        .collect()
}

// ---------------------------------------------------------------------------
// Selection strategies
// ---------------------------------------------------------------------------

/// Picks one of the candidate file names.
///
/// Returns `Ok(None)` when nothing was chosen (including an empty list).
pub trait Selector {
    fn select(&mut self, candidates: &[String]) -> Result<Option<usize>, LocateError>;
}

/// Any `candidates -> index` function is a selector.
impl<F> Selector for F
where
    F: FnMut(&[String]) -> Option<usize>,
{
    fn select(&mut self, candidates: &[String]) -> Result<Option<usize>, LocateError> {
        Ok(self(candidates))
    }
}

/// Interactive numbered menu, re-prompting until a valid number arrives.
pub struct ConsoleSelector<R, W> {
    input: R,
    output: W,
}

impl ConsoleSelector<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleSelector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Selector for ConsoleSelector<R, W> {
    fn select(&mut self, candidates: &[String]) -> Result<Option<usize>, LocateError> {
        if candidates.is_empty() {
            writeln!(self.output, "No files to choose from.")?;
            return Ok(None);
        }

        writeln!(self.output, "Available files:")?;
        for (idx, name) in candidates.iter().enumerate() {
            writeln!(self.output, "{}. {name}", idx + 1)?;
        }

        let mut buf = Vec::new();
        loop {
            write!(self.output, "Enter the file number to plot: ")?;
            self.output.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                log::warn!("Input closed before a file was chosen");
                writeln!(self.output)?;
                return Ok(None);
            }

            // Undecodable bytes end up in the "not a number" arm.
            let line = String::from_utf8_lossy(&buf);
            match line.trim().parse::<i64>() {
                Ok(n) if n >= 1 && n as u64 <= candidates.len() as u64 => {
                    return Ok(Some(n as usize - 1))
                }
                Ok(_) => writeln!(self.output, "Invalid number. Try again.")?,
                Err(_) => writeln!(self.output, "Please enter a number.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn run_console(input: &str, candidates: &[String]) -> (Option<usize>, String) {
        let mut out = Vec::new();
        let choice = ConsoleSelector::new(input.as_bytes(), &mut out)
            .select(candidates)
            .unwrap();
        (choice, String::from_utf8(out).unwrap())
    }

    #[test]
    fn lists_only_matching_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "experiment_1.txt",
            "experiment_2.txt",
            "experiment_3.csv",
            "notes.txt",
            "my_experiment_4.txt",
        ] {
            std::fs::write(dir.path().join(name), "k T1 T2\n").unwrap();
        }

        let mut found = list_candidates(dir.path(), "experiment_", ".txt");
        found.sort();
        assert_eq!(found, names(&["experiment_1.txt", "experiment_2.txt"]));
    }

    #[test]
    fn missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("does-not-exist");
        assert!(list_candidates(&gone, "experiment_", ".txt").is_empty());
    }

    #[test]
    fn console_reprompts_until_valid() {
        let files = names(&["experiment_a.txt", "experiment_b.txt"]);
        let (choice, out) = run_console("abc\n0\n-1\n3\n 2 \n", &files);

        assert_eq!(choice, Some(1));
        assert!(out.contains("1. experiment_a.txt\n2. experiment_b.txt\n"));
        assert_eq!(out.matches("Please enter a number.").count(), 1);
        assert_eq!(out.matches("Invalid number. Try again.").count(), 3);
        assert_eq!(out.matches("Enter the file number to plot: ").count(), 5);
    }

    #[test]
    fn console_reprompts_on_non_utf8_input() {
        let files = names(&["experiment_a.txt"]);
        let mut out = Vec::new();
        let choice = ConsoleSelector::new(&b"\xff\xfe\n1\n"[..], &mut out)
            .select(&files)
            .unwrap();

        assert_eq!(choice, Some(0));
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("Please enter a number.").count(), 1);
    }

    #[test]
    fn console_with_no_candidates() {
        let (choice, out) = run_console("1\n", &[]);
        assert_eq!(choice, None);
        assert_eq!(out, "No files to choose from.\n");
    }

    #[test]
    fn console_eof_means_no_selection() {
        let files = names(&["experiment_a.txt"]);
        let (choice, _) = run_console("nope\n", &files);
        assert_eq!(choice, None);
    }

    #[test]
    fn closures_are_selectors() {
        let files = names(&["experiment_a.txt", "experiment_b.txt"]);
        let mut last = |c: &[String]| c.len().checked_sub(1);
        assert_eq!(last.select(&files).unwrap(), Some(1));
        assert_eq!(last.select(&[]).unwrap(), None);
    }
}
