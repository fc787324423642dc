//! Benchmark the naive and Knuth–Morris–Pratt substring searches and write
//! `experiment_<n>.txt` logs that the viewer can load.
//!
//! Usage:
//! * `generate_sample [output_dir]` writes the logs; the directory defaults to
//!   `input_dir` from `kmp_times.json` (or `.`).
//! * `generate_sample custom <text> <pattern>` times both searches once.

#[path = "../config.rs"]
#[allow(dead_code)]
mod config;

use std::fmt::Write as _;
use std::path::Path;
use std::time::Instant;

use anyhow::{bail, Context, Result};

use config::{Config, CONFIG_FILE};

// ---------------------------------------------------------------------------
// Substring search
// ---------------------------------------------------------------------------

/// Every offset where `pattern` occurs in `text`, by direct comparison.
fn search_trivial(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, w)| *w == pattern)
        .map(|(i, _)| i)
        .collect()
}

/// Longest proper prefix of `pattern[..=i]` that is also a suffix.
fn prefix_function(pattern: &[u8]) -> Vec<usize> {
    let mut lps = vec![0; pattern.len()];
    let mut len = 0;
    for i in 1..pattern.len() {
        while len > 0 && pattern[i] != pattern[len] {
            len = lps[len - 1];
        }
        if pattern[i] == pattern[len] {
            len += 1;
        }
        lps[i] = len;
    }
    lps
}

/// Every offset where `pattern` occurs in `text`, Knuth–Morris–Pratt.
fn search_kmp(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() {
        return Vec::new();
    }
    let lps = prefix_function(pattern);
    let mut hits = Vec::new();
    let mut j = 0;
    for (i, &c) in text.iter().enumerate() {
        while j > 0 && c != pattern[j] {
            j = lps[j - 1];
        }
        if c == pattern[j] {
            j += 1;
        }
        if j == pattern.len() {
            hits.push(i + 1 - j);
            j = lps[j - 1];
        }
    }
    hits
}

// ---------------------------------------------------------------------------
// Text generation
// ---------------------------------------------------------------------------

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// `len` letters drawn uniformly from the first `alphabet` letters.
    fn text(&mut self, len: usize, alphabet: u8) -> Vec<u8> {
        (0..len)
            .map(|_| b'a' + (self.next_u64() % alphabet as u64) as u8)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Experiments
// ---------------------------------------------------------------------------

struct Experiment {
    description: &'static str,
    /// Values of the varying parameter.
    steps: Vec<usize>,
    /// Build `(text, pattern)` for one parameter value.
    input: fn(&mut SimpleRng, usize) -> (Vec<u8>, Vec<u8>),
}

/// Scaled-down versions of the three classic trivial-vs-KMP workloads.
fn experiments() -> Vec<Experiment> {
    const TEXT_LEN: usize = 100_001;
    vec![
        Experiment {
            description: "Y=ab, random binary X of length 1000*k",
            steps: (1..=101).step_by(10).collect(),
            input: |rng, k| (rng.text(1000 * k, 2), b"ab".to_vec()),
        },
        Experiment {
            description: "Y=a^m, random binary X",
            steps: (1..=TEXT_LEN).step_by(10_000).collect(),
            input: |rng, m| (rng.text(TEXT_LEN, 2), vec![b'a'; m]),
        },
        Experiment {
            description: "Y=aaaaa, random binary X",
            steps: (1..=TEXT_LEN).step_by(10_000).collect(),
            input: |rng, _h| (rng.text(TEXT_LEN, 2), b"aaaaa".to_vec()),
        },
    ]
}

/// Time one search in seconds, returning the matches too.
fn timed(search: fn(&[u8], &[u8]) -> Vec<usize>, text: &[u8], pattern: &[u8]) -> (f64, Vec<usize>) {
    let start = Instant::now();
    let hits = search(text, pattern);
    (start.elapsed().as_secs_f64(), hits)
}

fn run_experiment(exp: &Experiment, rng: &mut SimpleRng) -> Result<String> {
    let mut log = String::from("k T1 T2\n");
    for &k in &exp.steps {
        let (text, pattern) = (exp.input)(rng, k);
        let (t1, trivial_hits) = timed(search_trivial, &text, &pattern);
        let (t2, kmp_hits) = timed(search_kmp, &text, &pattern);
        anyhow::ensure!(
            trivial_hits == kmp_hits,
            "searches disagree at k={k}: {} vs {} matches",
            trivial_hits.len(),
            kmp_hits.len()
        );
        log::debug!("k={k}: trivial {t1}s, kmp {t2}s, {} matches", kmp_hits.len());
        writeln!(log, "{k} {t1} {t2}")?;
    }
    Ok(log)
}

fn write_all(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let mut rng = SimpleRng::new(42);

    for (n, exp) in experiments().iter().enumerate() {
        println!("Running experiment {}: {}", n + 1, exp.description);
        let log = run_experiment(exp, &mut rng)?;
        let path = dir.join(format!("experiment_{}.txt", n + 1));
        std::fs::write(&path, log).with_context(|| format!("writing {}", path.display()))?;
        log::info!("Wrote {}", path.display());
        println!("Wrote {} rows to {}", exp.steps.len(), path.display());
    }
    Ok(())
}

/// One timing of both searches on caller-supplied strings.
struct CustomRun {
    trivial_secs: f64,
    kmp_secs: f64,
    matches: usize,
}

fn run_custom(text: &str, pattern: &str) -> Result<CustomRun> {
    if pattern.is_empty() {
        bail!("pattern must not be empty");
    }
    let (trivial_secs, trivial_hits) = timed(search_trivial, text.as_bytes(), pattern.as_bytes());
    let (kmp_secs, kmp_hits) = timed(search_kmp, text.as_bytes(), pattern.as_bytes());
    anyhow::ensure!(trivial_hits == kmp_hits, "searches disagree on {pattern:?}");
    Ok(CustomRun {
        trivial_secs,
        kmp_secs,
        matches: kmp_hits.len(),
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.as_slice() {
        [mode, text, pattern] if mode == "custom" => {
            let run = run_custom(text, pattern)?;
            println!("Matches: {}", run.matches);
            println!("Trivial Algorithm Time: {} seconds", run.trivial_secs);
            println!("KMP Algorithm Time: {} seconds", run.kmp_secs);
            Ok(())
        }
        [mode, ..] if mode == "custom" => bail!("usage: generate_sample custom <text> <pattern>"),
        [dir] => write_all(Path::new(dir)),
        [] => {
            let config = Config::load(Path::new(CONFIG_FILE))?;
            write_all(&config.input_dir)
        }
        _ => bail!("usage: generate_sample [output_dir] | custom <text> <pattern>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn searches_agree() {
        let mut rng = SimpleRng::new(7);
        let patterns: [&[u8]; 5] = [b"a", b"ab", b"aba", b"aaaaa", b"babab"];
        for pattern in patterns {
            let text = rng.text(2_000, 2);
            assert_eq!(search_trivial(&text, pattern), search_kmp(&text, pattern));
        }
    }

    #[test]
    fn overlapping_matches() {
        assert_eq!(search_kmp(b"aaaa", b"aa"), vec![0, 1, 2]);
        assert_eq!(search_trivial(b"abababa", b"aba"), vec![0, 2, 4]);
        assert_eq!(search_kmp(b"abababa", b"aba"), vec![0, 2, 4]);
    }

    #[test]
    fn degenerate_patterns() {
        assert!(search_kmp(b"abc", b"").is_empty());
        assert!(search_trivial(b"ab", b"abc").is_empty());
        assert!(search_kmp(b"ab", b"abc").is_empty());
    }

    #[test]
    fn three_workloads() {
        let exps = experiments();
        assert_eq!(exps.len(), 3);
        assert!(exps.iter().all(|e| !e.steps.is_empty()));
    }

    #[test]
    fn custom_run_counts_matches() {
        let run = run_custom("abababa", "aba").unwrap();
        assert_eq!(run.matches, 3);
        assert!(run.trivial_secs >= 0.0 && run.kmp_secs >= 0.0);

        assert_eq!(run_custom("abc", "zz").unwrap().matches, 0);
        assert!(run_custom("abc", "").is_err());
    }

    #[test]
    fn prefix_function_values() {
        assert_eq!(prefix_function(b"aabaaab"), vec![0, 1, 0, 1, 2, 2, 3]);
    }

    #[test]
    fn log_has_header_and_one_line_per_step() {
        let exp = Experiment {
            description: "tiny",
            steps: vec![1, 2, 3],
            input: |rng, k| (rng.text(50 * k, 2), b"ab".to_vec()),
        };
        let log = run_experiment(&exp, &mut SimpleRng::new(1)).unwrap();
        let lines: Vec<&str> = log.lines().collect();
        assert_eq!(lines[0], "k T1 T2");
        assert_eq!(lines.len(), 4);
        for (line, k) in lines[1..].iter().zip(1..) {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            assert_eq!(tokens.len(), 3);
            assert_eq!(tokens[0].parse::<i64>().unwrap(), k);
            assert!(tokens[1].parse::<f64>().unwrap() >= 0.0);
        }
    }
}
