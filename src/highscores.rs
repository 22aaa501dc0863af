//! Score file
//!
//! Plain-text log with one score per line. Each session appends its score;
//! the high score is the largest value in the file.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Default score file name, relative to the working directory
pub const DEFAULT_SCORE_FILE: &str = "highscores.txt";

/// Current session score plus the best recorded score
#[derive(Debug, Clone)]
pub struct ScoreBook {
    path: PathBuf,
    current: u64,
    high: u64,
}

impl ScoreBook {
    /// Open a score file, scanning it for the high score.
    /// A missing file counts as empty.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let high = match fs::read_to_string(&path) {
            Ok(text) => scan_max(&text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => 0,
            Err(e) => return Err(e),
        };
        log::info!("High score {} from {}", high, path.display());
        Ok(Self {
            path,
            current: 0,
            high,
        })
    }

    pub fn increment(&mut self) {
        self.current += 1;
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    /// Best score on file when the book was opened
    pub fn high_score(&self) -> u64 {
        self.high
    }

    /// Append the current score to the file
    pub fn save(&self) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", self.current)?;
        log::info!("Score {} saved to {}", self.current, self.path.display());
        Ok(())
    }
}

/// Largest integer in whitespace-separated text, floored at 0.
/// Reading stops at the first token that is not an integer.
pub fn scan_max(text: &str) -> u64 {
    text.split_whitespace()
        .map_while(|tok| tok.parse::<i64>().ok())
        .fold(0, |best, score| best.max(score.max(0) as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "flick_arena_{}_{}.txt",
            name,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn test_scan_max() {
        assert_eq!(scan_max(""), 0);
        assert_eq!(scan_max("3\n17\n5\n"), 17);
        assert_eq!(scan_max("-4 -2"), 0);
        assert_eq!(scan_max("4 9 oops 30"), 9);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let path = temp_path("missing");
        let book = ScoreBook::open(&path).unwrap();
        assert_eq!(book.high_score(), 0);
        assert_eq!(book.current(), 0);
    }

    #[test]
    fn test_save_appends_and_reopen_sees_high() {
        let path = temp_path("append");

        let mut book = ScoreBook::open(&path).unwrap();
        for _ in 0..7 {
            book.increment();
        }
        book.save().unwrap();

        let mut book = ScoreBook::open(&path).unwrap();
        assert_eq!(book.high_score(), 7);
        book.increment();
        book.save().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "7\n1\n");
        assert_eq!(ScoreBook::open(&path).unwrap().high_score(), 7);
        let _ = fs::remove_file(&path);
    }
}
