//! High score leaderboard
//!
//! Persisted as a plain text file, one score per line, top 5 kept. File
//! trouble is never fatal: malformed lines are skipped on load, and a failed
//! save is logged and swallowed.

use std::fs;
use std::path::PathBuf;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 5;

/// High score leaderboard, sorted descending
#[derive(Debug, Clone, Default)]
pub struct HighScores {
    pub scores: Vec<u64>,
    path: Option<PathBuf>,
}

impl HighScores {
    /// In-memory leaderboard with no backing file (tests, headless runs)
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a flat file. Lines that aren't a score are skipped
    /// individually; a missing file just means an empty board.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut scores = Vec::new();
        match fs::read_to_string(&path) {
            Ok(contents) => {
                for line in contents.lines() {
                    // Tolerate separators and stray characters, like "1,234"
                    let digits: String =
                        line.chars().filter(|c| c.is_ascii_digit()).collect();
                    if digits.is_empty() {
                        continue;
                    }
                    match digits.parse::<u64>() {
                        Ok(score) => scores.push(score),
                        Err(err) => {
                            log::debug!("Skipping score line {line:?}: {err}");
                        }
                    }
                }
                log::info!("Loaded {} high scores", scores.len());
            }
            Err(err) => {
                log::info!("No high scores at {}: {err}", path.display());
            }
        }
        scores.sort_unstable_by(|a, b| b.cmp(a));
        scores.truncate(MAX_HIGH_SCORES);
        Self {
            scores,
            path: Some(path),
        }
    }

    /// Write the list back out; failure is logged and swallowed.
    pub fn save(&self) {
        let Some(path) = &self.path else { return };
        let mut out = String::new();
        for score in &self.scores {
            out.push_str(&score.to_string());
            out.push('\n');
        }
        match fs::write(path, out) {
            Ok(()) => log::info!("High scores saved ({} entries)", self.scores.len()),
            Err(err) => {
                log::error!("Failed to save high scores to {}: {err}", path.display());
            }
        }
    }

    /// Check if a score would make the board
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        self.scores.len() < MAX_HIGH_SCORES
            || self.scores.last().map(|&s| score > s).unwrap_or(true)
    }

    /// Append, sort descending, keep the top 5, persist.
    /// Returns the rank achieved (1-indexed) when the score made the cut.
    pub fn update(&mut self, new_score: u64) -> Option<usize> {
        self.scores.push(new_score);
        self.scores.sort_unstable_by(|a, b| b.cmp(a));
        self.scores.truncate(MAX_HIGH_SCORES);
        self.save();
        self.scores.iter().position(|&s| s == new_score).map(|i| i + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.scores.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("asteroid_dodger_{}_{name}", std::process::id()))
    }

    fn cleanup(path: &Path) {
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_load_skips_malformed_lines() {
        let path = temp_path("malformed");
        fs::write(&path, "100\n\nnot a score\n2,500\n  42  \n-7\n").unwrap();

        let scores = HighScores::load(&path);
        // "not a score" has no digits; "2,500" and "  42  " and "-7" survive
        assert_eq!(scores.scores, vec![2500, 100, 42, 7]);
        cleanup(&path);
    }

    #[test]
    fn test_missing_file_is_empty_board() {
        let scores = HighScores::load(temp_path("does_not_exist"));
        assert!(scores.is_empty());
        assert_eq!(scores.top_score(), None);
    }

    #[test]
    fn test_update_keeps_top_five_descending() {
        let mut scores = HighScores::new();
        for s in [10, 50, 30, 20, 40] {
            scores.update(s);
        }
        assert_eq!(scores.scores, vec![50, 40, 30, 20, 10]);

        // A better score pushes the lowest out
        assert_eq!(scores.update(35), Some(3));
        assert_eq!(scores.scores, vec![50, 40, 35, 30, 20]);

        // A worse score is truncated away
        assert_eq!(scores.update(5), None);
        assert_eq!(scores.scores.len(), MAX_HIGH_SCORES);
    }

    #[test]
    fn test_roundtrip_through_file() {
        let path = temp_path("roundtrip");
        cleanup(&path);

        let mut scores = HighScores::load(&path);
        scores.update(120);
        scores.update(90);
        scores.update(300);

        let reloaded = HighScores::load(&path);
        assert_eq!(reloaded.scores, vec![300, 120, 90]);
        cleanup(&path);
    }

    #[test]
    fn test_qualifies() {
        let mut scores = HighScores::new();
        assert!(!scores.qualifies(0));
        assert!(scores.qualifies(1));
        for s in [100, 200, 300, 400, 500] {
            scores.update(s);
        }
        assert!(!scores.qualifies(50));
        assert!(scores.qualifies(150));
    }
}
