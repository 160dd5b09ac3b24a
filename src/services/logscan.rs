use crate::domain::constants::{LOG_FILE, LOG_PATTERN};
use crate::domain::models::{LogMatch, LogScan};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::VecDeque;
use std::path::Path;

static KEYWORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(LOG_PATTERN).expect("Invalid LOG_PATTERN pattern"));

// `--tail` is user input; only this much is reserved up front.
const MAX_PREALLOCATED: usize = 64;

pub fn scan_log_in(dir: &Path, limit: usize) -> LogScan {
    scan_log(&dir.join(LOG_FILE), limit)
}

/// Best-effort: a missing or unreadable log never fails the run.
pub fn scan_log(path: &Path, limit: usize) -> LogScan {
    if !path.exists() {
        log::debug!("no log file at {}", path.display());
        return LogScan::Skipped {
            path: path.to_path_buf(),
        };
    }
    let raw = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            log::warn!("could not read {}: {}", path.display(), e);
            return LogScan::Unreadable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            };
        }
    };
    LogScan::Matches {
        path: path.to_path_buf(),
        lines: last_matches(&String::from_utf8_lossy(&raw), limit),
    }
}

pub fn last_matches(content: &str, limit: usize) -> Vec<LogMatch> {
    if limit == 0 {
        return Vec::new();
    }
    let mut window = VecDeque::with_capacity(limit.min(MAX_PREALLOCATED));
    for (idx, line) in content.lines().enumerate() {
        if !KEYWORD_REGEX.is_match(line) {
            continue;
        }
        if window.len() == limit {
            window.pop_front();
        }
        window.push_back(LogMatch {
            line_number: idx + 1,
            text: line.to_string(),
        });
    }
    window.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::{last_matches, scan_log};
    use crate::domain::models::LogScan;

    #[test]
    fn keeps_last_matches_in_order_with_line_numbers() {
        let content = "start\nHASH one\nnoise\nfingerprint two\nhash three\nx\nFingerPrint four\nhash five\nhash six\n";
        let got = last_matches(content, 5);
        let nums: Vec<usize> = got.iter().map(|m| m.line_number).collect();
        assert_eq!(nums, vec![4, 5, 7, 8, 9]);
        assert_eq!(got[0].text, "fingerprint two");
        assert_eq!(got[4].text, "hash six");
    }

    #[test]
    fn fewer_matches_than_limit() {
        let got = last_matches("a\nsha hash\nb\n", 5);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].line_number, 2);
    }

    #[test]
    fn no_matches_is_empty() {
        assert!(last_matches("alpha\nbeta\n", 5).is_empty());
        assert!(last_matches("hash\n", 0).is_empty());
    }

    #[test]
    fn huge_limit_keeps_every_match() {
        let got = last_matches("hash a\nx\nhash b\n", usize::MAX);
        let nums: Vec<usize> = got.iter().map(|m| m.line_number).collect();
        assert_eq!(nums, vec![1, 3]);
    }

    #[test]
    fn missing_log_is_skipped() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("DB_Commit.log");
        assert_eq!(scan_log(&path, 5), LogScan::Skipped { path });
    }

    #[test]
    fn invalid_utf8_is_tolerated() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("DB_Commit.log");
        std::fs::write(&path, b"\xff\xfe hash here\nplain\n").unwrap();
        match scan_log(&path, 5) {
            LogScan::Matches { lines, .. } => {
                assert_eq!(lines.len(), 1);
                assert_eq!(lines[0].line_number, 1);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn unreadable_log_is_reported_not_fatal() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("DB_Commit.log");
        std::fs::create_dir(&path).unwrap();
        assert!(matches!(scan_log(&path, 5), LogScan::Unreadable { .. }));
    }
}
