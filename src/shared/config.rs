//! Application configuration. Delays, judge selection, report destinations.

use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_REPORTS_DIR: &str = "./reports";

/// Which ItemJudge adapter evaluates deliverables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JudgeKind {
    /// Deterministic keyword rules (default).
    Keyword,
    /// Seeded random draws, for demos.
    Random,
}

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Where saved reports go. Read from VIVI_REPORTS_DIR.
    #[serde(default)]
    pub reports_dir: Option<String>,

    /// Fixed pause after extracting all files. Read from VIVI_EXTRACTION_DELAY_MS.
    #[serde(default)]
    pub extraction_delay_ms: Option<u64>,

    /// Pause per checklist section. Read from VIVI_SECTION_DELAY_MS.
    #[serde(default)]
    pub section_delay_ms: Option<u64>,

    /// Assistant reply delay bounds, [min, max). Read from VIVI_REPLY_DELAY_MIN_MS / _MAX_MS.
    #[serde(default)]
    pub reply_delay_min_ms: Option<u64>,
    #[serde(default)]
    pub reply_delay_max_ms: Option<u64>,

    /// Window in which repeated context messages are suppressed. Read from VIVI_DEDUP_WINDOW_SECS.
    #[serde(default)]
    pub dedup_window_secs: Option<u64>,

    // ─────────────────────────────────────────────────────────────────────────
    // Evaluation
    // ─────────────────────────────────────────────────────────────────────────
    /// "keyword" (default) or "random". Read from VIVI_JUDGE.
    #[serde(default)]
    pub judge: Option<String>,

    /// Seed for the random judge and the assistant's RNG. Read from VIVI_JUDGE_SEED.
    #[serde(default)]
    pub judge_seed: Option<u64>,

    /// Questions an item must satisfy to be approved by the keyword judge.
    #[serde(default)]
    pub min_satisfied_questions: Option<usize>,

    /// Recipient for emailed reports. Read from VIVI_REPORT_EMAIL.
    #[serde(default)]
    pub report_email: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("VIVI"));
        if let Ok(path) = std::env::var("VIVI_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    pub fn reports_dir_or_default(&self) -> String {
        self.reports_dir
            .clone()
            .unwrap_or_else(|| DEFAULT_REPORTS_DIR.to_string())
    }

    /// Defaults to 1000 ms.
    pub fn extraction_delay(&self) -> Duration {
        Duration::from_millis(self.extraction_delay_ms.unwrap_or(1000))
    }

    /// Defaults to 1500 ms.
    pub fn section_delay(&self) -> Duration {
        Duration::from_millis(self.section_delay_ms.unwrap_or(1500))
    }

    /// Defaults to [1000, 3000) ms. A max below min collapses to min.
    pub fn reply_delay_bounds(&self) -> (Duration, Duration) {
        let min = self.reply_delay_min_ms.unwrap_or(1000);
        let max = self.reply_delay_max_ms.unwrap_or(3000).max(min);
        (Duration::from_millis(min), Duration::from_millis(max))
    }

    /// Defaults to 5 s.
    pub fn dedup_window(&self) -> Duration {
        Duration::from_secs(self.dedup_window_secs.unwrap_or(5))
    }

    /// Unknown values fall back to the keyword judge.
    pub fn judge_kind(&self) -> JudgeKind {
        match self.judge.as_deref().map(str::to_ascii_lowercase).as_deref() {
            Some("random") | Some("seeded") => JudgeKind::Random,
            _ => JudgeKind::Keyword,
        }
    }

    /// Defaults to 2. At least 1, so an item with no matching question is never approved.
    pub fn min_satisfied_or_default(&self) -> usize {
        self.min_satisfied_questions.unwrap_or(2).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.reports_dir_or_default(), "./reports");
        assert_eq!(cfg.extraction_delay(), Duration::from_millis(1000));
        assert_eq!(cfg.section_delay(), Duration::from_millis(1500));
        assert_eq!(
            cfg.reply_delay_bounds(),
            (Duration::from_millis(1000), Duration::from_millis(3000))
        );
        assert_eq!(cfg.dedup_window(), Duration::from_secs(5));
        assert_eq!(cfg.judge_kind(), JudgeKind::Keyword);
        assert_eq!(cfg.min_satisfied_or_default(), 2);
    }

    #[test]
    fn test_judge_kind_parsing() {
        let cfg = AppConfig {
            judge: Some("Random".into()),
            ..AppConfig::default()
        };
        assert_eq!(cfg.judge_kind(), JudgeKind::Random);
        let cfg = AppConfig {
            judge: Some("llm".into()),
            ..AppConfig::default()
        };
        assert_eq!(cfg.judge_kind(), JudgeKind::Keyword);
    }

    #[test]
    fn test_inverted_reply_bounds() {
        let cfg = AppConfig {
            reply_delay_min_ms: Some(2000),
            reply_delay_max_ms: Some(500),
            ..AppConfig::default()
        };
        let (min, max) = cfg.reply_delay_bounds();
        assert_eq!(min, max);
    }

    #[test]
    fn test_min_satisfied_zero_is_raised_to_one() {
        let cfg = AppConfig {
            min_satisfied_questions: Some(0),
            ..AppConfig::default()
        };
        assert_eq!(cfg.min_satisfied_or_default(), 1);
    }
}
