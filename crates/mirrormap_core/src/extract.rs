//! Usage extraction from mirror stats pages.
//!
//! Stats endpoints serve loosely structured plaintext (vnstat-style dumps).
//! Two independent line-scanning passes pull the cumulative and daily usage
//! figures; anything that does not match degrades to `None`, never an error.

/// Usage figures pulled from one stats body. Either field may be missing
/// independently of the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageFields {
    pub total: Option<String>,
    pub daily: Option<String>,
}

impl UsageFields {
    /// Run both extraction passes over one response body.
    pub fn from_text(text: &str) -> Self {
        Self {
            total: extract_total(text),
            daily: extract_daily(text),
        }
    }
}

/// Cumulative usage: the first line containing the literal token `total:`,
/// taking everything after its first occurrence, trimmed. An empty remainder
/// stays `Some("")`; only a missing line yields `None`.
pub fn extract_total(text: &str) -> Option<String> {
    for line in text.lines() {
        if let Some((_, rest)) = line.split_once("total:") {
            return Some(rest.trim().to_string());
        }
    }
    None
}

/// Daily usage: find the first line containing `daily` (case-insensitive),
/// then from that line onward the first line containing `today`
/// (case-insensitive). That line is pipe-delimited; with more than two
/// fields the second-to-last one is the figure. Later `daily` sections are
/// never considered.
pub fn extract_daily(text: &str) -> Option<String> {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines
        .iter()
        .position(|line| line.to_lowercase().contains("daily"))?;
    let today = lines[start..]
        .iter()
        .find(|line| line.to_lowercase().contains("today"))?;
    let parts: Vec<&str> = today.split('|').collect();
    if parts.len() > 2 {
        Some(parts[parts.len() - 2].trim().to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trimmed-down vnstat monthly/daily dump as served by the mirrors.
    const STATS_BODY: &str = r#" eth0  /  monthly

        month        rx      |     tx      |    total    |   avg. rate
     ------------------------+-------------+-------------+---------------
       2026-07    682.1 GiB  |   12.4 TiB  |   13.1 TiB  |   42.1 Mbit/s
     ------------------------+-------------+-------------+---------------
     estimated    total: 13.9 TiB

 eth0  /  daily

         day         rx      |     tx      |    total    |   avg. rate
     ------------------------+-------------+-------------+---------------
     yesterday     24.1 GiB  |  410.5 GiB  |  434.6 GiB  |   41.9 Mbit/s
         today     11.8 GiB  |  190.2 GiB  |  202.0 GiB  |   44.0 Mbit/s
"#;

    #[test]
    fn test_total_from_stats_body() {
        assert_eq!(extract_total(STATS_BODY), Some("13.9 TiB".to_string()));
    }

    #[test]
    fn test_total_simple_line() {
        assert_eq!(
            extract_total("foo\ntotal: 42GB\nbar"),
            Some("42GB".to_string())
        );
    }

    #[test]
    fn test_total_missing() {
        assert_eq!(extract_total("no usage figures here"), None);
    }

    #[test]
    fn test_total_first_match_wins() {
        let text = "total: 1GB\ntotal: 2GB";
        assert_eq!(extract_total(text), Some("1GB".to_string()));
    }

    #[test]
    fn test_total_takes_everything_after_first_token() {
        // Token appearing twice on one line: the remainder keeps the second.
        let text = "grand total: 5GB total: 6GB";
        assert_eq!(extract_total(text), Some("5GB total: 6GB".to_string()));
    }

    #[test]
    fn test_total_empty_remainder_is_present_but_empty() {
        // Distinct from a missing line: the field exists but holds nothing.
        assert_eq!(extract_total("total:   "), Some(String::new()));
    }

    #[test]
    fn test_daily_second_to_last_pipe_field() {
        let text = "header\ndaily stats\nnoise\ntoday | x | y | 3GB | z\n";
        assert_eq!(extract_daily(text), Some("3GB".to_string()));
    }

    #[test]
    fn test_daily_from_stats_body() {
        // "yesterday" does not contain "today"; the real today row wins, and
        // the second-to-last pipe field is the day's total column.
        assert_eq!(extract_daily(STATS_BODY), Some("202.0 GiB".to_string()));
    }

    #[test]
    fn test_daily_case_insensitive() {
        let text = "DAILY TRAFFIC\nTODAY | 1 | 2 | 7GB | 4";
        assert_eq!(extract_daily(text), Some("7GB".to_string()));
    }

    #[test]
    fn test_daily_without_today_line() {
        assert_eq!(extract_daily("daily stats\nnothing else"), None);
    }

    #[test]
    fn test_daily_today_before_daily_marker_is_ignored() {
        // The today scan starts at the daily marker, not at the top.
        let text = "today | a | b | 1GB | c\nno marker after this";
        assert_eq!(extract_daily(text), None);
    }

    #[test]
    fn test_daily_today_on_marker_line_counts() {
        // The scan is inclusive of the daily line itself.
        let text = "daily today | a | b | 9GB | c";
        assert_eq!(extract_daily(text), Some("9GB".to_string()));
    }

    #[test]
    fn test_daily_too_few_pipe_fields() {
        assert_eq!(extract_daily("daily\ntoday | 5GB"), None);
        assert_eq!(extract_daily("daily\ntoday 5GB"), None);
    }

    #[test]
    fn test_today_scan_runs_on_from_first_daily_marker() {
        // The scan anchors at the first daily marker and keeps going until a
        // today row turns up, even across a later section boundary.
        let text = "daily (stale)\nend of section\n\ndaily\ntoday | 1 | 2GB | 3";
        assert_eq!(extract_daily(text), Some("2GB".to_string()));
    }

    #[test]
    fn test_empty_body_yields_nothing() {
        let fields = UsageFields::from_text("");
        assert_eq!(fields, UsageFields::default());
    }

    #[test]
    fn test_fields_are_independent() {
        let fields = UsageFields::from_text("total: 9TB\nno daily block");
        assert_eq!(fields.total, Some("9TB".to_string()));
        assert_eq!(fields.daily, None);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let first = UsageFields::from_text(STATS_BODY);
        let second = UsageFields::from_text(STATS_BODY);
        assert_eq!(first, second);
    }
}
