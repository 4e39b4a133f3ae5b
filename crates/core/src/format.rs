//! Small display helpers shared by the quiz and the page enhancements.

/// Abbreviate large numbers: `2_500_000` → `2.5M`, `1_500` → `1.5K`, `500` → `500`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value >= 1_000_000.0 {
        return format!("{:.1}M", value / 1_000_000.0);
    }
    if value >= 1_000.0 {
        return format!("{:.1}K", value / 1_000.0);
    }
    format!("{value}")
}

/// Running quiz timer, always `M:SS`.
#[must_use]
pub fn format_timer(seconds: u64) -> String {
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    format!("{minutes}:{remainder:02}")
}

/// Completion time on the results screen: `Ns` under a minute, `M:SS` otherwise.
#[must_use]
pub fn format_completion_time(seconds: u64) -> String {
    if seconds < 60 {
        return format!("{seconds}s");
    }
    format_timer(seconds)
}

/// Page name from a URL path: last segment without `.html`, `index` when empty.
#[must_use]
pub fn current_page(path: &str) -> String {
    let last = path.rsplit('/').next().unwrap_or_default();
    let page = if last.is_empty() { "index" } else { last };
    page.replace(".html", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_abbreviation() {
        assert_eq!(format_number(500.0), "500");
        assert_eq!(format_number(1_500.0), "1.5K");
        assert_eq!(format_number(2_500_000.0), "2.5M");
        assert_eq!(format_number(1_000.0), "1.0K");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(12.5), "12.5");
    }

    #[test]
    fn timer_pads_seconds() {
        assert_eq!(format_timer(0), "0:00");
        assert_eq!(format_timer(42), "0:42");
        assert_eq!(format_timer(125), "2:05");
    }

    #[test]
    fn completion_time_switches_at_one_minute() {
        assert_eq!(format_completion_time(0), "0s");
        assert_eq!(format_completion_time(42), "42s");
        assert_eq!(format_completion_time(59), "59s");
        assert_eq!(format_completion_time(60), "1:00");
        assert_eq!(format_completion_time(601), "10:01");
    }

    #[test]
    fn page_name_from_path() {
        assert_eq!(current_page("/"), "index");
        assert_eq!(current_page(""), "index");
        assert_eq!(current_page("/quiz"), "quiz");
        assert_eq!(current_page("/static/info.html"), "info");
    }
}
