//! Markdown wrapping and file naming for weekly reports.

use chrono::{DateTime, SecondsFormat, Utc};
use std::path::{Path, PathBuf};

use crate::Week;

/// Front matter, blank line, trimmed body, trailing newline.
pub fn wrap_as_markdown(week: Week, content: &str, generated: DateTime<Utc>) -> String {
    format!(
        "---\ntitle: \"Week {} – Weekly Report\"\ngenerated: \"{}\"\n---\n\n{}\n",
        week,
        generated.to_rfc3339_opts(SecondsFormat::Millis, true),
        content.trim()
    )
}

/// `<out_dir>/week-NN.md`
pub fn report_path(out_dir: &Path, week: Week) -> PathBuf {
    out_dir.join(format!("week-{}.md", week.padded()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_wrap_as_markdown() {
        let generated = Utc.with_ymd_and_hms(2025, 9, 16, 8, 30, 0).unwrap();
        let md = wrap_as_markdown(Week::new(2).unwrap(), "\n# Hello\n\n", generated);
        assert_eq!(
            md,
            "---\ntitle: \"Week 2 – Weekly Report\"\ngenerated: \"2025-09-16T08:30:00.000Z\"\n---\n\n# Hello\n"
        );
    }

    #[test]
    fn test_report_path_pads_week() {
        assert_eq!(
            report_path(Path::new("reports"), Week::new(7).unwrap()),
            PathBuf::from("reports/week-07.md")
        );
    }
}
