use crate::domain::{ServiceReport, ServiceStatus, StatusCategory};
use colored::{ColoredString, Colorize};
use std::io::{self, Write};
use std::path::Path;

const RULE_WIDTH: usize = 44;
const NAME_WIDTH: usize = 22;

pub fn icon(category: StatusCategory) -> &'static str {
    match category {
        StatusCategory::Running => "🟢",
        StatusCategory::Stopped => "🔴",
        StatusCategory::Created => "🟦",
        StatusCategory::NotCreated => "⚪",
        StatusCategory::Unknown => "🟡",
    }
}

fn paint(category: StatusCategory, text: &str) -> ColoredString {
    match category {
        StatusCategory::Running => text.bright_green(),
        StatusCategory::Stopped => text.bright_red(),
        StatusCategory::Created => text.bright_cyan(),
        StatusCategory::NotCreated | StatusCategory::Unknown => text.yellow(),
    }
}

fn rule() -> ColoredString {
    "─".repeat(RULE_WIDTH).bright_magenta()
}

fn service_line(status: &ServiceStatus) -> String {
    let name = format!("  {:<width$}", status.name, width = NAME_WIDTH);
    format!(
        "{} {} {}",
        name.bold().bright_cyan(),
        paint(status.category, icon(status.category)),
        paint(status.category, status.display_state())
    )
}

/// Writes the status report for `compose_file`.
///
/// Layout: title, rule, one line per service, rule, summary, tip.
///
/// `query_command` is suggested in the closing tip, prefixed by a `cd` into
/// the compose file's directory.
pub fn render<W: Write>(
    out: &mut W,
    report: &ServiceReport,
    compose_file: &Path,
    query_command: &str,
) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        "Docker Compose Status".bold().bright_blue(),
        format!("(from {})", compose_file.display()).bright_cyan()
    )?;
    writeln!(out, "{}", rule())?;

    for status in report.entries() {
        writeln!(out, "{}", service_line(status))?;
    }

    writeln!(out, "{}", rule())?;
    writeln!(out, "{}", report.summary().bold())?;

    let dir = crate::services::project_dir(compose_file);
    writeln!(
        out,
        "{} Run 'cd {} && {}' for full details.",
        "Tip:".bold().bright_cyan(),
        dir.display(),
        query_command
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_plain(report: &ServiceReport) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        render(
            &mut out,
            report,
            Path::new("/srv/stack/compose.yaml"),
            "docker compose ps -a",
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_header_body_and_tip() {
        let report = ServiceReport::new(vec![
            ServiceStatus::new("web", StatusCategory::Running).with_raw_state("Up 1 hour"),
            ServiceStatus::new("db", StatusCategory::NotCreated),
        ]);

        let text = render_plain(&report);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(
            lines[0],
            "Docker Compose Status (from /srv/stack/compose.yaml)"
        );
        assert_eq!(lines[1], "─".repeat(RULE_WIDTH));
        assert_eq!(lines[2], format!("  {:<22} 🟢 running", "web"));
        assert_eq!(lines[3], format!("  {:<22} ⚪ not created", "db"));
        assert_eq!(lines[4], "─".repeat(RULE_WIDTH));
        assert_eq!(lines[5], "2 services: 1 running, 1 not created");
        assert_eq!(
            lines[6],
            "Tip: Run 'cd /srv/stack && docker compose ps -a' for full details."
        );
    }

    #[test]
    fn empty_report_has_no_body_lines() {
        let text = render_plain(&ServiceReport::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], lines[2]);
        assert_eq!(lines[3], "0 services");
    }

    #[test]
    fn unknown_state_is_shown_verbatim() {
        let report = ServiceReport::new(vec![
            ServiceStatus::new("worker", StatusCategory::Unknown).with_raw_state("Paused"),
        ]);

        let text = render_plain(&report);
        assert!(text.contains("🟡 Paused"));
    }

    #[test]
    fn every_category_has_distinct_icon() {
        let icons: std::collections::HashSet<&str> = [
            StatusCategory::Running,
            StatusCategory::Stopped,
            StatusCategory::Created,
            StatusCategory::NotCreated,
            StatusCategory::Unknown,
        ]
        .into_iter()
        .map(icon)
        .collect();

        assert_eq!(icons.len(), 5);
    }
}
