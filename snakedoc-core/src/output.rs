use crate::apply::CopyRecord;
use crate::scanner::{Collision, CopyOp};
use nu_ansi_term::{Color as AnsiColor, Style};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;
use std::str::FromStr;

/// Separator between source and destination in progress lines
pub const ARROW: &str = "---->";

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summary" => Ok(Self::Summary),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Result of a copy run
#[derive(Debug, Serialize, Deserialize)]
pub struct RunResult {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub dry_run: bool,
    pub copies: Vec<CopyRecord>,
    pub collisions: Vec<Collision>,
}

impl RunResult {
    pub fn copied(&self) -> usize {
        self.copies.len()
    }
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String;
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for RunResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "copy",
            "dry_run": self.dry_run,
            "source": self.source,
            "destination": self.destination,
            "summary": {
                "copied": self.copied(),
                "collisions": self.collisions.len(),
            },
            "copies": self.copies,
            "collisions": self.collisions,
        }))
        .expect("RunResult serializes")
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        let verb = if self.dry_run { "Would copy" } else { "Copied" };
        writeln!(
            output,
            "{} {} files from {} to {}",
            verb,
            self.copied(),
            self.source.display(),
            self.destination.display()
        )
        .unwrap();

        for collision in &self.collisions {
            writeln!(
                output,
                "⚠ {} files map to {}",
                collision.sources.len(),
                collision.destination.display()
            )
            .unwrap();
        }

        output
    }
}

/// `<source>----><destination>`, the line printed for every copy.
pub fn progress_line(op: &CopyOp) -> String {
    format!(
        "{}{}{}",
        op.source.display(),
        ARROW,
        op.destination.display()
    )
}

pub fn render_progress_line(op: &CopyOp, use_color: bool) -> String {
    if !use_color {
        return progress_line(op);
    }

    format!(
        "{}{}{}",
        Style::new().dimmed().paint(op.source.display().to_string()),
        ARROW,
        AnsiColor::Green.paint(op.destination.display().to_string())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(dry_run: bool) -> RunResult {
        RunResult {
            source: PathBuf::from("userguide"),
            destination: PathBuf::from("foo"),
            dry_run,
            copies: vec![CopyRecord {
                source: PathBuf::from("userguide/MyPage.adoc"),
                destination: PathBuf::from("foo/my_page.adoc"),
                bytes: 12,
            }],
            collisions: vec![],
        }
    }

    #[test]
    fn test_progress_line_format() {
        let op = CopyOp {
            source: PathBuf::from("userguide").join("MyPage.adoc"),
            destination: PathBuf::from("foo").join("my_page.adoc"),
        };
        let expected = format!(
            "{}---->{}",
            PathBuf::from("userguide").join("MyPage.adoc").display(),
            PathBuf::from("foo").join("my_page.adoc").display()
        );
        assert_eq!(progress_line(&op), expected);
        assert_eq!(render_progress_line(&op, false), expected);
    }

    #[test]
    fn test_colored_progress_line_keeps_text() {
        let op = CopyOp {
            source: PathBuf::from("a.adoc"),
            destination: PathBuf::from("b.adoc"),
        };
        let line = render_progress_line(&op, true);
        assert!(line.contains("\u{1b}["));
        assert!(line.contains("a.adoc"));
        assert!(line.contains("---->"));
        assert!(line.contains("b.adoc"));
    }

    #[test]
    fn test_run_result_json_format() {
        let json = sample(false).format_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["operation"], "copy");
        assert_eq!(value["dry_run"], false);
        assert_eq!(value["summary"]["copied"], 1);
        assert_eq!(value["summary"]["collisions"], 0);
        assert_eq!(value["copies"][0]["bytes"], 12);
    }

    #[test]
    fn test_run_result_summary_dry_run() {
        let summary = sample(true).format(OutputFormat::Summary);
        assert!(summary.starts_with("Would copy 1 files from userguide to foo"));
    }

    #[test]
    fn test_summary_lists_collisions() {
        let mut result = sample(false);
        result.collisions.push(Collision {
            destination: PathBuf::from("foo/my_page.adoc"),
            sources: vec![
                PathBuf::from("userguide/MyPage.adoc"),
                PathBuf::from("userguide/old/MyPage.adoc"),
            ],
        });

        let summary = result.format_summary();
        assert!(summary.contains("⚠ 2 files map to foo/my_page.adoc"));
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("Summary".parse::<OutputFormat>(), Ok(OutputFormat::Summary));
        assert!("table".parse::<OutputFormat>().is_err());
    }
}
