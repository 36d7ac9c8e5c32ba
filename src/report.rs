//! Rendering and persistence for analysis reports.
//!
//! Holds no analytic logic: analyzers hand over finished lines, this
//! module draws banners, joins sections, and writes text files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

/// Width of the `=`/`-` rules used throughout the text output.
pub const RULE_WIDTH: usize = 60;

/// One titled block of report lines.
pub struct Section {
    pub title: String,
    pub lines: Vec<String>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn push_blank(&mut self) {
        self.lines.push(String::new());
    }

    fn render(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = format!("{rule}\n{}\n{rule}\n", self.title);
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// An ordered collection of sections rendered as one text document.
pub struct Report {
    sections: Vec<Section>,
}

impl Report {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn render(&self) -> String {
        let rendered: Vec<String> = self.sections.iter().map(Section::render).collect();
        rendered.join("\n")
    }
}

/// Writes report text to `path`, creating parent directories and
/// overwriting any previous file.
pub fn export(text: &str, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)?;
    Ok(path.to_path_buf())
}

/// Formats an integer with comma thousands separators.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Signed variant of [`group_thousands`] for quantities that can go
/// negative, like a capacity gap when beds exceed need.
pub fn group_thousands_signed(n: i64) -> String {
    if n < 0 {
        format!("-{}", group_thousands(n.unsigned_abs()))
    } else {
        group_thousands(n as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1220), "1,220");
        assert_eq!(group_thousands(2594), "2,594");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_group_thousands_signed() {
        assert_eq!(group_thousands_signed(-1374), "-1,374");
        assert_eq!(group_thousands_signed(1374), "1,374");
    }

    #[test]
    fn test_section_render_has_banner() {
        let mut section = Section::new("CAPACITY ANALYSIS");
        section.push("Total: 5");

        let text = section.render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "=".repeat(RULE_WIDTH));
        assert_eq!(lines[1], "CAPACITY ANALYSIS");
        assert_eq!(lines[2], "=".repeat(RULE_WIDTH));
        assert_eq!(lines[3], "Total: 5");
    }

    #[test]
    fn test_report_joins_sections_with_blank_line() {
        let report = Report::new(vec![Section::new("ONE"), Section::new("TWO")]);
        let text = report.render();
        assert!(text.contains("ONE"));
        assert!(text.contains("\n\n="));
    }

    #[test]
    fn test_export_creates_parents_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.txt");

        export("first", &path).unwrap();
        export("second", &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }
}
