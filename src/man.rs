//! Troff man-page rendering.
//!
//! Produces the fixed isoforge.1 layout: `.TH` title line, NAME and
//! SYNOPSIS boilerplate, the extracted description, one `.TP` entry per
//! documented flag, and the FILES section. Rendering is pure; the caller
//! supplies the version string and the date stamp, so a given input
//! triple always yields the same bytes.

use crate::header::ScriptHeader;
use regex::Regex;
use std::sync::LazyLock;

/// Program name, also the token stripped out of the usage line.
const PROGRAM: &str = "isoforge";

const DEFAULT_USAGE: &str = "isoforge [options]";
const DEFAULT_DESCRIPTION: &str = "TUI for downloading and flashing ISOs to USB.";

/// Gap of two-or-more whitespace characters separating a flag from its
/// description in a captured parameter line.
static RE_GAP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

/// Render the complete man page for the extracted header.
pub fn render(header: &ScriptHeader, version: &str, date: &str) -> String {
    let usage = header.usage.as_deref().unwrap_or(DEFAULT_USAGE);
    let description = header.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION);

    let mut lines: Vec<String> = vec![
        format!(
            ".TH {} 1 \"{}\" \"{} {}\" \"User Commands\"",
            PROGRAM.to_uppercase(),
            date,
            PROGRAM,
            version
        ),
        ".SH NAME".to_string(),
        format!(
            "{} \\- TUI for downloading and flashing ISOs to USB, including Ventoy multi-ISO.",
            PROGRAM
        ),
        ".SH SYNOPSIS".to_string(),
        format!(".B {}", PROGRAM),
        usage.replace(PROGRAM, "").trim().to_string(),
        ".SH DESCRIPTION".to_string(),
        description.to_string(),
        ".SH OPTIONS".to_string(),
    ];

    if header.parameters.is_empty() {
        lines.push(".TP".to_string());
        lines.push("No documented options.".to_string());
    } else {
        for param in &header.parameters {
            let (flag, desc) = split_flag(param);
            lines.push(".TP".to_string());
            lines.push(format!(".B {}", flag));
            if !desc.is_empty() {
                lines.push(desc.to_string());
            }
        }
    }

    lines.extend([
        ".SH FILES".to_string(),
        ".TP".to_string(),
        ".I /usr/share/isoforge/config.json".to_string(),
        "Default configuration when installed system-wide.".to_string(),
    ]);

    let mut doc = lines.join("\n");
    doc.push('\n');
    doc
}

/// Split a parameter line into flag and description at the first
/// two-or-more-space gap. The description is empty when the line has no
/// such gap.
fn split_flag(param: &str) -> (&str, &str) {
    let mut parts = RE_GAP.splitn(param, 2);
    let flag = parts.next().unwrap_or(param);
    let desc = parts.next().unwrap_or("");
    (flag, desc)
}
