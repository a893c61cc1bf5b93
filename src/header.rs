//! Leading-comment-block extraction.
//!
//! The isoforge script documents itself in the comment block at the top of
//! the file, using literal section markers:
//!
//! ```text
//! # DESCRIPTION: <one-line summary>
//! # USAGE: <invocation line>
//! # PARAMETERS:
//! #   --flag <arg>    <what it does>
//! # EXAMPLE:
//! #   <sample invocations, not extracted>
//! ```
//!
//! Markers are matched as exact literal prefixes at the start of the line.
//! Scanning stops at the first non-blank line that is not a comment; the
//! script body below the header is never inspected.

use regex::Regex;
use std::sync::LazyLock;

const MARKER_PARAMETERS: &str = "# PARAMETERS:";
const MARKER_DESCRIPTION: &str = "# DESCRIPTION:";
const MARKER_USAGE: &str = "# USAGE:";
const MARKER_EXAMPLE: &str = "# EXAMPLE:";

/// Flag lines inside the parameters section: comment char, at least one
/// whitespace, then a double-dash token.
static RE_FLAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#\s+--").unwrap());

/// Fields extracted from a script's leading comment block.
///
/// `None` covers both an absent marker and a marker with empty inline
/// text; callers substitute their defaults in either case.
#[derive(Debug, Default)]
pub struct ScriptHeader {
    pub description: Option<String>,
    pub usage: Option<String>,
    /// Flag lines in encounter order, comment prefix stripped.
    pub parameters: Vec<String>,
}

/// Capture mode while walking the header. At most one is active; only
/// `Parameters` collects anything from plain comment lines, the rest exist
/// to switch collection off.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Mode {
    Idle,
    Description,
    Usage,
    Parameters,
    Example,
}

/// Extract the documented header from script source.
pub fn parse(input: &str) -> ScriptHeader {
    let mut header = ScriptHeader::default();
    let mut mode = Mode::Idle;

    for line in input.lines() {
        if line.starts_with(MARKER_PARAMETERS) {
            mode = Mode::Parameters;
            continue;
        }
        if let Some(rest) = line.strip_prefix(MARKER_DESCRIPTION) {
            header.description = inline_text(rest);
            mode = Mode::Description;
            continue;
        }
        if let Some(rest) = line.strip_prefix(MARKER_USAGE) {
            header.usage = inline_text(rest);
            mode = Mode::Usage;
            continue;
        }
        if line.starts_with(MARKER_EXAMPLE) {
            mode = Mode::Example;
            continue;
        }
        if line.starts_with('#') {
            if mode == Mode::Parameters && RE_FLAG.is_match(line) {
                header.parameters.push(strip_comment(line));
            }
            continue;
        }
        // First non-comment, non-blank line starts the script body; the
        // header is over. Blank lines inside the header are tolerated.
        if !line.trim().is_empty() {
            break;
        }
    }

    header
}

/// Text following the marker's colon, trimmed. Empty maps to `None` so a
/// bare marker behaves like an absent one.
fn inline_text(rest: &str) -> Option<String> {
    let text = rest.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Strip the leading run of `#` and space characters plus trailing
/// whitespace from a captured flag line.
fn strip_comment(line: &str) -> String {
    line.trim_start_matches(['#', ' ']).trim_end().to_string()
}
