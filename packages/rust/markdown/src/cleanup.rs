//! Post-render cleanup pipeline for Markdown output.
//!
//! Each cleanup pass is a function `&str -> String` applied in sequence.
//! Fenced code blocks pass through every stage untouched.

/// Run the full cleanup pipeline on rendered Markdown text.
pub(crate) fn run_pipeline(md: &str) -> String {
    let mut result = md.to_string();

    result = clean_blank_lines(&result);
    result = normalize_whitespace(&result);
    result = ensure_trailing_newline(&result);

    result
}

/// Split into lines tagged with whether they belong to a fenced block.
/// Fence delimiter lines count as fenced.
fn tag_fenced(md: &str) -> Vec<(&str, bool)> {
    let mut open: Option<usize> = None;
    md.lines()
        .map(|line| {
            let ticks = line.trim_start().chars().take_while(|c| *c == '`').count();
            match open {
                None if ticks >= 3 => {
                    open = Some(ticks);
                    (line, true)
                }
                Some(len) if ticks >= len && line.trim().chars().all(|c| c == '`') => {
                    open = None;
                    (line, true)
                }
                Some(_) => (line, true),
                None => (line, false),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Pass 1: Clean up excessive blank lines
// ---------------------------------------------------------------------------

/// Collapse runs of blank lines into one and drop leading blanks.
fn clean_blank_lines(md: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    let mut prev_blank = true;

    for (line, fenced) in tag_fenced(md) {
        let blank = !fenced && line.trim().is_empty();
        if blank && prev_blank {
            continue;
        }
        prev_blank = blank;
        lines.push(line);
    }

    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Pass 2: Normalize whitespace
// ---------------------------------------------------------------------------

/// Trim trailing whitespace outside fenced blocks.
fn normalize_whitespace(md: &str) -> String {
    tag_fenced(md)
        .into_iter()
        .map(|(line, fenced)| if fenced { line } else { line.trim_end() })
        .collect::<Vec<_>>()
        .join("\n")
}

// ---------------------------------------------------------------------------
// Pass 3: Ensure trailing newline
// ---------------------------------------------------------------------------

/// Ensure the file ends with exactly one newline.
fn ensure_trailing_newline(md: &str) -> String {
    let trimmed = md.trim_end_matches('\n');
    format!("{trimmed}\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
