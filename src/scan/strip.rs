// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Siren-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Siren and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Strip comment decoration from fence body lines.
///
/// Decorated bodies (Java/JS `*` gutters, `//` or `#` line comments) lose the
/// gutter plus at most one following space, keeping any further indentation.
/// Undecorated bodies (Python docstrings, Go `/* */` blocks) are dedented by
/// the common leading whitespace of their non-blank lines. Leading and
/// trailing blank lines are dropped either way.
pub(crate) fn clean_comment_decoration(raw_lines: &[&str]) -> String {
    let decorated = raw_lines.iter().any(|line| decoration_end(line).is_some());

    let mut cleaned: Vec<String> = if decorated {
        raw_lines
            .iter()
            .map(|line| match decoration_end(line) {
                Some(end) => line[end..].to_owned(),
                None => line.trim().to_owned(),
            })
            .collect()
    } else {
        let dedent = raw_lines
            .iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| leading_whitespace_len(line))
            .min()
            .unwrap_or(0);
        raw_lines
            .iter()
            .map(|line| if line.trim().is_empty() { String::new() } else { line[dedent..].to_owned() })
            .collect()
    };

    while matches!(cleaned.first(), Some(line) if line.trim().is_empty()) {
        cleaned.remove(0);
    }
    while matches!(cleaned.last(), Some(line) if line.trim().is_empty()) {
        cleaned.pop();
    }

    let mut body = cleaned.join("\n");
    truncate_trailing_whitespace(&mut body);
    body
}

/// Byte offset just past the comment gutter of a decorated line, or `None`
/// when the line has no gutter.
///
/// The gutter is leading whitespace, then a run of `*`, `/`, or `#`, then at
/// most one space.
fn decoration_end(line: &str) -> Option<usize> {
    let mut rest = line.trim_start();
    let ws = line.len() - rest.len();

    let before = rest.len();
    rest = rest.trim_start_matches(['*', '/', '#']);
    let gutter = before - rest.len();
    if gutter == 0 {
        return None;
    }

    let space = usize::from(rest.starts_with(' '));
    Some(ws + gutter + space)
}

// Counts only ASCII indentation so the dedent offset always lands on a char
// boundary.
fn leading_whitespace_len(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}

fn truncate_trailing_whitespace(body: &mut String) {
    let trimmed = body.trim_end().len();
    body.truncate(trimmed);
}
