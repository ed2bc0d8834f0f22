// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Siren-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Siren and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use memchr::memmem;

use crate::model::ScanWarning;

const FENCE_MARKER: &[u8] = b"```";

/// A ```mermaid fence found in a source text, body lines still carrying
/// whatever comment decoration the host language wrapped them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MermaidFence<'a> {
    /// 1-based line of the opening fence.
    pub(crate) start_line: usize,
    /// 1-based line of the closing fence.
    pub(crate) end_line: usize,
    pub(crate) raw_lines: Vec<&'a str>,
}

#[derive(Debug)]
enum FenceState<'a> {
    Outside,
    InMermaid { start_line: usize, raw_lines: Vec<&'a str> },
    InOther,
}

/// Walk a source text line by line and collect ```mermaid fences.
///
/// Fences tagged with any other info string are consumed whole so their
/// contents can never open or close a mermaid fence. A mermaid fence that is
/// still open at end of input yields a warning and no block.
pub(crate) fn find_mermaid_fences(text: &str) -> (Vec<MermaidFence<'_>>, Vec<ScanWarning>) {
    let mut fences = Vec::new();
    let mut warnings = Vec::new();
    let mut state = FenceState::Outside;

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let info = fence_info(line);

        state = match (state, info) {
            (FenceState::Outside, Some("mermaid")) => {
                FenceState::InMermaid { start_line: line_no, raw_lines: Vec::new() }
            }
            // A bare ``` outside any fence opens an untagged one; other info
            // strings open fences we have no interest in. Either way the
            // contents are opaque until the next bare ```.
            (FenceState::Outside, Some(_)) => FenceState::InOther,
            (state @ FenceState::Outside, None) => state,

            (FenceState::InMermaid { start_line, raw_lines }, Some("")) => {
                fences.push(MermaidFence { start_line, end_line: line_no, raw_lines });
                FenceState::Outside
            }
            (FenceState::InMermaid { start_line, mut raw_lines }, _) => {
                raw_lines.push(line);
                FenceState::InMermaid { start_line, raw_lines }
            }

            (FenceState::InOther, Some("")) => FenceState::Outside,
            (state @ FenceState::InOther, _) => state,
        };
    }

    if let FenceState::InMermaid { start_line, .. } = state {
        warnings.push(ScanWarning::UnterminatedFence { line: start_line });
    }

    (fences, warnings)
}

/// The info string of a fence line, or `None` if the line is not a fence.
///
/// A fence line is triple backticks preceded only by whitespace and comment
/// decoration (`*`, `/`, `#`). The info string is whatever follows, trimmed.
pub(crate) fn fence_info(line: &str) -> Option<&str> {
    let offset = memmem::find(line.as_bytes(), FENCE_MARKER)?;

    let prefix = &line[..offset];
    if !prefix.chars().all(|ch| ch.is_whitespace() || matches!(ch, '*' | '/' | '#')) {
        return None;
    }

    Some(line[offset + FENCE_MARKER.len()..].trim())
}
