// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Siren-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Siren and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Source scanning: fence extraction, decoration cleanup, declaration
//! anchoring.
//!
//! Scanning a text is total: malformed markup produces warnings, never
//! errors. One source text in, an ordered block list out.

mod anchor;
mod fence;
mod patterns;
mod strip;

use smallvec::SmallVec;

use crate::format::mermaid::{detect_kind, front_matter_title};
use crate::model::{DiagramBlock, Language, ScanWarning};

use anchor::find_anchor;
use fence::find_mermaid_fences;
use strip::clean_comment_decoration;

/// Blocks and warnings produced by scanning a single source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    pub blocks: Vec<DiagramBlock>,
    pub warnings: Vec<ScanWarning>,
}

/// Scan one source text for ```mermaid blocks.
///
/// Blocks whose body cleans to nothing are dropped, duplicates are kept, and
/// blocks with no nearby declaration are reported anchorless.
pub fn scan_source(text: &str, language: Language) -> ScanOutcome {
    let lines: Vec<&str> = text.lines().collect();
    let (fences, warnings) = find_mermaid_fences(text);

    let mut blocks = SmallVec::<[DiagramBlock; 8]>::new();
    for fence in fences {
        let body = clean_comment_decoration(&fence.raw_lines);
        if body.is_empty() {
            continue;
        }

        let kind = detect_kind(&body);
        let title = front_matter_title(&body);
        let anchor = find_anchor(&lines, language, fence.start_line, fence.end_line);

        blocks.push(
            DiagramBlock::new(body, fence.start_line, fence.end_line)
                .with_kind(kind)
                .with_title(title)
                .with_anchor(anchor),
        );
    }

    ScanOutcome { blocks: blocks.into_vec(), warnings }
}
