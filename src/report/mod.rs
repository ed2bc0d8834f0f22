// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Siren-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Siren and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Report assembly and serialization.
//!
//! Rendering here means documents about diagram blocks, never the diagrams
//! themselves; the HTML export hands its payload to client-side mermaid.js.

pub mod html;
pub mod json;
pub mod markdown;
pub mod text;

pub use html::{render_html, DEFAULT_MERMAID_SRC};
pub use json::render_json;
pub use markdown::render_markdown;
pub use text::render_text;

use std::collections::BTreeMap;

use crate::model::ScanReport;

/// Kind key used for blocks whose leading keyword was not recognized.
pub const UNKNOWN_KIND: &str = "unknown";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportStats {
    pub files: usize,
    pub blocks: usize,
    pub skipped: usize,
    pub warnings: usize,
    pub by_kind: BTreeMap<String, usize>,
    pub by_language: BTreeMap<String, usize>,
}

pub fn stats(report: &ScanReport) -> ReportStats {
    let mut by_kind = BTreeMap::new();
    let mut by_language = BTreeMap::new();

    for (file, block) in report.iter_blocks() {
        let kind = block.kind().map_or(UNKNOWN_KIND, |kind| kind.label());
        *by_kind.entry(kind.to_owned()).or_insert(0) += 1;
        *by_language.entry(file.language().label().to_owned()).or_insert(0) += 1;
    }

    ReportStats {
        files: report.files().len(),
        blocks: report.total_blocks(),
        skipped: report.skipped().len(),
        warnings: report.total_warnings(),
        by_kind,
        by_language,
    }
}
