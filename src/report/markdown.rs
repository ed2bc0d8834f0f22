// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Siren-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Siren and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{DiagramBlock, ScanReport};

/// Markdown digest: every block re-fenced under a heading naming its anchor,
/// ready for any Mermaid-aware Markdown viewer.
pub fn render_markdown(report: &ScanReport) -> String {
    let mut out = String::from("# Extracted Mermaid blocks\n");

    for file in report.files() {
        out.push_str("\n## ");
        out.push_str(&file.path().display().to_string());
        out.push('\n');

        for block in file.blocks() {
            out.push_str("\n### ");
            out.push_str(&block_heading(block));
            out.push_str("\n\n```mermaid\n");
            out.push_str(block.body());
            out.push_str("\n```\n");
        }

        for warning in file.warnings() {
            out.push_str("\n> ");
            out.push_str(&warning.to_string());
            out.push('\n');
        }
    }

    if !report.skipped().is_empty() {
        out.push_str("\n## Skipped\n\n");
        for skip in report.skipped() {
            out.push_str("- ");
            out.push_str(&skip.to_string());
            out.push('\n');
        }
    }

    out
}

fn block_heading(block: &DiagramBlock) -> String {
    let kind = block.kind().map_or("unknown", |kind| kind.label());
    match (block.anchor(), block.title()) {
        (Some(decl), _) => {
            format!("{} `{}` (line {}) - {kind}", decl.kind().label(), decl.name(), decl.line())
        }
        (None, Some(title)) => format!("{title} - {kind}"),
        (None, None) => format!("line {} - {kind}", block.start_line()),
    }
}
