// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Siren-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Siren and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{DiagramBlock, ScanReport};

const TITLE_COLUMN_MAX: usize = 40;

/// Plain-text report: one line per file, one indented line per block.
pub fn render_text(report: &ScanReport) -> String {
    let mut out = String::new();
    let mut numbers = itoa::Buffer::new();

    for file in report.files() {
        out.push_str(&file.path().display().to_string());
        out.push_str(" (");
        out.push_str(file.language().label());
        out.push_str(")\n");

        for block in file.blocks() {
            out.push_str("  ");
            let range_start = out.len();
            out.push_str(numbers.format(block.start_line()));
            out.push('-');
            out.push_str(numbers.format(block.end_line()));
            pad_to(&mut out, range_start, 12);

            let kind_start = out.len();
            out.push_str(block.kind().map_or("unknown", |kind| kind.label()));
            pad_to(&mut out, kind_start, 11);

            out.push_str(&anchor_column(block));
            out.push('\n');
        }

        for warning in file.warnings() {
            out.push_str("  ! ");
            out.push_str(&warning.to_string());
            out.push('\n');
        }
    }

    for skip in report.skipped() {
        out.push_str("skipped ");
        out.push_str(&skip.to_string());
        out.push('\n');
    }

    out.push_str(numbers.format(report.files().len()));
    out.push_str(" files, ");
    out.push_str(numbers.format(report.total_blocks()));
    out.push_str(" blocks\n");
    out
}

fn anchor_column(block: &DiagramBlock) -> String {
    let mut numbers = itoa::Buffer::new();
    match block.anchor() {
        Some(decl) => {
            format!("{} {}:{}", decl.kind().label(), decl.name(), numbers.format(decl.line()))
        }
        None => match block.title() {
            Some(title) => truncate_with_ellipsis(title, TITLE_COLUMN_MAX),
            None => "-".to_owned(),
        },
    }
}

fn pad_to(out: &mut String, column_start: usize, width: usize) {
    let written = out.len() - column_start;
    let padding = width.saturating_sub(written).max(1);
    for _ in 0..padding {
        out.push(' ');
    }
}

fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_owned();
    }
    let mut out: String = text.chars().take(max_len.saturating_sub(1)).collect();
    out.push('…');
    out
}
