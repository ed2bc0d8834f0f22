// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Siren-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Siren and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over a scan report.

pub mod search;

pub use search::{block_search, BlockMatch, BlockSearchMode};

use crate::model::{DiagramBlock, DiagramKind, FileScan, Language, ScanReport};

/// Blocks filtered by optional kind and language, in report order.
pub fn filter_blocks<'a>(
    report: &'a ScanReport,
    kind: Option<DiagramKind>,
    language: Option<Language>,
) -> Vec<(&'a FileScan, &'a DiagramBlock)> {
    report
        .iter_blocks()
        .filter(|(file, block)| {
            kind.map_or(true, |kind| block.kind() == Some(kind))
                && language.map_or(true, |language| file.language() == language)
        })
        .collect()
}
