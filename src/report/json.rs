// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Siren-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Siren and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{DiagramBlock, FileScan, ScanReport};
use crate::report::{stats, UNKNOWN_KIND};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorDoc {
    pub name: String,
    pub kind: String,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDoc {
    pub start_line: usize,
    pub end_line: usize,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<AnchorDoc>,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDoc {
    pub path: String,
    pub language: String,
    pub blocks: Vec<BlockDoc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsDoc {
    pub files: usize,
    pub blocks: usize,
    pub skipped: usize,
    pub warnings: usize,
    pub by_kind: BTreeMap<String, usize>,
    pub by_language: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDoc {
    pub files: Vec<FileDoc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
    pub stats: StatsDoc,
}

pub(crate) fn block_doc(block: &DiagramBlock) -> BlockDoc {
    BlockDoc {
        start_line: block.start_line(),
        end_line: block.end_line(),
        kind: block.kind().map_or(UNKNOWN_KIND, |kind| kind.label()).to_owned(),
        title: block.title().map(str::to_owned),
        anchor: block.anchor().map(|decl| AnchorDoc {
            name: decl.name().to_owned(),
            kind: decl.kind().label().to_owned(),
            line: decl.line(),
        }),
        body: block.body().to_owned(),
    }
}

pub(crate) fn file_doc(file: &FileScan) -> FileDoc {
    FileDoc {
        path: file.path().display().to_string(),
        language: file.language().label().to_owned(),
        blocks: file.blocks().iter().map(block_doc).collect(),
        warnings: file.warnings().iter().map(ToString::to_string).collect(),
    }
}

pub fn report_doc(report: &ScanReport) -> ReportDoc {
    let stats = stats(report);
    ReportDoc {
        files: report.files().iter().map(file_doc).collect(),
        skipped: report.skipped().iter().map(ToString::to_string).collect(),
        stats: StatsDoc {
            files: stats.files,
            blocks: stats.blocks,
            skipped: stats.skipped,
            warnings: stats.warnings,
            by_kind: stats.by_kind,
            by_language: stats.by_language,
        },
    }
}

/// The whole report as pretty-printed JSON.
pub fn render_json(report: &ScanReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&report_doc(report))
}
