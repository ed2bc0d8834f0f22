// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Siren-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Siren and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct McpAnchor {
    pub name: String,
    pub kind: String,
    pub line: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BlockSummary {
    pub file: String,
    /// Index of the block within its file, stable for `block.get`.
    pub index: u64,
    pub start_line: u64,
    pub end_line: u64,
    pub kind: String,
    pub title: Option<String>,
    pub anchor: Option<McpAnchor>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ScanTreeParams {
    /// Subdirectory of the served root to scan; defaults to the whole root.
    pub dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScanTreeResponse {
    pub files: u64,
    pub blocks: Vec<BlockSummary>,
    pub skipped: Vec<String>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ScanFileParams {
    /// Path of the file, absolute or relative to the served root.
    pub path: String,
    /// Language override; inferred from the extension when omitted.
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScanFileResponse {
    pub language: String,
    pub blocks: Vec<BlockSummary>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ScanSourceParams {
    pub source: String,
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScanSourceResponse {
    pub blocks: Vec<BlockSummary>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BlockGetParams {
    /// Path as reported by `scan.tree`/`scan.file`.
    pub file: String,
    pub index: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BlockGetResponse {
    pub block: BlockSummary,
    pub body: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BlockSearchParams {
    pub needle: String,
    /// One of `substring` (default), `regex`, or `fuzzy`.
    pub mode: Option<String>,
    pub case_insensitive: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BlockSearchMatch {
    pub block: BlockSummary,
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BlockSearchResponse {
    pub matches: Vec<BlockSearchMatch>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReportStatsResponse {
    pub files: u64,
    pub blocks: u64,
    pub skipped: u64,
    pub warnings: u64,
    pub by_kind: BTreeMap<String, u64>,
    pub by_language: BTreeMap<String, u64>,
}
