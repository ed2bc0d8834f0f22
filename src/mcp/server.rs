// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Siren-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Siren and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::{Json, Parameters};
use rmcp::model::{ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData, ServerHandler, ServiceExt};
use tokio::sync::Mutex;

use crate::model::{FileScan, Language, ScanReport};
use crate::query::{block_search, BlockSearchMode};
use crate::report::stats;
use crate::scan::scan_source;
use crate::store::{scan_file, SourceTree};

use super::types::*;

#[derive(Debug)]
struct McpState {
    tree: SourceTree,
    report: Option<ScanReport>,
}

#[derive(Clone)]
pub struct SirenMcp {
    state: Arc<Mutex<McpState>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl SirenMcp {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            state: Arc::new(Mutex::new(McpState {
                tree: SourceTree::new(root),
                report: None,
            })),
            tool_router: Self::tool_router(),
        }
    }

    pub async fn serve_stdio(self) -> Result<(), rmcp::RmcpError> {
        let service = self.serve((tokio::io::stdin(), tokio::io::stdout())).await?;
        service.waiting().await?;
        Ok(())
    }

    fn resolve_path(root: &Path, raw: &str) -> PathBuf {
        let path = Path::new(raw);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            root.join(path)
        }
    }

    fn cached_report(state: &mut McpState) -> Result<&ScanReport, ErrorData> {
        if state.report.is_none() {
            let report = state.tree.scan().map_err(|err| {
                ErrorData::internal_error(
                    format!("cannot scan source tree: {err}"),
                    Some(serde_json::json!({ "root": state.tree.root().display().to_string() })),
                )
            })?;
            state.report = Some(report);
        }
        Ok(state.report.as_ref().expect("report cached above"))
    }

    /// Scan the served source tree (or a subdirectory) for Mermaid blocks;
    /// start here, then drill in with `block.get` or `block.search`.
    #[tool(name = "scan.tree")]
    async fn scan_tree(
        &self,
        params: Parameters<ScanTreeParams>,
    ) -> Result<Json<ScanTreeResponse>, ErrorData> {
        let ScanTreeParams { dir } = params.0;

        let mut state = self.state.lock().await;
        let root = state.tree.root().to_path_buf();
        let (tree, cache) = match dir {
            Some(dir) => (SourceTree::new(Self::resolve_path(&root, &dir)), false),
            None => (state.tree.clone(), true),
        };

        let report = tree.scan().map_err(|err| {
            ErrorData::invalid_params(
                format!("cannot scan {}: {err}", tree.root().display()),
                Some(serde_json::json!({ "dir": tree.root().display().to_string() })),
            )
        })?;

        let response = ScanTreeResponse {
            files: report.files().len() as u64,
            blocks: summarize_report(&report),
            skipped: report.skipped().iter().map(ToString::to_string).collect(),
            warnings: collect_warnings(&report),
        };

        if cache {
            state.report = Some(report);
        }

        Ok(Json(response))
    }

    /// Scan a single file; the path may be relative to the served root.
    #[tool(name = "scan.file")]
    async fn scan_file(
        &self,
        params: Parameters<ScanFileParams>,
    ) -> Result<Json<ScanFileResponse>, ErrorData> {
        let ScanFileParams { path, language } = params.0;

        let language = language
            .map(|raw| {
                raw.parse::<Language>().map_err(|err| {
                    ErrorData::invalid_params(
                        err.to_string(),
                        Some(serde_json::json!({ "language": raw })),
                    )
                })
            })
            .transpose()?;

        let state = self.state.lock().await;
        let resolved = Self::resolve_path(state.tree.root(), &path);
        drop(state);

        let scan = scan_file(&resolved, language).map_err(|err| {
            ErrorData::invalid_params(
                err.to_string(),
                Some(serde_json::json!({ "path": resolved.display().to_string() })),
            )
        })?;

        Ok(Json(ScanFileResponse {
            language: scan.language().label().to_owned(),
            blocks: summarize_file(&scan),
            warnings: scan.warnings().iter().map(ToString::to_string).collect(),
        }))
    }

    /// Scan source text passed inline instead of a file on disk.
    #[tool(name = "scan.source")]
    async fn scan_source(
        &self,
        params: Parameters<ScanSourceParams>,
    ) -> Result<Json<ScanSourceResponse>, ErrorData> {
        let ScanSourceParams { source, language } = params.0;

        let language = language.parse::<Language>().map_err(|err| {
            ErrorData::invalid_params(
                err.to_string(),
                Some(serde_json::json!({ "language": language })),
            )
        })?;

        let outcome = scan_source(&source, language);
        let scan = FileScan::new("<inline>", language, outcome.blocks, outcome.warnings);

        Ok(Json(ScanSourceResponse {
            blocks: summarize_file(&scan),
            warnings: scan.warnings().iter().map(ToString::to_string).collect(),
        }))
    }

    /// Full body of one block addressed by file path and block index.
    #[tool(name = "block.get")]
    async fn block_get(
        &self,
        params: Parameters<BlockGetParams>,
    ) -> Result<Json<BlockGetResponse>, ErrorData> {
        let BlockGetParams { file, index } = params.0;

        let mut state = self.state.lock().await;
        let resolved = Self::resolve_path(state.tree.root(), &file);
        let report = Self::cached_report(&mut state)?;

        let scan = report.file(&resolved).ok_or_else(|| {
            ErrorData::invalid_params(
                "file not present in the scanned tree",
                Some(serde_json::json!({ "file": resolved.display().to_string() })),
            )
        })?;

        let block = scan.blocks().get(index as usize).ok_or_else(|| {
            ErrorData::invalid_params(
                format!("block index out of range (file has {} blocks)", scan.blocks().len()),
                Some(serde_json::json!({
                    "file": resolved.display().to_string(),
                    "index": index,
                })),
            )
        })?;

        Ok(Json(BlockGetResponse {
            block: block_summary(scan, index as usize, block),
            body: block.body().to_owned(),
        }))
    }

    /// Search blocks by anchor name, title, or body. Modes: `substring`
    /// (default), `regex`, `fuzzy`.
    #[tool(name = "block.search")]
    async fn block_search(
        &self,
        params: Parameters<BlockSearchParams>,
    ) -> Result<Json<BlockSearchResponse>, ErrorData> {
        let BlockSearchParams { needle, mode, case_insensitive } = params.0;

        let mode = match mode.as_deref() {
            None | Some("substring") => BlockSearchMode::Substring,
            Some("regex") => BlockSearchMode::Regex,
            Some("fuzzy") => BlockSearchMode::Fuzzy,
            Some(other) => {
                return Err(ErrorData::invalid_params(
                    "unknown search mode (expected substring, regex, or fuzzy)",
                    Some(serde_json::json!({ "mode": other })),
                ));
            }
        };
        let case_insensitive = case_insensitive.unwrap_or(true);

        let mut state = self.state.lock().await;
        let report = Self::cached_report(&mut state)?;

        let matches = block_search(report, &needle, mode, case_insensitive).map_err(|err| {
            ErrorData::invalid_params(
                format!("cannot compile search pattern: {err}"),
                Some(serde_json::json!({ "needle": needle })),
            )
        })?;

        let matches = matches
            .into_iter()
            .map(|hit| {
                let index = hit
                    .file
                    .blocks()
                    .iter()
                    .position(|block| std::ptr::eq(block, hit.block))
                    .unwrap_or(0);
                BlockSearchMatch {
                    block: block_summary(hit.file, index, hit.block),
                    score: hit.score,
                }
            })
            .collect();

        Ok(Json(BlockSearchResponse { matches }))
    }

    /// Block counts per kind and language for the served tree.
    #[tool(name = "report.stats")]
    async fn report_stats(&self) -> Result<Json<ReportStatsResponse>, ErrorData> {
        let mut state = self.state.lock().await;
        let report = Self::cached_report(&mut state)?;
        let stats = stats(report);

        Ok(Json(ReportStatsResponse {
            files: stats.files as u64,
            blocks: stats.blocks as u64,
            skipped: stats.skipped as u64,
            warnings: stats.warnings as u64,
            by_kind: stats.by_kind.into_iter().map(|(key, count)| (key, count as u64)).collect(),
            by_language: stats
                .by_language
                .into_iter()
                .map(|(key, count)| (key, count as u64))
                .collect(),
        }))
    }
}

fn block_summary(file: &FileScan, index: usize, block: &crate::model::DiagramBlock) -> BlockSummary {
    BlockSummary {
        file: file.path().display().to_string(),
        index: index as u64,
        start_line: block.start_line() as u64,
        end_line: block.end_line() as u64,
        kind: block.kind().map_or("unknown", |kind| kind.label()).to_owned(),
        title: block.title().map(str::to_owned),
        anchor: block.anchor().map(|decl| McpAnchor {
            name: decl.name().to_owned(),
            kind: decl.kind().label().to_owned(),
            line: decl.line() as u64,
        }),
    }
}

fn summarize_file(file: &FileScan) -> Vec<BlockSummary> {
    file.blocks()
        .iter()
        .enumerate()
        .map(|(index, block)| block_summary(file, index, block))
        .collect()
}

fn summarize_report(report: &ScanReport) -> Vec<BlockSummary> {
    report.files().iter().flat_map(summarize_file).collect()
}

fn collect_warnings(report: &ScanReport) -> Vec<String> {
    report
        .files()
        .iter()
        .flat_map(|file| {
            file.warnings()
                .iter()
                .map(move |warning| format!("{}: {warning}", file.path().display()))
        })
        .collect()
}

#[tool_handler]
impl ServerHandler for SirenMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Siren Mermaid extraction server (tools: scan.tree, scan.file, scan.source, block.get, block.search, report.stats). Blocks are ```mermaid fences found inside doc comments, anchored to the nearest enclosing function/method/class."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
