// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Siren-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Siren and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Siren CLI entrypoint.
//!
//! By default this scans a directory (or a single file) and prints a report.
//! `--serve` keeps the process alive serving MCP over streamable HTTP at
//! `http://127.0.0.1:<port>/mcp`; `--mcp` serves MCP over stdio instead
//! (intended for tool integrations).

use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use axum::Router;
use rmcp::transport::{
    streamable_http_server::session::local::LocalSessionManager, StreamableHttpServerConfig,
    StreamableHttpService,
};

use siren::model::{DiagramKind, FileScan, Language, ScanReport};
use siren::report::{render_html, render_json, render_markdown, render_text, DEFAULT_MERMAID_SRC};
use siren::store::{scan_file, write_report_atomic, SourceTree};

const DEFAULT_MCP_HTTP_PORT: u16 = 27534;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<root>] [--format text|json|markdown|html] [--out <path>] [--kind <kind>] [--lang <language>]\n  {program} [<root>] --serve [--mcp-http-port <port>]\n  {program} [<root>] --mcp\n\n<root> is a directory to scan recursively, or a single source file. Defaults to the current working directory.\n\nScan mode prints the report to stdout; --out writes it to a file instead.\n--kind keeps only blocks of one diagram kind (flowchart, sequence, class, state, gantt, pie, er, journey).\n--lang keeps only files of one language (python, javascript, typescript, javascriptreact, typescriptreact, java, go).\n\n--serve exposes the scanned root over MCP at `http://127.0.0.1:<port>/mcp`.\n--mcp-http-port selects the port (0 = ephemeral; default {DEFAULT_MCP_HTTP_PORT}).\n--mcp serves MCP over stdio for editor/agent integrations."
    );
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
    Html,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    root: Option<String>,
    format: Option<OutputFormat>,
    out: Option<String>,
    kind: Option<DiagramKind>,
    lang: Option<Language>,
    mcp: bool,
    serve: bool,
    mcp_http_port: Option<u16>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--mcp" => {
                if options.mcp {
                    return Err(());
                }
                options.mcp = true;
            }
            "--serve" => {
                if options.serve {
                    return Err(());
                }
                options.serve = true;
            }
            "--format" => {
                if options.format.is_some() {
                    return Err(());
                }
                let format = match args.next().ok_or(())?.as_str() {
                    "text" => OutputFormat::Text,
                    "json" => OutputFormat::Json,
                    "markdown" => OutputFormat::Markdown,
                    "html" => OutputFormat::Html,
                    _ => return Err(()),
                };
                options.format = Some(format);
            }
            "--out" => {
                if options.out.is_some() {
                    return Err(());
                }
                options.out = Some(args.next().ok_or(())?);
            }
            "--kind" => {
                if options.kind.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.kind = Some(raw.parse().map_err(|_| ())?);
            }
            "--lang" => {
                if options.lang.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.lang = Some(raw.parse().map_err(|_| ())?);
            }
            "--mcp-http-port" => {
                if options.mcp_http_port.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let port: u16 = raw.parse().map_err(|_| ())?;
                options.mcp_http_port = Some(port);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.root.is_some() {
                    return Err(());
                }
                options.root = Some(arg);
            }
        }
    }

    if options.mcp && options.serve {
        return Err(());
    }
    if options.mcp_http_port.is_some() && !options.serve {
        return Err(());
    }
    if (options.mcp || options.serve)
        && (options.format.is_some()
            || options.out.is_some()
            || options.kind.is_some()
            || options.lang.is_some())
    {
        return Err(());
    }

    Ok(options)
}

/// A report narrowed by the CLI filters; files left without blocks drop out
/// once any filter is active.
fn filtered_report(
    report: &ScanReport,
    kind: Option<DiagramKind>,
    lang: Option<Language>,
) -> ScanReport {
    if kind.is_none() && lang.is_none() {
        return report.clone();
    }

    let files = report
        .files()
        .iter()
        .filter(|file| lang.map_or(true, |lang| file.language() == lang))
        .filter_map(|file| {
            let blocks: Vec<_> = file
                .blocks()
                .iter()
                .filter(|block| kind.map_or(true, |kind| block.kind() == Some(kind)))
                .cloned()
                .collect();
            if blocks.is_empty() {
                return None;
            }
            Some(FileScan::new(file.path(), file.language(), blocks, file.warnings().to_vec()))
        })
        .collect();

    ScanReport::new(files, report.skipped().to_vec())
}

fn run_scan(options: CliOptions) -> Result<(), Box<dyn Error>> {
    let root = options.root.unwrap_or_else(|| ".".to_owned());
    let root_path = Path::new(&root);

    let report = if root_path.is_file() {
        ScanReport::new(vec![scan_file(root_path, None)?], Vec::new())
    } else {
        SourceTree::new(root_path).scan()?
    };
    let report = filtered_report(&report, options.kind, options.lang);

    let rendered = match options.format.unwrap_or_default() {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => render_json(&report)?,
        OutputFormat::Markdown => render_markdown(&report),
        OutputFormat::Html => render_html(&report, DEFAULT_MERMAID_SRC)?,
    };

    match options.out {
        Some(out) => write_report_atomic(Path::new(&out), rendered.as_bytes())?,
        None => print!("{rendered}"),
    }

    Ok(())
}

fn run_serve(root: String, port: u16) -> Result<(), Box<dyn Error>> {
    let mcp = siren::mcp::SirenMcp::new(root);
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
        let local_port = listener.local_addr()?.port();
        eprintln!("siren: serving MCP at http://127.0.0.1:{local_port}/mcp");

        let config = StreamableHttpServerConfig {
            stateful_mode: true,
            ..StreamableHttpServerConfig::default()
        };
        let session_manager = Arc::new(LocalSessionManager::default());
        let mcp_service = StreamableHttpService::new(move || Ok(mcp.clone()), session_manager, config);

        let router = Router::new().nest_service("/mcp", mcp_service);
        axum::serve(listener, router).await?;
        Ok::<(), Box<dyn Error>>(())
    })
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "siren".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        if options.mcp {
            let root = options.root.unwrap_or_else(|| ".".to_owned());
            let mcp = siren::mcp::SirenMcp::new(root);
            let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
            runtime.block_on(mcp.serve_stdio())?;
            return Ok(());
        }

        if options.serve {
            let root = options.root.clone().unwrap_or_else(|| ".".to_owned());
            let port = options.mcp_http_port.unwrap_or(DEFAULT_MCP_HTTP_PORT);
            return run_serve(root, port);
        }

        run_scan(options)
    })();

    if let Err(err) = result {
        eprintln!("siren: {err}");
        std::process::exit(1);
    }
}
