// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Siren-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Siren and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Serialize;

use crate::model::ScanReport;
use crate::report::UNKNOWN_KIND;

/// Default script URL for the client-side renderer.
pub const DEFAULT_MERMAID_SRC: &str =
    "https://cdn.jsdelivr.net/npm/mermaid@10/dist/mermaid.min.js";

#[derive(Debug, Serialize)]
struct HtmlBlock {
    file: String,
    heading: String,
    kind: String,
    start_line: usize,
    end_line: usize,
    /// Base64 so the markup survives embedding in a script tag untouched.
    body_b64: String,
}

#[derive(Debug)]
pub enum HtmlRenderError {
    Payload(serde_json::Error),
}

impl std::fmt::Display for HtmlRenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Payload(err) => write!(f, "cannot encode html payload: {err}"),
        }
    }
}

impl std::error::Error for HtmlRenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Payload(err) => Some(err),
        }
    }
}

/// A standalone preview page.
///
/// Blocks ride along base64-encoded inside a JSON payload; the page decodes
/// them and hands each to mermaid.js loaded from `mermaid_src`. Rendering is
/// entirely the client library's business.
pub fn render_html(report: &ScanReport, mermaid_src: &str) -> Result<String, HtmlRenderError> {
    let blocks: Vec<HtmlBlock> = report
        .iter_blocks()
        .map(|(file, block)| HtmlBlock {
            file: file.path().display().to_string(),
            heading: match (block.anchor(), block.title()) {
                (Some(decl), _) => format!("{} {}", decl.kind().label(), decl.name()),
                (None, Some(title)) => title.to_owned(),
                (None, None) => format!("line {}", block.start_line()),
            },
            kind: block.kind().map_or(UNKNOWN_KIND, |kind| kind.label()).to_owned(),
            start_line: block.start_line(),
            end_line: block.end_line(),
            body_b64: STANDARD.encode(block.body().as_bytes()),
        })
        .collect();

    let payload = serde_json::to_string(&blocks).map_err(HtmlRenderError::Payload)?;

    Ok(HTML_TEMPLATE
        .replace("{{MERMAID_SRC}}", &escape_attr(mermaid_src))
        .replace("{{PAYLOAD}}", &payload.replace("</", "<\\/")))
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;").replace('<', "&lt;")
}

const HTML_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Siren - extracted diagrams</title>
<style>
  body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
         margin: 0; padding: 24px; background: #1e1e1e; color: #ddd; }
  h1 { font-size: 18px; font-weight: 600; }
  .card { background: #252526; border: 1px solid #333; border-radius: 8px;
          margin: 16px 0; padding: 16px; }
  .card-header { display: flex; justify-content: space-between; font-size: 13px;
                 color: #9cdcfe; margin-bottom: 12px; }
  .card-header .loc { color: #808080; }
  .diagram { background: #fff; border-radius: 6px; padding: 12px; overflow-x: auto; }
  .error { color: #f48771; font-size: 12px; white-space: pre-wrap; }
</style>
</head>
<body>
<h1>Extracted Mermaid diagrams</h1>
<div id="cards"></div>
<script id="payload" type="application/json">{{PAYLOAD}}</script>
<script src="{{MERMAID_SRC}}"></script>
<script>
  const blocks = JSON.parse(document.getElementById('payload').textContent);
  const cards = document.getElementById('cards');
  const decode = (b64) =>
    new TextDecoder().decode(Uint8Array.from(atob(b64), (c) => c.charCodeAt(0)));

  for (const block of blocks) {
    const card = document.createElement('div');
    card.className = 'card';

    const header = document.createElement('div');
    header.className = 'card-header';
    const name = document.createElement('span');
    name.textContent = block.heading + ' [' + block.kind + ']';
    const loc = document.createElement('span');
    loc.className = 'loc';
    loc.textContent = block.file + ':' + block.start_line + '-' + block.end_line;
    header.append(name, loc);

    const diagram = document.createElement('pre');
    diagram.className = 'diagram mermaid';
    diagram.textContent = decode(block.body_b64);

    card.append(header, diagram);
    cards.append(card);
  }

  if (window.mermaid) {
    mermaid.initialize({ startOnLoad: false });
    mermaid.run({ querySelector: '.mermaid' }).catch((err) => {
      const note = document.createElement('div');
      note.className = 'error';
      note.textContent = String(err);
      cards.append(note);
    });
  }
</script>
</body>
</html>
"#;
