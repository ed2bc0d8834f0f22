// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Siren-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Siren and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::SmolStr;

use crate::model::DiagramKind;

/// Classify a cleaned block body by its leading keyword.
///
/// Blank lines, `%%` comment lines, and a leading `---` front-matter section
/// are skipped; the first remaining line decides. Anything unrecognized is
/// `None`: still a Mermaid fence, just not a family this crate names.
pub fn detect_kind(body: &str) -> Option<DiagramKind> {
    let trimmed = significant_line(body)?;

    if keyword_at(trimmed, "sequenceDiagram") {
        return Some(DiagramKind::Sequence);
    }
    if keyword_at(trimmed, "flowchart") || keyword_at(trimmed, "graph") {
        return Some(DiagramKind::Flowchart);
    }
    if keyword_at(trimmed, "classDiagram") {
        return Some(DiagramKind::Class);
    }
    if keyword_at(trimmed, "stateDiagram-v2") || keyword_at(trimmed, "stateDiagram") {
        return Some(DiagramKind::State);
    }
    if keyword_at(trimmed, "gantt") {
        return Some(DiagramKind::Gantt);
    }
    if keyword_at(trimmed, "pie") {
        return Some(DiagramKind::Pie);
    }
    if keyword_at(trimmed, "erDiagram") {
        return Some(DiagramKind::Er);
    }
    if keyword_at(trimmed, "journey") {
        return Some(DiagramKind::Journey);
    }

    None
}

/// The `title:` entry of a leading `---` front-matter section, if any.
pub fn front_matter_title(body: &str) -> Option<SmolStr> {
    let lines: Vec<&str> = body.lines().collect();
    let span = front_matter_span(&lines)?;

    for line in &lines[span.0 + 1..span.1] {
        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix("title:") {
            let title = rest.trim();
            if !title.is_empty() {
                return Some(SmolStr::new(title));
            }
        }
    }

    None
}

/// First classification-relevant line: past blanks, `%%` comments, and front
/// matter.
fn significant_line(body: &str) -> Option<&str> {
    let lines: Vec<&str> = body.lines().collect();
    let start = match front_matter_span(&lines) {
        Some((_, close)) => close + 1,
        None => 0,
    };

    for line in &lines[start.min(lines.len())..] {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("%%") {
            continue;
        }
        return Some(trimmed);
    }

    None
}

/// `(open, close)` line indexes of a leading front-matter section.
fn front_matter_span(lines: &[&str]) -> Option<(usize, usize)> {
    let open = lines.iter().position(|line| !line.trim().is_empty())?;
    if lines[open].trim() != "---" {
        return None;
    }

    let close = lines[open + 1..].iter().position(|line| line.trim() == "---")?;
    Some((open, open + 1 + close))
}

fn keyword_at(line: &str, keyword: &str) -> bool {
    match line.strip_prefix(keyword) {
        Some(rest) => rest.is_empty() || rest.starts_with(char::is_whitespace),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{detect_kind, front_matter_title};
    use crate::model::DiagramKind;

    #[test]
    fn classifies_all_corpus_kinds() {
        assert_eq!(detect_kind("graph TD\n    A --> B"), Some(DiagramKind::Flowchart));
        assert_eq!(detect_kind("flowchart LR\n    A --> B"), Some(DiagramKind::Flowchart));
        assert_eq!(detect_kind("sequenceDiagram\n    A->>B: hi"), Some(DiagramKind::Sequence));
        assert_eq!(detect_kind("classDiagram\n    class Animal"), Some(DiagramKind::Class));
        assert_eq!(detect_kind("stateDiagram-v2\n    [*] --> Received"), Some(DiagramKind::State));
        assert_eq!(detect_kind("stateDiagram\n    [*] --> A"), Some(DiagramKind::State));
        assert_eq!(detect_kind("gantt\n    title 项目开发计划"), Some(DiagramKind::Gantt));
        assert_eq!(detect_kind("pie title 销售数据分布\n    \"服装\" : 25"), Some(DiagramKind::Pie));
        assert_eq!(detect_kind("erDiagram\n    USER ||--o{ ORDER : places"), Some(DiagramKind::Er));
        assert_eq!(detect_kind("journey\n    title My day"), Some(DiagramKind::Journey));
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        assert_eq!(detect_kind("\n%% generated\n\ngraph LR\n    A --> B"), Some(DiagramKind::Flowchart));
    }

    #[test]
    fn skips_front_matter_before_classifying() {
        let body = "---\ntitle: 用户管理\n---\nclassDiagram\nclass UserManager";
        assert_eq!(detect_kind(body), Some(DiagramKind::Class));
    }

    #[test]
    fn rejects_keyword_prefixes_of_longer_words() {
        assert_eq!(detect_kind("pietitle : 1"), None);
        assert_eq!(detect_kind("graphics stuff"), None);
    }

    #[test]
    fn unknown_keyword_is_none() {
        assert_eq!(detect_kind("mindmap\n  root"), None);
        assert_eq!(detect_kind(""), None);
    }

    #[test]
    fn front_matter_title_extracts_trimmed_value() {
        let body = "---\ntitle: 添加用户\n---\nsequenceDiagram";
        assert_eq!(front_matter_title(body).as_deref(), Some("添加用户"));
    }

    #[test]
    fn front_matter_title_absent_when_no_front_matter() {
        assert_eq!(front_matter_title("graph TD\n    A --> B"), None);
        // An unterminated front-matter opener yields nothing.
        assert_eq!(front_matter_title("---\ntitle: x"), None);
    }

    #[test]
    fn front_matter_without_title_entry_is_none() {
        assert_eq!(front_matter_title("---\nconfig: {}\n---\ngantt"), None);
    }
}
