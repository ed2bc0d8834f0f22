// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Siren-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Siren and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{AnchorDirection, DeclKind, Declaration, Language};

use super::patterns::decl_patterns;

/// How far below the opening fence a forward search will look.
const FORWARD_SEARCH_WINDOW: usize = 50;

/// A class only anchors a forward-searched block when its declaration sits
/// within this many lines after the closing fence.
const CLASS_ANCHOR_WINDOW: usize = 10;

/// Find the declaration a fence belongs to, or `None` when nothing nearby
/// matches. `start_line`/`end_line` are the 1-based fence lines.
pub(crate) fn find_anchor(
    lines: &[&str],
    language: Language,
    start_line: usize,
    end_line: usize,
) -> Option<Declaration> {
    match language.anchor_direction() {
        AnchorDirection::Forward => find_forward(lines, language, start_line, end_line),
        AnchorDirection::Backward => find_backward(lines, language, start_line),
    }
}

/// Doc comment precedes the declaration: walk down from the opening fence.
/// Methods win over functions, functions over classes; a class must fall
/// inside the window after the closing fence to count as the block's owner.
fn find_forward(
    lines: &[&str],
    language: Language,
    start_line: usize,
    end_line: usize,
) -> Option<Declaration> {
    let patterns = decl_patterns(language);
    let start = start_line - 1;
    let limit = start.saturating_add(FORWARD_SEARCH_WINDOW).min(lines.len());

    for (index, line) in lines.iter().enumerate().take(limit).skip(start) {
        if let Some(name) = patterns.method_name(line) {
            return Some(Declaration::new(name, DeclKind::Method, index + 1));
        }
        if let Some(name) = patterns.function_name(line) {
            return Some(Declaration::new(name, DeclKind::Function, index + 1));
        }
        if let Some(name) = patterns.class_name(line) {
            let distance = index.saturating_sub(end_line - 1);
            if index >= end_line - 1 && distance <= CLASS_ANCHOR_WINDOW {
                return Some(Declaration::new(name, DeclKind::Class, index + 1));
            }
        }
    }

    None
}

/// Docstring follows the declaration: walk up from the opening fence. The
/// nearest preceding declaration line wins, classes checked first on each
/// line.
fn find_backward(lines: &[&str], language: Language, start_line: usize) -> Option<Declaration> {
    let patterns = decl_patterns(language);

    for index in (0..start_line.min(lines.len())).rev() {
        let line = lines[index];
        if let Some(name) = patterns.class_name(line) {
            return Some(Declaration::new(name, DeclKind::Class, index + 1));
        }
        if let Some(name) = patterns.method_name(line) {
            return Some(Declaration::new(name, DeclKind::Method, index + 1));
        }
        if let Some(name) = patterns.function_name(line) {
            return Some(Declaration::new(name, DeclKind::Function, index + 1));
        }
    }

    None
}
