// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Siren-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Siren and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::Language;

/// Per-language declaration matchers.
///
/// Brace-based patterns (JS/TS methods, Java members) also hit control-flow
/// statements; `first_name` filters those by keyword since the regex crate
/// has no lookahead.
#[derive(Debug)]
pub(crate) struct DeclPatterns {
    functions: Vec<Regex>,
    classes: Vec<Regex>,
    methods: Vec<Regex>,
}

const CONTROL_FLOW_NOISE: &[&str] =
    &["if", "for", "while", "switch", "catch", "return", "else", "do", "try", "new", "function"];

impl DeclPatterns {
    fn compile(functions: &[&str], classes: &[&str], methods: &[&str]) -> Self {
        let build = |patterns: &[&str]| {
            patterns
                .iter()
                .map(|pattern| Regex::new(pattern).expect("valid declaration pattern"))
                .collect()
        };
        Self { functions: build(functions), classes: build(classes), methods: build(methods) }
    }

    pub(crate) fn function_name<'a>(&self, line: &'a str) -> Option<&'a str> {
        first_name(&self.functions, line)
    }

    pub(crate) fn class_name<'a>(&self, line: &'a str) -> Option<&'a str> {
        first_name(&self.classes, line)
    }

    pub(crate) fn method_name<'a>(&self, line: &'a str) -> Option<&'a str> {
        first_name(&self.methods, line)
    }
}

fn first_name<'a>(patterns: &[Regex], line: &'a str) -> Option<&'a str> {
    for pattern in patterns {
        let Some(captures) = pattern.captures(line) else {
            continue;
        };
        let Some(name) = captures.name("name") else {
            continue;
        };
        let name = name.as_str();
        if CONTROL_FLOW_NOISE.contains(&name) {
            continue;
        }
        return Some(name);
    }
    None
}

pub(crate) fn decl_patterns(language: Language) -> &'static DeclPatterns {
    static PATTERNS: OnceLock<[DeclPatterns; 7]> = OnceLock::new();
    let all = PATTERNS.get_or_init(|| {
        [python(), javascript(), typescript(), jsx(), tsx(), java(), go()]
    });
    &all[language_index(language)]
}

fn language_index(language: Language) -> usize {
    match language {
        Language::Python => 0,
        Language::JavaScript => 1,
        Language::TypeScript => 2,
        Language::Jsx => 3,
        Language::Tsx => 4,
        Language::Java => 5,
        Language::Go => 6,
    }
}

fn python() -> DeclPatterns {
    DeclPatterns::compile(
        &[r"^\s*(?:async\s+)?def\s+(?P<name>\w+)\s*\("],
        &[r"^\s*class\s+(?P<name>\w+)\s*[(:]?"],
        &[r"^\s*(?:async\s+)?def\s+(?P<name>\w+)\s*\(\s*self\b"],
    )
}

fn javascript() -> DeclPatterns {
    DeclPatterns::compile(
        &[
            r"^\s*(?:async\s+)?function\s+(?P<name>\w+)\s*\(",
            r"^\s*(?:const|let|var)\s+(?P<name>\w+)\s*=\s*(?:async\s+)?\([^)]*\)\s*=>",
            r"^\s*(?:const|let|var)\s+(?P<name>\w+)\s*=\s*(?:async\s+)?function\s*\(",
            r"^\s*(?P<name>\w+)\s*:\s*(?:async\s+)?function\s*\(",
        ],
        &[
            r"^\s*class\s+(?P<name>\w+)\s*(?:\{|extends|$)",
            r"^\s*(?:const|let|var)\s+(?P<name>\w+)\s*=\s*class\b",
        ],
        &[r"^\s*(?:async\s+)?(?P<name>\w+)\s*\([^)]*\)\s*\{"],
    )
}

fn typescript() -> DeclPatterns {
    DeclPatterns::compile(
        &[
            r"^\s*(?:export\s+)?(?:async\s+)?function\s+(?P<name>\w+)\s*\(",
            r"^\s*(?:const|let|var)\s+(?P<name>\w+)\s*:\s*\([^)]*\)\s*=>",
            r"^\s*(?P<name>\w+)\s*=\s*(?:async\s+)?\([^)]*\)\s*=>",
        ],
        &[
            r"^\s*(?:export\s+)?(?:abstract\s+)?class\s+(?P<name>\w+)",
            r"^\s*(?:export\s+)?interface\s+(?P<name>\w+)",
        ],
        &[r"^\s*(?:public|private|protected)?\s*(?:async\s+)?(?P<name>\w+)\s*\([^)]*\)\s*[:{]"],
    )
}

fn jsx() -> DeclPatterns {
    DeclPatterns::compile(
        &[
            r"^\s*(?:async\s+)?function\s+(?P<name>\w+)\s*\(",
            r"^\s*(?:const|let|var)\s+(?P<name>\w+)\s*=\s*(?:async\s+)?\([^)]*\)\s*=>",
            r"^\s*(?:const|let|var)\s+(?P<name>\w+)\s*=\s*(?:async\s+)?function\s*\(",
        ],
        &[
            r"^\s*class\s+(?P<name>\w+)\s*(?:\{|extends|$)",
            r"^\s*(?:const|let|var)\s+(?P<name>\w+)\s*=\s*class\b",
        ],
        &[r"^\s*(?:async\s+)?(?P<name>\w+)\s*\([^)]*\)\s*\{"],
    )
}

fn tsx() -> DeclPatterns {
    DeclPatterns::compile(
        &[
            r"^\s*(?:export\s+)?(?:async\s+)?function\s+(?P<name>\w+)\s*\(",
            r"^\s*(?:const|let|var)\s+(?P<name>\w+)\s*:\s*React\.FC",
            r"^\s*(?:const|let|var)\s+(?P<name>\w+)\s*=\s*(?:async\s+)?\([^)]*\)\s*=>",
        ],
        &[
            r"^\s*(?:export\s+)?(?:abstract\s+)?class\s+(?P<name>\w+)",
            r"^\s*(?:export\s+)?interface\s+(?P<name>\w+)",
        ],
        &[r"^\s*(?:public|private|protected)?\s*(?:async\s+)?(?P<name>\w+)\s*\([^)]*\)\s*[:{]"],
    )
}

fn java() -> DeclPatterns {
    let member = r"^\s*(?:public|private|protected)?\s*(?:static\s+)?(?:\w+\s+)*(?P<name>\w+)\s*\([^)]*\)\s*\{";
    DeclPatterns::compile(
        &[member],
        &[
            r"^\s*(?:public\s+)?(?:abstract\s+)?class\s+(?P<name>\w+)",
            r"^\s*(?:public\s+)?interface\s+(?P<name>\w+)",
        ],
        &[member],
    )
}

fn go() -> DeclPatterns {
    DeclPatterns::compile(
        &[r"^\s*func\s+(?P<name>\w+)\s*\("],
        &[
            r"^\s*type\s+(?P<name>\w+)\s+struct\s*\{",
            r"^\s*type\s+(?P<name>\w+)\s+interface\s*\{",
            r"^\s*type\s+(?P<name>\w+)\s+(?:=\s*)?[\w\[\]]+",
        ],
        &[r"^\s*func\s*\([^)]+\)\s*(?P<name>\w+)\s*\("],
    )
}
