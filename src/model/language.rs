// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Siren-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Siren and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Source languages the scanner knows how to anchor declarations in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    Jsx,
    Tsx,
    Java,
    Go,
}

/// Which way the anchor search walks from a fenced block.
///
/// Python docstrings follow the declaration they document, so the search goes
/// up. Everywhere else the doc comment precedes the declaration, so the
/// search goes down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorDirection {
    Forward,
    Backward,
}

impl Language {
    pub const ALL: [Language; 7] = [
        Language::Python,
        Language::JavaScript,
        Language::TypeScript,
        Language::Jsx,
        Language::Tsx,
        Language::Java,
        Language::Go,
    ];

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "py" => Some(Self::Python),
            "js" | "mjs" | "cjs" => Some(Self::JavaScript),
            "ts" | "mts" | "cts" => Some(Self::TypeScript),
            "jsx" => Some(Self::Jsx),
            "tsx" => Some(Self::Tsx),
            "java" => Some(Self::Java),
            "go" => Some(Self::Go),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        Self::from_extension(extension)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Jsx => "javascriptreact",
            Self::Tsx => "typescriptreact",
            Self::Java => "java",
            Self::Go => "go",
        }
    }

    pub fn anchor_direction(self) -> AnchorDirection {
        match self {
            Self::Python => AnchorDirection::Backward,
            _ => AnchorDirection::Forward,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLanguageError {
    raw: String,
}

impl fmt::Display for ParseLanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown language: {} (expected python, javascript, typescript, javascriptreact, typescriptreact, java, or go)",
            self.raw
        )
    }
}

impl std::error::Error for ParseLanguageError {}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "python" | "py" => Ok(Self::Python),
            "javascript" | "js" => Ok(Self::JavaScript),
            "typescript" | "ts" => Ok(Self::TypeScript),
            "javascriptreact" | "jsx" => Ok(Self::Jsx),
            "typescriptreact" | "tsx" => Ok(Self::Tsx),
            "java" => Ok(Self::Java),
            "go" => Ok(Self::Go),
            _ => Err(ParseLanguageError { raw: s.to_owned() }),
        }
    }
}
