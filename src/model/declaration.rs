// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Siren-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Siren and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::SmolStr;

/// What kind of declaration a block is anchored to.
///
/// Go `type` declarations (structs, interfaces, aliases) and TS interfaces
/// count as `Class`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DeclKind {
    Function,
    Method,
    Class,
}

impl DeclKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Method => "method",
            Self::Class => "class",
        }
    }
}

/// A named declaration at a 1-based line in a source unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    name: SmolStr,
    kind: DeclKind,
    line: usize,
}

impl Declaration {
    pub fn new(name: impl Into<SmolStr>, kind: DeclKind, line: usize) -> Self {
        Self { name: name.into(), kind, line }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> DeclKind {
        self.kind
    }

    /// 1-based line of the declaration in its file.
    pub fn line(&self) -> usize {
        self.line
    }
}
