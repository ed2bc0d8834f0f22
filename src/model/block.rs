// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Siren-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Siren and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;

use super::declaration::Declaration;

/// The diagram family named by the leading keyword of a block body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiagramKind {
    Flowchart,
    Sequence,
    Class,
    State,
    Gantt,
    Pie,
    Er,
    Journey,
}

impl DiagramKind {
    pub const ALL: [DiagramKind; 8] = [
        DiagramKind::Flowchart,
        DiagramKind::Sequence,
        DiagramKind::Class,
        DiagramKind::State,
        DiagramKind::Gantt,
        DiagramKind::Pie,
        DiagramKind::Er,
        DiagramKind::Journey,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Flowchart => "flowchart",
            Self::Sequence => "sequence",
            Self::Class => "class",
            Self::State => "state",
            Self::Gantt => "gantt",
            Self::Pie => "pie",
            Self::Er => "er",
            Self::Journey => "journey",
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagramKindError {
    raw: String,
}

impl fmt::Display for ParseDiagramKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown diagram kind: {} (expected flowchart, sequence, class, state, gantt, pie, er, or journey)",
            self.raw
        )
    }
}

impl std::error::Error for ParseDiagramKindError {}

impl FromStr for DiagramKind {
    type Err = ParseDiagramKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flowchart" => Ok(Self::Flowchart),
            "sequence" => Ok(Self::Sequence),
            "class" => Ok(Self::Class),
            "state" => Ok(Self::State),
            "gantt" => Ok(Self::Gantt),
            "pie" => Ok(Self::Pie),
            "er" => Ok(Self::Er),
            "journey" => Ok(Self::Journey),
            _ => Err(ParseDiagramKindError { raw: s.to_owned() }),
        }
    }
}

/// One extracted diagram block: the cleaned markup plus where it came from.
///
/// `start_line`/`end_line` are the 1-based lines of the opening and closing
/// fence in the source file, so jumping to `start_line` lands on the fence a
/// human would look for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramBlock {
    body: String,
    start_line: usize,
    end_line: usize,
    kind: Option<DiagramKind>,
    title: Option<SmolStr>,
    anchor: Option<Declaration>,
}

impl DiagramBlock {
    pub fn new(body: impl Into<String>, start_line: usize, end_line: usize) -> Self {
        Self {
            body: body.into(),
            start_line,
            end_line,
            kind: None,
            title: None,
            anchor: None,
        }
    }

    pub fn with_kind(mut self, kind: Option<DiagramKind>) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_title(mut self, title: Option<SmolStr>) -> Self {
        self.title = title;
        self
    }

    pub fn with_anchor(mut self, anchor: Option<Declaration>) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn start_line(&self) -> usize {
        self.start_line
    }

    pub fn end_line(&self) -> usize {
        self.end_line
    }

    pub fn kind(&self) -> Option<DiagramKind> {
        self.kind
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn anchor(&self) -> Option<&Declaration> {
        self.anchor.as_ref()
    }
}
