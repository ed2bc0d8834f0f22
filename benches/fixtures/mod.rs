// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Siren-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Siren and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let pid = std::process::id();
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);

        let mut path = std::env::temp_dir();
        path.push(format!("siren_bench_{prefix}_{pid}_{nanos}_{counter}"));
        std::fs::create_dir_all(&path).expect("create temp dir");

        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    Medium,
    Large,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    pub fn functions(self) -> usize {
        match self {
            Self::Small => 4,
            Self::Medium => 32,
            Self::Large => 256,
        }
    }

    pub fn edges(self) -> usize {
        match self {
            Self::Small => 4,
            Self::Medium => 12,
            Self::Large => 24,
        }
    }
}

/// A Python module with `functions` docstring'd functions, each carrying one
/// flowchart of `edges` edges.
pub fn python_source(functions: usize, edges: usize) -> String {
    let mut out = String::new();
    for index in 0..functions {
        let _ = writeln!(out, "def handler_{index:04}(payload):");
        out.push_str("    \"\"\"\n");
        let _ = writeln!(out, "    Handler {index:04} flow.");
        out.push_str("\n    ```mermaid\n    graph TD\n");
        for edge in 0..edges {
            let _ = writeln!(out, "        N{edge} --> N{next}", next = edge + 1);
        }
        out.push_str("    ```\n    \"\"\"\n    pass\n\n\n");
    }
    out
}

/// A Java class with `methods` doc-commented methods, gutter decoration and
/// all.
pub fn java_source(methods: usize, edges: usize) -> String {
    let mut out = String::from("public class Generated {\n");
    for index in 0..methods {
        out.push_str("    /**\n     * ```mermaid\n     * flowchart LR\n");
        for edge in 0..edges {
            let _ = writeln!(out, "     *     N{edge} --> N{next}", next = edge + 1);
        }
        out.push_str("     * ```\n     */\n");
        let _ = writeln!(out, "    public void handler{index:04}() {{\n    }}\n");
    }
    out.push_str("}\n");
    out
}

/// Spread `files` copies of a small Python module across subdirectories.
pub fn populate_tree(root: &Path, files: usize) {
    let source = python_source(4, 6);
    for index in 0..files {
        let dir = root.join(format!("pkg_{:02}", index % 8));
        std::fs::create_dir_all(&dir).expect("create tree dir");
        std::fs::write(dir.join(format!("mod_{index:04}.py")), &source).expect("write tree file");
    }
}
