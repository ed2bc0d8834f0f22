// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Siren-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Siren and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rstest::{fixture, rstest};

use super::{scan_file, ScanFileError, SourceTree, TreeScanError};
use crate::model::{DiagramKind, Language, SkipReason};

static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

struct TempDir {
    path: std::path::PathBuf,
}

impl TempDir {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
        let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut path = env::temp_dir();
        path.push(format!("siren-{prefix}-{}-{nanos}-{counter}", std::process::id()));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

const PY_SOURCE: &str = r#"def calculate_total(items):
    """
    ```mermaid
    graph TD
        A[开始计算] --> B[遍历商品列表]
    ```
    """
    total = 0
    for item in items:
        if item and 'price' in item:
            total += item['price']
    return total
"#;

const GO_SOURCE: &str = r#"package main

/*
```mermaid
sequenceDiagram
    C->>U: Save()
```
*/
func (u *User) Save() error {
	return nil
}
"#;

struct SourceTreeTestCtx {
    tmp: TempDir,
    tree: SourceTree,
}

impl SourceTreeTestCtx {
    fn new(prefix: &str) -> Self {
        let tmp = TempDir::new(prefix);
        let root = tmp.path().join("workspace");
        std::fs::create_dir_all(root.join("pkg")).unwrap();

        std::fs::write(root.join("orders.py"), PY_SOURCE).unwrap();
        std::fs::write(root.join("pkg/user.go"), GO_SOURCE).unwrap();
        std::fs::write(root.join("README.md"), "# no diagrams here").unwrap();

        let tree = SourceTree::new(&root);
        Self { tmp, tree }
    }

    fn root(&self) -> &std::path::Path {
        self.tree.root()
    }
}

#[fixture]
fn ctx() -> SourceTreeTestCtx {
    SourceTreeTestCtx::new("source-tree")
}

#[rstest]
fn scan_collects_supported_files_in_path_order(ctx: SourceTreeTestCtx) {
    let report = ctx.tree.scan().unwrap();

    let paths: Vec<_> = report
        .files()
        .iter()
        .map(|file| file.path().strip_prefix(ctx.root()).unwrap().to_path_buf())
        .collect();
    assert_eq!(
        paths,
        vec![std::path::PathBuf::from("orders.py"), std::path::PathBuf::from("pkg/user.go")]
    );

    assert_eq!(report.total_blocks(), 2);
    assert_eq!(report.files()[0].language(), Language::Python);
    assert_eq!(report.files()[0].blocks()[0].kind(), Some(DiagramKind::Flowchart));
    assert_eq!(report.files()[1].blocks()[0].kind(), Some(DiagramKind::Sequence));
}

#[rstest]
fn scan_skips_hidden_and_generated_directories(ctx: SourceTreeTestCtx) {
    let root = ctx.root();
    std::fs::create_dir_all(root.join("node_modules/lib")).unwrap();
    std::fs::write(root.join("node_modules/lib/generated.js"), "// ```mermaid\n").unwrap();
    std::fs::create_dir_all(root.join(".cache")).unwrap();
    std::fs::write(root.join(".cache/cached.py"), PY_SOURCE).unwrap();
    std::fs::write(root.join(".hidden.py"), PY_SOURCE).unwrap();

    let report = ctx.tree.scan().unwrap();
    assert_eq!(report.files().len(), 2);
}

#[rstest]
fn scan_records_non_utf8_files_as_skipped(ctx: SourceTreeTestCtx) {
    let root = ctx.root();
    std::fs::write(root.join("binary.py"), [0xff, 0xfe, 0x00, 0x41]).unwrap();

    let report = ctx.tree.scan().unwrap();
    assert_eq!(report.files().len(), 2);
    assert_eq!(report.skipped().len(), 1);
    assert_eq!(report.skipped()[0].reason(), &SkipReason::NonUtf8);
}

#[cfg(unix)]
#[rstest]
fn scan_refuses_symlinked_entries(ctx: SourceTreeTestCtx) {
    let root = ctx.root();
    std::os::unix::fs::symlink(root.join("orders.py"), root.join("alias.py")).unwrap();

    let report = ctx.tree.scan().unwrap();
    assert_eq!(report.files().len(), 2);
    assert!(report
        .skipped()
        .iter()
        .any(|skip| skip.reason() == &SkipReason::Symlink));
}

#[rstest]
fn scan_rejects_file_roots(ctx: SourceTreeTestCtx) {
    let file_root = SourceTree::new(ctx.root().join("orders.py"));
    match file_root.scan() {
        Err(TreeScanError::NotADirectory { .. }) => {}
        other => panic!("expected NotADirectory, got {other:?}"),
    }
}

#[rstest]
fn scan_file_infers_language_from_extension(ctx: SourceTreeTestCtx) {
    let scan = scan_file(&ctx.root().join("orders.py"), None).unwrap();
    assert_eq!(scan.language(), Language::Python);
    assert_eq!(scan.blocks().len(), 1);
    assert_eq!(
        scan.blocks()[0].anchor().map(|decl| decl.name().to_owned()),
        Some("calculate_total".to_owned())
    );
}

#[rstest]
fn scan_file_rejects_unknown_extensions(ctx: SourceTreeTestCtx) {
    match scan_file(&ctx.root().join("README.md"), None) {
        Err(ScanFileError::UnknownLanguage { .. }) => {}
        other => panic!("expected UnknownLanguage, got {other:?}"),
    }
}

#[rstest]
fn scan_file_accepts_explicit_language_override(ctx: SourceTreeTestCtx) {
    let scan = scan_file(&ctx.root().join("README.md"), Some(Language::Python)).unwrap();
    assert_eq!(scan.language(), Language::Python);
    assert!(scan.blocks().is_empty());
}

#[rstest]
fn missing_file_is_an_io_error(ctx: SourceTreeTestCtx) {
    match scan_file(&ctx.root().join("missing.py"), None) {
        Err(ScanFileError::Io { .. }) => {}
        other => panic!("expected Io error, got {other:?}"),
    }
}
