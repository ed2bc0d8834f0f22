// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Siren-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Siren and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::{Path, PathBuf};

use siren::model::{DeclKind, DiagramKind, Language};
use siren::scan::scan_source;
use siren::store::SourceTree;

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn read_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("failed to read {path:?}: {err}"))
}

fn anchor_names(outcome: &siren::scan::ScanOutcome) -> Vec<Option<String>> {
    outcome
        .blocks
        .iter()
        .map(|block| block.anchor().map(|decl| decl.name().to_owned()))
        .collect()
}

fn kinds(outcome: &siren::scan::ScanOutcome) -> Vec<Option<DiagramKind>> {
    outcome.blocks.iter().map(|block| block.kind()).collect()
}

#[test]
fn orders_fixture_extracts_four_anchored_blocks() {
    let outcome = scan_source(&read_fixture("orders.py"), Language::Python);

    assert!(outcome.warnings.is_empty());
    assert_eq!(
        kinds(&outcome),
        vec![
            Some(DiagramKind::Flowchart),
            Some(DiagramKind::Sequence),
            Some(DiagramKind::State),
            Some(DiagramKind::Pie),
        ]
    );
    assert_eq!(
        anchor_names(&outcome),
        vec![
            Some("calculate_total".to_owned()),
            Some("OrderProcessor".to_owned()),
            Some("process_order".to_owned()),
            Some("generate_report".to_owned()),
        ]
    );

    let total = &outcome.blocks[0];
    assert_eq!((total.start_line(), total.end_line()), (5, 13));
    let anchor = total.anchor().expect("anchor");
    assert_eq!(anchor.kind(), DeclKind::Function);
    assert_eq!(anchor.line(), 1);
    assert!(total.body().starts_with("graph TD\n    A[开始计算]"));

    let state = &outcome.blocks[2];
    assert_eq!(state.anchor().map(|decl| decl.kind()), Some(DeclKind::Method));

    let processor = &outcome.blocks[1];
    assert_eq!(processor.anchor().map(|decl| decl.kind()), Some(DeclKind::Class));
}

#[test]
fn pipeline_fixture_keeps_two_blocks_of_one_docstring_separate() {
    let outcome = scan_source(&read_fixture("pipeline.py"), Language::Python);

    assert_eq!(outcome.blocks.len(), 4);
    assert_eq!(
        anchor_names(&outcome),
        vec![
            Some("simple_workflow".to_owned()),
            Some("data_processing_pipeline".to_owned()),
            Some("data_processing_pipeline".to_owned()),
            Some("fetch_remote".to_owned()),
        ]
    );
    assert_eq!(outcome.blocks[1].kind(), Some(DiagramKind::Flowchart));
    assert_eq!(outcome.blocks[2].kind(), Some(DiagramKind::Sequence));

    // Async declarations anchor like any other function.
    assert_eq!(outcome.blocks[3].anchor().map(|decl| decl.kind()), Some(DeclKind::Function));
}

#[test]
fn java_fixture_strips_gutters_reads_front_matter_and_keeps_duplicates() {
    let outcome = scan_source(&read_fixture("UserManager.java"), Language::Java);

    assert_eq!(outcome.blocks.len(), 4);

    let class_block = &outcome.blocks[0];
    assert_eq!(class_block.kind(), Some(DiagramKind::Class));
    assert_eq!(class_block.title(), Some("用户管理"));
    let anchor = class_block.anchor().expect("anchor");
    assert_eq!(anchor.name(), "UserManager");
    assert_eq!(anchor.kind(), DeclKind::Class);
    assert!(!class_block.body().contains("* "));

    let add_user = &outcome.blocks[1];
    assert_eq!(add_user.kind(), Some(DiagramKind::Sequence));
    assert_eq!(add_user.anchor().map(|decl| decl.name().to_owned()), Some("addUser".to_owned()));

    // The removeUser doc comment repeats its flowchart; both copies stay.
    assert_eq!(outcome.blocks[2].body(), outcome.blocks[3].body());
    for block in &outcome.blocks[2..] {
        assert_eq!(block.kind(), Some(DiagramKind::Flowchart));
        assert_eq!(block.anchor().map(|decl| decl.name().to_owned()), Some("removeUser".to_owned()));
    }
    assert_ne!(outcome.blocks[2].start_line(), outcome.blocks[3].start_line());
}

#[test]
fn javascript_fixture_anchors_class_and_methods() {
    let outcome = scan_source(&read_fixture("user_auth.js"), Language::JavaScript);

    assert_eq!(outcome.blocks.len(), 3);
    assert_eq!(
        anchor_names(&outcome),
        vec![
            Some("UserAuth".to_owned()),
            Some("login".to_owned()),
            Some("register".to_owned()),
        ]
    );
    assert_eq!(outcome.blocks[0].anchor().map(|decl| decl.kind()), Some(DeclKind::Class));
    assert_eq!(outcome.blocks[1].anchor().map(|decl| decl.kind()), Some(DeclKind::Method));
    assert_eq!(outcome.blocks[2].title(), Some("用户注册"));

    // Quoted labels survive cleaning byte for byte.
    assert!(outcome.blocks[0].body().contains(r#"A["用户点击登录"] --> B["AuthService.login()"]"#));
}

#[test]
fn go_fixture_anchors_types_and_receiver_methods() {
    let outcome = scan_source(&read_fixture("service.go"), Language::Go);

    assert_eq!(outcome.blocks.len(), 3);
    assert_eq!(
        kinds(&outcome),
        vec![
            Some(DiagramKind::Class),
            Some(DiagramKind::Flowchart),
            Some(DiagramKind::Sequence),
        ]
    );

    let user = outcome.blocks[0].anchor().expect("anchor");
    assert_eq!(user.name(), "User");
    assert_eq!(user.kind(), DeclKind::Class);

    let validate = outcome.blocks[1].anchor().expect("anchor");
    assert_eq!(validate.name(), "Validate");
    assert_eq!(validate.kind(), DeclKind::Method);

    // Raw block comments carry no decoration, so bodies pass through intact.
    assert!(outcome.blocks[1].body().contains("B{姓名是否为空?}"));
}

#[test]
fn typescript_fixture_anchors_exported_class_and_async_method() {
    let outcome = scan_source(&read_fixture("user_service.ts"), Language::TypeScript);

    assert_eq!(outcome.blocks.len(), 2);
    assert_eq!(
        anchor_names(&outcome),
        vec![Some("UserService".to_owned()), Some("createUser".to_owned())]
    );
    assert_eq!(outcome.blocks[0].anchor().map(|decl| decl.kind()), Some(DeclKind::Class));
    assert_eq!(outcome.blocks[1].anchor().map(|decl| decl.kind()), Some(DeclKind::Method));
}

#[test]
fn tree_scan_over_the_corpus_is_deterministic() {
    let tree = SourceTree::new(fixtures_dir());
    let first = tree.scan().expect("scan fixtures");
    let second = tree.scan().expect("scan fixtures again");

    assert_eq!(first, second);
    assert_eq!(first.files().len(), 6);
    assert_eq!(first.total_blocks(), 20);
    assert!(first.skipped().is_empty());
    assert_eq!(first.total_warnings(), 0);

    let paths: Vec<_> = first
        .files()
        .iter()
        .map(|file| file.path().file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    let mut sorted = paths.clone();
    sorted.sort();
    assert_eq!(paths, sorted);
}
