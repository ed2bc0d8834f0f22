// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Siren-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Siren and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::model::{FileScan, Language, ScanReport, SkipReason, SkippedFile};
use crate::scan::scan_source;

/// Directory names that never contain sources worth scanning.
const SKIPPED_DIR_NAMES: &[&str] =
    &["node_modules", "target", "__pycache__", "dist", "build", "vendor"];

#[derive(Debug)]
pub enum TreeScanError {
    Io { path: PathBuf, source: io::Error },
    NotADirectory { path: PathBuf },
}

impl fmt::Display for TreeScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {}: {source}", path.display()),
            Self::NotADirectory { path } => {
                write!(f, "not a directory: {}", path.display())
            }
        }
    }
}

impl std::error::Error for TreeScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::NotADirectory { .. } => None,
        }
    }
}

#[derive(Debug)]
pub enum ScanFileError {
    Io { path: PathBuf, source: io::Error },
    NonUtf8 { path: PathBuf },
    UnknownLanguage { path: PathBuf },
}

impl fmt::Display for ScanFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {}: {source}", path.display()),
            Self::NonUtf8 { path } => write!(f, "not valid UTF-8: {}", path.display()),
            Self::UnknownLanguage { path } => {
                write!(f, "cannot infer language from extension: {}", path.display())
            }
        }
    }
}

impl std::error::Error for ScanFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Scan a single source file, inferring the language from its extension
/// unless one is given.
pub fn scan_file(path: &Path, language: Option<Language>) -> Result<FileScan, ScanFileError> {
    let language = match language {
        Some(language) => language,
        None => Language::from_path(path)
            .ok_or_else(|| ScanFileError::UnknownLanguage { path: path.to_path_buf() })?,
    };

    let bytes = fs::read(path)
        .map_err(|source| ScanFileError::Io { path: path.to_path_buf(), source })?;
    let text = String::from_utf8(bytes)
        .map_err(|_| ScanFileError::NonUtf8 { path: path.to_path_buf() })?;

    let outcome = scan_source(&text, language);
    Ok(FileScan::new(path, language, outcome.blocks, outcome.warnings))
}

/// A directory tree of source files to scan.
///
/// Hidden entries, well-known generated directories, and symlinks are never
/// followed; per-file read problems downgrade to skip records so one bad file
/// cannot sink a tree scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTree {
    root: PathBuf,
}

impl SourceTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the tree and scan every supported source file in parallel.
    ///
    /// The report is deterministically ordered by path no matter how the
    /// parallel scans interleave.
    pub fn scan(&self) -> Result<ScanReport, TreeScanError> {
        let mut candidates = Vec::new();
        let mut skipped = Vec::new();
        self.collect_into(&self.root, &mut candidates, &mut skipped)?;

        let scans: Vec<Result<FileScan, SkippedFile>> = candidates
            .par_iter()
            .map(|(path, language)| {
                scan_file(path, Some(*language)).map_err(|err| match err {
                    ScanFileError::Io { path, source } => SkippedFile::new(
                        path,
                        SkipReason::Unreadable { message: source.to_string() },
                    ),
                    ScanFileError::NonUtf8 { path } => SkippedFile::new(path, SkipReason::NonUtf8),
                    // Unreachable: the walk only collects known extensions.
                    ScanFileError::UnknownLanguage { path } => SkippedFile::new(
                        path,
                        SkipReason::Unreadable { message: "unknown language".to_owned() },
                    ),
                })
            })
            .collect();

        let mut files = Vec::with_capacity(scans.len());
        for scan in scans {
            match scan {
                Ok(file) => files.push(file),
                Err(skip) => skipped.push(skip),
            }
        }

        Ok(ScanReport::new(files, skipped))
    }

    fn collect_into(
        &self,
        dir: &Path,
        candidates: &mut Vec<(PathBuf, Language)>,
        skipped: &mut Vec<SkippedFile>,
    ) -> Result<(), TreeScanError> {
        let metadata = fs::symlink_metadata(dir)
            .map_err(|source| TreeScanError::Io { path: dir.to_path_buf(), source })?;
        if !metadata.is_dir() {
            return Err(TreeScanError::NotADirectory { path: dir.to_path_buf() });
        }

        let reader = fs::read_dir(dir)
            .map_err(|source| TreeScanError::Io { path: dir.to_path_buf(), source })?;

        let mut entries = Vec::new();
        for entry in reader {
            let entry =
                entry.map_err(|source| TreeScanError::Io { path: dir.to_path_buf(), source })?;
            entries.push(entry.path());
        }
        entries.sort();

        for path in entries {
            let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            if name.starts_with('.') {
                continue;
            }

            let metadata = fs::symlink_metadata(&path)
                .map_err(|source| TreeScanError::Io { path: path.clone(), source })?;

            if metadata.file_type().is_symlink() {
                skipped.push(SkippedFile::new(path, SkipReason::Symlink));
                continue;
            }

            if metadata.is_dir() {
                if SKIPPED_DIR_NAMES.contains(&name) {
                    continue;
                }
                self.collect_into(&path, candidates, skipped)?;
                continue;
            }

            if let Some(language) = Language::from_path(&path) {
                candidates.push((path, language));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
