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
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug)]
pub enum ReportWriteError {
    Io { path: PathBuf, source: io::Error },
    NoParent { path: PathBuf },
}

impl fmt::Display for ReportWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {}: {source}", path.display()),
            Self::NoParent { path } => write!(f, "path has no parent: {}", path.display()),
        }
    }
}

impl std::error::Error for ReportWriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::NoParent { .. } => None,
        }
    }
}

/// Write a rendered report via a temp file in the target directory plus a
/// rename, so readers never observe a half-written file.
pub fn write_report_atomic(path: &Path, contents: &[u8]) -> Result<(), ReportWriteError> {
    let parent = match path.parent() {
        // A bare file name has an empty parent; that means the current dir.
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
        Some(parent) => parent.to_path_buf(),
        None => return Err(ReportWriteError::NoParent { path: path.to_path_buf() }),
    };
    fs::create_dir_all(&parent)
        .map_err(|source| ReportWriteError::Io { path: parent.clone(), source })?;

    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
    let tmp_path = parent.join(format!(".siren-report-{}-{nanos}.tmp", std::process::id()));

    let result = (|| -> Result<(), ReportWriteError> {
        let mut tmp = fs::File::create(&tmp_path)
            .map_err(|source| ReportWriteError::Io { path: tmp_path.clone(), source })?;
        tmp.write_all(contents)
            .map_err(|source| ReportWriteError::Io { path: tmp_path.clone(), source })?;
        tmp.flush().map_err(|source| ReportWriteError::Io { path: tmp_path.clone(), source })?;
        drop(tmp);

        fs::rename(&tmp_path, path)
            .map_err(|source| ReportWriteError::Io { path: path.to_path_buf(), source })
    })();

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}
