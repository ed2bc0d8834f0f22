// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Siren-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Siren and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Filesystem access: walking source trees, reading source units, writing
//! report files.

pub mod report_file;
pub mod source_tree;

pub use report_file::{write_report_atomic, ReportWriteError};
pub use source_tree::{scan_file, ScanFileError, SourceTree, TreeScanError};
