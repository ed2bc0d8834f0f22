// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Siren-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Siren and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mermaid-ish block inspection: kind classification and front matter.

pub mod mermaid;

pub use mermaid::{detect_kind, front_matter_title};
