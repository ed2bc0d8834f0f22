// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Siren-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Siren and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use regex::RegexBuilder;

use crate::model::{DiagramBlock, FileScan, ScanReport};

/// Fuzzy matches below this ratio are noise, not results.
const FUZZY_SCORE_CUTOFF: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockSearchMode {
    Substring,
    Regex,
    Fuzzy,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockMatch<'a> {
    pub file: &'a FileScan,
    pub block: &'a DiagramBlock,
    /// Only fuzzy matches carry a score (0–100).
    pub score: Option<f64>,
}

/// Search blocks by anchor name, title, and body.
///
/// Substring and regex hits come back in report order; fuzzy hits are ranked
/// by ratio against the anchor name (title as fallback), best first.
pub fn block_search<'a>(
    report: &'a ScanReport,
    needle: &str,
    mode: BlockSearchMode,
    case_insensitive: bool,
) -> Result<Vec<BlockMatch<'a>>, regex::Error> {
    match mode {
        BlockSearchMode::Substring => {
            let needle_folded =
                if case_insensitive { needle.to_lowercase() } else { needle.to_owned() };
            Ok(report
                .iter_blocks()
                .filter(|(_, block)| {
                    haystacks(block).any(|text| {
                        if case_insensitive {
                            text.to_lowercase().contains(&needle_folded)
                        } else {
                            text.contains(needle_folded.as_str())
                        }
                    })
                })
                .map(|(file, block)| BlockMatch { file, block, score: None })
                .collect())
        }
        BlockSearchMode::Regex => {
            let regex = RegexBuilder::new(needle).case_insensitive(case_insensitive).build()?;
            Ok(report
                .iter_blocks()
                .filter(|(_, block)| haystacks(block).any(|text| regex.is_match(text)))
                .map(|(file, block)| BlockMatch { file, block, score: None })
                .collect())
        }
        BlockSearchMode::Fuzzy => {
            let mut matches: Vec<BlockMatch<'a>> = report
                .iter_blocks()
                .filter_map(|(file, block)| {
                    let target = block.anchor().map(|decl| decl.name()).or(block.title())?;
                    let score = fuzzy_ratio(needle, target, case_insensitive);
                    if score < FUZZY_SCORE_CUTOFF {
                        return None;
                    }
                    Some(BlockMatch { file, block, score: Some(score) })
                })
                .collect();

            // Stable sort keeps report order among equal scores.
            matches.sort_by(|a, b| {
                b.score
                    .partial_cmp(&a.score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            Ok(matches)
        }
    }
}

fn haystacks<'a>(block: &'a DiagramBlock) -> impl Iterator<Item = &'a str> {
    block
        .anchor()
        .map(|decl| decl.name())
        .into_iter()
        .chain(block.title())
        .chain(std::iter::once(block.body()))
}

fn fuzzy_ratio(needle: &str, target: &str, case_insensitive: bool) -> f64 {
    if case_insensitive {
        let needle = needle.to_lowercase();
        let target = target.to_lowercase();
        rapidfuzz::fuzz::ratio(needle.chars(), target.chars())
    } else {
        rapidfuzz::fuzz::ratio(needle.chars(), target.chars())
    }
}
