//! Keeps or deletes conditional blocks according to an operator decision.

use log::debug;

use crate::answer::Decision;
use crate::error::Result;
use crate::matcher::Tag;
use crate::replace::{apply_replacement, FileSet, ReplacementRule};

/// How a decision maps onto a conditional block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    /// "yes" removes the block, "no" keeps its body
    #[default]
    Normal,
    /// "yes" keeps the body, "no" removes the block
    Inverse,
}

/// What happens to the blocks of one tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockAction {
    /// Remove only the two markers
    StripMarkers,
    /// Remove the markers and everything between them
    DeleteBlock,
}

impl BlockAction {
    pub fn for_decision(decision: Decision, polarity: Polarity) -> Self {
        match (polarity, decision) {
            (Polarity::Normal, Decision::Negative) | (Polarity::Inverse, Decision::Affirmative) => {
                BlockAction::StripMarkers
            }
            (Polarity::Normal, Decision::Affirmative) | (Polarity::Inverse, Decision::Negative) => {
                BlockAction::DeleteBlock
            }
        }
    }
}

/// Resolves every `tag` block of the project.
///
/// Stripping runs one literal substitution per marker; deletion runs a single
/// substitution with the block pattern.
pub fn resolve_tag(
    files: &FileSet,
    tag: &Tag,
    decision: Decision,
    polarity: Polarity,
) -> Result<BlockAction> {
    let action = BlockAction::for_decision(decision, polarity);
    debug!("Resolving tag {tag} with {action:?}");

    match action {
        BlockAction::StripMarkers => {
            let (open, close) = tag.markers();
            apply_replacement(files, &ReplacementRule::literal(open, ""), None)?;
            apply_replacement(files, &ReplacementRule::literal(close, ""), None)?;
        }
        BlockAction::DeleteBlock => {
            let rule = ReplacementRule::regex(tag.between_pattern()?, "");
            apply_replacement(files, &rule, None)?;
        }
    }
    Ok(action)
}
