// regenchoice/src/commands/remove_item.rs

use std::path::Path;

use regenchoice_core::domain::DomainError;
use regenchoice_core::domain::question::remove_item;

use super::{Project, edit_question};

/// `position` is 1-based, as in validation messages.
pub async fn execute(project_dir: &Path, id: u32, position: usize) -> anyhow::Result<()> {
    let project = Project::open(project_dir)?;

    let count = edit_question(&project, id, |q| {
        let index = position.checked_sub(1).ok_or(DomainError::InvalidItemIndex {
            index: position,
            len: q.item_count as usize,
        })?;
        match remove_item(q, index) {
            Ok(count) => Ok(count),
            Err(DomainError::InvalidItemIndex { len, .. }) => {
                Err(DomainError::InvalidItemIndex { index: position, len }.into())
            }
            Err(other) => Err(other.into()),
        }
    })
    .await?;

    println!("➖ Removed item {} from question {} ({} left)", position, id, count);
    Ok(())
}
