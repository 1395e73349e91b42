//! Seeding — one-shot batch import of a menu into a repository.

use quickbite_domain::error::QuickBiteError;
use quickbite_domain::menu_item::{MenuItem, NewMenuItem};

use crate::ports::MenuRepository;

/// Insert every item into `repo`, one at a time and in order.
///
/// Source ids are dropped so the target store assigns its own. Nothing is
/// deduplicated: seeding the same document twice stores every item twice.
/// The first failure aborts the run; items inserted before it stay stored.
///
/// # Errors
///
/// Returns the first error reported by the repository.
pub async fn seed_menu<R: MenuRepository>(
    repo: &R,
    items: Vec<MenuItem>,
) -> Result<usize, QuickBiteError> {
    tracing::info!(count = items.len(), "start seeding items");

    let mut inserted = 0;
    for item in items {
        let source_id = item.id;
        let created = repo.create(NewMenuItem::from(item)).await?;
        tracing::debug!(%source_id, id = %created.id, "seeded item");
        inserted += 1;
    }

    tracing::info!(inserted, "seeding finished");
    Ok(inserted)
}
