use tracing::info;

use crate::error::Result;
use crate::models::Item;
use crate::models::api::ShoppingList;
use crate::store::ItemRepository;

/// Build the list view from whatever is stored
/// Nothing stored yet gives an empty list
pub async fn load_shopping_list<R: ItemRepository>(repo: &R) -> Result<ShoppingList> {
    let items = repo.load().await?.unwrap_or_default();

    info!(count = items.len(), "Loaded shopping list");
    Ok(ShoppingList::from_items(&items))
}

/// Append a validated item to the stored collection
/// Earlier items are written back unchanged; returns the updated list view
pub async fn add_item<R: ItemRepository>(repo: &R, item: Item) -> Result<ShoppingList> {
    let items = match repo.load().await? {
        Some(mut items) => {
            items.push(item);
            items
        }
        None => vec![item],
    };

    repo.save(&items).await?;

    info!(
        count = items.len(),
        product = %items[items.len() - 1].product_name,
        "Added item to shopping list"
    );
    Ok(ShoppingList::from_items(&items))
}

/// Remove the stored collection
/// Returns whether there was anything to remove
pub async fn clear_items<R: ItemRepository>(repo: &R) -> Result<bool> {
    let removed = repo.clear().await?;

    info!(removed, "Cleared shopping list");
    Ok(removed)
}
