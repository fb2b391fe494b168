//! Access to the persisted item collection.
//!
//! The collection is a single JSON array of [`ItemRecord`]s stored under one
//! key. Repositories hand out typed [`Item`]s and check every record on read.

mod in_memory;
mod sqlite;

pub use in_memory::InMemoryItemRepository;
pub use sqlite::SqliteItemRepository;

use crate::error::{Result, ShopListError};
use crate::models::{Item, ItemRecord};

#[allow(async_fn_in_trait)]
pub trait ItemRepository {
    /// `None` when nothing has been stored yet.
    async fn load(&self) -> Result<Option<Vec<Item>>>;

    /// Replace the whole collection.
    async fn save(&self, items: &[Item]) -> Result<()>;

    /// Drop the collection. Returns whether anything was stored.
    async fn clear(&self) -> Result<bool>;
}

pub(crate) fn encode(items: &[Item]) -> Result<String> {
    let records: Vec<ItemRecord> = items.iter().map(ItemRecord::from).collect();
    Ok(serde_json::to_string(&records)?)
}

pub(crate) fn decode(raw: &str) -> Result<Vec<Item>> {
    let records: Vec<ItemRecord> = serde_json::from_str(raw)?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            record
                .into_item()
                .map_err(|(field, reason)| ShopListError::CorruptCollection {
                    index,
                    field,
                    reason,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_fixtures::{beans, rice};
    use crate::validation::{Field, FieldError};
    use rstest::*;

    #[rstest]
    fn test_encode_then_decode_keeps_items(rice: Item, beans: Item) {
        let raw = encode(&[rice.clone(), beans.clone()]).expect("Failed to encode");

        let items = decode(&raw).expect("Failed to decode");

        assert_eq!(items, vec![rice, beans]);
    }

    #[test]
    fn test_decode_raw_entry_from_form() {
        let raw = r#"[{"product_name":"Arroz","product_brand":"Tio João","product_quantity":2,"product_price":"250"}]"#;

        let items = decode(raw).expect("Failed to decode");

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].line_total().formatted(), "R$\u{a0}5,00");
    }

    #[test]
    fn test_decode_not_json() {
        let result = decode("not json");

        assert!(matches!(result, Err(ShopListError::Serialization(_))));
    }

    #[test]
    fn test_decode_wrong_shape() {
        let result = decode(r#"{"product_name":"Arroz"}"#);

        assert!(matches!(result, Err(ShopListError::Serialization(_))));
    }

    #[test]
    fn test_decode_reports_offending_record() {
        let raw = r#"[
            {"product_name":"Arroz","product_brand":"Tio João","product_quantity":2,"product_price":"250"},
            {"product_name":"Feijão","product_brand":"Camil","product_quantity":1,"product_price":"oito"}
        ]"#;

        match decode(raw) {
            Err(ShopListError::CorruptCollection {
                index,
                field,
                reason,
            }) => {
                assert_eq!(index, 1);
                assert_eq!(field, Field::Price);
                assert_eq!(reason, FieldError::InvalidPrice);
            }
            other => panic!("Expected CorruptCollection error, got {other:?}"),
        }
    }
}
