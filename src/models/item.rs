use serde::{Deserialize, Serialize};

use crate::money::{MAX_AMOUNT, Money};
use crate::validation::{Field, FieldError, MAX_QUANTITY};

/// How an item's price is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Price {
    /// Canonical unit price, as entered in the form.
    Unit(Money),
    /// A line total left behind by an older version of the list, kept with
    /// the exact text it was stored as.
    LineTotal { amount: Money, stored: String },
}

/// A validated shopping-list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub product_name: String,
    pub product_brand: String,
    pub product_quantity: u32,
    pub price: Price,
}

impl Item {
    pub fn new(
        product_name: impl Into<String>,
        product_brand: impl Into<String>,
        product_quantity: u32,
        unit_price: Money,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            product_brand: product_brand.into(),
            product_quantity,
            price: Price::Unit(unit_price),
        }
    }

    pub fn line_total(&self) -> Money {
        match &self.price {
            Price::Unit(unit_price) => unit_price.times(self.product_quantity),
            Price::LineTotal { amount, .. } => *amount,
        }
    }
}

/// Stored shape of an item inside the persisted collection.
///
/// `product_price` is written as the plain unit amount (`"2,50"`). Records
/// whose price carries the currency symbol hold a line total instead; that
/// total is displayed as is and written back with its original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub product_name: String,
    pub product_brand: String,
    pub product_quantity: u32,
    pub product_price: String,
}

impl ItemRecord {
    /// Check the record against the item schema.
    pub fn into_item(self) -> Result<Item, (Field, FieldError)> {
        if self.product_name.trim().is_empty() {
            return Err((Field::Name, FieldError::Required));
        }
        if self.product_brand.trim().is_empty() {
            return Err((Field::Brand, FieldError::Required));
        }

        let quantity = match self.product_quantity {
            0 => return Err((Field::Quantity, FieldError::NotPositive)),
            q if q > MAX_QUANTITY => {
                return Err((Field::Quantity, FieldError::QuantityTooLarge));
            }
            q => q,
        };

        let price = if Money::is_formatted(&self.product_price) {
            let amount = Money::parse(&self.product_price)
                .map_err(|_| (Field::Price, FieldError::UnreadableLineTotal))?;
            if amount > MAX_AMOUNT.times(quantity) {
                return Err((Field::Price, FieldError::PriceTooLarge));
            }
            Price::LineTotal {
                amount,
                stored: self.product_price,
            }
        } else {
            let unit_price = Money::parse(&self.product_price)
                .map_err(|_| (Field::Price, FieldError::InvalidPrice))?;
            if unit_price > MAX_AMOUNT {
                return Err((Field::Price, FieldError::PriceTooLarge));
            }
            Price::Unit(unit_price)
        };

        Ok(Item {
            product_name: self.product_name,
            product_brand: self.product_brand,
            product_quantity: quantity,
            price,
        })
    }
}

impl From<&Item> for ItemRecord {
    fn from(item: &Item) -> Self {
        let product_price = match &item.price {
            Price::Unit(unit_price) => unit_price.plain(),
            Price::LineTotal { stored, .. } => stored.clone(),
        };

        Self {
            product_name: item.product_name.clone(),
            product_brand: item.product_brand.clone(),
            product_quantity: item.product_quantity,
            product_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn record(quantity: u32, price: &str) -> ItemRecord {
        ItemRecord {
            product_name: "Café".to_string(),
            product_brand: "Pilão".to_string(),
            product_quantity: quantity,
            product_price: price.to_string(),
        }
    }

    #[test]
    fn test_item_line_total() {
        let item = Item::new("Café", "Pilão", 3, Money::from_centavos(1599));
        assert_eq!(item.line_total(), Money::from_centavos(4797));
    }

    #[test]
    fn test_record_json_field_names() {
        let item = Item::new("Café", "Pilão", 2, Money::from_centavos(250));
        let json = serde_json::to_value(ItemRecord::from(&item)).expect("Failed to serialize");

        assert_eq!(
            json,
            serde_json::json!({
                "product_name": "Café",
                "product_brand": "Pilão",
                "product_quantity": 2,
                "product_price": "2,50",
            })
        );
    }

    #[rstest]
    #[case("250", 250)]
    #[case("2,50", 250)]
    fn test_record_into_item_unit_price(#[case] price: &str, #[case] unit_centavos: i64) {
        let item = record(2, price).into_item().expect("Record should be valid");

        assert_eq!(item.price, Price::Unit(Money::from_centavos(unit_centavos)));
        assert_eq!(item.product_quantity, 2);
    }

    #[rstest]
    #[case("R$ 5,00", 500)]
    #[case("R$ 5,01", 501)]
    #[case("R$\u{a0}5,01", 501)]
    fn test_record_with_symbol_keeps_line_total(
        #[case] price: &str,
        #[case] total_centavos: i64,
    ) {
        let item = record(2, price).into_item().expect("Record should be valid");

        assert_eq!(item.line_total(), Money::from_centavos(total_centavos));
        assert_eq!(ItemRecord::from(&item).product_price, price);
    }

    #[test]
    fn test_record_with_unreadable_line_total() {
        assert_eq!(
            record(2, "R$ NaN").into_item(),
            Err((Field::Price, FieldError::UnreadableLineTotal))
        );
    }

    #[rstest]
    #[case(record(0, "1,00"), Field::Quantity, FieldError::NotPositive)]
    #[case(record(1, "abc"), Field::Price, FieldError::InvalidPrice)]
    #[case(record(1, ""), Field::Price, FieldError::InvalidPrice)]
    #[case(
        record(MAX_QUANTITY + 1, "1,00"),
        Field::Quantity,
        FieldError::QuantityTooLarge
    )]
    #[case(record(1, "100.000.000,01"), Field::Price, FieldError::PriceTooLarge)]
    fn test_record_into_item_rejects(
        #[case] record: ItemRecord,
        #[case] field: Field,
        #[case] error: FieldError,
    ) {
        assert_eq!(record.into_item(), Err((field, error)));
    }

    #[test]
    fn test_record_into_item_requires_name_and_brand() {
        let mut nameless = record(1, "1,00");
        nameless.product_name = " ".to_string();
        assert_eq!(nameless.into_item(), Err((Field::Name, FieldError::Required)));

        let mut brandless = record(1, "1,00");
        brandless.product_brand = String::new();
        assert_eq!(brandless.into_item(), Err((Field::Brand, FieldError::Required)));
    }
}
