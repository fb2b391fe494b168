use std::fmt;

use indexmap::IndexMap;
use thiserror::Error;

use crate::models::Item;
use crate::money::{AmountError, MAX_AMOUNT, Money};

pub const MAX_QUANTITY: u32 = 100_000;

/// The four inputs of the entry form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Brand,
    Quantity,
    Price,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Brand, Field::Quantity, Field::Price];

    pub fn next(self) -> Field {
        match self {
            Field::Name => Field::Brand,
            Field::Brand => Field::Quantity,
            Field::Quantity => Field::Price,
            Field::Price => Field::Name,
        }
    }

    pub fn previous(self) -> Field {
        match self {
            Field::Name => Field::Price,
            Field::Brand => Field::Name,
            Field::Quantity => Field::Brand,
            Field::Price => Field::Quantity,
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "what is the product name?",
            Field::Brand => "what is the brand of the product?",
            Field::Quantity => "0",
            Field::Price => "0,00",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "product_name",
            Field::Brand => "product_brand",
            Field::Quantity => "product_quantity",
            Field::Price => "product_price",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Required field")]
    Required,

    #[error("Expected a number")]
    NotANumber,

    #[error("Must be greater than zero")]
    NotPositive,

    #[error("Quantity is too large")]
    QuantityTooLarge,

    #[error("Invalid price")]
    InvalidPrice,

    #[error("Price is too large")]
    PriceTooLarge,

    #[error("Stored line total cannot be read")]
    UnreadableLineTotal,
}

/// Errors keyed by field, kept in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(IndexMap<Field, FieldError>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn remove(&mut self, field: Field) {
        self.0.shift_remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }

    fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, error)| format!("{field}: {error}"))
            .collect();
        f.write_str(&parts.join(", "))
    }
}

/// Raw text as typed into the entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemForm {
    pub product_name: String,
    pub product_brand: String,
    pub product_quantity: String,
    pub product_price: String,
}

impl ItemForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.product_name,
            Field::Brand => &self.product_brand,
            Field::Quantity => &self.product_quantity,
            Field::Price => &self.product_price,
        }
    }

    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.product_name,
            Field::Brand => &mut self.product_brand,
            Field::Quantity => &mut self.product_quantity,
            Field::Price => &mut self.product_price,
        }
    }

    pub fn clear(&mut self) {
        *self = ItemForm::default();
    }

    pub fn is_blank(&self) -> bool {
        Field::ALL
            .iter()
            .all(|field| self.value(*field).trim().is_empty())
    }
}

/// Check every field of the form and build the item it describes.
///
/// All fields are checked, so the error set names every offending field at
/// once rather than stopping at the first.
pub fn validate(form: &ItemForm) -> Result<Item, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = required_text(&form.product_name, Field::Name, &mut errors);
    let brand = required_text(&form.product_brand, Field::Brand, &mut errors);

    let quantity = match parse_quantity(&form.product_quantity) {
        Ok(quantity) => Some(quantity),
        Err(error) => {
            errors.insert(Field::Quantity, error);
            None
        }
    };

    let price = match parse_price(&form.product_price) {
        Ok(price) => Some(price),
        Err(error) => {
            errors.insert(Field::Price, error);
            None
        }
    };

    match (name, brand, quantity, price) {
        (Some(name), Some(brand), Some(quantity), Some(price)) => {
            Ok(Item::new(name, brand, quantity, price))
        }
        _ => Err(errors),
    }
}

fn required_text(value: &str, field: Field, errors: &mut FieldErrors) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        errors.insert(field, FieldError::Required);
        None
    } else {
        Some(value.to_string())
    }
}

pub(crate) fn parse_quantity(text: &str) -> Result<u32, FieldError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(FieldError::Required);
    }
    if !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(FieldError::NotANumber);
    }

    // all digits, so the only parse failure left is overflow
    let quantity = text
        .parse::<u32>()
        .map_err(|_| FieldError::QuantityTooLarge)?;

    match quantity {
        0 => Err(FieldError::NotPositive),
        q if q > MAX_QUANTITY => Err(FieldError::QuantityTooLarge),
        q => Ok(q),
    }
}

pub(crate) fn parse_price(text: &str) -> Result<Money, FieldError> {
    match Money::parse(text) {
        Ok(price) if price > MAX_AMOUNT => Err(FieldError::PriceTooLarge),
        Ok(price) => Ok(price),
        Err(AmountError::Empty) => Err(FieldError::Required),
        Err(AmountError::TooLarge) => Err(FieldError::PriceTooLarge),
        Err(AmountError::InvalidCharacter(_) | AmountError::NoDigits) => {
            Err(FieldError::InvalidPrice)
        }
    }
}
