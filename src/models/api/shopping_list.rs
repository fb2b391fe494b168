use crate::models::Item;
use crate::money::Money;

/// One displayed row of the shopping list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingListLine {
    pub position: usize,
    pub product_name: String,
    pub product_brand: String,
    pub product_quantity: u32,
    pub line_total: Money,
}

impl ShoppingListLine {
    /// Two-digit, 1-based row label: `01`, `02`, ..., `10`, `11`.
    pub fn label(&self) -> String {
        format!("{:02}", self.position)
    }

    /// Unit price times quantity, rendered as currency.
    pub fn formatted_price(&self) -> String {
        self.line_total.formatted()
    }
}

/// The list view: displayed rows plus the running total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingList {
    pub lines: Vec<ShoppingListLine>,
}

impl ShoppingList {
    pub fn from_items(items: &[Item]) -> Self {
        let lines = items
            .iter()
            .enumerate()
            .map(|(index, item)| ShoppingListLine {
                position: index + 1,
                product_name: item.product_name.clone(),
                product_brand: item.product_brand.clone(),
                product_quantity: item.product_quantity,
                line_total: item.line_total(),
            })
            .collect();

        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total(&self) -> Money {
        self.lines.iter().map(|line| line.line_total).sum()
    }

    pub fn formatted_total(&self) -> String {
        self.total().formatted()
    }
}
