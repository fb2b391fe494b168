mod item;

pub mod api;

#[cfg(test)]
pub mod test_fixtures;

pub use item::{Item, ItemRecord, Price};
