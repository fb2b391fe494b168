mod item_controller;

pub use item_controller::{add_item, clear_items, load_shopping_list};
