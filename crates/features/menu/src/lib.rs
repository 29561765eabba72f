//! # Menu
//!
//! Helpers behind the menu and ingredient admin screens.
//!
//! * [`price`]: minor-unit prices, locale-aware formatting and parsing of user input.
//! * [`filter`]: ingredient list filtering by category checkboxes and a search term.
//! * [`sections`]: menu items grouped under their sections in display order.

mod error;
pub mod filter;
pub mod price;
pub mod sections;

pub use crate::error::{MenuError, MenuErrorExt};
pub use crate::price::{Currency, Price, format_price, parse_price};
