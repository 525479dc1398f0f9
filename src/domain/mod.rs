//! Domain layer: validated pagination windows and discriminated filters.

pub mod filter;
pub mod page;

pub use filter::{CallFilter, Filter, OperatorFilter};
pub use page::Page;
