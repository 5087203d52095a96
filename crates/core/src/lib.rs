//! `bizgrid-core`: building blocks shared by the grid and its hosts.
//!
//! This crate contains **pure** primitives (no IO, no rendering): cell values,
//! the row abstraction and the error model.

pub mod action;
pub mod error;
pub mod record;
pub mod value;

pub use action::RowAction;
pub use error::{GridError, GridResult};
pub use record::{GridRow, Record};
pub use value::CellValue;
