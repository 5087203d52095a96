//! `bizgrid-console`: a terminal list page built on the data grid.
//!
//! **Responsibility:** host the grid the way a list page would: supply rows and
//! columns, forward user input as grid commands, render the resulting view and
//! carry out row actions.

pub mod config;
pub mod dataset;
pub mod render;
pub mod session;

pub use config::ConsoleConfig;
pub use dataset::{Dataset, Sample};
pub use session::{Flow, Input, Session, parse_line};
