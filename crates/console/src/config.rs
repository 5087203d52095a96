//! Console configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `BIZGRID_DATASET` | unset | JSON file (array of objects) to list instead of a sample |
//! | `BIZGRID_SAMPLE` | `suppliers` | Built-in sample: `suppliers` or `orders` |
//! | `BIZGRID_PAGE_SIZE` | `50` | Initial page size |
//! | `BIZGRID_VIEWPORT_WIDTH` | `120` | Width handed to the layout policy |
//! | `BIZGRID_BREAKPOINT` | `80` | Widths below this render as cards |
//!
//! Invalid values fall back to the default with a warning.

use std::path::PathBuf;
use std::str::FromStr;

use bizgrid_grid::DEFAULT_PAGE_SIZE;

use crate::dataset::Sample;

/// Terminal widths are measured in columns, so the console uses a much
/// smaller breakpoint than the grid's pixel-oriented default.
pub const DEFAULT_CONSOLE_BREAKPOINT: u32 = 80;

pub const DEFAULT_VIEWPORT_WIDTH: u32 = 120;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub dataset: Option<PathBuf>,
    pub sample: Sample,
    pub page_size: usize,
    pub viewport_width: u32,
    pub breakpoint: u32,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            dataset: None,
            sample: Sample::Suppliers,
            page_size: DEFAULT_PAGE_SIZE,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            breakpoint: DEFAULT_CONSOLE_BREAKPOINT,
        }
    }
}

impl ConsoleConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let page_size = parse_or(&lookup, "BIZGRID_PAGE_SIZE", defaults.page_size);
        let page_size = if page_size == 0 {
            tracing::warn!("BIZGRID_PAGE_SIZE must be positive; using {}", defaults.page_size);
            defaults.page_size
        } else {
            page_size
        };

        Self {
            dataset: lookup("BIZGRID_DATASET")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            sample: parse_or(&lookup, "BIZGRID_SAMPLE", defaults.sample),
            page_size,
            viewport_width: parse_or(&lookup, "BIZGRID_VIEWPORT_WIDTH", defaults.viewport_width),
            breakpoint: parse_or(&lookup, "BIZGRID_BREAKPOINT", defaults.breakpoint),
        }
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + core::fmt::Debug,
{
    match lookup(name) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("{name}={raw:?} is invalid; using {default:?}");
            default
        }),
    }
}
