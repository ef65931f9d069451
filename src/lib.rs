pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{FileReferenceData, JsonOrderStore};
pub use config::CliConfig;
pub use core::orders::OrderService;
pub use core::quote::QuoteEngine;
pub use core::rates::{compute_rates, resolve_zone};
pub use utils::error::{QuoteError, Result};
