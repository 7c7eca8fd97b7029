//! Core business logic abstractions

pub mod chart;
pub mod config;
pub mod frontier;
pub mod log;
pub mod market_data;
pub mod nasdaq100;
pub mod overlay;
pub mod security;

// Re-export main types for cleaner imports
pub use chart::{FrontierCanvas, MarkerColor, MarkerStyle};
pub use frontier::{Frontier, FrontierInputs, Objective, Performance};
pub use market_data::{MarketDataProvider, PriceTable};
pub use overlay::{NamedPortfolioPoint, OverlayOptions, OverlayResult, RandomPortfolioCloud};
pub use security::{DirectoryError, Security, SecurityDirectory};
