//! Revenue-maximizing production planning for one or two products sharing
//! raw material and labor.

pub mod capacity;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod plot;
pub mod report;
pub mod scip;
pub mod search;

pub use capacity::compute_max_count;
pub use error::PlanError;
pub use model::{
    Combination, OptimizationResult, Product, ProductMix, ResourceBudget, ResourceUsage,
};
pub use search::find_optimal_combinations;
