//! Error types for planning input and output.

use thiserror::Error;

/// Errors raised while building or presenting a production plan.
///
/// The optimizer itself is total: every variant here belongs to validation,
/// I/O or rendering around it.
#[derive(Debug, Error)]
pub enum PlanError {
    /// A product that consumes neither resource.
    #[error("product '{0}' must consume at least one resource")]
    IdleProduct(String),

    /// Only one or two product types are supported.
    #[error("expected 1 or 2 products, got {0}")]
    ProductCount(usize),

    #[error("{field} must be between 0 and {max}, got {value}")]
    ValueOutOfRange {
        field: &'static str,
        value: i64,
        max: u32,
    },

    #[error("product name must be 1 to {max} characters, got {len}")]
    NameLength { len: usize, max: usize },

    /// A per-unit rate larger than the whole budget of that resource.
    #[error("{resource} rate of '{product}' ({rate}) exceeds the available {available}")]
    RateExceedsBudget {
        product: String,
        resource: &'static str,
        rate: u32,
        available: u32,
    },

    #[error("input closed before a valid value was entered")]
    InputClosed,

    #[error("plot would be {cells} cells wide, limit is {limit}")]
    PlotTooLarge { cells: u32, limit: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid scenario file: {0}")]
    Scenario(#[from] serde_yaml::Error),

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, PlanError>;
