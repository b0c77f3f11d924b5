pub mod calculations;
pub mod error;
pub mod models;

pub use calculations::{AmortizationEngine, BracketTaxEngine, compute_amortization, compute_tax};
pub use error::InvalidInputError;
pub use models::*;
