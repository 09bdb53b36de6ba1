pub mod approaches;
pub mod entropy;
pub mod error;
pub mod traits;

pub use error::EstimatorError;
pub use traits::{GlobalValue, LocalValues, ScaleValues};
