/*!
 * Process Module
 * Descriptor model, per-run execution state, and input validation
 */

pub mod types;
pub mod validation;

// Re-export for convenience
pub use types::{ProcessDescriptor, ProcessResult, ProcessRow, RunState, ValidationError};
pub use validation::validate;
