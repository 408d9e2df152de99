//! Record types for the two-table seed model.

pub mod record;

pub use record::{JoinedRow, PrimaryRecord, RelatedRecord};
