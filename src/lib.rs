pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod workflow;

pub use config::Config;
pub use db::{connect, Repository};
pub use domain::{JoinedRow, PrimaryRecord, RelatedRecord};
pub use error::StoreError;
pub use workflow::run;
