pub mod config;
pub mod error;
pub mod patch;
pub mod report;
pub mod runner;

pub use config::PrepConfig;
pub use error::PrepError;
pub use patch::{exclude_class, ExcludeOutcome};
pub use report::{DropCounts, PrepReport};
pub use runner::run;
