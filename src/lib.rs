pub mod config;
pub mod pki;
pub mod report;
pub mod scanner;
pub mod telemetry;

pub use report::{MatchRecord, ScanReport};
pub use scanner::{ScanError, Scanner};
