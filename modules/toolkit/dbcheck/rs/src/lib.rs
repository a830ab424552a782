pub mod check;
pub mod cleanup;
pub mod config;
pub mod console;
pub mod defect;
pub mod record_db;
pub mod scan;
pub mod summary;

pub use check::{check_database, check_file, check_text};
pub use config::{CheckConfig, Delimiter};
pub use console::Console;
pub use defect::{Defect, Defects};
pub use record_db::RecordDb;
pub use summary::{FileOutcome, FileSummary, RunSummary};
