pub mod batch;
pub mod record_dispatcher;

pub use batch::{process_packages, write_summary, BatchFailure, BatchReport, OutputFormat};
pub use record_dispatcher::read_package;
