pub mod report_writer;
pub mod reporter;
pub mod scorer;
pub mod summary;
pub mod validator;

pub use report_writer::ReportWriter;
pub use reporter::render;
pub use scorer::{grade_student, score};
pub use summary::{summarize, SummaryStats};
pub use validator::{validate, ValidSubmission, ValidationError};
