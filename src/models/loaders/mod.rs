pub mod json_loader;

pub use json_loader::{load_exam_data, parse_exam_data};
