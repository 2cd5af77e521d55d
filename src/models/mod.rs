pub mod exam;
pub mod grade;
pub mod loaders;

pub use exam::{Choice, ExamData, ExamInfo, StudentRecord};
pub use grade::{GradeResult, LetterGrade, Score, StudentOutcome};
pub use loaders::{load_exam_data, parse_exam_data};
