//! 答卷校验服务 - 业务能力层
//!
//! 只负责检查单份答卷，不关心评分和报告

use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::models::exam::{Choice, StudentRecord};

/// 必填字段，按检查顺序排列
const REQUIRED_FIELDS: [&str; 3] = ["student_id", "student_name", "answers"];

/// 单份答卷的校验失败原因
///
/// 这类错误不会上抛到顶层，由流程层转换成报告里的警告行
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// 记录本身不是 JSON 对象
    #[error("Invalid student record: expected an object")]
    NotAnObject,
    /// 缺少必填字段
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },
    /// 字段存在但类型不对（包括显式 null）
    #[error("Invalid field type: {field}")]
    InvalidFieldType { field: &'static str },
    /// 答案数量不对
    #[error("Expected {expected} answers, got {actual}")]
    AnswerCount { expected: usize, actual: usize },
    /// 答案不在 A/B/C/D 之内（index 从 1 开始）
    #[error("Invalid answer '{value}' at question {index}")]
    InvalidAnswer { index: usize, value: String },
}

/// 通过校验的答卷
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission<'a> {
    pub student_id: &'a str,
    pub student_name: &'a str,
    pub answers: Vec<Choice>,
}

/// 校验单份答卷
///
/// 检查顺序：记录是对象 → 必填字段都在 → 字段类型 → 答案数量 →
/// 每个答案的取值（只报告第一个非法答案）。
/// 键存在但值为 `null` 算"存在"，按类型错误报告。
pub fn validate(
    student: &StudentRecord,
    total_questions: usize,
) -> Result<ValidSubmission<'_>, ValidationError> {
    if !student.is_object() {
        return Err(ValidationError::NotAnObject);
    }
    for field in REQUIRED_FIELDS {
        if student.field(field).is_none() {
            return Err(ValidationError::MissingField { field });
        }
    }

    let student_id = string_field(student, "student_id")?;
    let student_name = string_field(student, "student_name")?;
    let raw_answers = student
        .field("answers")
        .and_then(JsonValue::as_array)
        .ok_or(ValidationError::InvalidFieldType { field: "answers" })?;

    if raw_answers.len() != total_questions {
        return Err(ValidationError::AnswerCount {
            expected: total_questions,
            actual: raw_answers.len(),
        });
    }

    let answers = raw_answers
        .iter()
        .enumerate()
        .map(|(i, value)| {
            Choice::from_json(value).ok_or_else(|| ValidationError::InvalidAnswer {
                index: i + 1,
                value: display_value(value),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ValidSubmission {
        student_id,
        student_name,
        answers,
    })
}

fn string_field<'a>(
    student: &'a StudentRecord,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    student
        .field(field)
        .and_then(JsonValue::as_str)
        .ok_or(ValidationError::InvalidFieldType { field })
}

/// 字符串原样输出，其他 JSON 值输出 JSON 文本
fn display_value(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_submission() {
        let record = StudentRecord::new("S001", "Ann", &["A", "B", "C", "D"]);
        let submission = validate(&record, 4).unwrap();
        assert_eq!(submission.student_id, "S001");
        assert_eq!(submission.student_name, "Ann");
        assert_eq!(submission.answers, Choice::ALL.to_vec());
    }

    #[test]
    fn test_missing_fields_in_order() {
        // 先报告 student_id
        let record = StudentRecord::from_json(json!({"student_name": "Ann"}));
        assert_eq!(
            validate(&record, 1).unwrap_err().to_string(),
            "Missing required field: student_id"
        );

        let record = StudentRecord::from_json(json!({"student_id": "S001", "answers": ["A"]}));
        assert_eq!(
            validate(&record, 1).unwrap_err(),
            ValidationError::MissingField {
                field: "student_name"
            }
        );

        let record = StudentRecord::from_json(json!({"student_id": "S001", "student_name": "Ann"}));
        assert_eq!(
            validate(&record, 1).unwrap_err().to_string(),
            "Missing required field: answers"
        );
    }

    #[test]
    fn test_wrong_field_types() {
        let record = StudentRecord::from_json(
            json!({"student_id": 42, "student_name": "Ann", "answers": ["A"]}),
        );
        assert_eq!(
            validate(&record, 1).unwrap_err().to_string(),
            "Invalid field type: student_id"
        );

        let record = StudentRecord::from_json(
            json!({"student_id": "S001", "student_name": "Ann", "answers": "AB"}),
        );
        assert_eq!(
            validate(&record, 2).unwrap_err(),
            ValidationError::InvalidFieldType { field: "answers" }
        );
    }

    #[test]
    fn test_explicit_null_is_present_but_wrong_type() {
        let record = StudentRecord::from_json(
            json!({"student_id": "S001", "student_name": null, "answers": ["A"]}),
        );
        assert_eq!(
            validate(&record, 1).unwrap_err().to_string(),
            "Invalid field type: student_name"
        );
    }

    #[test]
    fn test_record_that_is_not_an_object() {
        let record = StudentRecord::from_json(json!("S001"));
        assert_eq!(validate(&record, 1).unwrap_err(), ValidationError::NotAnObject);
    }

    #[test]
    fn test_wrong_answer_count() {
        let record = StudentRecord::new("S002", "Bob", &["A", "B", "C"]);
        let err = validate(&record, 4).unwrap_err();
        assert_eq!(err.to_string(), "Expected 4 answers, got 3");
    }

    #[test]
    fn test_lowercase_answer_rejected() {
        let record = StudentRecord::new("S003", "Cy", &["A", "a", "C", "D"]);
        let err = validate(&record, 4).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidAnswer {
                index: 2,
                value: "a".to_string()
            }
        );
        assert_eq!(err.to_string(), "Invalid answer 'a' at question 2");
    }

    #[test]
    fn test_first_invalid_answer_reported() {
        let record = StudentRecord::new("S004", "Di", &["A", "B", "E", "X"]);
        let err = validate(&record, 4).unwrap_err();
        assert_eq!(err.to_string(), "Invalid answer 'E' at question 3");
    }

    #[test]
    fn test_non_string_answer_rejected() {
        let record = StudentRecord::from_json(
            json!({"student_id": "S005", "student_name": "Ed", "answers": ["A", 2]}),
        );
        let err = validate(&record, 2).unwrap_err();
        assert_eq!(err.to_string(), "Invalid answer '2' at question 2");
    }

    #[test]
    fn test_input_not_mutated() {
        let record = StudentRecord::new("S006", "Flo", &["D", "C"]);
        let before = record.clone();
        let _ = validate(&record, 2);
        assert_eq!(record, before);
    }
}
