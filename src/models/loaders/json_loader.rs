use crate::error::{AppError, AppResult, ExamError};
use crate::models::exam::{Choice, ExamData, RawExamData};
use chrono::NaiveDate;
use std::path::Path;
use tokio::fs;

/// 从 JSON 文件加载考试数据
///
/// 文件不存在、读取失败、JSON 格式错误以及考试定义不一致都作为错误返回，
/// 由调用方决定如何处理。
pub async fn load_exam_data(path: &Path) -> AppResult<ExamData> {
    let path_str = path.display().to_string();
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(&path_str, e))?;

    let data = parse_exam_data(&content, &path_str)?;
    tracing::info!(
        "成功加载考试 {}: {} 道题, {} 名学生",
        data.exam_info.exam_name,
        data.total_questions(),
        data.students.len()
    );
    Ok(data)
}

/// 解析 JSON 文本并检查考试定义
///
/// `source_name` 只用于错误信息
pub fn parse_exam_data(content: &str, source_name: &str) -> AppResult<ExamData> {
    let raw: RawExamData = serde_json::from_str(content)
        .map_err(|e| AppError::json_parse_failed(source_name, e))?;

    let total_questions = raw.exam_info.total_questions;
    if total_questions == 0 {
        return Err(ExamError::NoQuestions.into());
    }
    if raw.answer_key.len() != total_questions {
        return Err(ExamError::AnswerKeyLength {
            expected: total_questions,
            actual: raw.answer_key.len(),
        }
        .into());
    }

    let answer_key = raw
        .answer_key
        .iter()
        .enumerate()
        .map(|(i, value)| {
            value.parse::<Choice>().map_err(|_| ExamError::AnswerKeyEntry {
                index: i + 1,
                value: value.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if NaiveDate::parse_from_str(&raw.exam_info.date, "%Y-%m-%d").is_err() {
        tracing::warn!(
            "⚠️ 考试日期不是 YYYY-MM-DD 格式，将原样输出: {}",
            raw.exam_info.date
        );
    }

    Ok(ExamData {
        exam_info: raw.exam_info,
        answer_key,
        students: raw.students,
    })
}
