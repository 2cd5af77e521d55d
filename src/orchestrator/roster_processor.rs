//! 花名册处理器 - 编排层
//!
//! ## 职责
//!
//! 遍历花名册里的学生（可限制数量），对每个学生执行 `StudentFlow`，
//! 按原始顺序收集结果，最后汇总统计。不做任何文件 I/O。

use tracing::{info, warn};

use crate::error::{AppError, BusinessError};
use crate::models::exam::{ExamData, ExamInfo};
use crate::models::grade::{GradeResult, StudentOutcome};
use crate::services::{render, summarize, SummaryStats};
use crate::workflow::{StudentCtx, StudentFlow};

/// 一次评分的全部结果
#[derive(Debug, Clone, PartialEq)]
pub struct GradingRun {
    pub exam_info: ExamInfo,
    /// 按花名册顺序
    pub outcomes: Vec<StudentOutcome>,
    /// 没有任何学生通过校验时为 `None`
    pub stats: Option<SummaryStats>,
}

impl GradingRun {
    pub fn graded(&self) -> impl Iterator<Item = &GradeResult> {
        self.outcomes.iter().filter_map(StudentOutcome::as_graded)
    }

    pub fn graded_count(&self) -> usize {
        self.graded().count()
    }

    pub fn rejected_count(&self) -> usize {
        self.outcomes.len() - self.graded_count()
    }

    /// 渲染报告文本
    pub fn render(&self) -> String {
        render(&self.exam_info, &self.outcomes, self.stats.as_ref())
    }
}

/// 本次要处理的学生数量
pub fn roster_size(exam: &ExamData, max_students: Option<usize>) -> usize {
    match max_students {
        Some(limit) => exam.students.len().min(limit),
        None => exam.students.len(),
    }
}

/// 处理花名册
///
/// # 参数
/// - `exam`: 已加载的考试数据
/// - `max_students`: 最多处理前几个学生，`None` 表示全部
pub fn grade_roster(exam: &ExamData, max_students: Option<usize>) -> GradingRun {
    grade_roster_with(exam, max_students, false)
}

pub(crate) fn grade_roster_with(
    exam: &ExamData,
    max_students: Option<usize>,
    verbose_logging: bool,
) -> GradingRun {
    let total = roster_size(exam, max_students);
    if total < exam.students.len() {
        info!(
            "📋 只处理前 {} 个学生（共 {} 个）",
            total,
            exam.students.len()
        );
    }

    // 流程对象只创建一次，复用
    let flow = StudentFlow::new(&exam.answer_key, exam.total_questions()).verbose(verbose_logging);

    let outcomes: Vec<StudentOutcome> = exam
        .students
        .iter()
        .take(total)
        .enumerate()
        .map(|(index, record)| flow.run(record, &StudentCtx::new(index + 1, total, record)))
        .collect();

    let graded: Vec<GradeResult> = outcomes
        .iter()
        .filter_map(StudentOutcome::as_graded)
        .cloned()
        .collect();

    // 没有有效成绩时不做统计
    let stats = match summarize(&graded) {
        Ok(stats) => Some(stats),
        Err(AppError::Business(BusinessError::EmptyInput)) => None,
        Err(e) => {
            warn!("⚠️ 统计失败: {}", e);
            None
        }
    };

    GradingRun {
        exam_info: exam.exam_info.clone(),
        outcomes,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::exam::{Choice, StudentRecord};

    fn exam(students: Vec<StudentRecord>) -> ExamData {
        ExamData {
            exam_info: ExamInfo {
                exam_name: "Physics Quiz".to_string(),
                date: "2024-05-01".to_string(),
                total_questions: 4,
            },
            answer_key: Choice::ALL.to_vec(),
            students,
        }
    }

    #[test]
    fn test_limit_takes_first_students() {
        let data = exam(vec![
            StudentRecord::new("S1", "A1", &["A", "B", "C", "D"]),
            StudentRecord::new("S2", "A2", &["A", "A", "A", "A"]),
            StudentRecord::new("S3", "A3", &["A", "B", "C"]),
            StudentRecord::new("S4", "A4", &["D", "C", "B", "A"]),
        ]);

        let run = grade_roster(&data, Some(3));

        assert_eq!(run.outcomes.len(), 3);
        assert_eq!(run.graded_count(), 2);
        assert_eq!(run.rejected_count(), 1);
        assert_eq!(run.stats.as_ref().map(|s| s.students_processed), Some(2));
    }

    #[test]
    fn test_no_limit_processes_everyone() {
        let data = exam(vec![
            StudentRecord::new("S1", "A1", &["A", "B", "C", "D"]),
            StudentRecord::new("S2", "A2", &["A", "A", "A", "A"]),
        ]);
        assert_eq!(roster_size(&data, None), 2);
        assert_eq!(roster_size(&data, Some(10)), 2);
        assert_eq!(grade_roster(&data, None).outcomes.len(), 2);
    }

    #[test]
    fn test_rejected_records_excluded_from_stats() {
        let data = exam(vec![
            StudentRecord::new("S1", "A1", &["A", "B", "C", "D"]),
            StudentRecord::new("S2", "A2", &["E", "B", "C", "D"]),
        ]);

        let run = grade_roster(&data, None);
        let stats = run.stats.expect("one student graded");

        assert_eq!(stats.students_processed, 1);
        assert_eq!(stats.class_average, 100.0);
    }

    #[test]
    fn test_all_rejected_has_no_stats() {
        let data = exam(vec![StudentRecord::new("S1", "A1", &["A"])]);

        let run = grade_roster(&data, None);

        assert!(run.stats.is_none());
        assert!(run.render().ends_with("No valid student data was processed."));
    }

    #[test]
    fn test_empty_roster_has_no_stats() {
        let run = grade_roster(&exam(Vec::new()), None);

        assert!(run.outcomes.is_empty());
        assert!(run.stats.is_none());
    }

    #[test]
    fn test_wrongly_typed_record_is_skipped_not_fatal() {
        let data = exam(vec![
            StudentRecord::new("S1", "A1", &["A", "B", "C", "D"]),
            StudentRecord::from_json(serde_json::json!({
                "student_id": 42,
                "student_name": "A2",
                "answers": ["A", "B", "C", "D"]
            })),
        ]);

        let run = grade_roster(&data, None);

        assert_eq!(run.graded_count(), 1);
        assert_eq!(
            run.outcomes[1],
            StudentOutcome::Rejected {
                student_name: Some("A2".to_string()),
                reason: "Invalid field type: student_id".to_string(),
            }
        );
        assert_eq!(run.stats.map(|s| s.students_processed), Some(1));
    }
}
