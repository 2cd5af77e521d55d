//! 学生处理流程 - 流程层
//!
//! 核心职责：定义"一个学生"的完整处理流程
//!
//! 流程顺序：
//! 1. 校验答卷
//! 2. 评分
//! 3. 校验失败时记为警告（兜底），不参与统计

use tracing::{debug, info, warn};

use crate::models::exam::{Choice, StudentRecord};
use crate::models::grade::StudentOutcome;
use crate::services::{grade_student, validate};
use crate::workflow::student_ctx::StudentCtx;

/// 学生处理流程
///
/// - 持有答案和题目数量，对每个学生复用
/// - 不做任何 I/O
pub struct StudentFlow<'a> {
    answer_key: &'a [Choice],
    total_questions: usize,
    verbose_logging: bool,
}

impl<'a> StudentFlow<'a> {
    /// 创建新的学生处理流程
    pub fn new(answer_key: &'a [Choice], total_questions: usize) -> Self {
        Self {
            answer_key,
            total_questions,
            verbose_logging: false,
        }
    }

    /// 打开详细日志
    pub fn verbose(mut self, verbose_logging: bool) -> Self {
        self.verbose_logging = verbose_logging;
        self
    }

    pub fn run(&self, record: &StudentRecord, ctx: &StudentCtx) -> StudentOutcome {
        let submission = match validate(record, self.total_questions) {
            Ok(submission) => submission,
            Err(e) => {
                warn!("{} ⚠️ 校验失败，跳过: {}", ctx, e);
                return StudentOutcome::Rejected {
                    student_name: record.student_name().map(str::to_string),
                    reason: e.to_string(),
                };
            }
        };

        if self.verbose_logging {
            debug!(
                "{} 答案: {}",
                ctx,
                submission
                    .answers
                    .iter()
                    .map(|c| c.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            );
        }

        let result = grade_student(&submission, self.answer_key);
        info!(
            "{} ✓ {}/{} ({:.1}%) 等级 {}",
            ctx, result.correct_count, result.total_questions, result.percentage, result.letter_grade
        );

        StudentOutcome::Graded(result)
    }
}
