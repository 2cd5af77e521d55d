//! 班级统计服务 - 业务能力层

use std::collections::BTreeMap;

use crate::error::{AppResult, BusinessError};
use crate::models::grade::{GradeResult, LetterGrade};

/// 班级统计信息
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub students_processed: usize,
    pub class_average: f64,
    pub highest_score: f64,
    pub lowest_score: f64,
    /// 五个等级都有条目，没有学生的等级记为 0
    pub grade_distribution: BTreeMap<LetterGrade, usize>,
}

/// 汇总成绩
///
/// 空列表返回 `BusinessError::EmptyInput`，避免除以 0
pub fn summarize(results: &[GradeResult]) -> AppResult<SummaryStats> {
    if results.is_empty() {
        return Err(BusinessError::EmptyInput.into());
    }

    let total: f64 = results.iter().map(|r| r.percentage).sum();
    let highest_score = results
        .iter()
        .map(|r| r.percentage)
        .fold(f64::NEG_INFINITY, f64::max);
    let lowest_score = results
        .iter()
        .map(|r| r.percentage)
        .fold(f64::INFINITY, f64::min);

    let mut grade_distribution: BTreeMap<LetterGrade, usize> =
        LetterGrade::ALL.iter().map(|&g| (g, 0)).collect();
    for result in results {
        *grade_distribution.entry(result.letter_grade).or_insert(0) += 1;
    }

    Ok(SummaryStats {
        students_processed: results.len(),
        class_average: total / results.len() as f64,
        highest_score,
        lowest_score,
        grade_distribution,
    })
}
