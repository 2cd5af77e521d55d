use serde::{Deserialize, Serialize};
use std::fmt;

/// 等级成绩
///
/// 分段固定：[90,100]→A, [80,90)→B, [70,80)→C, [60,70)→D, [0,60)→F，边界归高一档
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    /// 报告中的固定顺序
    pub const ALL: [LetterGrade; 5] = [
        LetterGrade::A,
        LetterGrade::B,
        LetterGrade::C,
        LetterGrade::D,
        LetterGrade::F,
    ];

    /// 根据百分比确定等级
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            LetterGrade::A
        } else if percentage >= 80.0 {
            LetterGrade::B
        } else if percentage >= 70.0 {
            LetterGrade::C
        } else if percentage >= 60.0 {
            LetterGrade::D
        } else {
            LetterGrade::F
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 单个学生的得分
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub correct_count: usize,
    pub percentage: f64,
    pub letter_grade: LetterGrade,
}

/// 单个学生的成绩结果，只为通过校验的答卷生成
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeResult {
    pub student_id: String,
    pub student_name: String,
    pub correct_count: usize,
    pub total_questions: usize,
    pub percentage: f64,
    pub letter_grade: LetterGrade,
}

/// 花名册中一条记录的处理结果，保持原始顺序
#[derive(Debug, Clone, PartialEq)]
pub enum StudentOutcome {
    /// 已评分
    Graded(GradeResult),
    /// 校验失败，被跳过
    Rejected {
        student_name: Option<String>,
        reason: String,
    },
}

impl StudentOutcome {
    pub fn as_graded(&self) -> Option<&GradeResult> {
        match self {
            StudentOutcome::Graded(result) => Some(result),
            StudentOutcome::Rejected { .. } => None,
        }
    }
}
