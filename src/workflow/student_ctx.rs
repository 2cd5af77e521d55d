//! 学生处理上下文
//!
//! 封装"我正在处理花名册里的第几个学生"这一信息

use std::fmt::Display;

use crate::models::exam::StudentRecord;

/// 学生处理上下文
#[derive(Debug, Clone)]
pub struct StudentCtx {
    /// 在花名册中的位置（从1开始）
    pub roster_index: usize,

    /// 本次要处理的学生总数（仅用于日志显示）
    pub roster_total: usize,

    /// 学生姓名，可能缺失
    pub student_name: Option<String>,
}

impl StudentCtx {
    /// 创建新的学生上下文
    pub fn new(roster_index: usize, roster_total: usize, record: &StudentRecord) -> Self {
        Self {
            roster_index,
            roster_total,
            student_name: record.student_name().map(str::to_string),
        }
    }
}

impl Display for StudentCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[学生 {}/{} {}]",
            self.roster_index,
            self.roster_total,
            self.student_name.as_deref().unwrap_or("?")
        )
    }
}
