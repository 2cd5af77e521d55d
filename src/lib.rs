//! # Exam Grader
//!
//! 读取考试数据（答案 + 学生答卷），逐个校验、评分，输出成绩报告和班级统计
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 考试、答卷、成绩等数据结构
//! - `load_exam_data` - 读取并检查 JSON 考试数据
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个学生或单个关注点
//! - `validate` / `score` - 校验与评分
//! - `summarize` / `render` - 统计与报告渲染
//! - `ReportWriter` - 写 output.txt 能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个学生"的完整处理流程
//! - `StudentCtx` - 上下文封装（花名册位置 + 姓名）
//! - `StudentFlow` - 流程编排（validate → score，失败转为警告）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/roster_processor` - 花名册处理器，纯函数
//! - `orchestrator/grading_app` - 应用入口，负责所有文件 I/O
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Choice, ExamData, ExamInfo, GradeResult, LetterGrade, StudentOutcome, StudentRecord};
pub use orchestrator::{grade_roster, App, GradingRun};
pub use services::{SummaryStats, ValidationError};
