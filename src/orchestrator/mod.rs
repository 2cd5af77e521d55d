//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `grading_app` - 评分应用
//! - 持有配置和报告写入服务
//! - 加载考试数据、写报告、回显、输出全局统计
//!
//! ### `roster_processor` - 花名册处理器
//! - 遍历花名册（可限制数量）
//! - 创建并复用 StudentFlow
//! - 汇总统计，不做 I/O
//!
//! ## 层次关系
//!
//! ```text
//! grading_app (I/O)
//!     ↓
//! roster_processor (处理 Vec<StudentRecord>)
//!     ↓
//! workflow::StudentFlow (处理单个学生)
//!     ↓
//! services (能力层：validate / score / summarize / render / write)
//! ```

pub mod grading_app;
pub mod roster_processor;

// 重新导出主要类型
pub use grading_app::App;
pub use roster_processor::{grade_roster, roster_size, GradingRun};
