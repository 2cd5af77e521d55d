//! 报告渲染服务 - 业务能力层
//!
//! 纯函数：输入考试信息、每个学生的处理结果和统计，输出报告文本。
//! 写文件和回显由编排层负责。

use crate::models::exam::ExamInfo;
use crate::models::grade::StudentOutcome;
use crate::services::summary::SummaryStats;

/// 姓名缺失时的占位
pub const UNKNOWN_STUDENT: &str = "Unknown";

/// 没有任何有效数据时的提示
pub const NO_VALID_DATA_NOTICE: &str = "⚠️  No valid student data was processed.";

/// 渲染完整报告
///
/// `stats` 为 `None` 时输出"没有有效数据"提示，不输出统计区块。
/// 各行以 `\n` 连接，结尾不带换行。
pub fn render(
    exam_info: &ExamInfo,
    outcomes: &[StudentOutcome],
    stats: Option<&SummaryStats>,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    push_header(&mut lines, exam_info);

    for outcome in outcomes {
        match outcome {
            StudentOutcome::Graded(result) => {
                lines.push(format!(
                    "Student: {} (ID: {})",
                    result.student_name, result.student_id
                ));
                lines.push(format!(
                    "Score: {}/{} ({:.1}%)",
                    result.correct_count, result.total_questions, result.percentage
                ));
                lines.push(format!("Grade: {}", result.letter_grade));
                lines.push("-".repeat(40));
            }
            StudentOutcome::Rejected {
                student_name,
                reason,
            } => {
                lines.push(format!(
                    "⚠️  ERROR processing {}: {}",
                    student_name.as_deref().unwrap_or(UNKNOWN_STUDENT),
                    reason
                ));
            }
        }
    }

    match stats {
        Some(stats) => push_summary(&mut lines, stats),
        None => lines.push(NO_VALID_DATA_NOTICE.to_string()),
    }

    lines.join("\n")
}

fn push_header(lines: &mut Vec<String>, exam_info: &ExamInfo) {
    lines.push("=".repeat(60));
    lines.push(format!("EXAM RESULTS: {}", exam_info.exam_name));
    lines.push(format!("Date: {}", exam_info.date));
    lines.push(format!("Total Questions: {}", exam_info.total_questions));
    lines.push("=".repeat(60));
    lines.push(String::new());
}

fn push_summary(lines: &mut Vec<String>, stats: &SummaryStats) {
    lines.push("\nCLASS SUMMARY STATISTICS".to_string());
    lines.push("=".repeat(30));
    lines.push(format!("Students Processed: {}", stats.students_processed));
    lines.push(format!("Class Average: {:.1}%", stats.class_average));
    lines.push(format!("Highest Score: {:.1}%", stats.highest_score));
    lines.push(format!("Lowest Score: {:.1}%", stats.lowest_score));
    lines.push(String::new());
    lines.push("Grade Distribution:".to_string());

    // BTreeMap 按 A→F 排序
    for (grade, count) in &stats.grade_distribution {
        if *count > 0 {
            lines.push(format!("  {}: {} student(s)", grade, count));
        }
    }
}
