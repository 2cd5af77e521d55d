//! 评分应用 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责所有 I/O：
//!
//! 1. **加载**：读取考试数据文件
//! 2. **评分**：委托 roster_processor 处理花名册
//! 3. **输出**：写入报告文件并在控制台回显
//! 4. **统计**：记录最终处理情况
//!
//! 加载失败直接返回错误，不会写出任何报告。

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::models::{load_exam_data, ExamData};
use crate::orchestrator::roster_processor::{grade_roster_with, roster_size, GradingRun};
use crate::services::ReportWriter;
use crate::utils::logging::{log_roster_loaded, log_startup, print_final_stats};

/// 应用主结构
pub struct App {
    config: Config,
    report_writer: ReportWriter,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Self {
        log_startup(&config);

        let report_writer = ReportWriter::with_path(&config.output_file);
        Self {
            config,
            report_writer,
        }
    }

    /// 运行应用主逻辑，返回本次评分结果
    pub async fn run(&self) -> Result<GradingRun> {
        let started = Instant::now();

        let exam = self.load_exam().await?;
        let total = roster_size(&exam, self.config.max_students);
        log_roster_loaded(exam.students.len(), total);
        println!("Processing grades for {} students...", total);

        let run = grade_roster_with(&exam, self.config.max_students, self.config.verbose_logging);
        let report = run.render();

        self.report_writer
            .write(&report)
            .await
            .context("保存报告失败")?;

        if self.config.echo_report {
            print_console_preview(&report, &self.config.output_file);
        }

        print_final_stats(
            run.graded_count(),
            run.rejected_count(),
            &self.config.output_file,
            started.elapsed(),
        );

        Ok(run)
    }

    async fn load_exam(&self) -> Result<ExamData> {
        info!("\n📁 正在加载考试数据: {}", self.config.input_file);
        let exam = load_exam_data(Path::new(&self.config.input_file)).await?;
        Ok(exam)
    }
}

fn print_console_preview(report: &str, output_file: &str) {
    println!("✅ Grade processing completed successfully!");
    println!("📄 Results saved to '{}'", output_file);
    println!("\nResults Preview:");
    println!("{}", "-".repeat(50));
    println!("{}", report);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("exam_grader_app_{}_{}", name, std::process::id()))
    }

    #[tokio::test]
    async fn test_missing_input_writes_nothing() {
        let dir = scratch("missing");
        let output = dir.join("output.txt");
        let config = Config {
            input_file: dir.join("nope.json").display().to_string(),
            output_file: output.display().to_string(),
            echo_report: false,
            ..Config::default()
        };

        let err = App::initialize(config).run().await.unwrap_err();

        assert!(err.to_string().contains("Could not find data file"));
        assert!(!output.exists());
    }
}
