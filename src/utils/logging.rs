//! 日志工具模块
//!
//! 初始化 tracing 订阅者，并提供日志格式化输出的辅助函数

use std::time::Duration;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Config;

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，否则 verbose 时为 debug，默认 info。
/// 日志写到 stderr，stdout 只留给报告。重复调用不会 panic。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 考试评分");
    info!("📄 数据文件: {}", config.input_file);
    info!("📝 报告文件: {}", config.output_file);
    match config.max_students {
        Some(limit) => info!("📊 最多处理学生数: {}", limit),
        None => info!("📊 最多处理学生数: 不限"),
    }
    info!("{}", "=".repeat(60));
}

/// 记录花名册加载信息
///
/// # 参数
/// - `total`: 花名册中的学生总数
/// - `selected`: 本次要处理的学生数
pub fn log_roster_loaded(total: usize, selected: usize) {
    info!("✓ 找到 {} 个学生", total);
    if selected < total {
        info!("📋 本次处理前 {} 个", selected);
    }
}

/// 打印最终统计信息
///
/// # 参数
/// - `graded`: 评分成功数量
/// - `rejected`: 校验失败数量
/// - `output_file`: 报告文件路径
/// - `elapsed`: 耗时
pub fn print_final_stats(graded: usize, rejected: usize, output_file: &str, elapsed: Duration) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 评分: {}/{}", graded, graded + rejected);
    info!("❌ 跳过: {}", rejected);
    info!("⏱️ 耗时: {} ms", elapsed.as_millis());
    info!("{}", "=".repeat(60));
    info!("\n报告已保存至: {}", output_file);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init(false);
        init(true);
        print_final_stats(2, 1, "output.txt", Duration::from_millis(5));
    }
}
