//! 报告写入服务 - 业务能力层
//!
//! 只负责"写 output.txt"能力，不关心报告内容怎么来的

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::error::{AppError, AppResult};

/// 报告写入服务
///
/// 职责：
/// - 将渲染好的报告写入输出文件（每次覆盖）
/// - 父目录不存在时自动创建
pub struct ReportWriter {
    output_path: PathBuf,
}

impl ReportWriter {
    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.output_path
    }

    /// 写入报告
    ///
    /// # 参数
    /// - `report`: 渲染好的报告文本（UTF-8）
    pub async fn write(&self, report: &str) -> AppResult<()> {
        let path_str = self.output_path.display().to_string();
        debug!("写入报告: {} | 长度: {}", path_str, report.len());

        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| AppError::file_write_failed(&path_str, e))?;
            }
        }

        fs::write(&self.output_path, report.as_bytes())
            .await
            .map_err(|e| AppError::file_write_failed(&path_str, e))?;

        Ok(())
    }
}
