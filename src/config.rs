use crate::error::{AppResult, ConfigError};
use serde::Deserialize;
use std::path::Path;

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "grader.toml";

/// 程序配置
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// 考试数据文件（JSON）
    pub input_file: String,
    /// 成绩报告输出文件
    pub output_file: String,
    /// 最多处理的学生数量，`None` 表示全部处理
    pub max_students: Option<usize>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 是否在控制台回显报告
    pub echo_report: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: "exam_data.json".to_string(),
            output_file: "output.txt".to_string(),
            max_students: None,
            verbose_logging: false,
            echo_report: true,
        }
    }
}

/// `grader.toml` 中允许出现的字段，全部可选
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    input_file: Option<String>,
    output_file: Option<String>,
    max_students: Option<usize>,
    verbose_logging: Option<bool>,
    echo_report: Option<bool>,
}

impl Config {
    /// 加载配置：默认值 < 配置文件 < 环境变量
    pub fn load() -> AppResult<Self> {
        let config_path =
            std::env::var("GRADER_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        let mut config = if Path::new(&config_path).exists() {
            Self::from_file(&config_path)?
        } else {
            Self::default()
        };
        config.apply_env(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// 从 TOML 文件加载，未写的字段取默认值
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            ConfigError::FileReadFailed {
                path: path.to_string(),
                source,
            }
        })?;
        Self::from_toml_str(&content, path)
    }

    fn from_toml_str(content: &str, path: &str) -> AppResult<Self> {
        let file: FileConfig =
            toml::from_str(content).map_err(|source| ConfigError::TomlParseFailed {
                path: path.to_string(),
                source,
            })?;

        let default = Self::default();
        Ok(Self {
            input_file: file.input_file.unwrap_or(default.input_file),
            output_file: file.output_file.unwrap_or(default.output_file),
            max_students: file.max_students.filter(|&n| n > 0),
            verbose_logging: file.verbose_logging.unwrap_or(default.verbose_logging),
            echo_report: file.echo_report.unwrap_or(default.echo_report),
        })
    }

    /// 用环境变量覆盖配置
    ///
    /// `lookup` 抽出来是为了测试时不用改动进程环境
    pub fn apply_env<F>(&mut self, lookup: F) -> AppResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("EXAM_DATA_FILE") {
            self.input_file = v;
        }
        if let Some(v) = lookup("REPORT_OUTPUT_FILE") {
            self.output_file = v;
        }
        if let Some(v) = lookup("MAX_STUDENTS") {
            let v = v.trim().to_string();
            self.max_students = if v.is_empty() {
                None
            } else {
                let n: usize = parse_env("MAX_STUDENTS", &v, "usize")?;
                (n > 0).then_some(n)
            };
        }
        if let Some(v) = lookup("VERBOSE_LOGGING") {
            self.verbose_logging = parse_env("VERBOSE_LOGGING", v.trim(), "bool")?;
        }
        if let Some(v) = lookup("ECHO_REPORT") {
            self.echo_report = parse_env("ECHO_REPORT", v.trim(), "bool")?;
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(var_name: &str, value: &str, expected_type: &str) -> AppResult<T> {
    value.parse().map_err(|_| {
        ConfigError::EnvVarParseFailed {
            var_name: var_name.to_string(),
            value: value.to_string(),
            expected_type: expected_type.to_string(),
        }
        .into()
    })
}
