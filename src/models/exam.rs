use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use std::fmt;
use std::str::FromStr;

/// 选择题选项，固定四选一
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    A,
    B,
    C,
    D,
}

impl Choice {
    pub const ALL: [Choice; 4] = [Choice::A, Choice::B, Choice::C, Choice::D];

    pub fn as_str(self) -> &'static str {
        match self {
            Choice::A => "A",
            Choice::B => "B",
            Choice::C => "C",
            Choice::D => "D",
        }
    }

    /// 从 JSON 值解析选项，只接受大写单字母字符串
    pub fn from_json(value: &JsonValue) -> Option<Self> {
        value.as_str().and_then(|s| s.parse().ok())
    }
}

impl FromStr for Choice {
    type Err = ();

    /// 区分大小写，"a" 不是合法答案
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Choice::A),
            "B" => Ok(Choice::B),
            "C" => Ok(Choice::C),
            "D" => Ok(Choice::D),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 考试基本信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamInfo {
    pub exam_name: String,
    pub date: String,
    pub total_questions: usize,
}

/// 学生提交的原始答卷
///
/// 保留原始 JSON：缺字段、字段类型不对、甚至整条记录不是对象，
/// 都属于单条记录的校验失败，而不是整个文件解析失败。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentRecord {
    raw: JsonValue,
}

impl StudentRecord {
    /// 构造一份字段齐全的答卷（测试和演示数据用）
    pub fn new(id: &str, name: &str, answers: &[&str]) -> Self {
        Self::from_json(json!({
            "student_id": id,
            "student_name": name,
            "answers": answers,
        }))
    }

    pub fn from_json(raw: JsonValue) -> Self {
        Self { raw }
    }

    pub fn is_object(&self) -> bool {
        self.raw.is_object()
    }

    /// 取字段原始值；记录不是对象或没有该键时为 `None`，显式 `null` 为 `Some(Null)`
    pub fn field(&self, name: &str) -> Option<&JsonValue> {
        self.raw.as_object().and_then(|fields| fields.get(name))
    }

    /// 字符串类型的姓名，用于报告和日志
    pub fn student_name(&self) -> Option<&str> {
        self.field("student_name").and_then(JsonValue::as_str)
    }
}

/// 输入文件的原始结构
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawExamData {
    pub exam_info: ExamInfo,
    pub answer_key: Vec<String>,
    #[serde(default)]
    pub students: Vec<StudentRecord>,
}

/// 加载并检查过的考试数据
#[derive(Debug, Clone, PartialEq)]
pub struct ExamData {
    pub exam_info: ExamInfo,
    pub answer_key: Vec<Choice>,
    pub students: Vec<StudentRecord>,
}

impl ExamData {
    pub fn total_questions(&self) -> usize {
        self.exam_info.total_questions
    }
}
