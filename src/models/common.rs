//! 跨实体共享的枚举

use serde::{Deserialize, Serialize};
use std::fmt;

/// 科目
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    #[default]
    Math,
    Physics,
    English,
}

impl Subject {
    pub const ALL: [Subject; 3] = [Subject::Math, Subject::Physics, Subject::English];

    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Math => "math",
            Subject::Physics => "physics",
            Subject::English => "english",
        }
    }

    /// 中文名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Subject::Math => "数学",
            Subject::Physics => "物理",
            Subject::English => "英语",
        }
    }

    /// 解析科目代码，不区分大小写
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(code.trim()))
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// AI 服务提供商
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    #[default]
    Qwen,
    Kimi,
}

impl AiProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AiProvider::Qwen => "qwen",
            AiProvider::Kimi => "kimi",
        }
    }

    /// 默认模型名称
    pub fn default_model(&self) -> &'static str {
        match self {
            AiProvider::Qwen => "qwen-turbo",
            AiProvider::Kimi => "moonshot-v1-8k",
        }
    }
}

impl fmt::Display for AiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 难度
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// 严重程度 / 优先级
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// 整体趋势
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Stable,
    Declining,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_parse() {
        assert_eq!(Subject::parse("Physics"), Some(Subject::Physics));
        assert_eq!(Subject::parse(" english "), Some(Subject::English));
        assert_eq!(Subject::parse("chemistry"), None);
    }

    #[test]
    fn test_enum_wire_format() {
        assert_eq!(serde_json::to_string(&Subject::Math).unwrap(), r#""math""#);
        assert_eq!(serde_json::to_string(&AiProvider::Kimi).unwrap(), r#""kimi""#);
        assert_eq!(serde_json::to_string(&Trend::Declining).unwrap(), r#""declining""#);
    }
}
