use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::common::{Severity, Subject};

/// 单题错误分析请求
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorAnalysisRequest {
    pub question_text: String,
    pub student_answer: String,
    pub correct_answer: String,
    pub subject: Subject,
}

/// 单题错误分析结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorAnalysisResponse {
    pub error_type: String,
    pub error_severity: Severity,
    pub explanation: String,
    pub improvement_suggestions: Vec<String>,
    pub related_concepts: Vec<String>,
}

/// 错误模式的频率走势
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PatternTrend {
    Increasing,
    Decreasing,
    Stable,
}

/// 学生错误模式
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentErrorPattern {
    pub pattern_type: String,
    pub frequency: u32,
    pub recent_occurrences: u32,
    pub trend: PatternTrend,
    pub description: String,
}

/// 学科改进计划
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImprovementPlan {
    pub focus_areas: Vec<String>,
    pub recommended_actions: Vec<String>,
    pub difficulty_level: String,
    pub estimated_time_weeks: u32,
}

/// 知识点掌握度
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KnowledgePoint {
    pub id: i64,
    pub name: String,
    pub subject: String,
    /// 0-100
    pub mastery_level: f64,
    #[serde(with = "crate::models::timestamp::date")]
    pub last_updated: NaiveDate,
}
