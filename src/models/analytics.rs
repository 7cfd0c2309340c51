//! 学情分析视图（只读）

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::common::{Difficulty, Severity, Trend};

/// 错误类型走势
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorTypeDirection {
    Improving,
    Stable,
    Worsening,
}

/// 错误趋势分析
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorTrendAnalysis {
    pub student_id: i64,
    pub subject: String,
    pub analysis_period: String,
    pub overall_trend: Trend,
    pub error_rate_trend: Vec<ErrorRatePoint>,
    pub error_type_trends: Vec<ErrorTypeTrend>,
    pub systematic_improvements: Vec<String>,
    pub persistent_issues: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorRatePoint {
    #[serde(with = "crate::models::timestamp::date")]
    pub date: NaiveDate,
    pub error_rate: f64,
    pub total_questions: u32,
    pub error_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorTypeTrend {
    pub error_type: String,
    pub trend: ErrorTypeDirection,
    pub frequency_change: f64,
    pub recent_count: u32,
    pub historical_average: f64,
}

/// 多科目汇总
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MultiSubjectSummary {
    pub student_id: i64,
    pub analysis_period: String,
    pub overall_performance: OverallPerformance,
    pub subject_comparisons: Vec<SubjectComparison>,
    pub cross_subject_patterns: Vec<CrossSubjectPattern>,
    pub recommendations: Vec<GlobalRecommendation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverallPerformance {
    pub total_questions: u32,
    pub total_errors: u32,
    pub overall_accuracy: f64,
    pub improvement_trend: Trend,
    pub grade_equivalent: String,
}

/// 科目强弱
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLevel {
    Strong,
    Average,
    Weak,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubjectComparison {
    pub subject: String,
    pub accuracy_rate: f64,
    pub error_count: u32,
    pub rank_among_subjects: u32,
    pub strength_level: StrengthLevel,
    pub key_issues: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CrossSubjectPattern {
    pub pattern_type: String,
    pub affected_subjects: Vec<String>,
    pub description: String,
    pub severity: Severity,
    pub improvement_suggestions: Vec<String>,
}

/// 建议类别
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    StudyMethod,
    TimeManagement,
    ConceptReview,
    PracticeFocus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GlobalRecommendation {
    pub priority: Severity,
    pub category: RecommendationCategory,
    pub description: String,
    pub estimated_impact: String,
    pub time_investment: String,
}

/// 科目学习进度
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubjectProgress {
    pub student_id: i64,
    pub subject: String,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub accuracy_rate: f64,
    pub improvement_rate: f64,
    pub knowledge_points: Vec<KnowledgePointProgress>,
    pub recent_performance: Vec<RecentPerformance>,
    pub weak_areas: Vec<String>,
    pub strengths: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KnowledgePointProgress {
    pub name: String,
    /// 0-100
    pub mastery_level: f64,
    pub total_practiced: u32,
    pub correct_count: u32,
    #[serde(with = "crate::models::timestamp")]
    pub last_practiced: DateTime<Utc>,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentPerformance {
    #[serde(with = "crate::models::timestamp::date")]
    pub date: NaiveDate,
    pub score: f64,
    pub total: f64,
    pub accuracy: f64,
}

/// 统计周期
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimePeriod {
    Week,
    Month,
    Quarter,
}

/// 学习趋势
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LearningTrend {
    pub student_id: i64,
    pub subject: String,
    pub time_period: TimePeriod,
    pub trend_data: Vec<TrendPoint>,
    pub overall_trend: Trend,
    pub prediction: TrendPrediction,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    #[serde(with = "crate::models::timestamp::date")]
    pub date: NaiveDate,
    pub accuracy_rate: f64,
    pub questions_count: u32,
    pub average_score: f64,
    pub study_time_minutes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendPrediction {
    pub expected_improvement: f64,
    pub confidence_level: f64,
    pub recommended_actions: Vec<String>,
}
