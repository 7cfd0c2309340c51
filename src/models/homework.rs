use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::common::{AiProvider, Difficulty, Subject};

/// 作业处理状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingStatus {
    Pending,
    Completed,
    Failed,
}

/// 作业提交记录
///
/// 以字符串为 ID 的状态跟踪结构，历史列表与详情接口均返回此结构。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HomeworkSubmission {
    pub id: String,
    pub file_name: String,
    pub subject: Subject,
    pub provider: AiProvider,
    #[serde(with = "crate::models::timestamp")]
    pub submitted_at: DateTime<Utc>,
    pub processing_status: ProcessingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_id: Option<String>,
}

/// 旧版上传接口返回的提交记录
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LegacySubmission {
    pub id: i64,
    pub subject: String,
    pub submitted_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    pub file_name: String,
    pub processing_status: ProcessingStatus,
}

/// 作业批改分析结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HomeworkAnalysis {
    pub id: String,
    pub submission_id: String,
    pub subject: Subject,
    pub total_score: f64,
    pub max_score: f64,
    pub error_count: u32,
    pub correct_count: u32,
    pub mastery_level: f64,
    #[serde(with = "crate::models::timestamp")]
    pub analyzed_at: DateTime<Utc>,
    #[serde(default)]
    pub errors: Vec<GradingError>,
    #[serde(default)]
    pub knowledge_points: Vec<KnowledgePointScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improvement_plan: Option<StudyPlan>,
}

impl HomeworkAnalysis {
    /// 得分百分比
    pub fn percentage(&self) -> f64 {
        if self.max_score <= 0.0 {
            return 0.0;
        }
        self.total_score / self.max_score * 100.0
    }

    /// 题目总数
    pub fn question_count(&self) -> u32 {
        self.error_count + self.correct_count
    }
}

/// 单题错误分析
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GradingError {
    pub question_number: u32,
    pub error_type: String,
    pub reason: String,
    pub correct_answer: String,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge_point: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty_level: Option<Difficulty>,
}

/// 知识点掌握等级
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MasteryGrade {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl MasteryGrade {
    /// 由分数推导等级
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 90.0 => MasteryGrade::Excellent,
            s if s >= 80.0 => MasteryGrade::Good,
            s if s >= 60.0 => MasteryGrade::Fair,
            _ => MasteryGrade::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MasteryGrade::Excellent => "优秀",
            MasteryGrade::Good => "良好",
            MasteryGrade::Fair => "一般",
            MasteryGrade::Poor => "薄弱",
        }
    }
}

/// 本次作业涉及的知识点得分
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KnowledgePointScore {
    pub name: String,
    pub score: f64,
    pub mastery_level: MasteryGrade,
    pub suggestion: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_errors: Vec<u32>,
}

/// 作业改进计划
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudyPlan {
    pub suggestions: Vec<String>,
    pub recommended_practice: Vec<String>,
    pub focus_areas: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_study_time: Option<String>,
}

/// 报告二进制内容
#[derive(Debug, Clone, PartialEq)]
pub struct ReportBlob {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ReportBlob {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mastery_grade_from_score() {
        assert_eq!(MasteryGrade::from_score(95.0), MasteryGrade::Excellent);
        assert_eq!(MasteryGrade::from_score(80.0), MasteryGrade::Good);
        assert_eq!(MasteryGrade::from_score(68.0), MasteryGrade::Fair);
        assert_eq!(MasteryGrade::from_score(12.5), MasteryGrade::Poor);
    }

    #[test]
    fn test_analysis_optional_sections_default() {
        let json = serde_json::json!({
            "id": "analysis_1",
            "submission_id": "sub_1",
            "subject": "physics",
            "total_score": 70,
            "max_score": 100,
            "error_count": 3,
            "correct_count": 7,
            "mastery_level": 72,
            "analyzed_at": "2024-01-15T14:30:00Z"
        });
        let analysis: HomeworkAnalysis = serde_json::from_value(json).unwrap();
        assert!(analysis.errors.is_empty());
        assert!(analysis.improvement_plan.is_none());
        assert_eq!(analysis.question_count(), 10);
        assert!((analysis.percentage() - 70.0).abs() < f64::EPSILON);
    }
}
