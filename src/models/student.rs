use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::common::Trend;

/// 学生实体
///
/// `id` 由后端分配。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub grade: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_number: Option<String>,
    #[serde(with = "crate::models::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::models::timestamp")]
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
}

impl Student {
    /// 按关键字匹配姓名、学号与邮箱，关键字不区分大小写
    pub fn matches_search(&self, search: &str) -> bool {
        let needle = search.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self
                .student_number
                .as_deref()
                .is_some_and(|n| n.contains(&needle))
            || self
                .email
                .as_deref()
                .is_some_and(|e| e.to_lowercase().contains(&needle))
    }
}

/// 创建学生请求
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StudentCreate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub grade: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_number: Option<String>,
}

impl StudentCreate {
    pub fn new(name: &str, grade: &str) -> Self {
        Self {
            name: name.to_string(),
            grade: grade.to_string(),
            ..Self::default()
        }
    }
}

/// 更新学生请求，未设置的字段保持不变
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StudentUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// 学生列表查询参数
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StudentQuery {
    /// 页码（从 1 开始）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// 每页数量
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// 关键字（姓名/学号/邮箱）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// 年级精确匹配
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
}

impl StudentQuery {
    pub fn search(keyword: &str) -> Self {
        Self {
            search: Some(keyword.to_string()),
            ..Self::default()
        }
    }

    pub fn with_grade(mut self, grade: &str) -> Self {
        self.grade = Some(grade.to_string());
        self
    }

    pub fn with_page(mut self, page: u32, size: u32) -> Self {
        self.page = Some(page);
        self.size = Some(size);
        self
    }
}

/// 学生列表响应
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentListResponse {
    pub students: Vec<Student>,
    pub total: u64,
    pub page: u32,
    pub size: u32,
}

/// 学生统计信息
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentStats {
    pub total_homework: u32,
    pub average_score: f64,
    pub improvement_rate: f64,
    pub active_days: u32,
    #[serde(with = "crate::models::timestamp")]
    pub last_activity: DateTime<Utc>,
    pub subject_performance: Vec<SubjectPerformance>,
}

/// 单科表现
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubjectPerformance {
    pub subject: String,
    pub average_score: f64,
    pub total_questions: u32,
    pub correct_rate: f64,
    pub recent_trend: Trend,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str, number: Option<&str>, email: Option<&str>) -> Student {
        Student {
            id: 1,
            name: name.into(),
            email: email.map(Into::into),
            phone: None,
            grade: "初三".into(),
            class: None,
            student_number: number.map(Into::into),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            is_active: true,
        }
    }

    #[test]
    fn test_matches_search() {
        let s = student("张小明", Some("2023001"), Some("XiaoMing@example.com"));
        assert!(s.matches_search("小明"));
        assert!(s.matches_search("xiaoming"));
        assert!(s.matches_search("2023"));
        assert!(!s.matches_search("李"));

        let lettered = student("王五", Some("s2023004"), None);
        assert!(lettered.matches_search("S2023"));

        let no_email = student("Alice", None, None);
        assert!(no_email.matches_search("ALICE"));
        assert!(!no_email.matches_search("example"));
    }

    #[test]
    fn test_update_serializes_only_set_fields() {
        let update = StudentUpdate {
            grade: Some("初二".into()),
            is_active: Some(false),
            ..StudentUpdate::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"grade": "初二", "is_active": false}));
    }

    #[test]
    fn test_query_skips_empty_params() {
        let query = StudentQuery::search("张").with_grade("初三");
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json, serde_json::json!({"search": "张", "grade": "初三"}));
    }
}
