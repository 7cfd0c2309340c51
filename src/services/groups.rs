//! 按业务分组的服务视图
//!
//! 视图借用 [`ApiService`]，为界面层提供带默认参数的便捷入口。

use async_trait::async_trait;

use crate::error::Result;
use crate::models::analytics::{ErrorTrendAnalysis, LearningTrend, MultiSubjectSummary, SubjectProgress};
use crate::models::chat::{ChatRequest, ChatResponse, GenerateTextRequest, GenerateTextResponse};
use crate::models::homework::{HomeworkAnalysis, HomeworkSubmission, ReportBlob};
use crate::models::student::{
    Student, StudentCreate, StudentListResponse, StudentQuery, StudentStats, StudentUpdate,
};
use crate::services::api_service::{ApiService, DEFAULT_HISTORY_LIMIT, DEFAULT_TIMEFRAME_DAYS};
use crate::services::outcome::Outcome;
use crate::services::upload::HomeworkUpload;

/// 未指定学生时使用的默认学生 ID
pub const DEFAULT_STUDENT_ID: i64 = 1;

/// 作业服务
#[async_trait]
pub trait HomeworkService: Send + Sync {
    /// 上传并批改
    async fn grade(&self, upload: &HomeworkUpload) -> Outcome<HomeworkAnalysis>;

    /// 下载报告
    async fn generate_report(&self, analysis_id: &str) -> Outcome<ReportBlob>;

    /// 默认学生的作业历史
    async fn history(&self) -> Outcome<Vec<HomeworkSubmission>>;
}

/// AI 对话服务
#[async_trait]
pub trait ChatService: Send + Sync {
    async fn send_message(&self, request: &ChatRequest) -> Outcome<ChatResponse>;

    async fn generate_text(&self, request: &GenerateTextRequest) -> Outcome<GenerateTextResponse>;
}

/// 学生管理服务
#[async_trait]
pub trait StudentService: Send + Sync {
    async fn list(&self, query: &StudentQuery) -> Outcome<StudentListResponse>;

    async fn get(&self, id: i64) -> Outcome<Student>;

    async fn create(&self, student: &StudentCreate) -> Result<Outcome<Student>>;

    async fn update(&self, id: i64, updates: &StudentUpdate) -> Result<Outcome<Student>>;

    async fn delete(&self, id: i64) -> Result<Outcome<()>>;

    async fn stats(&self, id: i64) -> Outcome<StudentStats>;
}

/// 学情分析服务，时间窗口缺省为 30 天
#[async_trait]
pub trait AnalyticsService: Send + Sync {
    async fn error_trends(
        &self,
        student_id: i64,
        subject: &str,
        days: Option<u32>,
    ) -> Outcome<ErrorTrendAnalysis>;

    async fn multi_subject_summary(
        &self,
        student_id: i64,
        subjects: &[String],
        timeframe_days: Option<u32>,
    ) -> Outcome<MultiSubjectSummary>;

    async fn subject_progress(
        &self,
        student_id: i64,
        subject: &str,
        timeframe_days: Option<u32>,
    ) -> Outcome<SubjectProgress>;

    async fn learning_trends(&self, student_id: i64, days: Option<u32>) -> Outcome<Vec<LearningTrend>>;
}

/// 作业视图
#[derive(Clone, Copy)]
pub struct HomeworkApi<'a> {
    api: &'a ApiService,
}

/// 对话视图
#[derive(Clone, Copy)]
pub struct ChatApi<'a> {
    api: &'a ApiService,
}

/// 学生视图
#[derive(Clone, Copy)]
pub struct StudentApi<'a> {
    api: &'a ApiService,
}

/// 学情分析视图
#[derive(Clone, Copy)]
pub struct AnalyticsApi<'a> {
    api: &'a ApiService,
}

impl ApiService {
    pub fn homework(&self) -> HomeworkApi<'_> {
        HomeworkApi { api: self }
    }

    pub fn chat(&self) -> ChatApi<'_> {
        ChatApi { api: self }
    }

    pub fn students(&self) -> StudentApi<'_> {
        StudentApi { api: self }
    }

    pub fn analytics(&self) -> AnalyticsApi<'_> {
        AnalyticsApi { api: self }
    }
}

#[async_trait]
impl<'a> HomeworkService for HomeworkApi<'a> {
    async fn grade(&self, upload: &HomeworkUpload) -> Outcome<HomeworkAnalysis> {
        self.api.grade_homework(upload).await
    }

    async fn generate_report(&self, analysis_id: &str) -> Outcome<ReportBlob> {
        self.api.generate_report(analysis_id).await
    }

    async fn history(&self) -> Outcome<Vec<HomeworkSubmission>> {
        self.api
            .get_homework_history(DEFAULT_STUDENT_ID, DEFAULT_HISTORY_LIMIT, 0)
            .await
    }
}

#[async_trait]
impl<'a> ChatService for ChatApi<'a> {
    async fn send_message(&self, request: &ChatRequest) -> Outcome<ChatResponse> {
        self.api.send_chat_message(request).await
    }

    async fn generate_text(&self, request: &GenerateTextRequest) -> Outcome<GenerateTextResponse> {
        self.api.generate_text(request).await
    }
}

#[async_trait]
impl<'a> StudentService for StudentApi<'a> {
    async fn list(&self, query: &StudentQuery) -> Outcome<StudentListResponse> {
        self.api.get_students(query).await
    }

    async fn get(&self, id: i64) -> Outcome<Student> {
        self.api.get_student(id).await
    }

    async fn create(&self, student: &StudentCreate) -> Result<Outcome<Student>> {
        self.api.create_student(student).await
    }

    async fn update(&self, id: i64, updates: &StudentUpdate) -> Result<Outcome<Student>> {
        self.api.update_student(id, updates).await
    }

    async fn delete(&self, id: i64) -> Result<Outcome<()>> {
        self.api.delete_student(id).await
    }

    async fn stats(&self, id: i64) -> Outcome<StudentStats> {
        self.api.get_student_stats(id).await
    }
}

#[async_trait]
impl<'a> AnalyticsService for AnalyticsApi<'a> {
    async fn error_trends(
        &self,
        student_id: i64,
        subject: &str,
        days: Option<u32>,
    ) -> Outcome<ErrorTrendAnalysis> {
        self.api
            .get_error_trends(student_id, subject, days.unwrap_or(DEFAULT_TIMEFRAME_DAYS))
            .await
    }

    async fn multi_subject_summary(
        &self,
        student_id: i64,
        subjects: &[String],
        timeframe_days: Option<u32>,
    ) -> Outcome<MultiSubjectSummary> {
        self.api
            .get_multi_subject_summary(
                student_id,
                subjects,
                timeframe_days.unwrap_or(DEFAULT_TIMEFRAME_DAYS),
            )
            .await
    }

    async fn subject_progress(
        &self,
        student_id: i64,
        subject: &str,
        timeframe_days: Option<u32>,
    ) -> Outcome<SubjectProgress> {
        self.api
            .get_subject_progress(
                student_id,
                subject,
                timeframe_days.unwrap_or(DEFAULT_TIMEFRAME_DAYS),
            )
            .await
    }

    async fn learning_trends(&self, student_id: i64, days: Option<u32>) -> Outcome<Vec<LearningTrend>> {
        self.api
            .get_learning_trends(student_id, days.unwrap_or(DEFAULT_TIMEFRAME_DAYS))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClientConfig, MockConfig};

    fn service() -> ApiService {
        let config = ClientConfig {
            mock: MockConfig::deterministic(3),
            ..ClientConfig::default()
        };
        ApiService::from_config(&config).unwrap()
    }

    #[tokio::test]
    async fn test_homework_history_uses_defaults() {
        let api = service();
        let history = api.homework().history().await;
        assert!(history.is_mock());
        assert_eq!(history.data().len(), 8);
    }

    #[tokio::test]
    async fn test_analytics_default_window() {
        let api = service();
        let trends = api.analytics().error_trends(2, "math", None).await;
        assert_eq!(trends.data().error_rate_trend.len(), 30);
        assert_eq!(trends.data().analysis_period, "最近30天");

        let learning = api.analytics().learning_trends(2, Some(4)).await;
        assert!(learning.data().iter().all(|t| t.trend_data.len() == 4));
    }

    #[tokio::test]
    async fn test_student_views_delegate() {
        let api = service();
        let students = api.students();
        let created = students
            .create(&StudentCreate::new("赵小雨", "初一"))
            .await
            .unwrap();
        assert_eq!(created.data().name, "赵小雨");
        assert!(students.delete(created.data().id).await.unwrap().is_mock());
        assert_eq!(students.get(5).await.into_inner().id, 5);
    }

    async fn first_reply(chat: &dyn ChatService) -> Option<String> {
        let request = ChatRequest::new(vec![crate::models::ChatMessage::user("你好")]);
        chat.send_message(&request)
            .await
            .into_inner()
            .text()
            .map(str::to_string)
    }

    #[tokio::test]
    async fn test_views_work_as_trait_objects() {
        let api = service();
        assert!(first_reply(&api.chat()).await.is_some());
    }
}
