//! 服务门面
//!
//! 每个后端能力对应一个方法。模拟模式下直接返回模拟数据；
//! 否则调用后端，读操作失败时降级为模拟数据，写操作失败时返回错误。

use reqwest::StatusCode;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use urlencoding::encode;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::mock::MockProvider;
use crate::models::analysis::{
    ErrorAnalysisRequest, ErrorAnalysisResponse, ImprovementPlan, KnowledgePoint,
    StudentErrorPattern,
};
use crate::models::analytics::{ErrorTrendAnalysis, LearningTrend, MultiSubjectSummary, SubjectProgress};
use crate::models::chat::{ChatRequest, ChatResponse, GenerateTextRequest, GenerateTextResponse};
use crate::models::homework::{HomeworkAnalysis, HomeworkSubmission, LegacySubmission, ReportBlob};
use crate::models::student::{
    Student, StudentCreate, StudentListResponse, StudentQuery, StudentStats, StudentUpdate,
};
use crate::observability::ClientMetrics;
use crate::security::token_store_from_config;
use crate::services::outcome::Outcome;
use crate::services::upload::HomeworkUpload;
use crate::transport::{HttpTransport, NO_QUERY};

/// 统计类接口的默认时间窗口（天）
pub const DEFAULT_TIMEFRAME_DAYS: u32 = 30;

/// 作业历史默认条数
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// 批改接口路径
const GRADE_PATH: &str = "/v1/homework/grade";

/// 服务门面
pub struct ApiService {
    transport: HttpTransport,
    mock: MockProvider,
    use_mock: bool,
    metrics: ClientMetrics,
}

impl ApiService {
    /// 以显式配置创建门面
    pub fn new(config: &ClientConfig, transport: HttpTransport, mock: MockProvider) -> Self {
        Self {
            transport,
            mock,
            use_mock: config.mock.enabled,
            metrics: ClientMetrics::default(),
        }
    }

    /// 根据配置构造传输层、令牌存储和模拟数据提供者
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let tokens = token_store_from_config(&config.auth);
        let transport = HttpTransport::new(&config.api, tokens)?;
        let mock = MockProvider::new(&config.mock);

        info!(
            base_url = transport.base_url(),
            mock_mode = config.mock.enabled,
            "api service initialized"
        );
        Ok(Self::new(config, transport, mock))
    }

    pub fn with_metrics(mut self, metrics: ClientMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn is_mock_mode(&self) -> bool {
        self.use_mock
    }

    pub fn metrics(&self) -> &ClientMetrics {
        &self.metrics
    }

    pub fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    pub fn mock(&self) -> &MockProvider {
        &self.mock
    }

    fn note_rejection(&self, error: &ClientError) {
        if matches!(error, ClientError::Unauthorized(_)) {
            self.metrics.record_unauthorized();
        }
    }

    /// 读操作：失败时降级为模拟数据
    async fn read<T, L, M>(&self, operation: &'static str, live: L, mock: M) -> Outcome<T>
    where
        L: Future<Output = Result<T>>,
        M: Future<Output = T>,
    {
        if self.use_mock {
            self.metrics.record_mock();
            return Outcome::Mock(mock.await);
        }

        let started = Instant::now();
        match live.await {
            Ok(data) => {
                self.metrics.record_live(started.elapsed().as_millis() as u64);
                debug!(operation, "backend call succeeded");
                Outcome::Live(data)
            }
            Err(error) => {
                self.note_rejection(&error);
                self.metrics.record_fallback();
                warn!(operation, error = %error, "backend call failed, falling back to mock data");
                Outcome::Fallback {
                    data: mock.await,
                    error,
                }
            }
        }
    }

    /// 写操作：失败时原样返回错误
    async fn write<T, L, M>(&self, operation: &'static str, live: L, mock: M) -> Result<Outcome<T>>
    where
        L: Future<Output = Result<T>>,
        M: Future<Output = T>,
    {
        if self.use_mock {
            self.metrics.record_mock();
            return Ok(Outcome::Mock(mock.await));
        }

        let started = Instant::now();
        match live.await {
            Ok(data) => {
                self.metrics.record_live(started.elapsed().as_millis() as u64);
                Ok(Outcome::Live(data))
            }
            Err(e) => {
                self.note_rejection(&e);
                self.metrics.record_failed_mutation();
                error!(operation, error = %e, "backend write failed");
                Err(e)
            }
        }
    }

    // ===== 健康检查与错题分析 =====

    /// 后端健康检查，失败时降级为 `false`
    pub async fn health_check(&self) -> Outcome<bool> {
        self.read(
            "health_check",
            self.health_live(),
            async {
                if self.use_mock {
                    self.mock.health_check().await
                } else {
                    false
                }
            },
        )
        .await
    }

    async fn health_live(&self) -> Result<bool> {
        let status = self.transport.get_status("/health").await?;
        Ok(status == StatusCode::OK)
    }

    pub async fn analyze_question_error(
        &self,
        request: &ErrorAnalysisRequest,
    ) -> Outcome<ErrorAnalysisResponse> {
        self.read(
            "analyze_question_error",
            self.transport
                .post_json("/v1/error-analysis/analyze-question", request),
            self.mock.analyze_question_error(),
        )
        .await
    }

    pub async fn get_student_error_patterns(
        &self,
        student_id: i64,
        subject: &str,
        timeframe_days: u32,
    ) -> Outcome<Vec<StudentErrorPattern>> {
        let path = format!(
            "/v1/error-analysis/students/{student_id}/patterns/{}",
            encode(subject)
        );
        self.read(
            "get_student_error_patterns",
            self.transport
                .get_json(&path, &[("timeframe_days", timeframe_days)]),
            self.mock.student_error_patterns(),
        )
        .await
    }

    pub async fn get_improvement_plan(&self, student_id: i64, subject: &str) -> Outcome<ImprovementPlan> {
        let path = format!(
            "/v1/error-analysis/students/{student_id}/improvement-plan/{}",
            encode(subject)
        );
        self.read(
            "get_improvement_plan",
            self.transport.get_json(&path, NO_QUERY),
            self.mock.improvement_plan(subject),
        )
        .await
    }

    pub async fn get_knowledge_point_mastery(
        &self,
        student_id: i64,
        subject: Option<&str>,
    ) -> Outcome<Vec<KnowledgePoint>> {
        let path = format!("/v1/students/{student_id}/progress/knowledge-points");
        let query: Vec<(&str, &str)> = subject.map(|s| ("subject", s)).into_iter().collect();
        self.read(
            "get_knowledge_point_mastery",
            self.transport.get_json(&path, &query),
            self.mock.knowledge_point_mastery(subject),
        )
        .await
    }

    // ===== 作业 =====

    /// 上传作业并批改
    pub async fn grade_homework(&self, upload: &HomeworkUpload) -> Outcome<HomeworkAnalysis> {
        self.read(
            "grade_homework",
            self.grade_live(upload),
            self.mock.grade_homework(),
        )
        .await
    }

    async fn grade_live(&self, upload: &HomeworkUpload) -> Result<HomeworkAnalysis> {
        let body: Value = self
            .transport
            .post_multipart(GRADE_PATH, upload.grading_form()?)
            .await?;
        Ok(serde_json::from_value(unwrap_data(body))?)
    }

    /// 下载批改报告
    pub async fn generate_report(&self, analysis_id: &str) -> Outcome<ReportBlob> {
        let path = format!("/v1/homework/{}/report", encode(analysis_id));
        self.read(
            "generate_report",
            self.transport.get_bytes(&path),
            self.mock.generate_report(analysis_id),
        )
        .await
    }

    /// 旧版上传接口，失败时返回错误
    pub async fn upload_homework(&self, upload: &HomeworkUpload) -> Result<Outcome<LegacySubmission>> {
        self.write(
            "upload_homework",
            self.legacy_upload_live(upload),
            self.mock.upload_homework(upload),
        )
        .await
    }

    async fn legacy_upload_live(&self, upload: &HomeworkUpload) -> Result<LegacySubmission> {
        self.transport
            .post_multipart(GRADE_PATH, upload.legacy_form()?)
            .await
    }

    pub async fn get_homework_history(
        &self,
        student_id: i64,
        limit: usize,
        offset: usize,
    ) -> Outcome<Vec<HomeworkSubmission>> {
        let path = format!("/v1/students/{student_id}/homework");
        self.read(
            "get_homework_history",
            self.transport
                .get_json(&path, &[("limit", limit), ("offset", offset)]),
            self.mock.homework_history(limit, offset),
        )
        .await
    }

    pub async fn get_homework_details(&self, homework_id: i64) -> Outcome<HomeworkSubmission> {
        let path = format!("/v1/homework/{homework_id}");
        self.read(
            "get_homework_details",
            self.transport.get_json(&path, NO_QUERY),
            self.mock.homework_details(homework_id),
        )
        .await
    }

    // ===== AI 对话 =====

    pub async fn send_chat_message(&self, request: &ChatRequest) -> Outcome<ChatResponse> {
        self.read(
            "send_chat_message",
            self.transport.post_json("/v1/ai/chat", request),
            self.mock.send_chat_message(request),
        )
        .await
    }

    pub async fn generate_text(&self, request: &GenerateTextRequest) -> Outcome<GenerateTextResponse> {
        self.read(
            "generate_text",
            self.transport.post_json("/v1/ai/generate", request),
            self.mock.generate_text(request),
        )
        .await
    }

    // ===== 学生管理 =====

    pub async fn get_students(&self, query: &StudentQuery) -> Outcome<StudentListResponse> {
        self.read(
            "get_students",
            self.transport.get_json("/v1/students", query),
            self.mock.students(query),
        )
        .await
    }

    pub async fn create_student(&self, student: &StudentCreate) -> Result<Outcome<Student>> {
        self.write(
            "create_student",
            self.transport.post_json("/v1/students", student),
            self.mock.create_student(student),
        )
        .await
    }

    pub async fn update_student(&self, id: i64, updates: &StudentUpdate) -> Result<Outcome<Student>> {
        let path = format!("/v1/students/{id}");
        self.write(
            "update_student",
            self.transport.put_json(&path, updates),
            self.mock.update_student(id, updates),
        )
        .await
    }

    pub async fn delete_student(&self, id: i64) -> Result<Outcome<()>> {
        let path = format!("/v1/students/{id}");
        self.write(
            "delete_student",
            self.transport.delete(&path),
            self.mock.delete_student(id),
        )
        .await
    }

    pub async fn get_student(&self, id: i64) -> Outcome<Student> {
        let path = format!("/v1/students/{id}");
        self.read(
            "get_student",
            self.transport.get_json(&path, NO_QUERY),
            self.mock.student(id),
        )
        .await
    }

    pub async fn get_student_stats(&self, id: i64) -> Outcome<StudentStats> {
        let path = format!("/v1/students/{id}/stats");
        self.read(
            "get_student_stats",
            self.transport.get_json(&path, NO_QUERY),
            self.mock.student_stats(id),
        )
        .await
    }

    // ===== 学情分析 =====

    pub async fn get_error_trends(
        &self,
        student_id: i64,
        subject: &str,
        days: u32,
    ) -> Outcome<ErrorTrendAnalysis> {
        let path = format!(
            "/v1/error-analysis/students/{student_id}/trends/{}",
            encode(subject)
        );
        self.read(
            "get_error_trends",
            self.transport.get_json(&path, &[("days", days)]),
            self.mock.error_trends(student_id, subject, days),
        )
        .await
    }

    /// `subjects` 为空时由后端决定科目范围
    pub async fn get_multi_subject_summary(
        &self,
        student_id: i64,
        subjects: &[String],
        timeframe_days: u32,
    ) -> Outcome<MultiSubjectSummary> {
        let path = format!("/v1/error-analysis/students/{student_id}/summary");
        let query = summary_query(subjects, timeframe_days);
        self.read(
            "get_multi_subject_summary",
            self.transport.get_json(&path, &query),
            self.mock
                .multi_subject_summary(student_id, subjects, timeframe_days),
        )
        .await
    }

    pub async fn get_subject_progress(
        &self,
        student_id: i64,
        subject: &str,
        timeframe_days: u32,
    ) -> Outcome<SubjectProgress> {
        let path = format!("/v1/students/{student_id}/progress/{}", encode(subject));
        self.read(
            "get_subject_progress",
            self.transport
                .get_json(&path, &[("timeframe_days", timeframe_days)]),
            self.mock
                .subject_progress(student_id, subject, timeframe_days),
        )
        .await
    }

    pub async fn get_learning_trends(&self, student_id: i64, days: u32) -> Outcome<Vec<LearningTrend>> {
        let path = format!("/v1/students/{student_id}/trends");
        self.read(
            "get_learning_trends",
            self.transport.get_json(&path, &[("days", days)]),
            self.mock.learning_trends(student_id, days),
        )
        .await
    }
}

/// 多科目汇总的查询参数，`subjects` 作为重复键传递
fn summary_query(subjects: &[String], timeframe_days: u32) -> Vec<(&'static str, String)> {
    let mut query = vec![("timeframe_days", timeframe_days.to_string())];
    query.extend(subjects.iter().map(|s| ("subjects", s.clone())));
    query
}

/// 批改接口的响应可能被包装两层：`data` 字段有值时取其内容，否则返回原响应体
pub fn unwrap_data(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.get("data").is_some_and(is_truthy) => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// 创建服务门面
pub fn create_api_service(config: &ClientConfig) -> Result<Arc<ApiService>> {
    Ok(Arc::new(ApiService::from_config(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_data_prefers_nested_payload() {
        let wrapped = json!({"data": {"total_score": 85, "errors": []}, "success": true});
        assert_eq!(unwrap_data(wrapped), json!({"total_score": 85, "errors": []}));
    }

    #[test]
    fn test_unwrap_data_keeps_plain_body() {
        let plain = json!({"total_score": 85, "errors": []});
        assert_eq!(unwrap_data(plain.clone()), plain);

        let null_data = json!({"data": null, "total_score": 70});
        assert_eq!(unwrap_data(null_data.clone()), null_data);

        assert_eq!(unwrap_data(json!([1, 2])), json!([1, 2]));
    }

    #[test]
    fn test_summary_query_repeats_subjects() {
        let query = summary_query(&["math".into(), "physics".into()], 14);
        assert_eq!(
            query,
            vec![
                ("timeframe_days", "14".to_string()),
                ("subjects", "math".to_string()),
                ("subjects", "physics".to_string()),
            ]
        );
        assert_eq!(summary_query(&[], 30).len(), 1);
    }

    #[tokio::test]
    async fn test_mock_mode_never_touches_backend() {
        let config = ClientConfig {
            mock: crate::config::MockConfig::deterministic(1),
            ..ClientConfig::default()
        };
        let service = ApiService::from_config(&config).unwrap();

        let health = service.health_check().await;
        assert_eq!(health, Outcome::Mock(true));
        assert!(service.get_students(&StudentQuery::default()).await.is_mock());
        assert_eq!(service.metrics().mock(), 2);
        assert_eq!(service.metrics().live(), 0);
    }
}
