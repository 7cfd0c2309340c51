//! 模拟数据提供者
//!
//! 为服务门面的每个操作生成结构一致的替代数据，并模拟网络延迟。
//! 固定字段来自样例记录，分数、比率等数值字段由可注入种子的随机源生成。

pub mod fixtures;

use chrono::{DateTime, Days, NaiveDate, Utc};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

use crate::config::MockConfig;
use crate::models::analysis::{ErrorAnalysisResponse, ImprovementPlan, KnowledgePoint, StudentErrorPattern};
use crate::models::analytics::{
    CrossSubjectPattern, ErrorRatePoint, ErrorTrendAnalysis, ErrorTypeDirection, ErrorTypeTrend,
    GlobalRecommendation, KnowledgePointProgress, LearningTrend, MultiSubjectSummary,
    OverallPerformance, RecentPerformance, RecommendationCategory, StrengthLevel,
    SubjectComparison, SubjectProgress, TimePeriod, TrendPoint, TrendPrediction,
};
use crate::models::chat::{
    ChatMetadata, ChatReply, ChatRequest, ChatResponse, GenerateTextRequest, GenerateTextResponse,
    GeneratedText, GenerationMetadata,
};
use crate::models::homework::{HomeworkAnalysis, HomeworkSubmission, LegacySubmission, ProcessingStatus, ReportBlob};
use crate::models::student::SubjectPerformance;
use crate::models::{
    AiProvider, Difficulty, Severity, Student, StudentCreate, StudentListResponse, StudentQuery,
    StudentStats, StudentUpdate, Subject, Trend,
};
use crate::report::render_text_summary;
use crate::services::upload::HomeworkUpload;
use fixtures::{at, to_strings};

/// 模拟日期序列的最大长度（天）
pub const MAX_SERIES_DAYS: u32 = 3650;

/// 模拟数据提供者
pub struct MockProvider {
    rng: Mutex<StdRng>,
    latency: bool,
    min_delay_ms: u64,
    max_delay_ms: u64,
    anchor: Option<DateTime<Utc>>,
}

impl MockProvider {
    /// 根据配置创建，未设置种子时使用系统熵
    pub fn new(config: &MockConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            rng: Mutex::new(rng),
            latency: config.latency,
            min_delay_ms: config.min_delay_ms,
            max_delay_ms: config.max_delay_ms.max(config.min_delay_ms),
            anchor: None,
        }
    }

    /// 固定种子、无延迟
    pub fn seeded(seed: u64) -> Self {
        Self::new(&MockConfig::deterministic(seed))
    }

    /// 固定"当前时间"，使日期序列与时间戳可复现
    pub fn with_anchor(mut self, now: DateTime<Utc>) -> Self {
        self.anchor = Some(now);
        self
    }

    fn now(&self) -> DateTime<Utc> {
        self.anchor.unwrap_or_else(Utc::now)
    }

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// 最近 `days` 天的日期序列，最后一天为今天
    ///
    /// 长度不超过 [`MAX_SERIES_DAYS`]，越过日历下界的日期被丢弃。
    fn date_series(&self, days: u32) -> Vec<NaiveDate> {
        let today = self.today();
        let days = days.min(MAX_SERIES_DAYS);
        (0..days)
            .filter_map(|i| today.checked_sub_days(Days::new(u64::from(days - i - 1))))
            .collect()
    }

    /// [0, 1) 均匀分布
    fn unit(&self) -> f64 {
        self.rng.lock().gen_range(0.0..1.0)
    }

    /// [low, high) 均匀分布
    fn between(&self, low: f64, high: f64) -> f64 {
        low + self.unit() * (high - low)
    }

    fn pick<'a, T>(&self, items: &'a [T]) -> &'a T {
        let idx = self.rng.lock().gen_range(0..items.len());
        &items[idx]
    }

    async fn delay(&self, ms: u64) {
        if !self.latency {
            return;
        }
        let ms = ms.clamp(self.min_delay_ms, self.max_delay_ms);
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    async fn jittered_delay(&self, base: u64, spread: f64) -> f64 {
        let extra = self.unit() * spread;
        self.delay(base + extra as u64).await;
        base as f64 + extra
    }

    pub async fn health_check(&self) -> bool {
        self.delay(200).await;
        true
    }

    pub async fn analyze_question_error(&self) -> ErrorAnalysisResponse {
        self.delay(1500).await;

        ErrorAnalysisResponse {
            error_type: "计算错误".into(),
            error_severity: Severity::Medium,
            explanation: "学生在解方程过程中出现了基本的代数运算错误。具体来说，在移项时没有正确处理常数项，导致最终答案不正确。".into(),
            improvement_suggestions: to_strings(&[
                "复习基本的代数运算规则，特别是移项法则",
                "多练习类似的一元一次方程求解",
                "在计算过程中要仔细检查每一步",
                "建议使用验算来确认答案的正确性",
            ]),
            related_concepts: to_strings(&["一元一次方程", "移项", "代数运算", "方程求解"]),
        }
    }

    pub async fn student_error_patterns(&self) -> Vec<StudentErrorPattern> {
        self.delay(800).await;
        fixtures::error_patterns()
    }

    pub async fn improvement_plan(&self, subject: &str) -> ImprovementPlan {
        self.delay(600).await;
        fixtures::improvement_plan(subject)
    }

    pub async fn knowledge_point_mastery(&self, subject: Option<&str>) -> Vec<KnowledgePoint> {
        self.delay(1000).await;
        fixtures::knowledge_points()
            .into_iter()
            .filter(|kp| subject.is_none_or(|s| kp.subject.eq_ignore_ascii_case(s)))
            .collect()
    }

    pub async fn grade_homework(&self) -> HomeworkAnalysis {
        self.delay(2000).await;
        let now = self.now();
        let stamp = now.timestamp_millis();

        HomeworkAnalysis {
            id: format!("analysis_{stamp}"),
            submission_id: format!("sub_{stamp}"),
            subject: Subject::Math,
            total_score: 85.0,
            max_score: 100.0,
            error_count: 2,
            correct_count: 8,
            mastery_level: 82.0,
            analyzed_at: now,
            errors: fixtures::grading_errors(),
            knowledge_points: fixtures::grading_knowledge_points(),
            improvement_plan: Some(fixtures::grading_plan()),
        }
    }

    pub async fn generate_report(&self, analysis_id: &str) -> ReportBlob {
        self.delay(1000).await;
        ReportBlob {
            content_type: "application/pdf".into(),
            bytes: render_text_summary(analysis_id, self.now()).into_bytes(),
        }
    }

    pub async fn upload_homework(&self, upload: &HomeworkUpload) -> LegacySubmission {
        self.delay(2000).await;
        let now = self.now();

        LegacySubmission {
            id: now.timestamp_millis(),
            subject: upload.subject.as_str().into(),
            submitted_at: now.to_rfc3339(),
            grade_score: None,
            feedback: None,
            file_name: upload.file_name.clone(),
            processing_status: ProcessingStatus::Pending,
        }
    }

    pub async fn homework_history(&self, limit: usize, offset: usize) -> Vec<HomeworkSubmission> {
        self.delay(800).await;
        fixtures::homework_history()
            .into_iter()
            .skip(offset)
            .take(limit)
            .collect()
    }

    pub async fn homework_details(&self, homework_id: i64) -> HomeworkSubmission {
        self.delay(500).await;

        HomeworkSubmission {
            id: homework_id.to_string(),
            file_name: "数学作业_第5章.jpg".into(),
            subject: Subject::Math,
            provider: AiProvider::Qwen,
            submitted_at: at(2024, 3, 15, 10, 30),
            processing_status: ProcessingStatus::Completed,
            grade_score: Some(85.0),
            file_url: Some("/uploads/math_homework_5.jpg".into()),
            analysis_id: Some(format!("analysis_{homework_id}")),
        }
    }

    pub async fn send_chat_message(&self, request: &ChatRequest) -> ChatResponse {
        let reply = self.pick(&fixtures::CHAT_REPLIES).to_string();
        let processing_time = self.jittered_delay(1000, 1500.0).await;
        let provider = request.provider.unwrap_or_default();

        ChatResponse {
            success: true,
            data: Some(ChatReply {
                provider: provider.as_str().into(),
                model: Some(
                    request
                        .model
                        .clone()
                        .unwrap_or_else(|| "qwen-turbo".into()),
                ),
                metadata: Some(ChatMetadata {
                    messages_count: request.messages.len(),
                    response_length: reply.chars().count(),
                    processing_time: Some(processing_time),
                }),
                response: reply,
            }),
            message: Some("AI对话成功".into()),
            error: None,
        }
    }

    pub async fn generate_text(&self, request: &GenerateTextRequest) -> GenerateTextResponse {
        let subject = request
            .context
            .as_ref()
            .and_then(|c| c.subject.as_deref())
            .unwrap_or("学习");
        let text = self.pick(&fixtures::generated_texts(subject)).clone();
        let generation_time = self.jittered_delay(800, 1200.0).await;
        let provider = request.provider.unwrap_or_default();

        GenerateTextResponse {
            success: true,
            data: Some(GeneratedText {
                provider: provider.as_str().into(),
                model: Some(
                    request
                        .model
                        .clone()
                        .unwrap_or_else(|| "qwen-turbo".into()),
                ),
                metadata: Some(GenerationMetadata {
                    prompt_length: request.prompt.chars().count(),
                    response_length: text.chars().count(),
                    generation_time: Some(generation_time),
                }),
                text,
            }),
            message: Some("文本生成成功".into()),
            error: None,
        }
    }

    pub async fn students(&self, query: &StudentQuery) -> StudentListResponse {
        self.delay(300).await;

        let students: Vec<Student> = fixtures::students()
            .into_iter()
            .filter(|s| {
                query
                    .search
                    .as_deref()
                    .filter(|q| !q.is_empty())
                    .is_none_or(|q| s.matches_search(q))
            })
            .filter(|s| {
                query
                    .grade
                    .as_deref()
                    .filter(|g| !g.is_empty())
                    .is_none_or(|g| s.grade == g)
            })
            .collect();

        StudentListResponse {
            total: students.len() as u64,
            students,
            page: query.page.unwrap_or(1),
            size: query.size.unwrap_or(20),
        }
    }

    pub async fn create_student(&self, student: &StudentCreate) -> Student {
        self.delay(500).await;
        let now = self.now();

        Student {
            id: now.timestamp_millis(),
            name: student.name.clone(),
            email: student.email.clone(),
            phone: student.phone.clone(),
            grade: student.grade.clone(),
            class: student.class.clone(),
            student_number: student.student_number.clone(),
            created_at: now,
            updated_at: now,
            is_active: true,
        }
    }

    pub async fn update_student(&self, id: i64, updates: &StudentUpdate) -> Student {
        self.delay(400).await;

        Student {
            id,
            name: updates.name.clone().unwrap_or_else(|| "张小明".into()),
            email: updates.email.clone(),
            phone: updates.phone.clone(),
            grade: updates.grade.clone().unwrap_or_else(|| "初三".into()),
            class: updates.class.clone(),
            student_number: updates.student_number.clone(),
            created_at: at(2023, 9, 1, 8, 0),
            updated_at: self.now(),
            is_active: updates.is_active.unwrap_or(true),
        }
    }

    pub async fn delete_student(&self, _id: i64) {
        self.delay(300).await;
    }

    pub async fn student(&self, id: i64) -> Student {
        self.delay(200).await;
        let mut student = fixtures::students().remove(0);
        student.id = id;
        student
    }

    pub async fn student_stats(&self, _id: i64) -> StudentStats {
        self.delay(400).await;

        let perf = |subject: &str, average_score: f64, total_questions: u32, recent_trend| {
            SubjectPerformance {
                subject: subject.into(),
                average_score,
                total_questions,
                correct_rate: average_score / 100.0,
                recent_trend,
            }
        };

        StudentStats {
            total_homework: 45,
            average_score: 82.5,
            improvement_rate: 15.2,
            active_days: 28,
            last_activity: at(2024, 1, 15, 14, 30),
            subject_performance: vec![
                perf("数学", 85.2, 180, Trend::Improving),
                perf("物理", 78.9, 125, Trend::Stable),
                perf("英语", 83.6, 200, Trend::Improving),
            ],
        }
    }

    pub async fn error_trends(&self, student_id: i64, subject: &str, days: u32) -> ErrorTrendAnalysis {
        self.delay(600).await;

        let error_rate_trend = self
            .date_series(days)
            .into_iter()
            .enumerate()
            .map(|(i, date)| {
                let error_rate = 0.15 + self.unit() * 0.1 - i as f64 * 0.001;
                let total_questions = (5.0 + self.unit() * 10.0).floor() as u32;
                let error_count =
                    ((0.15 + self.unit() * 0.1) * (5.0 + self.unit() * 10.0)).floor() as u32;
                ErrorRatePoint {
                    date,
                    error_rate,
                    total_questions,
                    error_count,
                }
            })
            .collect();

        let type_trend = |error_type: &str, trend, frequency_change, recent_count, historical_average| {
            ErrorTypeTrend {
                error_type: error_type.into(),
                trend,
                frequency_change,
                recent_count,
                historical_average,
            }
        };

        ErrorTrendAnalysis {
            student_id,
            subject: subject.into(),
            analysis_period: format!("最近{days}天"),
            overall_trend: Trend::Improving,
            error_rate_trend,
            error_type_trends: vec![
                type_trend("计算错误", ErrorTypeDirection::Improving, -0.25, 8, 12.5),
                type_trend("概念混淆", ErrorTypeDirection::Stable, 0.02, 5, 4.8),
                type_trend("公式误用", ErrorTypeDirection::Improving, -0.18, 3, 6.2),
            ],
            systematic_improvements: to_strings(&["计算准确率提升明显", "基础概念理解加深"]),
            persistent_issues: to_strings(&["复杂应用题仍需加强", "注意审题细节"]),
        }
    }

    pub async fn multi_subject_summary(
        &self,
        student_id: i64,
        _subjects: &[String],
        timeframe_days: u32,
    ) -> MultiSubjectSummary {
        self.delay(800).await;

        MultiSubjectSummary {
            student_id,
            analysis_period: format!("最近{timeframe_days}天"),
            overall_performance: OverallPerformance {
                total_questions: 285,
                total_errors: 42,
                overall_accuracy: 0.853,
                improvement_trend: Trend::Improving,
                grade_equivalent: "优秀".into(),
            },
            subject_comparisons: vec![
                SubjectComparison {
                    subject: "数学".into(),
                    accuracy_rate: 0.862,
                    error_count: 15,
                    rank_among_subjects: 1,
                    strength_level: StrengthLevel::Strong,
                    key_issues: to_strings(&["复合函数理解需加强"]),
                },
                SubjectComparison {
                    subject: "物理".into(),
                    accuracy_rate: 0.834,
                    error_count: 18,
                    rank_among_subjects: 2,
                    strength_level: StrengthLevel::Strong,
                    key_issues: to_strings(&["电路分析", "力学综合题"]),
                },
                SubjectComparison {
                    subject: "英语".into(),
                    accuracy_rate: 0.876,
                    error_count: 9,
                    rank_among_subjects: 1,
                    strength_level: StrengthLevel::Strong,
                    key_issues: to_strings(&["语法选择题"]),
                },
            ],
            cross_subject_patterns: vec![
                CrossSubjectPattern {
                    pattern_type: "逻辑推理能力强".into(),
                    affected_subjects: to_strings(&["数学", "物理"]),
                    description: "在需要逻辑推理的题目中表现优秀".into(),
                    severity: Severity::Low,
                    improvement_suggestions: to_strings(&["继续保持，可尝试更具挑战性的题目"]),
                },
                CrossSubjectPattern {
                    pattern_type: "计算细心度有待提高".into(),
                    affected_subjects: to_strings(&["数学", "物理"]),
                    description: "计算过程中偶有粗心错误".into(),
                    severity: Severity::Medium,
                    improvement_suggestions: to_strings(&["建立检查习惯", "放慢计算速度"]),
                },
            ],
            recommendations: vec![
                GlobalRecommendation {
                    priority: Severity::High,
                    category: RecommendationCategory::ConceptReview,
                    description: "重点复习函数复合运算和电路基本定律".into(),
                    estimated_impact: "预计可提升整体成绩8-12分".into(),
                    time_investment: "每日30分钟，持续2周".into(),
                },
                GlobalRecommendation {
                    priority: Severity::Medium,
                    category: RecommendationCategory::PracticeFocus,
                    description: "增加综合应用题练习，提高解题速度".into(),
                    estimated_impact: "提升解题效率20%".into(),
                    time_investment: "每周3次专项练习".into(),
                },
            ],
        }
    }

    pub async fn subject_progress(&self, student_id: i64, subject: &str, _timeframe_days: u32) -> SubjectProgress {
        self.delay(500).await;

        let recent_performance = self
            .date_series(7)
            .into_iter()
            .map(|date| RecentPerformance {
                date,
                score: 75.0 + self.unit() * 20.0,
                total: 100.0,
                accuracy: 0.75 + self.unit() * 0.2,
            })
            .collect();

        let point = |name: &str, mastery_level, total_practiced, correct_count, last_practiced, difficulty| {
            KnowledgePointProgress {
                name: name.into(),
                mastery_level,
                total_practiced,
                correct_count,
                last_practiced,
                difficulty,
            }
        };

        SubjectProgress {
            student_id,
            subject: subject.into(),
            total_questions: 95,
            correct_answers: 82,
            accuracy_rate: 0.863,
            improvement_rate: 0.125,
            knowledge_points: vec![
                point("二次函数", 85.0, 25, 21, at(2024, 1, 15, 10, 30), Difficulty::Medium),
                point("几何证明", 78.0, 18, 14, at(2024, 1, 14, 15, 20), Difficulty::Hard),
                point("代数运算", 92.0, 32, 30, at(2024, 1, 15, 14, 15), Difficulty::Easy),
            ],
            recent_performance,
            weak_areas: to_strings(&["复合函数求值", "几何综合证明"]),
            strengths: to_strings(&["基础计算", "图形识别", "公式应用"]),
        }
    }

    pub async fn learning_trends(&self, student_id: i64, days: u32) -> Vec<LearningTrend> {
        self.delay(700).await;

        Subject::ALL
            .iter()
            .map(|subject| {
                let trend_data = self
                    .date_series(days)
                    .into_iter()
                    .enumerate()
                    .map(|(i, date)| TrendPoint {
                        date,
                        accuracy_rate: 0.7 + self.unit() * 0.2 + i as f64 * 0.005,
                        questions_count: (3.0 + self.unit() * 8.0).floor() as u32,
                        average_score: 70.0 + self.unit() * 20.0 + i as f64 * 0.3,
                        study_time_minutes: (20.0 + self.unit() * 40.0).floor() as u32,
                    })
                    .collect();

                LearningTrend {
                    student_id,
                    subject: subject.as_str().into(),
                    time_period: TimePeriod::Month,
                    trend_data,
                    overall_trend: Trend::Improving,
                    prediction: TrendPrediction {
                        expected_improvement: 0.15,
                        confidence_level: 0.82,
                        recommended_actions: to_strings(&[
                            "继续当前学习节奏",
                            "增加薄弱环节练习",
                            "定期回顾错题",
                        ]),
                    },
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> MockProvider {
        MockProvider::seeded(7).with_anchor(at(2024, 3, 10, 12, 0))
    }

    #[tokio::test]
    async fn test_same_seed_same_output() {
        let a = provider().error_trends(7, "math", 10).await;
        let b = provider().error_trends(7, "math", 10).await;
        assert_eq!(a, b);

        let c = MockProvider::seeded(8)
            .with_anchor(at(2024, 3, 10, 12, 0))
            .error_trends(7, "math", 10)
            .await;
        assert_ne!(a, c);
    }

    #[tokio::test]
    async fn test_date_series_ends_today() {
        let trends = provider().error_trends(1, "physics", 3).await;
        let dates: Vec<_> = trends.error_rate_trend.iter().map(|p| p.date).collect();
        assert_eq!(
            dates,
            vec![
                fixtures::day(2024, 3, 8),
                fixtures::day(2024, 3, 9),
                fixtures::day(2024, 3, 10)
            ]
        );
        assert_eq!(trends.analysis_period, "最近3天");
    }

    #[tokio::test]
    async fn test_oversized_window_is_capped() {
        let mock = provider();
        let trends = mock.learning_trends(7, 100_000_000).await;
        assert_eq!(trends.len(), 3);
        for trend in &trends {
            assert_eq!(trend.trend_data.len(), MAX_SERIES_DAYS as usize);
            assert_eq!(trend.trend_data.last().map(|p| p.date), Some(fixtures::day(2024, 3, 10)));
        }

        let errors = mock.error_trends(7, "math", u32::MAX).await;
        assert_eq!(errors.error_rate_trend.len(), MAX_SERIES_DAYS as usize);
    }

    #[tokio::test]
    async fn test_series_stops_at_calendar_start() {
        let earliest = NaiveDate::MIN.and_hms_opt(12, 0, 0).unwrap().and_utc();
        let trends = MockProvider::seeded(7)
            .with_anchor(earliest)
            .learning_trends(1, 5)
            .await;
        assert!(trends.iter().all(|t| t.trend_data.len() == 1));
    }

    #[tokio::test]
    async fn test_random_fields_stay_in_range() {
        let progress = provider().subject_progress(3, "math", 30).await;
        assert_eq!(progress.recent_performance.len(), 7);
        for p in &progress.recent_performance {
            assert!((75.0..95.0).contains(&p.score));
            assert!((0.75..0.95).contains(&p.accuracy));
        }

        let trends = provider().learning_trends(3, 4).await;
        for point in trends.iter().flat_map(|t| &t.trend_data) {
            assert!((3..11).contains(&point.questions_count));
            assert!((20..60).contains(&point.study_time_minutes));
        }
    }

    #[tokio::test]
    async fn test_improvement_plan_defaults_to_math() {
        let p = provider();
        assert_eq!(p.improvement_plan("chemistry").await, p.improvement_plan("math").await);
        assert_eq!(p.improvement_plan("english").await.estimated_time_weeks, 4);
    }

    #[tokio::test]
    async fn test_knowledge_points_subject_filter() {
        let p = provider();
        assert_eq!(p.knowledge_point_mastery(None).await.len(), 15);
        let physics = p.knowledge_point_mastery(Some("physics")).await;
        assert_eq!(physics.len(), 5);
        assert!(physics.iter().all(|kp| kp.subject == "physics"));
    }

    #[tokio::test]
    async fn test_students_grade_filter_and_paging_echo() {
        let query = StudentQuery::default().with_grade("初三").with_page(2, 10);
        let result = provider().students(&query).await;
        assert_eq!(result.total, 2);
        assert_eq!(result.page, 2);
        assert_eq!(result.size, 10);
    }

    #[tokio::test]
    async fn test_update_student_keeps_defaults() {
        let update = StudentUpdate {
            email: Some("new@example.com".into()),
            ..StudentUpdate::default()
        };
        let student = provider().update_student(9, &update).await;
        assert_eq!(student.id, 9);
        assert_eq!(student.name, "张小明");
        assert_eq!(student.grade, "初三");
        assert!(student.is_active);
        assert_eq!(student.email.as_deref(), Some("new@example.com"));
    }

    #[tokio::test]
    async fn test_chat_reply_metadata() {
        let request = ChatRequest::new(vec![
            crate::models::ChatMessage::user("什么是二次函数？"),
            crate::models::ChatMessage::assistant("..."),
        ])
        .with_provider(AiProvider::Kimi);
        let response = provider().send_chat_message(&request).await;
        let data = response.data.unwrap();
        assert!(fixtures::CHAT_REPLIES.contains(&data.response.as_str()));
        assert_eq!(data.provider, "kimi");
        let meta = data.metadata.unwrap();
        assert_eq!(meta.messages_count, 2);
        assert_eq!(meta.response_length, data.response.chars().count());
        let t = meta.processing_time.unwrap();
        assert!((1000.0..2500.0).contains(&t));
    }

    #[tokio::test]
    async fn test_history_paging() {
        let p = provider();
        assert_eq!(p.homework_history(20, 0).await.len(), 8);
        let page = p.homework_history(3, 6).await;
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].id, "7");
    }

    #[tokio::test]
    async fn test_latency_is_clamped() {
        let config = MockConfig {
            enabled: true,
            seed: Some(1),
            latency: true,
            min_delay_ms: 5,
            max_delay_ms: 20,
        };
        let p = MockProvider::new(&config);
        let started = std::time::Instant::now();
        p.grade_homework().await;
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(20));
        assert!(elapsed < Duration::from_millis(1500));
    }
}
