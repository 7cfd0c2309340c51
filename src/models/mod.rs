//! 数据模型模块
//!
//! 与后端交换的纯数据记录，在本层没有独立的生命周期。

pub mod analysis;
pub mod analytics;
pub mod chat;
pub mod common;
pub mod homework;
pub mod student;
pub mod timestamp;

pub use analysis::{
    ErrorAnalysisRequest, ErrorAnalysisResponse, ImprovementPlan, KnowledgePoint, PatternTrend,
    StudentErrorPattern,
};
pub use analytics::{
    ErrorTrendAnalysis, LearningTrend, MultiSubjectSummary, SubjectProgress, TimePeriod,
    TrendPoint,
};
pub use chat::{
    ChatContext, ChatMessage, ChatRequest, ChatResponse, ChatRole, GenerateTextRequest,
    GenerateTextResponse,
};
pub use common::{AiProvider, Difficulty, Severity, Subject, Trend};
pub use homework::{
    HomeworkAnalysis, HomeworkSubmission, LegacySubmission, ProcessingStatus, ReportBlob,
};
pub use student::{
    Student, StudentCreate, StudentListResponse, StudentQuery, StudentStats, StudentUpdate,
};
