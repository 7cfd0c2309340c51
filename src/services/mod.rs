//! 服务模块
//!
//! 服务门面、按业务分组的视图、调用结果类型与作业上传。

pub mod api_service;
pub mod groups;
pub mod outcome;
pub mod upload;

pub use api_service::{
    ApiService, DEFAULT_HISTORY_LIMIT, DEFAULT_TIMEFRAME_DAYS, create_api_service, unwrap_data,
};
pub use groups::{
    AnalyticsApi, AnalyticsService, ChatApi, ChatService, DEFAULT_STUDENT_ID, HomeworkApi,
    HomeworkService, StudentApi, StudentService,
};
pub use outcome::Outcome;
pub use upload::HomeworkUpload;
