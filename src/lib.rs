//! AI Tutor 客户端
//!
//! 作业批改与学情分析后端的类型化访问层。后端不可用时，读操作降级为
//! 结构一致的模拟数据，写操作返回错误。

pub mod config;
pub mod error;
pub mod mock;
pub mod models;
pub mod observability;
pub mod report;
pub mod security;
pub mod services;
pub mod transport;

pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use services::{ApiService, Outcome};
