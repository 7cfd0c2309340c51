//! 错误处理模块
//!
//! 定义客户端的错误类型。所有变体只携带可克隆的数据，
//! 使降级结果可以同时保存模拟数据和原始错误。

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 客户端错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// 网络错误（未收到响应）
    #[error("网络错误: {0}")]
    Network(String),

    /// 请求超时
    #[error("请求超时: {0}")]
    Timeout(String),

    /// 非 2xx 响应
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// 认证失败（401），本地令牌已被清除
    #[error("认证失败: {0}")]
    Unauthorized(String),

    /// 响应解析失败
    #[error("响应解析失败: {0}")]
    Decode(String),

    /// 上传文件不合法
    #[error("上传文件不合法: {0}")]
    InvalidUpload(String),

    /// 令牌存储错误
    #[error("令牌存储错误: {0}")]
    TokenStore(String),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),

    /// IO 错误
    #[error("IO 错误: {0}")]
    Io(String),
}

impl ClientError {
    /// 对应的 HTTP 状态码（仅限收到响应的错误）
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Unauthorized(_) => Some(401),
            _ => None,
        }
    }

    /// 是否属于传输层失败（网络、超时或非 2xx）
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ClientError::Network(_)
                | ClientError::Timeout(_)
                | ClientError::Status { .. }
                | ClientError::Unauthorized(_)
        )
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClientError::Timeout(e.to_string())
        } else if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            ClientError::Status {
                status: status.as_u16(),
                body: e.to_string(),
            }
        } else {
            ClientError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(e: std::io::Error) -> Self {
        ClientError::Io(e.to_string())
    }
}

impl From<figment::Error> for ClientError {
    fn from(e: figment::Error) -> Self {
        ClientError::Config(e.to_string())
    }
}

/// 后端返回的错误体
///
/// FastAPI 使用 `detail`，业务接口使用 `message`/`error`。
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ErrorBody {
    pub detail: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ErrorBody {
    /// 从原始响应体提取可读信息，无法解析时返回原文
    pub fn summarize(raw: &str) -> String {
        match serde_json::from_str::<ErrorBody>(raw) {
            Ok(body) => body
                .detail
                .or(body.message)
                .or(body.error)
                .unwrap_or_else(|| raw.to_string()),
            Err(_) => raw.to_string(),
        }
    }
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        let err = ClientError::Status {
            status: 500,
            body: "boom".into(),
        };
        assert_eq!(err.status_code(), Some(500));
        assert_eq!(ClientError::Unauthorized("x".into()).status_code(), Some(401));
        assert_eq!(ClientError::Network("down".into()).status_code(), None);
    }

    #[test]
    fn test_is_transport() {
        assert!(ClientError::Timeout("30s".into()).is_transport());
        assert!(!ClientError::InvalidUpload("too big".into()).is_transport());
    }

    #[test]
    fn test_error_body_summarize() {
        assert_eq!(ErrorBody::summarize(r#"{"detail":"学生不存在"}"#), "学生不存在");
        assert_eq!(ErrorBody::summarize(r#"{"message":"失败"}"#), "失败");
        assert_eq!(ErrorBody::summarize("plain text"), "plain text");
    }
}
