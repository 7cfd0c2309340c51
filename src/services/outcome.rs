//! 服务调用结果
//!
//! 区分后端真实数据、模拟模式数据与失败后的降级数据。

use crate::error::ClientError;

/// 服务门面的返回值
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// 后端返回的数据
    Live(T),
    /// 模拟模式下的数据
    Mock(T),
    /// 后端调用失败，使用模拟数据替代
    Fallback { data: T, error: ClientError },
}

impl<T> Outcome<T> {
    pub fn data(&self) -> &T {
        match self {
            Outcome::Live(data) | Outcome::Mock(data) => data,
            Outcome::Fallback { data, .. } => data,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Outcome::Live(data) | Outcome::Mock(data) => data,
            Outcome::Fallback { data, .. } => data,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Outcome::Live(_))
    }

    pub fn is_mock(&self) -> bool {
        matches!(self, Outcome::Mock(_))
    }

    /// 是否为降级数据
    pub fn is_degraded(&self) -> bool {
        matches!(self, Outcome::Fallback { .. })
    }

    /// 降级时的原始错误
    pub fn error(&self) -> Option<&ClientError> {
        match self {
            Outcome::Fallback { error, .. } => Some(error),
            _ => None,
        }
    }

    /// 转换数据，保留来源
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Live(data) => Outcome::Live(f(data)),
            Outcome::Mock(data) => Outcome::Mock(f(data)),
            Outcome::Fallback { data, error } => Outcome::Fallback {
                data: f(data),
                error,
            },
        }
    }

    /// 来源标签，用于日志与展示
    pub fn source(&self) -> &'static str {
        match self {
            Outcome::Live(_) => "live",
            Outcome::Mock(_) => "mock",
            Outcome::Fallback { .. } => "fallback",
        }
    }
}
