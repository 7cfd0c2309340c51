//! 可观测性模块
//!
//! 提供结构化日志初始化和客户端调用指标。

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// 日志文件名前缀
const LOG_FILE_PREFIX: &str = "ai-tutor.log";

// ===== Client Metrics =====

/// 客户端调用指标
#[derive(Clone, Default)]
pub struct ClientMetrics {
    pub live_responses_total: Arc<AtomicU64>,
    pub live_duration_sum: Arc<AtomicU64>,
    pub mock_responses_total: Arc<AtomicU64>,
    pub fallbacks_total: Arc<AtomicU64>,
    pub unauthorized_total: Arc<AtomicU64>,
    pub failed_mutations_total: Arc<AtomicU64>,
}

impl ClientMetrics {
    /// 记录后端成功响应
    pub fn record_live(&self, duration_ms: u64) {
        self.live_responses_total.fetch_add(1, Ordering::SeqCst);
        self.live_duration_sum
            .fetch_add(duration_ms, Ordering::SeqCst);
    }

    /// 记录模拟模式响应
    pub fn record_mock(&self) {
        self.mock_responses_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 记录读操作降级
    pub fn record_fallback(&self) {
        self.fallbacks_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 记录 401 响应
    pub fn record_unauthorized(&self) {
        self.unauthorized_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 记录写操作失败
    pub fn record_failed_mutation(&self) {
        self.failed_mutations_total.fetch_add(1, Ordering::SeqCst);
    }

    pub fn live(&self) -> u64 {
        self.live_responses_total.load(Ordering::SeqCst)
    }

    pub fn mock(&self) -> u64 {
        self.mock_responses_total.load(Ordering::SeqCst)
    }

    pub fn fallbacks(&self) -> u64 {
        self.fallbacks_total.load(Ordering::SeqCst)
    }

    pub fn failed_mutations(&self) -> u64 {
        self.failed_mutations_total.load(Ordering::SeqCst)
    }

    /// 生成 Prometheus 格式指标
    pub fn gather(&self) -> String {
        format!(
            r#"# HELP api_live_responses_total Responses served by the backend
# TYPE api_live_responses_total counter
api_live_responses_total {}
# HELP api_live_duration_seconds Backend round-trip time in seconds
# TYPE api_live_duration_seconds histogram
api_live_duration_seconds_sum {}
api_live_duration_seconds_count {}
# HELP api_mock_responses_total Responses served in mock mode
# TYPE api_mock_responses_total counter
api_mock_responses_total {}
# HELP api_fallbacks_total Read operations degraded to mock data
# TYPE api_fallbacks_total counter
api_fallbacks_total {}
# HELP api_unauthorized_total Responses rejected with 401
# TYPE api_unauthorized_total counter
api_unauthorized_total {}
# HELP api_failed_mutations_total Write operations that failed
# TYPE api_failed_mutations_total counter
api_failed_mutations_total {}
"#,
            self.live(),
            self.live_duration_sum.load(Ordering::SeqCst) as f64 / 1000.0,
            self.live(),
            self.mock(),
            self.fallbacks(),
            self.unauthorized_total.load(Ordering::SeqCst),
            self.failed_mutations(),
        )
    }
}

// ===== Structured Logging =====

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if level.trim().is_empty() { "info" } else { level };
        EnvFilter::new(level)
    })
}

/// 初始化结构化日志
///
/// `RUST_LOG` 优先于配置中的级别。配置了 `log_dir` 时按天滚动写入文件，
/// 返回的 guard 需要保持到进程退出，否则缓冲中的日志会丢失。
pub fn init_tracing(config: &LoggingConfig) -> Option<WorkerGuard> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config.level))
        .with_target(true)
        .with_line_number(true);

    let (result, guard) = match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let builder = builder.with_writer(writer).with_ansi(false);
            let result = if config.structured {
                builder.json().try_init()
            } else {
                builder.try_init()
            };
            (result, Some(guard))
        }
        None => {
            let result = if config.structured {
                builder.json().try_init()
            } else {
                builder.try_init()
            };
            (result, None)
        }
    };

    // 已有全局 subscriber 时沿用
    if let Err(e) = result {
        tracing::debug!(error = %e, "tracing subscriber already installed");
    }

    guard
}
