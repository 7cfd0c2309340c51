use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 后端 API 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API 基础地址（对应 VITE_API_BASE_URL）
    pub base_url: String,
    /// 请求超时（秒）
    pub timeout_secs: u64,
    /// User-Agent 标识
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".into(),
            timeout_secs: 30,
            user_agent: concat!("ai-tutor-client/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

/// 模拟数据配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MockConfig {
    /// 是否启用模拟模式（对应 VITE_USE_MOCK）
    pub enabled: bool,
    /// 随机数种子，未设置时使用系统熵
    pub seed: Option<u64>,
    /// 是否模拟网络延迟
    pub latency: bool,
    /// 最小延迟（毫秒）
    pub min_delay_ms: u64,
    /// 最大延迟（毫秒）
    pub max_delay_ms: u64,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            seed: None,
            latency: true,
            min_delay_ms: 200,
            max_delay_ms: 2000,
        }
    }
}

impl MockConfig {
    /// 无延迟、固定种子的配置，供测试使用
    pub fn deterministic(seed: u64) -> Self {
        Self {
            enabled: true,
            seed: Some(seed),
            latency: false,
            ..Self::default()
        }
    }
}

/// 认证令牌配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// 令牌持久化文件，未设置时仅保存在内存中
    pub token_path: Option<PathBuf>,
    /// 令牌在存储中的键名
    pub token_key: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_path: None,
            token_key: "auth_token".into(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: String,
    /// 结构化日志格式
    pub structured: bool,
    /// 日志文件目录
    pub log_dir: Option<PathBuf>,
}

/// 客户端配置
///
/// 进程启动时构造一次，之后以引用方式注入到服务门面。
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// 后端 API 配置
    pub api: ApiConfig,
    /// 模拟数据配置
    pub mock: MockConfig,
    /// 认证令牌配置
    pub auth: AuthConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 应用名称
    pub app_name: String,
    /// 环境
    pub environment: String,
}

impl ClientConfig {
    /// 创建开发环境配置
    pub fn development() -> Self {
        Self {
            api: ApiConfig::default(),
            mock: MockConfig {
                enabled: true,
                ..MockConfig::default()
            },
            auth: AuthConfig::default(),
            logging: LoggingConfig {
                level: "debug".into(),
                structured: false,
                log_dir: None,
            },
            app_name: "ai-tutor".into(),
            environment: "development".into(),
        }
    }

    /// 创建生产环境配置
    pub fn production() -> Self {
        let mut config = Self::development();
        config.environment = "production".into();
        config.mock.enabled = false;
        config.logging.level = "info".into();
        config.logging.structured = true;
        config.auth.token_path = Some(PathBuf::from("./.ai-tutor/storage.json"));
        config
    }
}
