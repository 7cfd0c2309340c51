use crate::config::config::ClientConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认路径加载配置
    ///
    /// 合并顺序（后者覆盖前者）：
    /// 1. 内置默认值
    /// 2. ./ai-tutor.toml
    /// 3. 兼容旧前端的 VITE_API_BASE_URL / VITE_USE_MOCK
    /// 4. AI_TUTOR_ 前缀环境变量，层级以 `__` 分隔
    pub fn load() -> Result<ClientConfig, figment::Error> {
        Self::load_from(default_config_path())
    }

    /// 从指定路径加载配置
    pub fn load_from(path: PathBuf) -> Result<ClientConfig, figment::Error> {
        Self::figment(path).extract()
    }

    fn figment(path: PathBuf) -> Figment {
        Figment::from(Serialized::defaults(ClientConfig::default()))
            .merge(Toml::file(path))
            .merge(
                Env::raw()
                    .only(&["VITE_API_BASE_URL"])
                    .map(|_| "api.base_url".into()),
            )
            .merge(
                Env::raw()
                    .only(&["VITE_USE_MOCK"])
                    .map(|_| "mock.enabled".into()),
            )
            .merge(Env::prefixed("AI_TUTOR_").split("__"))
    }

    /// 验证配置
    pub fn validate(config: &ClientConfig) -> Result<(), ConfigValidationError> {
        if config.api.base_url.trim().is_empty() {
            return Err(ConfigValidationError::MissingBaseUrl);
        }

        if config.api.timeout_secs == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if config.mock.min_delay_ms > config.mock.max_delay_ms {
            return Err(ConfigValidationError::InvalidDelayRange {
                min: config.mock.min_delay_ms,
                max: config.mock.max_delay_ms,
            });
        }

        Ok(())
    }
}

/// 配置验证错误
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigValidationError {
    #[error("API 基础地址未配置")]
    MissingBaseUrl,

    #[error("请求超时无效，必须大于 0")]
    InvalidTimeout,

    #[error("模拟延迟范围无效: {min}ms > {max}ms")]
    InvalidDelayRange { min: u64, max: u64 },
}

/// 获取默认配置文件路径
pub fn default_config_path() -> PathBuf {
    PathBuf::from("ai-tutor.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_toml_and_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "ai-tutor.toml",
                r#"
                app_name = "tutor-test"

                [api]
                base_url = "http://backend:9000/api"

                [mock]
                seed = 42
                "#,
            )?;
            jail.set_env("VITE_USE_MOCK", "true");
            jail.set_env("AI_TUTOR_API__TIMEOUT_SECS", "5");

            let config = ConfigLoader::load()?;
            assert_eq!(config.app_name, "tutor-test");
            assert_eq!(config.api.base_url, "http://backend:9000/api");
            assert_eq!(config.api.timeout_secs, 5);
            assert!(config.mock.enabled);
            assert_eq!(config.mock.seed, Some(42));
            assert_eq!(config.auth.token_key, "auth_token");
            Ok(())
        });
    }

    #[test]
    fn test_legacy_base_url_is_overridden_by_prefixed_env() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("VITE_API_BASE_URL", "http://legacy/api");
            let config = ConfigLoader::load()?;
            assert_eq!(config.api.base_url, "http://legacy/api");

            jail.set_env("AI_TUTOR_API__BASE_URL", "http://new/api");
            let config = ConfigLoader::load()?;
            assert_eq!(config.api.base_url, "http://new/api");
            Ok(())
        });
    }

    #[test]
    fn test_validate() {
        let mut config = ClientConfig::development();
        assert!(ConfigLoader::validate(&config).is_ok());

        config.mock.min_delay_ms = 3000;
        assert_eq!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::InvalidDelayRange { min: 3000, max: 2000 })
        );

        config.api.base_url = " ".into();
        assert_eq!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::MissingBaseUrl)
        );
    }
}
