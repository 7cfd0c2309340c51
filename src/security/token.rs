//! 认证令牌存储
//!
//! 持久化单个令牌字符串，对应浏览器 localStorage 中的 `auth_token` 键。

use parking_lot::RwLock;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use crate::config::AuthConfig;
use crate::error::{ClientError, Result};

/// 令牌存储 trait
#[cfg_attr(test, mockall::automock)]
pub trait TokenStore: Send + Sync {
    /// 读取当前令牌
    fn get(&self) -> Result<Option<String>>;

    /// 写入令牌（登录后调用）
    fn set(&self, token: &str) -> Result<()>;

    /// 清除令牌（收到 401 时调用）
    fn clear(&self) -> Result<()>;
}

/// 内存令牌存储
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以已有令牌初始化
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RwLock::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Result<Option<String>> {
        Ok(self.token.read().clone())
    }

    fn set(&self, token: &str) -> Result<()> {
        *self.token.write() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.write() = None;
        Ok(())
    }
}

/// 文件令牌存储
///
/// 文件内容是一个 JSON 对象，行为与 localStorage 相同：
/// 只读写 `key` 对应的条目，其余条目保持不变。
/// 首次读取后令牌缓存在内存中，请求路径上的 `get` 不再访问磁盘。
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    key: String,
    /// `None` 表示尚未从文件加载
    cached: RwLock<Option<Option<String>>>,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>, key: &str) -> Self {
        Self {
            path: path.into(),
            key: key.to_string(),
            cached: RwLock::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Map<String, Value>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&raw)? {
            Value::Object(map) => Ok(map),
            _ => Err(ClientError::TokenStore(format!(
                "存储文件不是 JSON 对象: {}",
                self.path.display()
            ))),
        }
    }

    fn write_entries(&self, entries: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let body = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, body)?;
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Result<Option<String>> {
        if let Some(token) = self.cached.read().as_ref() {
            return Ok(token.clone());
        }

        let mut cached = self.cached.write();
        if let Some(token) = cached.as_ref() {
            return Ok(token.clone());
        }
        let entries = self.read_entries()?;
        let token = entries
            .get(&self.key)
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        *cached = Some(token.clone());
        Ok(token)
    }

    fn set(&self, token: &str) -> Result<()> {
        let mut cached = self.cached.write();
        let mut entries = self.read_entries()?;
        entries.insert(self.key.clone(), Value::String(token.to_string()));
        self.write_entries(&entries)?;
        *cached = Some(Some(token.to_string()));
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut cached = self.cached.write();
        let mut entries = self.read_entries()?;
        if entries.remove(&self.key).is_some() {
            debug!(path = %self.path.display(), "auth token removed");
            self.write_entries(&entries)?;
        }
        *cached = Some(None);
        Ok(())
    }
}

/// 根据配置创建令牌存储
pub fn token_store_from_config(config: &AuthConfig) -> Arc<dyn TokenStore> {
    match &config.token_path {
        Some(path) => Arc::new(FileTokenStore::new(path.clone(), &config.token_key)),
        None => Arc::new(MemoryTokenStore::new()),
    }
}
