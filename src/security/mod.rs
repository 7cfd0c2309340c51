//! 安全模块
//!
//! 管理发往后端的认证令牌。

pub mod token;

pub use token::{FileTokenStore, MemoryTokenStore, TokenStore, token_store_from_config};
