//! HTTP 传输层
//!
//! 统一处理基础地址、超时、Bearer 令牌注入和 401 响应。
//! 所有非 2xx 响应与网络错误都以 [`ClientError`] 返回。

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::multipart::Form;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

use crate::config::ApiConfig;
use crate::error::{ClientError, ErrorBody, Result};
use crate::models::ReportBlob;
use crate::security::TokenStore;

/// 无查询参数
pub const NO_QUERY: &[(&str, &str)] = &[];

/// HTTP 传输客户端
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl HttpTransport {
    /// 创建传输客户端
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenStore>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 请求拦截：存在令牌时附加 Bearer 凭证
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.get() {
            Ok(Some(token)) => request.bearer_auth(token),
            Ok(None) => request,
            Err(e) => {
                warn!(error = %e, "failed to read auth token, sending request without it");
                request
            }
        }
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let response = self.authorize(request).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(rejection(status, self.tokens.as_ref(), &body))
    }

    /// GET 并解析 JSON
    pub async fn get_json<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        debug!(method = "GET", path, "api request");
        let request = self.client.get(self.url(path)).query(query);
        Ok(self.execute(request).await?.json::<T>().await?)
    }

    /// POST JSON 请求体并解析 JSON
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(method = "POST", path, "api request");
        let request = self.client.post(self.url(path)).json(body);
        Ok(self.execute(request).await?.json::<T>().await?)
    }

    /// PUT JSON 请求体并解析 JSON
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(method = "PUT", path, "api request");
        let request = self.client.put(self.url(path)).json(body);
        Ok(self.execute(request).await?.json::<T>().await?)
    }

    /// DELETE，忽略响应体
    pub async fn delete(&self, path: &str) -> Result<()> {
        debug!(method = "DELETE", path, "api request");
        self.execute(self.client.delete(self.url(path))).await?;
        Ok(())
    }

    /// POST multipart 表单并解析 JSON
    pub async fn post_multipart<T>(&self, path: &str, form: Form) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!(method = "POST", path, "api multipart request");
        let request = self.client.post(self.url(path)).multipart(form);
        Ok(self.execute(request).await?.json::<T>().await?)
    }

    /// GET 二进制内容
    pub async fn get_bytes(&self, path: &str) -> Result<ReportBlob> {
        debug!(method = "GET", path, "api binary request");
        let response = self.execute(self.client.get(self.url(path))).await?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = response.bytes().await?.to_vec();

        Ok(ReportBlob {
            content_type,
            bytes,
        })
    }

    /// GET 仅返回状态码
    pub async fn get_status(&self, path: &str) -> Result<StatusCode> {
        debug!(method = "GET", path, "api status request");
        let response = self.execute(self.client.get(self.url(path))).await?;
        Ok(response.status())
    }
}

/// 响应拦截：非 2xx 状态转换为错误
///
/// 401 会清除本地令牌，迫使下一次受保护请求重新认证。
pub fn rejection(status: StatusCode, tokens: &dyn TokenStore, body: &str) -> ClientError {
    let message = ErrorBody::summarize(body);

    if status == StatusCode::UNAUTHORIZED {
        if let Err(e) = tokens.clear() {
            error!(error = %e, "failed to clear auth token after 401");
        }
        return ClientError::Unauthorized(message);
    }

    ClientError::Status {
        status: status.as_u16(),
        body: message,
    }
}

/// 检查响应状态，2xx 通过，其余交给 [`rejection`]
pub fn inspect_status(status: StatusCode, tokens: &dyn TokenStore, body: &str) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(rejection(status, tokens, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::security::token::MockTokenStore;

    #[test]
    fn test_401_clears_token() {
        let mut tokens = MockTokenStore::new();
        tokens.expect_clear().times(1).returning(|| Ok(()));

        let err = inspect_status(StatusCode::UNAUTHORIZED, &tokens, r#"{"detail":"expired"}"#)
            .unwrap_err();
        assert_eq!(err, ClientError::Unauthorized("expired".into()));
    }

    #[test]
    fn test_other_statuses_leave_token_untouched() {
        let mut tokens = MockTokenStore::new();
        tokens.expect_clear().never();

        assert!(inspect_status(StatusCode::OK, &tokens, "").is_ok());
        assert_eq!(
            inspect_status(StatusCode::NOT_FOUND, &tokens, "missing").unwrap_err(),
            ClientError::Status {
                status: 404,
                body: "missing".into()
            }
        );
        assert!(inspect_status(StatusCode::INTERNAL_SERVER_ERROR, &tokens, "").is_err());
    }

    #[test]
    fn test_clear_failure_still_reports_unauthorized() {
        let mut tokens = MockTokenStore::new();
        tokens
            .expect_clear()
            .returning(|| Err(ClientError::TokenStore("read-only".into())));

        let err = rejection(StatusCode::UNAUTHORIZED, &tokens, "");
        assert!(matches!(err, ClientError::Unauthorized(_)));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = ApiConfig {
            base_url: "http://localhost:8000/api/".into(),
            ..ApiConfig::default()
        };
        let transport =
            HttpTransport::new(&config, Arc::new(crate::security::MemoryTokenStore::new()))
                .unwrap();
        assert_eq!(transport.url("/v1/students"), "http://localhost:8000/api/v1/students");
    }
}
