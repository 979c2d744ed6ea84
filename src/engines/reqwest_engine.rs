// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::fetch_outcome::{FetchFault, FetchOutcome};
use crate::engines::traits::{EngineError, PageFetcher};
use crate::utils::text_encoding::decode_body;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use reqwest::StatusCode;
use std::error::Error as StdError;
use std::time::Duration;
use tracing::debug;

/// 最多跟随的重定向次数
const MAX_REDIRECTS: usize = 10;

/// 抓取引擎
///
/// 基于reqwest实现的HTTP抓取引擎，所有请求共享同一个客户端和连接池
pub struct ReqwestEngine {
    client: reqwest::Client,
}

impl ReqwestEngine {
    /// 创建抓取引擎
    ///
    /// # 参数
    ///
    /// * `user_agent` - 请求使用的User-Agent
    ///
    /// # 返回值
    ///
    /// * `Ok(ReqwestEngine)` - 抓取引擎
    /// * `Err(EngineError)` - HTTP客户端构建失败
    pub fn new(user_agent: &str) -> Result<Self, EngineError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()?;
        Ok(Self { client })
    }

    async fn fetch_page(&self, url: &str) -> FetchOutcome {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => return outcome_from_error(&e),
        };

        let status = response.status();
        if status != StatusCode::OK {
            return FetchOutcome::http_error(status.as_u16());
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => return outcome_from_error(&e),
        };

        match decode_body(&bytes, content_type.as_deref()) {
            Ok(body) => FetchOutcome::Success {
                status: status.as_u16(),
                body,
            },
            Err(e) => {
                debug!("Failed to decode body of {}: {}", url, e);
                FetchOutcome::NetworkError {
                    fault: FetchFault::Decode,
                }
            }
        }
    }
}

#[async_trait]
impl PageFetcher for ReqwestEngine {
    /// 执行HTTP抓取
    ///
    /// 请求与超时计时器竞争，超时只取消当前这一个请求
    async fn fetch(&self, url: &str, timeout: Duration) -> FetchOutcome {
        match tokio::time::timeout(timeout, self.fetch_page(url)).await {
            Ok(outcome) => outcome,
            Err(_) => FetchOutcome::Timeout,
        }
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

fn outcome_from_error(error: &reqwest::Error) -> FetchOutcome {
    if error.is_timeout() {
        return FetchOutcome::Timeout;
    }
    debug!("Request failed: {:?}", error);
    FetchOutcome::NetworkError {
        fault: classify_error(error),
    }
}

/// 将reqwest错误归入固定的故障类别
fn classify_error(error: &reqwest::Error) -> FetchFault {
    if error.is_builder() {
        FetchFault::InvalidUrl
    } else if error.is_redirect() {
        FetchFault::TooManyRedirects
    } else if error.is_decode() || error.is_body() {
        FetchFault::Decode
    } else if error.is_connect() {
        classify_connect_error(error)
    } else {
        FetchFault::Request
    }
}

fn classify_connect_error(error: &reqwest::Error) -> FetchFault {
    let mut source = error.source();
    while let Some(cause) = source {
        if let Some(io) = cause.downcast_ref::<std::io::Error>() {
            if io.kind() == std::io::ErrorKind::ConnectionRefused {
                return FetchFault::ConnectionRefused;
            }
        }
        // hyper-util and rustls only expose these as messages
        let message = cause.to_string().to_ascii_lowercase();
        if message.contains("dns error") || message.contains("failed to lookup address") {
            return FetchFault::Dns;
        }
        if message.contains("certificate") || message.contains("tls") || message.contains("handshake") {
            return FetchFault::Tls;
        }
        source = cause.source();
    }
    FetchFault::Connect
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
