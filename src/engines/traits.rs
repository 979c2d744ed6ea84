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

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::domain::models::fetch_outcome::FetchOutcome;

/// 引擎错误类型
///
/// 只在构建引擎时出现，单个URL的失败通过 [`FetchOutcome`] 返回
#[derive(Error, Debug)]
pub enum EngineError {
    /// HTTP客户端构建失败
    #[error("HTTP client build failed: {0}")]
    ClientBuild(#[from] reqwest::Error),
}

/// 页面抓取特质
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 抓取页面
    ///
    /// # 参数
    ///
    /// * `url` - 目标URL
    /// * `timeout` - 整个请求（包括读取响应体）的超时时间
    ///
    /// # 返回值
    ///
    /// 抓取结果，失败不会以错误形式返回
    async fn fetch(&self, url: &str, timeout: Duration) -> FetchOutcome;

    /// 引擎名称
    fn name(&self) -> &'static str;
}
