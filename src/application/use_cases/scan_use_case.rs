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

use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::config::settings::ScanSettings;
use crate::domain::models::scan_result::ResultPartition;
use crate::domain::models::url_entry::UrlEntry;
use crate::domain::services::match_scanner::MatchScanner;
use crate::engines::traits::PageFetcher;
use crate::infrastructure::progress::ScanProgress;
use crate::workers::manager::WorkerManager;

/// 扫描参数
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub search_string: String,
    pub timeout: Duration,
    pub concurrency: usize,
    pub preserve_input_order: bool,
}

impl From<&ScanSettings> for ScanOptions {
    fn from(settings: &ScanSettings) -> Self {
        Self {
            search_string: settings.search_string.clone(),
            timeout: Duration::from_secs(settings.timeout_secs),
            concurrency: settings.concurrency,
            preserve_input_order: settings.preserve_input_order,
        }
    }
}

/// 扫描用例
///
/// 对每个链接执行抓取和匹配扫描，把结果分为匹配、未匹配、错误三类
pub struct ScanUseCase {
    fetcher: Arc<dyn PageFetcher>,
    options: ScanOptions,
}

impl ScanUseCase {
    pub fn new(fetcher: Arc<dyn PageFetcher>, options: ScanOptions) -> Self {
        Self { fetcher, options }
    }

    /// 执行扫描
    ///
    /// # 参数
    ///
    /// * `urls` - 待扫描的链接条目
    /// * `progress` - 进度显示
    ///
    /// # 返回值
    ///
    /// 覆盖每个输入条目恰好一次的结果分区；开启 `preserve_input_order` 时按输入顺序排序
    pub async fn execute(&self, urls: Vec<UrlEntry>, progress: ScanProgress) -> ResultPartition {
        info!(
            links = urls.len(),
            concurrency = self.options.concurrency,
            timeout_secs = self.options.timeout.as_secs(),
            engine = self.fetcher.name(),
            "Scanning for '{}'",
            self.options.search_string
        );

        let manager = WorkerManager::new(
            self.fetcher.clone(),
            MatchScanner::new(&self.options.search_string),
            self.options.timeout,
            self.options.concurrency,
            progress.clone(),
        );
        let mut partition = manager.run(urls).await;
        progress.finish();

        if self.options.preserve_input_order {
            partition.sort_by_input_order();
        }
        partition
    }
}
