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
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, instrument, warn};

use crate::domain::models::scan_result::ScanOutcome;
use crate::domain::models::url_entry::UrlEntry;
use crate::domain::services::classifier::classify_outcome;
use crate::domain::services::match_scanner::MatchScanner;
use crate::engines::traits::PageFetcher;
use crate::infrastructure::progress::ScanProgress;

/// 工作器共享的链接队列
pub type SharedQueue = Arc<Mutex<mpsc::UnboundedReceiver<UrlEntry>>>;

/// 扫描工作者
///
/// 依次完成抓取和匹配扫描，同一个URL内两步严格串行
pub struct ScanWorker {
    worker_id: usize,
    fetcher: Arc<dyn PageFetcher>,
    scanner: Arc<MatchScanner>,
    timeout: Duration,
    progress: ScanProgress,
}

impl ScanWorker {
    /// 创建新的扫描工作器实例
    pub fn new(
        worker_id: usize,
        fetcher: Arc<dyn PageFetcher>,
        scanner: Arc<MatchScanner>,
        timeout: Duration,
        progress: ScanProgress,
    ) -> Self {
        Self {
            worker_id,
            fetcher,
            scanner,
            timeout,
            progress,
        }
    }

    /// 运行扫描工作器
    ///
    /// 队列取空后退出；结果通道关闭时也会提前退出
    pub async fn run(&self, queue: SharedQueue, results: mpsc::Sender<ScanOutcome>) {
        debug!("Scan worker {} started", self.worker_id);

        loop {
            let next = queue.lock().await.recv().await;
            let Some(url) = next else {
                break;
            };

            let outcome = self.process(url).await;
            if results.send(outcome).await.is_err() {
                warn!("Scan worker {} lost its result channel", self.worker_id);
                break;
            }
        }

        debug!("Scan worker {} finished", self.worker_id);
    }

    /// 处理单个链接
    ///
    /// 抓取失败在这里转换为错误记录，不会向上传播；失败只显示在进度条的状态消息中
    #[instrument(skip(self, url), fields(worker_id = self.worker_id, url = %url))]
    pub async fn process(&self, url: UrlEntry) -> ScanOutcome {
        self.progress.checking(url.as_str());

        let fetched = self.fetcher.fetch(url.as_str(), self.timeout).await;
        let outcome = classify_outcome(url, fetched, &self.scanner);

        match &outcome {
            ScanOutcome::Matched(record) => {
                debug!(line = record.line_number, element = %record.tag_name, "Match found");
            }
            ScanOutcome::NonMatching(_) => debug!("No match"),
            ScanOutcome::Errored(record) => {
                debug!("{} accessing URL {}", record.description, record.url);
                self.progress.failed(record.url.as_str(), &record.description);
            }
        }

        outcome
    }
}
