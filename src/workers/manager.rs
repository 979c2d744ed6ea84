// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::domain::models::scan_result::{ResultPartition, ScanOutcome};
use crate::domain::models::url_entry::UrlEntry;
use crate::domain::services::match_scanner::MatchScanner;
use crate::engines::traits::PageFetcher;
use crate::infrastructure::progress::ScanProgress;
use crate::workers::scan_worker::{ScanWorker, SharedQueue};

/// 工作管理器
///
/// 启动固定数量的扫描工作器并汇总结果。结果分区只在管理器中修改，
/// 工作器通过通道把结果交给它。
pub struct WorkerManager {
    fetcher: Arc<dyn PageFetcher>,
    scanner: Arc<MatchScanner>,
    timeout: Duration,
    concurrency: usize,
    progress: ScanProgress,
}

impl WorkerManager {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        scanner: MatchScanner,
        timeout: Duration,
        concurrency: usize,
        progress: ScanProgress,
    ) -> Self {
        Self {
            fetcher,
            scanner: Arc::new(scanner),
            timeout,
            concurrency: concurrency.max(1),
            progress,
        }
    }

    /// 扫描所有链接
    ///
    /// # 参数
    ///
    /// * `urls` - 待扫描的链接条目
    ///
    /// # 返回值
    ///
    /// 按完成顺序记录的结果分区
    pub async fn run(&self, urls: Vec<UrlEntry>) -> ResultPartition {
        let total = urls.len();

        let (queue_tx, queue_rx) = mpsc::unbounded_channel();
        for url in urls {
            if let Err(e) = queue_tx.send(url) {
                error!("Failed to enqueue {}", e.0);
            }
        }
        drop(queue_tx);
        let queue: SharedQueue = Arc::new(Mutex::new(queue_rx));

        let (result_tx, mut result_rx) = mpsc::channel::<ScanOutcome>(self.concurrency);
        let handles = self.start_workers(queue, result_tx);

        let mut partition = ResultPartition::expecting(total);
        while let Some(outcome) = result_rx.recv().await {
            partition.record(outcome);
            self.progress.advance();
        }

        for result in join_all(handles).await {
            if let Err(e) = result {
                error!("Scan worker failed: {}", e);
            }
        }

        if partition.missing() > 0 {
            error!(
                "Recorded {} outcomes for {} links, {} lost",
                partition.len(),
                total,
                partition.missing()
            );
        }
        info!(
            matched = partition.matched().len(),
            non_matching = partition.non_matching().len(),
            errored = partition.errored().len(),
            "All workers finished"
        );

        partition
    }

    /// 启动工作进程
    ///
    /// 工作器数量等于并发上限，发送端在所有工作器结束后全部释放，结果通道随之关闭
    fn start_workers(
        &self,
        queue: SharedQueue,
        results: mpsc::Sender<ScanOutcome>,
    ) -> Vec<JoinHandle<()>> {
        (0..self.concurrency)
            .map(|worker_id| {
                let worker = ScanWorker::new(
                    worker_id,
                    self.fetcher.clone(),
                    self.scanner.clone(),
                    self.timeout,
                    self.progress.clone(),
                );
                let queue = queue.clone();
                let results = results.clone();
                tokio::spawn(async move {
                    worker.run(queue, results).await;
                })
            })
            .collect()
    }
}
