// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use indicatif::{ProgressBar, ProgressStyle};

/// 扫描进度
///
/// 总进度条加一行临时状态消息，单个URL的失败会显示在状态消息中
#[derive(Clone)]
pub struct ScanProgress {
    bar: ProgressBar,
}

impl ScanProgress {
    /// 创建可见的进度条
    pub fn new(total: u64) -> Self {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("Overall Progress [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        Self { bar }
    }

    /// 不输出任何内容的进度条
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    pub fn checking(&self, url: &str) {
        self.bar.set_message(format!("Checking {}", url));
    }

    pub fn failed(&self, url: &str, description: &str) {
        self.bar
            .set_message(format!("{} accessing URL {}", description, url));
    }

    /// 当前状态消息
    pub fn message(&self) -> String {
        self.bar.message()
    }

    pub fn advance(&self) {
        self.bar.inc(1);
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
