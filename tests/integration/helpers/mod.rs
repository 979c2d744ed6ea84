// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod scripted_fetcher;

use linkscan::domain::models::url_entry::{entries_from, UrlEntry};
use std::path::{Path, PathBuf};

pub use scripted_fetcher::ScriptedFetcher;

/// 构造按输入顺序编号的链接条目
pub fn entries(urls: &[&str]) -> Vec<UrlEntry> {
    entries_from(urls.iter().copied())
}

/// 在目录中写入一个链接文件
pub fn write_links_file(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, lines.join("\n")).unwrap();
    path
}

/// 读取CSV报告的全部数据行
pub fn read_csv_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader
        .records()
        .map(|record| record.unwrap().iter().map(str::to_string).collect())
        .collect()
}
