// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::domain::models::url_entry::{entries_from, UrlEntry};
use crate::utils::errors::UrlSourceError;

/// CSV文件中存放链接的列名
pub const LINK_COLUMN: &str = "link";

/// 读取链接文件
///
/// 根据扩展名选择格式：`.txt` 每行一个链接，`.csv` 读取 `link` 列。
/// 每个值去除首尾空白，空白条目被跳过，重复条目保留。
///
/// # 参数
///
/// * `path` - 链接文件路径
///
/// # 返回值
///
/// * `Ok(Vec<UrlEntry>)` - 按文件顺序排列的链接条目
/// * `Err(UrlSourceError)` - 文件不存在、格式不支持或内容无法解析
pub fn read_urls(path: &Path) -> Result<Vec<UrlEntry>, UrlSourceError> {
    if !path.is_file() {
        return Err(UrlSourceError::NotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let entries = match extension.as_deref() {
        Some("txt") => parse_text(&fs::read_to_string(path)?),
        Some("csv") => parse_csv(fs::File::open(path)?)?,
        _ => return Err(UrlSourceError::UnsupportedFormat(path.to_path_buf())),
    };

    debug!("Read {} links from {}", entries.len(), path.display());
    Ok(entries)
}

/// 解析每行一个链接的文本
pub fn parse_text(content: &str) -> Vec<UrlEntry> {
    let lines: Vec<&str> = content.lines().collect();
    let entries = entries_from(&lines);
    log_skipped(lines.len(), entries.len());
    entries
}

/// 解析带表头的CSV，读取 `link` 列
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<UrlEntry>, UrlSourceError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let column = reader
        .headers()?
        .iter()
        .position(|header| header.trim_start_matches('\u{feff}') == LINK_COLUMN)
        .ok_or(UrlSourceError::MissingLinkColumn)?;

    let mut links = Vec::new();
    for record in reader.records() {
        let record = record?;
        links.push(record.get(column).unwrap_or_default().to_string());
    }

    let entries = entries_from(&links);
    log_skipped(links.len(), entries.len());
    Ok(entries)
}

fn log_skipped(raw: usize, kept: usize) {
    if raw > kept {
        debug!("Skipped {} blank link entries", raw - kept);
    }
}
