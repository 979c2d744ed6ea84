// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::fetch_outcome::FetchOutcome;
use crate::domain::models::scan_result::{ErrorRecord, MatchRecord, ScanOutcome};
use crate::domain::models::url_entry::UrlEntry;
use crate::domain::services::match_scanner::MatchScanner;

/// 将一次抓取的结果分类
///
/// # 参数
///
/// * `url` - 被抓取的链接条目
/// * `outcome` - 抓取结果
/// * `scanner` - 匹配扫描器，仅在抓取成功时使用
///
/// # 返回值
///
/// 该链接的唯一分类结果
pub fn classify_outcome(url: UrlEntry, outcome: FetchOutcome, scanner: &MatchScanner) -> ScanOutcome {
    match outcome {
        FetchOutcome::Success { body, .. } => match scanner.scan(&body) {
            Some(found) => ScanOutcome::Matched(MatchRecord::new(url, found)),
            None => ScanOutcome::NonMatching(url),
        },
        FetchOutcome::HttpError { status, reason } => ScanOutcome::Errored(ErrorRecord {
            url,
            description: format!("{} {}", status, reason).trim_end().to_string(),
        }),
        FetchOutcome::Timeout => ScanOutcome::Errored(ErrorRecord {
            url,
            description: "Timeout".to_string(),
        }),
        FetchOutcome::NetworkError { fault } => ScanOutcome::Errored(ErrorRecord {
            url,
            description: format!("Error: {}", fault),
        }),
    }
}
