// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::url_entry::UrlEntry;

/// 页面中第一处匹配的位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMatch {
    /// 从1开始的行号（近似值，见 `match_scanner`）
    pub line_number: usize,
    /// 包含匹配文本的最近元素的标签名（小写）
    pub tag_name: String,
    /// 该元素重新序列化后的外部HTML
    pub html_fragment: String,
}

/// 匹配记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub url: UrlEntry,
    pub line_number: usize,
    pub tag_name: String,
    pub html_fragment: String,
}

impl MatchRecord {
    pub fn new(url: UrlEntry, found: TextMatch) -> Self {
        Self {
            url,
            line_number: found.line_number,
            tag_name: found.tag_name,
            html_fragment: found.html_fragment,
        }
    }
}

/// 错误记录
///
/// `description` 为 `"<status> <reason>"`、`"Timeout"` 或 `"Error: <message>"` 之一
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    pub url: UrlEntry,
    pub description: String,
}

/// 单个URL的最终分类
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Matched(MatchRecord),
    NonMatching(UrlEntry),
    Errored(ErrorRecord),
}

impl ScanOutcome {
    pub fn url(&self) -> &UrlEntry {
        match self {
            ScanOutcome::Matched(record) => &record.url,
            ScanOutcome::NonMatching(url) => url,
            ScanOutcome::Errored(record) => &record.url,
        }
    }
}

/// 结果分区
///
/// 三个集合互斥，合起来恰好覆盖每个输入条目一次。
/// 只能通过 [`ResultPartition::record`] 追加。
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResultPartition {
    matched: Vec<MatchRecord>,
    non_matching: Vec<UrlEntry>,
    errored: Vec<ErrorRecord>,
    expected: usize,
}

impl ResultPartition {
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建预期覆盖 `expected` 个输入条目的分区
    pub fn expecting(expected: usize) -> Self {
        Self {
            expected,
            ..Self::default()
        }
    }

    /// 记录一个URL的分类结果
    pub fn record(&mut self, outcome: ScanOutcome) {
        match outcome {
            ScanOutcome::Matched(record) => self.matched.push(record),
            ScanOutcome::NonMatching(url) => self.non_matching.push(url),
            ScanOutcome::Errored(record) => self.errored.push(record),
        }
    }

    /// 按输入顺序稳定排序三个集合
    pub fn sort_by_input_order(&mut self) {
        self.matched.sort_by_key(|record| record.url.index());
        self.non_matching.sort_by_key(UrlEntry::index);
        self.errored.sort_by_key(|record| record.url.index());
    }

    pub fn matched(&self) -> &[MatchRecord] {
        &self.matched
    }

    pub fn non_matching(&self) -> &[UrlEntry] {
        &self.non_matching
    }

    pub fn errored(&self) -> &[ErrorRecord] {
        &self.errored
    }

    /// 已记录的结果总数
    pub fn len(&self) -> usize {
        self.matched.len() + self.non_matching.len() + self.errored.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 没有记录到结果的输入条目数，例如工作器异常退出时丢失的条目
    pub fn missing(&self) -> usize {
        self.expected.saturating_sub(self.len())
    }
}
