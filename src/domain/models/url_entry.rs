// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;

/// 链接条目
///
/// 去除首尾空白后的非空URL字符串，附带其在输入列表中的位置。
/// 重复的URL会保留为各自独立的条目。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UrlEntry {
    index: usize,
    url: String,
}

impl UrlEntry {
    /// 从原始输入创建链接条目
    ///
    /// # 参数
    ///
    /// * `index` - 条目在输入列表中的位置
    /// * `raw` - 原始字符串
    ///
    /// # 返回值
    ///
    /// 去除空白后为空时返回 `None`
    pub fn new(index: usize, raw: &str) -> Option<Self> {
        let url = raw.trim();
        if url.is_empty() {
            return None;
        }
        Some(Self {
            index,
            url: url.to_string(),
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for UrlEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl AsRef<str> for UrlEntry {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

/// 从字符串序列构建链接条目列表
///
/// 空白条目被跳过，索引按保留下来的条目连续编号
pub fn entries_from<I, S>(raw: I) -> Vec<UrlEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|value| UrlEntry::new(0, value.as_ref()))
        .enumerate()
        .map(|(index, entry)| UrlEntry { index, ..entry })
        .collect()
}
