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

use html5ever::driver::{self, ParseOpts};
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use scraper::{ElementRef, Html, HtmlTreeSink, Node};
use std::borrow::Cow;

use crate::domain::models::scan_result::TextMatch;

/// 内容不可见的元素，其中的文本不参与匹配
const NON_VISIBLE_ELEMENTS: [&str; 3] = ["script", "style", "template"];

/// 匹配扫描器
///
/// 在页面的可见文本节点中按文档顺序查找搜索字符串（ASCII大小写不敏感），
/// 找到第一处匹配后立即返回。
#[derive(Debug, Clone)]
pub struct MatchScanner {
    search_string: String,
    needle: String,
}

impl MatchScanner {
    /// 创建新的匹配扫描器
    ///
    /// # 参数
    ///
    /// * `search_string` - 要查找的字面字符串
    pub fn new(search_string: &str) -> Self {
        Self {
            search_string: search_string.to_string(),
            needle: search_string.to_ascii_lowercase(),
        }
    }

    pub fn search_string(&self) -> &str {
        &self.search_string
    }

    /// 扫描HTML文档
    ///
    /// # 参数
    ///
    /// * `body` - 原始HTML文本
    ///
    /// # 返回值
    ///
    /// * `Some(TextMatch)` - 第一处匹配的位置信息
    /// * `None` - 页面中没有匹配
    pub fn scan(&self, body: &str) -> Option<TextMatch> {
        let document = parse_without_scripting(body);

        document.tree.root().descendants().find_map(|node| {
            let Node::Text(text) = node.value() else {
                return None;
            };
            let content: &str = text;
            if !contains_ignore_ascii_case(content, &self.needle) {
                return None;
            }

            let mut elements = node.ancestors().filter_map(ElementRef::wrap);
            let element = elements.next()?;
            if is_non_visible(&element) || elements.any(|ancestor| is_non_visible(&ancestor)) {
                return None;
            }

            Some(TextMatch {
                line_number: line_number(body, content),
                tag_name: element.value().name().to_ascii_lowercase(),
                html_fragment: element.html(),
            })
        })
    }
}

/// 以禁用脚本的方式解析文档
///
/// 这样 `<noscript>` 的内容会被解析为普通元素，而不是一段原始文本
fn parse_without_scripting(body: &str) -> Html {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    driver::parse_document(HtmlTreeSink::new(Html::new_document()), opts).one(body)
}

fn is_non_visible(element: &ElementRef<'_>) -> bool {
    NON_VISIBLE_ELEMENTS.contains(&element.value().name())
}

/// ASCII大小写不敏感的子串查找，`needle` 必须已转为小写
fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    haystack.to_ascii_lowercase().contains(needle)
}

/// 计算文本在原始HTML中的近似行号
///
/// 在整个原始文本中从头查找节点文本第一次出现的位置，统计其前面的换行数再加一。
/// 节点文本较早出现在别处（例如属性值中）时，行号会指向那一处。
/// 节点文本在原始HTML中找不到时（例如包含实体转义），统计除最后一个字符外整个文本的换行数。
/// 解析器会把 `\r\n` 规范为 `\n`，查找前对原始文本做同样处理；每个 `\r\n` 只含一个换行，行数不变。
pub fn line_number(body: &str, node_text: &str) -> usize {
    let body: Cow<'_, str> = if body.contains("\r\n") {
        Cow::Owned(body.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(body)
    };
    let end = match body.find(node_text) {
        Some(offset) => offset,
        None => body.char_indices().last().map_or(0, |(index, _)| index),
    };
    body[..end].matches('\n').count() + 1
}

#[cfg(test)]
#[path = "match_scanner_test.rs"]
mod tests;
