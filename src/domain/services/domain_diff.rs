// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::BTreeSet;

use crate::domain::models::url_entry::UrlEntry;
use crate::utils::url_utils::extract_domain;

/// 构建链接列表的域名集合
pub fn domain_set(urls: &[UrlEntry]) -> BTreeSet<String> {
    urls.iter().map(|url| extract_domain(url.as_str())).collect()
}

/// 计算域名差集
///
/// # 参数
///
/// * `first` - 第一组链接
/// * `second` - 第二组链接
///
/// # 返回值
///
/// 出现在第一组但不在第二组中的域名，按字典序排列。空集表示没有差异。
pub fn domain_difference(first: &[UrlEntry], second: &[UrlEntry]) -> BTreeSet<String> {
    let second_domains = domain_set(second);
    domain_set(first)
        .into_iter()
        .filter(|domain| !second_domains.contains(domain))
        .collect()
}
