// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// - 匹配扫描（match_scanner）：在HTML中定位第一处匹配
/// - 分类（classifier）：把抓取结果归入三类之一
/// - 域名差异（domain_diff）：计算两组链接的域名差集
pub mod classifier;
pub mod domain_diff;
pub mod match_scanner;
