// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工作器模块
///
/// 固定数量的扫描工作器从共享队列中取链接，结果经通道汇总到管理器
pub mod manager;
pub mod scan_worker;
