// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模块
///
/// 包含扫描所需的数据模型和纯计算服务，不涉及网络和文件I/O
pub mod models;
pub mod services;
