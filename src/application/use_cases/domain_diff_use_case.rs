// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::domain::services::domain_diff::domain_difference;
use crate::infrastructure::reports::write_domain_difference;
use crate::infrastructure::url_source::read_urls;
use crate::utils::errors::{ReportError, UrlSourceError};

/// 域名差异结果
#[derive(Debug)]
pub struct DomainDiffOutcome {
    /// 出现在第一个文件但不在第二个文件中的域名
    pub domains: BTreeSet<String>,
    /// 报告写入结果，差集为空时不写报告
    pub report: Option<Result<PathBuf, ReportError>>,
}

/// 域名差异用例
pub struct DomainDiffUseCase {
    output: PathBuf,
}

impl DomainDiffUseCase {
    /// # 参数
    ///
    /// * `output` - 差异报告的输出路径
    pub fn new(output: PathBuf) -> Self {
        Self { output }
    }

    /// 读取两个链接文件并计算域名差集
    ///
    /// 读取失败属于配置错误，直接返回；报告写入失败只记录日志，结果中保留错误
    pub fn execute(&self, first: &Path, second: &Path) -> Result<DomainDiffOutcome, UrlSourceError> {
        let first_urls = read_urls(first)?;
        let second_urls = read_urls(second)?;

        let domains = domain_difference(&first_urls, &second_urls);
        if domains.is_empty() {
            info!("No difference found between domain lists.");
            return Ok(DomainDiffOutcome {
                domains,
                report: None,
            });
        }

        let report = match write_domain_difference(&self.output, &domains) {
            Ok(()) => {
                info!("Difference written to {}", self.output.display());
                Ok(self.output.clone())
            }
            Err(e) => {
                error!("Error writing difference to file: {}", e);
                Err(e)
            }
        };

        Ok(DomainDiffOutcome {
            domains,
            report: Some(report),
        })
    }
}
