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

use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::config::settings::ReportSettings;
use crate::domain::models::scan_result::{ErrorRecord, MatchRecord, ResultPartition};
use crate::domain::models::url_entry::UrlEntry;
use crate::utils::errors::ReportError;

/// 域名差异报告的首行
pub const DOMAIN_DIFFERENCE_HEADER: &str = "Domains in first file but not in second file are:";

#[derive(Serialize)]
struct SuccessRow<'a> {
    link: &'a str,
    line: usize,
    element: &'a str,
    html: &'a str,
}

#[derive(Serialize)]
struct ErrorRow<'a> {
    link: &'a str,
    error: &'a str,
}

#[derive(Serialize)]
struct NonMatchingRow<'a> {
    link: &'a str,
}

/// 确认报告目录存在
pub fn ensure_reports_directory(directory: &Path) -> Result<(), ReportError> {
    if directory.is_dir() {
        Ok(())
    } else {
        Err(ReportError::MissingDirectory(directory.to_path_buf()))
    }
}

/// 打开CSV写入器并写入表头
///
/// 表头手动写入，这样没有记录时报告中仍然有表头
fn open_csv(path: &Path, header: &[&str]) -> Result<csv::Writer<fs::File>, ReportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_reports_directory(parent)?;
    }
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(header)?;
    Ok(writer)
}

/// 写入匹配报告 `{link, line, element, html}`
pub fn write_success_report(path: &Path, records: &[MatchRecord]) -> Result<(), ReportError> {
    let mut writer = open_csv(path, &["link", "line", "element", "html"])?;
    for record in records {
        writer.serialize(SuccessRow {
            link: record.url.as_str(),
            line: record.line_number,
            element: &record.tag_name,
            html: &record.html_fragment,
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// 写入错误报告 `{link, error}`
pub fn write_error_report(path: &Path, records: &[ErrorRecord]) -> Result<(), ReportError> {
    let mut writer = open_csv(path, &["link", "error"])?;
    for record in records {
        writer.serialize(ErrorRow {
            link: record.url.as_str(),
            error: &record.description,
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// 写入未匹配报告 `{link}`
pub fn write_non_matching_report(path: &Path, urls: &[UrlEntry]) -> Result<(), ReportError> {
    let mut writer = open_csv(path, &["link"])?;
    for url in urls {
        writer.serialize(NonMatchingRow { link: url.as_str() })?;
    }
    writer.flush()?;
    Ok(())
}

/// 写入域名差异报告
pub fn write_domain_difference(path: &Path, domains: &BTreeSet<String>) -> Result<(), ReportError> {
    let mut writer = BufWriter::new(fs::File::create(path)?);
    writeln!(writer, "{}", DOMAIN_DIFFERENCE_HEADER)?;
    for domain in domains {
        writeln!(writer, "{}", domain)?;
    }
    writer.flush()?;
    Ok(())
}

/// 报告写入结果
#[derive(Debug, Default)]
pub struct ReportSummary {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, ReportError)>,
}

impl ReportSummary {
    fn track(&mut self, path: PathBuf, result: Result<(), ReportError>) {
        match result {
            Ok(()) => {
                info!("Report written to {}", path.display());
                self.written.push(path);
            }
            Err(e) => {
                error!("Error writing report {}: {}", path.display(), e);
                self.failed.push((path, e));
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// 写入三份扫描报告
///
/// 每份报告独立写入，一份失败不影响其余报告
pub fn write_scan_reports(reports: &ReportSettings, partition: &ResultPartition) -> ReportSummary {
    let mut summary = ReportSummary::default();

    let path = reports.path(&reports.success_file);
    let result = write_success_report(&path, partition.matched());
    summary.track(path, result);

    let path = reports.path(&reports.error_file);
    let result = write_error_report(&path, partition.errored());
    summary.track(path, result);

    let path = reports.path(&reports.non_matching_file);
    let result = write_non_matching_report(&path, partition.non_matching());
    summary.track(path, result);

    summary
}

/// 扫描结束时输出给用户的总结
///
/// 报告写入失败或有输入条目没有结果时，不会声称全部成功
pub fn completion_message(summary: &ReportSummary, partition: &ResultPartition) -> String {
    let mut problems = Vec::new();
    if !summary.is_complete() {
        problems.push(format!(
            "{} of {} reports could not be written",
            summary.failed.len(),
            summary.failed.len() + summary.written.len()
        ));
    }
    let missing = partition.missing();
    if missing > 0 {
        problems.push(format!(
            "{} of {} links produced no result",
            missing,
            partition.len() + missing
        ));
    }

    if problems.is_empty() {
        "Reports generated successfully.".to_string()
    } else {
        format!("Reports generated with errors: {}.", problems.join("; "))
    }
}
