// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::write_links_file;
use linkscan::application::use_cases::domain_diff_use_case::DomainDiffUseCase;
use linkscan::infrastructure::reports::DOMAIN_DIFFERENCE_HEADER;
use linkscan::utils::errors::UrlSourceError;

#[test]
fn test_domain_difference_is_written_to_report() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_links_file(dir.path(), "first.txt", &["http://x.com/a", "http://y.com/b"]);
    let second = write_links_file(dir.path(), "second.txt", &["http://y.com/c"]);
    let output = dir.path().join("domain_difference.txt");

    let outcome = DomainDiffUseCase::new(output.clone())
        .execute(&first, &second)
        .unwrap();

    assert_eq!(outcome.domains.into_iter().collect::<Vec<_>>(), vec!["x.com"]);
    assert_eq!(outcome.report.unwrap().unwrap(), output);

    let content = std::fs::read_to_string(&output).unwrap();
    assert_eq!(content, format!("{}\nx.com\n", DOMAIN_DIFFERENCE_HEADER));
}

#[test]
fn test_domains_are_written_sorted_and_once() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_links_file(
        dir.path(),
        "first.txt",
        &[
            "https://zeta.org/1",
            "http://alpha.io/",
            "https://zeta.org/2",
            "",
            "http://beta.net/x",
        ],
    );
    let second = write_links_file(dir.path(), "second.txt", &["http://beta.net/"]);
    let output = dir.path().join("domain_difference.txt");

    DomainDiffUseCase::new(output.clone())
        .execute(&first, &second)
        .unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines, vec![DOMAIN_DIFFERENCE_HEADER, "alpha.io", "zeta.org"]);
}

#[test]
fn test_identical_lists_write_no_report() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_links_file(dir.path(), "first.txt", &["http://x.com/a", "http://y.com/b"]);
    let second = write_links_file(dir.path(), "second.txt", &["http://y.com/", "http://x.com/"]);
    let output = dir.path().join("domain_difference.txt");

    let outcome = DomainDiffUseCase::new(output.clone())
        .execute(&first, &second)
        .unwrap();

    assert!(outcome.domains.is_empty());
    assert!(outcome.report.is_none());
    assert!(!output.exists());
}

#[test]
fn test_csv_link_files_are_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.csv");
    std::fs::write(&first, "name,link\none,http://x.com/a\ntwo,http://y.com/b\n").unwrap();
    let second = write_links_file(dir.path(), "second.txt", &["http://x.com/"]);
    let output = dir.path().join("domain_difference.txt");

    let outcome = DomainDiffUseCase::new(output)
        .execute(&first, &second)
        .unwrap();

    assert_eq!(outcome.domains.into_iter().collect::<Vec<_>>(), vec!["y.com"]);
}

#[test]
fn test_missing_link_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let second = write_links_file(dir.path(), "second.txt", &["http://x.com/"]);
    let missing = dir.path().join("missing.txt");

    let result = DomainDiffUseCase::new(dir.path().join("out.txt")).execute(&missing, &second);

    assert!(matches!(result, Err(UrlSourceError::NotFound(path)) if path == missing));
}

#[test]
fn test_unwritable_report_keeps_computed_domains() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_links_file(dir.path(), "first.txt", &["http://x.com/a"]);
    let second = write_links_file(dir.path(), "second.txt", &["http://y.com/"]);
    let output = dir.path().join("no_such_dir").join("domain_difference.txt");

    let outcome = DomainDiffUseCase::new(output).execute(&first, &second).unwrap();

    assert_eq!(outcome.domains.len(), 1);
    assert!(matches!(outcome.report, Some(Err(_))));
}
