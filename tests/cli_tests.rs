mod common;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

/// This test consolidates the standard fixture directory (one summary plus
/// the `checkout` and `login` feature reports). It asserts that the command
/// succeeds and that the artifact carries both tabs and the search box.
///
/// 这个测试整合标准的夹具目录（一个摘要加上 `checkout` 和 `login`
/// 两个 feature 报告）。它断言命令成功，并且产物包含两个标签页和搜索框。
#[test]
fn test_consolidate_builds_the_artifact() {
    let dir = common::setup_reports_dir();

    let mut cmd = Command::cargo_bin("karate-consolidator").unwrap();
    cmd.current_dir(dir.path())
        .arg("consolidate")
        .arg("--dir")
        .arg(dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Consolidated report created"))
        .stdout(predicate::str::contains("checkout"))
        .stdout(predicate::str::contains("login"));

    let artifact = dir.path().join("consolidated-karate-report.html");
    let markup = fs::read_to_string(artifact).unwrap();
    assert!(markup.contains("<a href=\"#checkout\" data-toggle=\"tab\">checkout</a>"));
    assert!(markup.contains("<a href=\"#login\" data-toggle=\"tab\">login</a>"));
    assert!(markup.contains("id=\"search-input\""));
    assert!(markup.contains("User signs in with valid credentials"));
}

/// This test points the consolidate command at a directory that does not
/// exist and asserts that the command fails with a clear message.
///
/// 这个测试将 consolidate 命令指向一个不存在的目录，
/// 并断言命令失败且给出明确的消息。
#[test]
fn test_consolidate_missing_directory_fails() {
    let dir = tempdir().unwrap();

    let mut cmd = Command::cargo_bin("karate-consolidator").unwrap();
    cmd.current_dir(dir.path())
        .arg("consolidate")
        .arg("--dir")
        .arg(dir.path().join("absent"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Reports directory not found"));
}

/// This test consolidates a directory holding only the summary file. The
/// run must still succeed, with an empty tab bar in the artifact.
///
/// 这个测试整合一个只有摘要文件的目录。
/// 运行仍须成功，产物中的标签栏为空。
#[test]
fn test_consolidate_with_only_a_summary() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("karate-summary.html"),
        common::sample_summary_html(),
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("karate-consolidator").unwrap();
    cmd.current_dir(dir.path())
        .arg("consolidate")
        .arg("--dir")
        .arg(dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No feature reports found"));

    let artifact = dir.path().join("consolidated-karate-report.html");
    let markup = fs::read_to_string(artifact).unwrap();
    assert!(markup.contains("<ul class=\"nav-tabs\"></ul>"));
}

/// This test runs the search command for a term that appears only in the
/// `login` report and asserts that the match table names that tab.
///
/// 这个测试用只出现在 `login` 报告中的词条运行 search 命令，
/// 并断言匹配表格指向该标签页。
#[test]
fn test_search_reports_match_counts() {
    let dir = common::setup_reports_dir();

    let mut cmd = Command::cargo_bin("karate-consolidator").unwrap();
    cmd.current_dir(dir.path())
        .arg("search")
        .arg("credentials")
        .arg("--dir")
        .arg(dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--- Search Matches ---"))
        .stdout(predicate::str::contains("Tab 'login' is activated."));
}

/// This test asserts that a term below the three-character minimum is
/// reported as a no-op rather than an error.
///
/// 这个测试断言短于三个字符的词条被报告为无操作而不是错误。
#[test]
fn test_search_short_term_is_a_no_op() {
    let dir = common::setup_reports_dir();

    let mut cmd = Command::cargo_bin("karate-consolidator").unwrap();
    cmd.current_dir(dir.path())
        .arg("search")
        .arg("ab")
        .arg("--dir")
        .arg(dir.path());

    cmd.assert().success().stdout(predicate::str::contains(
        "Search terms shorter than 3 characters",
    ));
}

/// This test passes `--output` to the search command and asserts that the
/// pre-highlighted document is written there, with highlight spans in the
/// matching panel, while the normal artifact location stays untouched.
///
/// 这个测试向 search 命令传入 `--output`，断言预先高亮的文档写入该路径，
/// 匹配面板中带有高亮 span，而常规产物位置保持不变。
#[test]
fn test_search_writes_the_highlighted_document() {
    let dir = common::setup_reports_dir();
    let output = dir.path().join("highlighted.html");

    let mut cmd = Command::cargo_bin("karate-consolidator").unwrap();
    cmd.current_dir(dir.path())
        .arg("search")
        .arg("credentials")
        .arg("--dir")
        .arg(dir.path())
        .arg("--output")
        .arg(&output);

    cmd.assert().success();

    let markup = fs::read_to_string(output).unwrap();
    assert!(markup.contains("<span class=\"search-highlight\">credentials</span>"));
    assert!(!dir.path().join("consolidated-karate-report.html").exists());
}

/// This test renders a results JSON file into the single-document report
/// and asserts the features appear in the output file.
///
/// 这个测试将结果 JSON 文件渲染为单文档报告，
/// 并断言 feature 出现在输出文件中。
#[test]
fn test_render_writes_the_single_file_report() {
    let dir = tempdir().unwrap();
    let results = dir.path().join("results.json");
    fs::write(&results, common::sample_run_results_json()).unwrap();

    let mut cmd = Command::cargo_bin("karate-consolidator").unwrap();
    cmd.current_dir(dir.path())
        .arg("render")
        .arg("--results")
        .arg(&results)
        .arg("--dir")
        .arg(dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Single file HTML report generated"));

    let markup = fs::read_to_string(dir.path().join("karate-report.html")).unwrap();
    assert!(markup.contains("Checkout Feature"));
    assert!(markup.contains("Login Feature"));
    assert!(markup.contains("card expired 2024-01"));
}

/// This test feeds the render command a malformed results file and asserts
/// that the failure names the parse step.
///
/// 这个测试向 render 命令提供损坏的结果文件，
/// 并断言失败信息指向解析环节。
#[test]
fn test_render_rejects_malformed_results() {
    let dir = tempdir().unwrap();
    let results = dir.path().join("results.json");
    fs::write(&results, "{ not json").unwrap();

    let mut cmd = Command::cargo_bin("karate-consolidator").unwrap();
    cmd.current_dir(dir.path())
        .arg("render")
        .arg("--results")
        .arg(&results)
        .arg("--dir")
        .arg(dir.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse results JSON"));
}

/// This test runs the init wizard non-interactively and asserts that the
/// default configuration file is created in the working directory.
///
/// 这个测试以非交互方式运行 init 向导，
/// 并断言默认配置文件被创建在工作目录中。
#[test]
fn test_init_non_interactive_creates_the_config() {
    let dir = tempdir().unwrap();

    let mut cmd = Command::cargo_bin("karate-consolidator").unwrap();
    cmd.current_dir(dir.path())
        .arg("init")
        .arg("--non-interactive")
        .arg("--lang")
        .arg("en");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ConsolidateReport.toml"));

    let contents = fs::read_to_string(dir.path().join("ConsolidateReport.toml")).unwrap();
    assert!(contents.contains("report_name = \"karate-report\""));
    assert!(contents.contains("content_class = \"container\""));
}

/// This test passes `--lang zh-CN` and asserts the console output switches
/// to the Chinese catalog.
///
/// 这个测试传入 `--lang zh-CN`，并断言控制台输出切换到中文目录。
#[test]
fn test_lang_flag_switches_messages() {
    let dir = common::setup_reports_dir();

    let mut cmd = Command::cargo_bin("karate-consolidator").unwrap();
    cmd.current_dir(dir.path())
        .arg("consolidate")
        .arg("--dir")
        .arg(dir.path())
        .arg("--lang")
        .arg("zh-CN");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("整合报告已创建"));
}
