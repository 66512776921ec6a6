//! # HTML Reporting Module / HTML 报告模块
//!
//! This module renders a test-run result graph into one standalone HTML
//! report. The whole page body sits inside a single content-root element,
//! which is what the consolidation assembler later extracts.
//!
//! 此模块将测试运行结果图渲染为一份独立的 HTML 报告。
//! 整个页面主体位于单个内容根元素内，
//! 整合组装器之后提取的正是这个元素。

use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::config::ReportConfig;
use crate::core::fragment::escape_html;
use crate::core::models::{FeatureReport, RunResults, ScenarioResult};
use crate::core::source::RENDERED_REPORT_FILE;
use crate::core::tabs::sanitize_id;
use crate::infra::fs::write_atomic;
use crate::infra::t;

/// Embedded CSS styles for HTML reports / HTML 报告的嵌入式 CSS 样式
const HTML_STYLE: &str = include_str!("assets/report.css");

/// Embedded JavaScript for HTML report interactivity / HTML 报告交互性的嵌入式 JavaScript
const HTML_SCRIPT: &str = include_str!("assets/report.js");

/// Renders a test run into a standalone HTML report.
/// Creates a styled HTML file with run statistics, per-feature scenario and
/// step breakdowns, collapsible request/response details and a scenario
/// filter box.
///
/// 将一次测试运行渲染为独立的 HTML 报告。
/// 创建一个样式化的 HTML 文件，包含运行统计、按 feature 的场景与
/// 步骤明细、可折叠的请求/响应详情以及场景过滤框。
///
/// # Arguments / 参数
/// * `results` - The test-run results to render
///               要渲染的测试运行结果
/// * `output_dir` - The directory where the report file will be written
///                  报告文件的输出目录
/// * `config` - The report configuration (language, content-root class)
///              报告配置（语言、内容根类名）
///
/// # Returns / 返回值
/// * `Result<PathBuf>` - The path of the written report file
///                       写出的报告文件路径
///
/// # Errors / 错误
/// This function will return an error if:
/// - The output directory cannot be created
/// - The report file cannot be written
///
/// 此函数在以下情况下会返回错误：
/// - 无法创建输出目录
/// - 无法写入报告文件
pub fn render_run_report(
    results: &RunResults,
    output_dir: &Path,
    config: &ReportConfig,
) -> Result<PathBuf> {
    let locale = config.language.as_str();

    let mut html = String::new();
    html.push_str(&format!(
        "<!DOCTYPE html><html lang=\"{}\"><head>",
        escape_html(locale)
    ));
    html.push_str("<meta charset=\"UTF-8\">");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    html.push_str(&format!(
        "<title>{}</title>",
        t!("report.title", locale = locale)
    ));
    html.push_str("<style>");
    html.push_str(HTML_STYLE);
    html.push_str("</style>");
    html.push_str("</head><body>");

    // The single content root the assembler extracts.
    html.push_str(&format!(
        "<div class=\"{}\">",
        escape_html(&config.content_class)
    ));
    html.push_str(&format!("<h1>{}</h1>", t!("report.title", locale = locale)));

    // Summary statistics
    html.push_str("<div class=\"summary\">");
    html.push_str(&format!(
        "<p><strong>{}:</strong> {}</p>",
        t!("report.total_features", locale = locale),
        results.feature_count
    ));
    html.push_str(&format!(
        "<p><strong>{}:</strong> {}</p>",
        t!("report.scenarios", locale = locale),
        results.scenario_count
    ));
    html.push_str(&format!(
        "<p><strong>{}:</strong> {}</p>",
        t!("report.passed", locale = locale),
        results.pass_count
    ));
    html.push_str(&format!(
        "<p><strong>{}:</strong> {}</p>",
        t!("report.failed", locale = locale),
        results.fail_count
    ));
    html.push_str(&format!(
        "<p><strong>{}:</strong> {}</p>",
        t!("report.duration", locale = locale),
        results.format_duration()
    ));
    html.push_str("</div>");

    // Scenario filter box
    html.push_str(&format!(
        "<div class=\"search-box\"><input type=\"text\" id=\"searchInput\" placeholder=\"{}\" onkeyup=\"searchTests()\"></div>",
        escape_html(&t!("report.search_placeholder", locale = locale))
    ));

    for feature in &results.features {
        render_feature(&mut html, feature, locale);
    }

    html.push_str(&format!(
        "<p class=\"generated-at\">{}</p>",
        t!(
            "report.generated_at",
            locale = locale,
            time = Local::now().format("%Y-%m-%d %H:%M:%S")
        )
    ));
    html.push_str("</div>");

    html.push_str("<script>");
    html.push_str(HTML_SCRIPT);
    html.push_str("</script></body></html>");

    fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "Failed to create the report directory: {}",
            output_dir.display()
        )
    })?;
    let output_path = output_dir.join(RENDERED_REPORT_FILE);
    write_atomic(&output_path, &html)?;
    Ok(output_path)
}

/// Renders one feature block with its header, tags and scenarios.
/// 渲染一个 feature 区块，包括标题、标签与场景。
fn render_feature(html: &mut String, feature: &FeatureReport, locale: &str) {
    html.push_str("<div class=\"feature\">");
    html.push_str("<div class=\"feature-header\">");
    html.push_str(&format!("<h2>{}</h2>", escape_html(&feature.name)));
    render_tags(html, &feature.tags);
    html.push_str("</div>");

    for scenario in &feature.scenarios {
        render_scenario(html, scenario, &feature.name, locale);
    }

    html.push_str("</div>");
}

/// Renders one scenario with its status badge, tags and step list.
/// 渲染一个场景，包括状态徽章、标签与步骤列表。
fn render_scenario(html: &mut String, scenario: &ScenarioResult, feature_name: &str, locale: &str) {
    html.push_str("<div class=\"scenario\">");
    html.push_str("<div class=\"scenario-header\">");
    html.push_str(&format!("<h3>{}</h3>", escape_html(&scenario.name)));
    html.push_str(&format!(
        "<span style=\"color: {};\">{}</span>",
        scenario.status_color(),
        scenario.status_label(locale)
    ));
    html.push_str("</div>");
    render_tags(html, &scenario.tags);

    html.push_str("<div class=\"steps\">");
    for (index, step) in scenario.steps.iter().enumerate() {
        html.push_str(&format!("<div class=\"{}\">", step.status_class()));
        html.push_str(&format!(
            "<p>{} {}</p>",
            escape_html(&step.prefix),
            escape_html(&step.text)
        ));

        if step.has_details() {
            let step_id = format!(
                "step-{}-{}-{}",
                sanitize_id(feature_name),
                sanitize_id(&scenario.name),
                index
            );
            html.push_str(&format!(
                "<button class=\"toggle-btn\" onclick=\"toggleDetails('{}')\">{}</button>",
                step_id,
                t!("report.toggle_details", locale = locale)
            ));
            html.push_str(&format!(
                "<div id=\"{}\" class=\"step-details hidden\">",
                step_id
            ));
            if let Some(result_text) = &step.result_text {
                html.push_str(&format!(
                    "<h4>{}</h4><pre>{}</pre>",
                    t!("report.result_heading", locale = locale),
                    escape_html(result_text)
                ));
            }
            if let Some(error_message) = &step.error_message {
                html.push_str(&format!(
                    "<h4>{}</h4><pre>{}</pre>",
                    t!("report.error_heading", locale = locale),
                    escape_html(error_message)
                ));
            }
            html.push_str("</div>");
        }

        html.push_str("</div>");
    }
    html.push_str("</div>");
    html.push_str("</div>");
}

/// Renders a tag strip when any tags are present.
fn render_tags(html: &mut String, tags: &[String]) {
    if tags.is_empty() {
        return;
    }
    html.push_str("<div class=\"tags\">");
    for tag in tags {
        html.push_str(&format!("<span class=\"tag\">{}</span>", escape_html(tag)));
    }
    html.push_str("</div>");
}
