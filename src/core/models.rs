//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the consolidator.
//! It includes the test-run result object graph produced by a Karate execution
//! (run → features → scenarios → steps) as consumed by the single-document
//! renderer, plus the formatting helpers the reports rely on.
//!
//! 此模块定义了整个整合器中使用的核心数据结构。
//! 它包括 Karate 执行产生的测试运行结果对象图
//! （运行 → feature → 场景 → 步骤），由单文档渲染器消费，
//! 以及报告所依赖的格式化辅助方法。

use serde::{Deserialize, Serialize};

use crate::infra::t;

/// The top-level result of one Karate test run, as emitted by the execution
/// engine. Counters are carried as reported; they are not recomputed from the
/// feature list.
///
/// 一次 Karate 测试运行的顶层结果，由执行引擎产生。
/// 计数器按上报值携带，不会根据 feature 列表重新计算。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResults {
    /// Number of feature files executed in this run.
    /// 本次运行执行的 feature 文件数量。
    pub feature_count: usize,
    /// Number of scenarios executed across all features.
    /// 所有 feature 中执行的场景总数。
    pub scenario_count: usize,
    /// Number of scenarios that passed.
    /// 通过的场景数量。
    pub pass_count: usize,
    /// Number of scenarios that failed.
    /// 失败的场景数量。
    pub fail_count: usize,
    /// Total wall-clock duration of the run, in milliseconds.
    /// 本次运行的总耗时（毫秒）。
    pub duration: f64,
    /// The per-feature results, in execution order.
    /// 每个 feature 的结果，按执行顺序排列。
    #[serde(default)]
    pub features: Vec<FeatureReport>,
}

impl RunResults {
    /// Formats the run duration as `HH:MM:SS.mmm` from milliseconds.
    /// 将运行耗时从毫秒格式化为 `HH:MM:SS.mmm`。
    pub fn format_duration(&self) -> String {
        format_millis(self.duration)
    }
}

/// The result of a single feature file.
/// 单个 feature 文件的结果。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureReport {
    /// The feature name as written in the feature file.
    /// feature 文件中书写的 feature 名称。
    pub name: String,
    /// Tags attached to the feature, including the leading `@`.
    /// 附加到 feature 上的标签，包含前导 `@`。
    #[serde(default)]
    pub tags: Vec<String>,
    /// The scenarios this feature executed, in order.
    /// 此 feature 执行的场景，按顺序排列。
    #[serde(default)]
    pub scenarios: Vec<ScenarioResult>,
}

impl FeatureReport {
    /// `true` when every scenario of the feature passed.
    pub fn passed(&self) -> bool {
        self.scenarios.iter().all(|s| s.passed)
    }
}

/// The result of one executed scenario.
/// 一个已执行场景的结果。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    /// The scenario name.
    /// 场景名称。
    pub name: String,
    /// Tags attached to the scenario.
    /// 附加到场景上的标签。
    #[serde(default)]
    pub tags: Vec<String>,
    /// `true` when every step of the scenario passed.
    /// 当场景的所有步骤都通过时为 `true`。
    pub passed: bool,
    /// The executed steps, in order.
    /// 已执行的步骤，按顺序排列。
    #[serde(default)]
    pub steps: Vec<StepResult>,
}

impl ScenarioResult {
    /// Gets the localized status badge text for the scenario.
    /// 获取场景的本地化状态徽章文本。
    pub fn status_label(&self, locale: &str) -> String {
        if self.passed {
            t!("report.status_passed", locale = locale).to_string()
        } else {
            t!("report.status_failed", locale = locale).to_string()
        }
    }

    /// Gets the inline color used for the scenario status badge.
    pub fn status_color(&self) -> &'static str {
        if self.passed { "green" } else { "red" }
    }
}

/// The result of one executed step within a scenario.
/// 场景内一个已执行步骤的结果。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepResult {
    /// The Gherkin keyword prefix of the step (`Given`, `When`, `Then`, ...).
    /// 步骤的 Gherkin 关键字前缀（`Given`、`When`、`Then` 等）。
    pub prefix: String,
    /// The step text following the prefix.
    /// 前缀之后的步骤文本。
    pub text: String,
    /// `true` when the step passed.
    /// 步骤通过时为 `true`。
    pub passed: bool,
    /// The captured result payload (e.g. an HTTP response body), if any.
    /// 捕获的结果数据（例如 HTTP 响应体），如果有的话。
    #[serde(default)]
    pub result_text: Option<String>,
    /// The failure message, present only for failed steps.
    /// 失败消息，仅在步骤失败时出现。
    #[serde(default)]
    pub error_message: Option<String>,
}

impl StepResult {
    /// Gets the CSS class list for the step row.
    pub fn status_class(&self) -> &'static str {
        if self.passed { "step pass" } else { "step fail" }
    }

    /// `true` when the step carries a detail block worth a Show/Hide toggle.
    /// 当步骤带有值得显示/隐藏切换的详情块时为 `true`。
    pub fn has_details(&self) -> bool {
        self.result_text.is_some() || self.error_message.is_some()
    }
}

/// Formats a millisecond duration as `HH:MM:SS.mmm`.
/// 将毫秒耗时格式化为 `HH:MM:SS.mmm`。
pub fn format_millis(duration_millis: f64) -> String {
    let millis = duration_millis.max(0.0) as u64;
    let seconds = millis / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;

    format!(
        "{:02}:{:02}:{:02}.{:03}",
        hours,
        minutes % 60,
        seconds % 60,
        millis % 1000
    )
}
