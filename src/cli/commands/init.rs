//! # Init Command Module / 初始化命令模块
//!
//! This module implements the `init` command for the karate-consolidator
//! CLI, which creates a `ConsolidateReport.toml` configuration file through
//! an interactive wizard.
//!
//! 此模块实现了 karate-consolidator CLI 的 `init` 命令，
//! 通过交互式向导创建 `ConsolidateReport.toml` 配置文件。

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use std::fs;
use std::path::Path;

use crate::core::config::{ReportConfig, DEFAULT_CONFIG_FILE};
use crate::infra::t;

/// Runs the interactive wizard to generate a `ConsolidateReport.toml` file.
///
/// The wizard asks for the report artifact name, the document title and the
/// content-root class, each pre-filled with the built-in default. With
/// `non_interactive` set, the defaults are written directly.
///
/// 运行交互式向导以生成 `ConsolidateReport.toml` 文件。
///
/// 向导询问报告产物名称、文档标题和内容根类，每项都预填内置默认值。
/// 设置 `non_interactive` 时直接写入默认值。
pub fn run_init_wizard(language: &str, non_interactive: bool) -> Result<()> {
    let config_path = Path::new(DEFAULT_CONFIG_FILE);
    let theme = ColorfulTheme::default();

    if !non_interactive {
        println!(
            "\n{}",
            t!("init_wizard_welcome", locale = language).cyan().bold()
        );
        println!("{}", t!("init_wizard_description", locale = language));
    }

    if config_path.exists() && !non_interactive {
        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(t!(
                "init_overwrite_prompt",
                locale = language,
                path = config_path.display()
            ))
            .default(false)
            .interact()
            .context(t!("init_user_confirmation_failed", locale = language).to_string())?;
        if !confirmation {
            println!("{}", t!("init_aborted", locale = language));
            return Ok(());
        }
    }

    let defaults = ReportConfig::default();

    if non_interactive {
        let config = ReportConfig {
            language: language.to_string(),
            ..defaults
        };
        return write_config(config_path, &config, language);
    }

    let report_name: String = Input::with_theme(&theme)
        .with_prompt(t!("init_report_name_prompt", locale = language))
        .default(defaults.report_name.clone())
        .interact_text()?;

    let title: String = Input::with_theme(&theme)
        .with_prompt(t!("init_title_prompt", locale = language))
        .default(defaults.title.clone())
        .interact_text()?;

    let content_class: String = Input::with_theme(&theme)
        .with_prompt(t!("init_content_class_prompt", locale = language))
        .default(defaults.content_class.clone())
        .interact_text()?;

    let config = ReportConfig {
        language: language.to_string(),
        report_name,
        title,
        content_class,
    };
    write_config(config_path, &config, language)
}

fn write_config(path: &Path, config: &ReportConfig, language: &str) -> Result<()> {
    let toml_string = toml::to_string_pretty(config)
        .context(t!("init_serialize_failed", locale = language).to_string())?;

    fs::write(path, toml_string)
        .with_context(|| t!("init_write_failed", locale = language, path = path.display()))?;

    println!(
        "\n{} {}",
        "✔".green(),
        t!(
            "init_success_created",
            locale = language,
            path = path.display()
        )
        .bold()
    );
    println!("{}", t!("init_usage_hint", locale = language));

    Ok(())
}
