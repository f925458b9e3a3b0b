//! 设置文件模块
//!
//! # 设计思路
//!
//! 允许在项目根放置 `icon-gen.json` 覆盖约定路径与缩放参数，
//! 优先级为：命令行参数 > 设置文件 > 内置默认值。
//!
//! # 实现思路
//!
//! - 所有字段可选，缺省字段沿用 `GeneratorConfig::for_project` 的默认值。
//! - 默认位置的设置文件不存在时静默使用默认值；显式指定却不存在时报错。
//! - 相对路径一律相对项目根解析。

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::AppError;
use crate::icon_generator::{parse_resize_filter, GeneratorConfig};

/// 项目根下的默认设置文件名。
pub const SETTINGS_FILE_NAME: &str = "icon-gen.json";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconSettings {
    #[serde(default)]
    pub source_logo: Option<String>,
    #[serde(default)]
    pub res_dir: Option<String>,
    #[serde(default)]
    pub resize_filter: Option<String>,
    #[serde(default)]
    pub max_source_bytes: Option<u64>,
    #[serde(default)]
    pub max_source_pixels: Option<u64>,
}

fn load_settings_from_path(path: &Path) -> Result<IconSettings, AppError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        AppError::Settings(format!("解析设置文件 '{}' 失败: {}", path.display(), e))
    })
}

/// 读取设置文件。
///
/// `explicit` 为命令行 `--config` 的值；未指定时尝试项目根下的 `icon-gen.json`。
pub fn load_settings(project_dir: &Path, explicit: Option<&Path>) -> Result<IconSettings, AppError> {
    if let Some(path) = explicit {
        let path = project_dir.join(path);
        if !path.exists() {
            return Err(AppError::Settings(format!("设置文件不存在: {}", path.display())));
        }
        log::info!("⚙️ 使用设置文件: {}", path.display());
        return load_settings_from_path(&path);
    }

    let default_path = project_dir.join(SETTINGS_FILE_NAME);
    if default_path.exists() {
        log::info!("⚙️ 使用设置文件: {}", default_path.display());
        return load_settings_from_path(&default_path);
    }

    log::debug!("未找到 {}，使用默认设置", default_path.display());
    Ok(IconSettings::default())
}

/// 合并默认值、设置文件与命令行覆盖，得到最终生成配置。
pub fn resolve_config(
    project_dir: &Path,
    settings: &IconSettings,
    source_override: Option<&Path>,
    res_dir_override: Option<&Path>,
) -> Result<GeneratorConfig, AppError> {
    let mut config = GeneratorConfig::for_project(project_dir);

    let source = source_override
        .map(Path::to_path_buf)
        .or_else(|| settings.source_logo.as_ref().map(PathBuf::from));
    if let Some(source) = source {
        config.source_path = project_dir.join(source);
    }

    let res_dir = res_dir_override
        .map(Path::to_path_buf)
        .or_else(|| settings.res_dir.as_ref().map(PathBuf::from));
    if let Some(res_dir) = res_dir {
        config.res_dir = project_dir.join(res_dir);
    }

    if let Some(ref filter) = settings.resize_filter {
        config.resize_filter = parse_resize_filter(filter)?;
    }
    if let Some(max_bytes) = settings.max_source_bytes {
        config.max_source_bytes = max_bytes;
    }
    if let Some(max_pixels) = settings.max_source_pixels {
        config.max_source_pixels = max_pixels;
    }

    config.validate()?;
    Ok(config)
}
