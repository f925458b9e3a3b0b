//! # 配置模块
//!
//! ## 设计思路
//!
//! 将可调策略集中到 `GeneratorConfig`：源图位置、输出目录、缩放滤镜与输入资源上限。
//! 密度表属于编译期常量（见 `source.rs`），不在此处开放配置。
//!
//! ## 实现思路
//!
//! - `Default` 以当前目录为项目根，给出约定的源图与 `res` 路径。
//! - `for_project` 将约定路径挂到指定项目根下。
//! - `validate` 在生成前拒绝低质量滤镜与非法上限，尽早失败。

use std::path::{Path, PathBuf};

use image::imageops::FilterType;

use super::IconError;

/// 约定的源图文件名（相对项目根）。
pub const DEFAULT_SOURCE_LOGO: &str = "final-logo.png";

/// 约定的 Android 资源目录（相对项目根）。
pub const DEFAULT_RES_DIR: [&str; 5] = ["android", "app", "src", "main", "res"];

/// 图标生成配置。
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// 源 logo 路径。
    pub source_path: PathBuf,
    /// 输出根目录，`mipmap-*` / `drawable-*` 都建在它下面。
    pub res_dir: PathBuf,
    /// 缩放滤镜，仅允许高质量卷积滤镜。
    pub resize_filter: FilterType,
    /// 源文件体积上限（字节）。
    pub max_source_bytes: u64,
    /// 源图像素上限（`width * height`）。
    pub max_source_pixels: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::for_project(Path::new("."))
    }
}

impl GeneratorConfig {
    /// 以 `project_dir` 为根构造默认配置。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use launcher_icon_gen::icon_generator::GeneratorConfig;
    ///
    /// let config = GeneratorConfig::for_project("/work/app".as_ref());
    /// assert!(config.source_path.ends_with("final-logo.png"));
    /// ```
    pub fn for_project(project_dir: &Path) -> Self {
        let res_dir = DEFAULT_RES_DIR
            .iter()
            .fold(project_dir.to_path_buf(), |acc, part| acc.join(part));

        Self {
            source_path: project_dir.join(DEFAULT_SOURCE_LOGO),
            res_dir,
            resize_filter: FilterType::Lanczos3,
            max_source_bytes: 50 * 1024 * 1024,
            max_source_pixels: 40_000_000,
        }
    }

    /// 校验配置是否可用于生成。
    pub fn validate(&self) -> Result<(), IconError> {
        if !matches!(self.resize_filter, FilterType::Lanczos3 | FilterType::CatmullRom) {
            return Err(IconError::InvalidConfig(format!(
                "不支持的缩放滤镜：{:?}（可选：lanczos3 / catmull-rom）",
                self.resize_filter
            )));
        }
        if self.max_source_bytes == 0 {
            return Err(IconError::InvalidConfig("max_source_bytes 必须大于 0".to_string()));
        }
        if self.max_source_pixels == 0 {
            return Err(IconError::InvalidConfig("max_source_pixels 必须大于 0".to_string()));
        }
        Ok(())
    }
}

/// 从外部字符串解析缩放滤镜。
///
/// 最近邻 / 双线性等滤镜在小尺寸图标上损失明显，直接拒绝。
pub fn parse_resize_filter(name: &str) -> Result<FilterType, IconError> {
    match name.trim().to_lowercase().as_str() {
        "lanczos3" | "lanczos" => Ok(FilterType::Lanczos3),
        "catmull-rom" | "catmullrom" | "catmull_rom" => Ok(FilterType::CatmullRom),
        other => Err(IconError::InvalidConfig(format!(
            "未知缩放滤镜：{}（可选：lanczos3 / catmull-rom）",
            other
        ))),
    }
}

/// 将滤镜输出为稳定字符串，用于日志。
pub fn resize_filter_name(filter: FilterType) -> &'static str {
    match filter {
        FilterType::Nearest => "nearest",
        FilterType::Triangle => "triangle",
        FilterType::CatmullRom => "catmull-rom",
        FilterType::Gaussian => "gaussian",
        FilterType::Lanczos3 => "lanczos3",
    }
}
