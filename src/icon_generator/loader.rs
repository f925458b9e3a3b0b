//! # 源图加载与校验
//!
//! ## 设计思路
//!
//! 在写出任何文件之前完成全部输入校验：存在性 → 体积 → 头部尺寸 → 完整解码。
//! 目标是尽快失败，缺图或坏图时输出目录保持原样。
//!
//! ## 实现思路
//!
//! - 先读 header 尺寸做像素上限检查，再进行完整解码。
//! - 解码结果统一转换为 RGBA，后续合成与像素分类都依赖 alpha 通道。

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{GenericImageView, RgbaImage};

use super::{GeneratorConfig, IconError, IconGenerator};

impl IconGenerator {
    /// 读取并解码源 logo，输出 RGBA 图像。
    pub(super) fn load_source(config: &GeneratorConfig) -> Result<RgbaImage, IconError> {
        let path = config.source_path.as_path();
        log::info!("📱 开始读取源图 - 路径: {}", path.display());

        if !path.exists() {
            return Err(IconError::SourceNotFound(path.display().to_string()));
        }

        let bytes = Self::read_source_bytes(path, config)?;

        let (header_width, header_height) = Self::inspect_dimensions_from_memory(&bytes)?;
        Self::validate_pixel_limits(config, header_width, header_height)?;

        let decoded = image::load_from_memory(&bytes)
            .map_err(|e| IconError::SourceDecode(format!("{}：{}", path.display(), e)))?;

        let (width, height) = decoded.dimensions();
        if width == 0 || height == 0 {
            return Err(IconError::SourceDecode(format!(
                "{}：图片尺寸为 {}x{}",
                path.display(),
                width,
                height
            )));
        }

        log::info!(
            "✅ 源图读取成功 - 尺寸: {}x{} 颜色: {:?}",
            width,
            height,
            decoded.color()
        );

        Ok(decoded.into_rgba8())
    }

    fn read_source_bytes(path: &Path, config: &GeneratorConfig) -> Result<Vec<u8>, IconError> {
        let metadata = fs::metadata(path)
            .map_err(|e| IconError::FileSystem(format!("无法读取文件信息：{}", e)))?;

        if metadata.len() > config.max_source_bytes {
            return Err(IconError::ResourceLimit(format!(
                "源图过大：{:.2} MB（限制：{:.2} MB）",
                metadata.len() as f64 / 1024.0 / 1024.0,
                config.max_source_bytes as f64 / 1024.0 / 1024.0
            )));
        }

        fs::read(path).map_err(|e| IconError::FileSystem(format!("无法读取源图文件：{}", e)))
    }

    /// 仅通过图片头信息读取宽高。
    fn inspect_dimensions_from_memory(bytes: &[u8]) -> Result<(u32, u32), IconError> {
        let reader = image::ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| IconError::SourceDecode(format!("无法识别图片格式：{}", e)))?;

        reader
            .into_dimensions()
            .map_err(|e| IconError::SourceDecode(format!("无法读取图片尺寸：{}", e)))
    }

    fn validate_pixel_limits(
        config: &GeneratorConfig,
        width: u32,
        height: u32,
    ) -> Result<(), IconError> {
        let pixels = u64::from(width) * u64::from(height);

        if pixels > config.max_source_pixels {
            return Err(IconError::ResourceLimit(format!(
                "源图像素过大：{} 像素（限制：{} 像素）",
                pixels, config.max_source_pixels
            )));
        }

        Ok(())
    }
}
