//! # 写盘模块
//!
//! ## 设计思路
//!
//! 负责“建目录 → PNG 编码 → 写文件 → 记录报告”。
//! 同一图像只编码一次，多个文件名写入相同字节，保证别名文件逐字节一致。

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use super::source::{Density, GeneratedIcon, GenerationReport, IconKind};
use super::{IconError, IconGenerator};

impl IconGenerator {
    /// 将一张图标写入对应密度目录下该类别的全部文件名。
    pub(super) fn write_icon(
        &self,
        kind: IconKind,
        density: Density,
        image: &RgbaImage,
        report: &mut GenerationReport,
    ) -> Result<(), IconError> {
        let dir = self.config.res_dir.join(kind.dir_name(density));
        ensure_dir(&dir)?;

        let encoded = encode_png(image)?;
        let size = image.width();

        for file_name in kind.file_names() {
            let path = write_bytes(&dir, file_name, &encoded)?;
            log::info!("  ✓ {}: {} ({}x{})", density, file_name, size, image.height());

            report.push(GeneratedIcon {
                kind,
                density,
                size,
                path,
            });
        }

        Ok(())
    }
}

/// 递归创建目录，已存在时视为成功。
pub(crate) fn ensure_dir(dir: &Path) -> Result<(), IconError> {
    fs::create_dir_all(dir)
        .map_err(|e| IconError::FileSystem(format!("创建目录 '{}' 失败：{}", dir.display(), e)))
}

/// 将 RGBA 图像编码为 PNG 字节。
pub(crate) fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, IconError> {
    let mut cursor = Cursor::new(Vec::new());
    image
        .write_to(&mut cursor, ImageFormat::Png)
        .map_err(|e| IconError::Encode(format!("PNG 编码失败：{}", e)))?;
    Ok(cursor.into_inner())
}

fn write_bytes(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf, IconError> {
    let path = dir.join(file_name);
    fs::write(&path, bytes)
        .map_err(|e| IconError::FileSystem(format!("写入 '{}' 失败：{}", path.display(), e)))?;
    Ok(path)
}
