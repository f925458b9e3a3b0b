//! # 缩放与像素变换流水线
//!
//! ## 设计思路
//!
//! 三个生成阶段共享同一套缩放实现，差异只在缩放之后：
//! - 启动图标：缩放即结果
//! - 前景图标：缩放到安全区后以自身 alpha 为蒙版贴到透明画布
//! - 通知图标：缩放后逐像素二值分类，输出白色剪影
//!
//! ## 实现思路
//!
//! 1. 优先使用 `fast_image_resize` 卷积缩放（U8x4，带 alpha 预乘处理）
//! 2. 失败时回退 `image::imageops::resize`，保证流程不中断
//! 3. 通知图标阈值为硬阈值，不做边缘 alpha 平滑

use fast_image_resize as fr;
use image::imageops::{self, FilterType};
use image::{ImageBuffer, Rgba, RgbaImage};

use super::IconError;

/// 通知剪影中的“图形”像素：不透明白。
pub const GLYPH_PIXEL: Rgba<u8> = Rgba([255, 255, 255, 255]);
/// 通知剪影中的“背景”像素：完全透明。
pub const BACKGROUND_PIXEL: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// 单像素分类结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelClass {
    Glyph,
    Background,
}

/// 将源图缩放为 `size x size`。
///
/// 非正方形源图直接拉伸，不做裁剪或等比处理。
pub fn resize_square(
    source: &RgbaImage,
    size: u32,
    filter: FilterType,
) -> Result<RgbaImage, IconError> {
    let (width, height) = source.dimensions();
    if size == 0 || width == 0 || height == 0 {
        return Err(IconError::Resize(format!(
            "无效尺寸：{}x{} -> {}x{}",
            width, height, size, size
        )));
    }

    log::debug!(
        "🧩 缩放：{}x{} -> {}x{}（filter={:?}）",
        width,
        height,
        size,
        size,
        filter
    );

    match resize_with_fast_image_resize(source, size, size, filter) {
        Ok(resized) => Ok(resized),
        Err(err) => {
            log::warn!("⚠️ fast_image_resize 缩放失败，回退 imageops::resize：{}", err);
            Ok(imageops::resize(source, size, size, filter))
        }
    }
}

fn resize_with_fast_image_resize(
    source: &RgbaImage,
    target_width: u32,
    target_height: u32,
    filter: FilterType,
) -> Result<RgbaImage, IconError> {
    let (src_width, src_height) = source.dimensions();

    let src_image = fr::images::Image::from_vec_u8(
        src_width,
        src_height,
        source.as_raw().clone(),
        fr::PixelType::U8x4,
    )
    .map_err(|e| IconError::Resize(format!("构建源图像缓冲失败：{}", e)))?;

    let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

    let mut resizer = fr::Resizer::new();
    let options = fr::ResizeOptions::new()
        .resize_alg(fr::ResizeAlg::Convolution(to_fast_filter(filter)));

    resizer
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| IconError::Resize(format!("fast_image_resize 执行失败：{}", e)))?;

    ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or_else(|| IconError::Resize("fast_image_resize 输出缓冲长度异常".to_string()))
}

fn to_fast_filter(filter: FilterType) -> fr::FilterType {
    match filter {
        FilterType::Nearest => fr::FilterType::Box,
        FilterType::Triangle => fr::FilterType::Bilinear,
        FilterType::CatmullRom => fr::FilterType::CatmullRom,
        FilterType::Gaussian => fr::FilterType::Mitchell,
        FilterType::Lanczos3 => fr::FilterType::Lanczos3,
    }
}

/// 自适应图标安全区单边留白：`floor(size * 0.25)`。
pub fn safe_zone_padding(size: u32) -> u32 {
    size / 4
}

/// 生成前景层：logo 缩放到中心 50% 区域后，以自身 alpha 作为蒙版贴到透明画布。
pub fn pad_into_canvas(
    source: &RgbaImage,
    size: u32,
    filter: FilterType,
) -> Result<RgbaImage, IconError> {
    let padding = safe_zone_padding(size);
    let inset = size - 2 * padding;

    let mut canvas = RgbaImage::from_pixel(size, size, BACKGROUND_PIXEL);
    let logo = resize_square(source, inset, filter)?;
    paste_with_alpha_mask(&mut canvas, &logo, padding, padding);

    Ok(canvas)
}

/// 以 `top` 的 alpha 为蒙版，逐通道（含 alpha）混合到 `bottom` 的 `(x, y)` 处。
///
/// `out = top * m / 255 + bottom * (255 - m) / 255`，不是 alpha-over：
/// 透明画布上的半透明像素 `(c, a)` 会变成 `(c·a/255, a²/255)`。
/// 超出 `bottom` 边界的部分直接裁掉。
pub fn paste_with_alpha_mask(bottom: &mut RgbaImage, top: &RgbaImage, x: u32, y: u32) {
    let (bottom_width, bottom_height) = bottom.dimensions();

    for (tx, ty, pixel) in top.enumerate_pixels() {
        let (bx, by) = (x + tx, y + ty);
        if bx >= bottom_width || by >= bottom_height {
            continue;
        }

        let mask = u32::from(pixel[3]);
        let dst = bottom.get_pixel_mut(bx, by);
        for channel in 0..4 {
            let blended = u32::from(pixel[channel]) * mask + u32::from(dst[channel]) * (255 - mask);
            dst[channel] = div255(blended);
        }
    }
}

/// 四舍五入的 `/ 255`，对 `0..=255*255` 精确。
fn div255(value: u32) -> u8 {
    let tmp = value + 128;
    ((tmp + (tmp >> 8)) >> 8) as u8
}

/// 判断像素属于白色图形还是背景。
///
/// 阈值针对“品红底 + 白色图形”的源 logo 调校：
/// 白色要求平均亮度 > 200 且 G > 150；品红为 R > 200、B > 200、G < 100。
/// 两者都不满足的像素（如抗锯齿边缘的灰色）一律归为背景。
pub fn classify_pixel(pixel: &Rgba<u8>) -> PixelClass {
    let [r, g, b, _alpha] = pixel.0;
    let luminance = f32::from(u16::from(r) + u16::from(g) + u16::from(b)) / 3.0;

    let is_white_icon = luminance > 200.0 && g > 150;
    let is_pink_magenta = r > 200 && b > 200 && g < 100;

    if is_white_icon && !is_pink_magenta {
        PixelClass::Glyph
    } else {
        PixelClass::Background
    }
}

/// 将已缩放图像转换为二值剪影：图形为不透明白，其余完全透明。
pub fn notification_mask(resized: &RgbaImage) -> RgbaImage {
    let (width, height) = resized.dimensions();
    let mut mask = RgbaImage::from_pixel(width, height, BACKGROUND_PIXEL);

    for (x, y, pixel) in resized.enumerate_pixels() {
        if classify_pixel(pixel) == PixelClass::Glyph {
            mask.put_pixel(x, y, GLYPH_PIXEL);
        }
    }

    mask
}

/// 生成通知图标：先缩放，再二值化。
pub fn notification_icon(
    source: &RgbaImage,
    size: u32,
    filter: FilterType,
) -> Result<RgbaImage, IconError> {
    let resized = resize_square(source, size, filter)?;
    Ok(notification_mask(&resized))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAGENTA: Rgba<u8> = Rgba([255, 0, 255, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn two_tone_logo(size: u32) -> RgbaImage {
        let center = size as f32 / 2.0;
        let radius = size as f32 * 0.3;
        ImageBuffer::from_fn(size, size, |x, y| {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            if (dx * dx + dy * dy).sqrt() <= radius {
                WHITE
            } else {
                MAGENTA
            }
        })
    }

    #[test]
    fn classify_pixel_keeps_white_and_drops_magenta() {
        assert_eq!(classify_pixel(&WHITE), PixelClass::Glyph);
        assert_eq!(classify_pixel(&Rgba([240, 240, 240, 255])), PixelClass::Glyph);
        assert_eq!(classify_pixel(&MAGENTA), PixelClass::Background);
        assert_eq!(classify_pixel(&Rgba([230, 60, 220, 255])), PixelClass::Background);
    }

    #[test]
    fn classify_pixel_treats_antialiased_edges_as_background() {
        // 亮度与品红规则都不命中
        assert_eq!(classify_pixel(&Rgba([128, 128, 128, 255])), PixelClass::Background);
        // 白与品红混合后的粉色
        assert_eq!(classify_pixel(&Rgba([255, 128, 255, 255])), PixelClass::Background);
        assert_eq!(classify_pixel(&Rgba([0, 0, 0, 0])), PixelClass::Background);
    }

    #[test]
    fn classify_pixel_thresholds_are_strict() {
        // 平均亮度恰好 200 不算白
        assert_eq!(classify_pixel(&Rgba([200, 200, 200, 255])), PixelClass::Background);
        assert_eq!(classify_pixel(&Rgba([201, 200, 200, 255])), PixelClass::Glyph);
        // G 恰好 150 不算白
        assert_eq!(classify_pixel(&Rgba([255, 150, 255, 255])), PixelClass::Background);
        assert_eq!(classify_pixel(&Rgba([255, 151, 255, 255])), PixelClass::Glyph);
    }

    #[test]
    fn classify_pixel_ignores_alpha() {
        assert_eq!(classify_pixel(&Rgba([255, 255, 255, 0])), PixelClass::Glyph);
        assert_eq!(classify_pixel(&Rgba([255, 0, 255, 10])), PixelClass::Background);
    }

    #[test]
    fn resize_square_outputs_requested_size() {
        let logo = two_tone_logo(64);
        for size in [24, 48, 64, 96] {
            let resized = resize_square(&logo, size, FilterType::Lanczos3).expect("resize");
            assert_eq!(resized.dimensions(), (size, size));
        }
    }

    #[test]
    fn resize_square_stretches_non_square_source() {
        let wide = RgbaImage::from_pixel(80, 20, WHITE);
        let resized = resize_square(&wide, 36, FilterType::CatmullRom).expect("resize");
        assert_eq!(resized.dimensions(), (36, 36));
    }

    #[test]
    fn resize_square_rejects_zero_size() {
        let logo = two_tone_logo(16);
        assert!(matches!(
            resize_square(&logo, 0, FilterType::Lanczos3),
            Err(IconError::Resize(_))
        ));
    }

    #[test]
    fn resize_square_is_deterministic() {
        let logo = two_tone_logo(128);
        let first = resize_square(&logo, 48, FilterType::Lanczos3).expect("resize");
        let second = resize_square(&logo, 48, FilterType::Lanczos3).expect("resize");
        assert_eq!(first.as_raw(), second.as_raw());
    }

    #[test]
    fn safe_zone_padding_is_a_quarter_floor() {
        assert_eq!(safe_zone_padding(108), 27);
        assert_eq!(safe_zone_padding(162), 40);
        assert_eq!(safe_zone_padding(216), 54);
        assert_eq!(safe_zone_padding(324), 81);
        assert_eq!(safe_zone_padding(432), 108);
    }

    #[test]
    fn pad_into_canvas_leaves_margin_transparent() {
        let logo = RgbaImage::from_pixel(100, 100, MAGENTA);
        let size = 162;
        let padding = safe_zone_padding(size);
        let inset_end = size - padding;

        let canvas = pad_into_canvas(&logo, size, FilterType::Lanczos3).expect("pad");
        assert_eq!(canvas.dimensions(), (size, size));

        for (x, y, pixel) in canvas.enumerate_pixels() {
            let inside = (padding..inset_end).contains(&x) && (padding..inset_end).contains(&y);
            if inside {
                assert_eq!(pixel[3], 255, "inset pixel ({x},{y}) should be opaque");
            } else {
                assert_eq!(*pixel, BACKGROUND_PIXEL, "margin pixel ({x},{y}) should be clear");
            }
        }
    }

    #[test]
    fn pad_into_canvas_preserves_logo_transparency() {
        let logo = ImageBuffer::from_fn(64, 64, |x, _| {
            if x < 32 { Rgba([0, 0, 0, 0]) } else { WHITE }
        });

        let canvas = pad_into_canvas(&logo, 108, FilterType::Lanczos3).expect("pad");

        // 左半透明区域合成后仍然透明
        assert_eq!(canvas.get_pixel(30, 54)[3], 0);
        assert_eq!(canvas.get_pixel(75, 54)[3], 255);
    }

    #[test]
    fn pad_into_canvas_masks_semi_transparent_logo_with_its_own_alpha() {
        let logo = RgbaImage::from_pixel(64, 64, Rgba([255, 255, 255, 128]));

        let canvas = pad_into_canvas(&logo, 108, FilterType::Lanczos3).expect("pad");

        // 蒙版粘贴：颜色与 alpha 都乘以 a/255，而不是 alpha-over 的 (255,255,255,128)
        let center = canvas.get_pixel(54, 54);
        for (channel, expected) in [128u8, 128, 128, 64].into_iter().enumerate() {
            assert!(
                center[channel].abs_diff(expected) <= 1,
                "通道 {} 为 {}，期望约 {}",
                channel,
                center[channel],
                expected
            );
        }
    }

    #[test]
    fn paste_with_alpha_mask_blends_every_channel() {
        let mut canvas = RgbaImage::from_pixel(4, 4, BACKGROUND_PIXEL);
        let mut top = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 128]));
        top.put_pixel(1, 0, Rgba([10, 20, 30, 255]));
        top.put_pixel(0, 1, Rgba([200, 200, 200, 0]));

        paste_with_alpha_mask(&mut canvas, &top, 1, 1);

        assert_eq!(*canvas.get_pixel(1, 1), Rgba([128, 128, 128, 64]));
        // 不透明像素原样复制，全透明像素不改变底图
        assert_eq!(*canvas.get_pixel(2, 1), Rgba([10, 20, 30, 255]));
        assert_eq!(*canvas.get_pixel(1, 2), BACKGROUND_PIXEL);
        assert_eq!(*canvas.get_pixel(0, 0), BACKGROUND_PIXEL);
    }

    #[test]
    fn paste_with_alpha_mask_clips_at_canvas_edge() {
        let mut canvas = RgbaImage::from_pixel(3, 3, BACKGROUND_PIXEL);
        let top = RgbaImage::from_pixel(3, 3, WHITE);

        paste_with_alpha_mask(&mut canvas, &top, 2, 2);

        assert_eq!(*canvas.get_pixel(2, 2), WHITE);
        assert_eq!(*canvas.get_pixel(1, 1), BACKGROUND_PIXEL);
    }

    #[test]
    fn notification_mask_is_binary() {
        let logo = two_tone_logo(512);
        let icon = notification_icon(&logo, 36, FilterType::Lanczos3).expect("notification");

        assert_eq!(icon.dimensions(), (36, 36));
        assert!(icon.pixels().all(|p| *p == GLYPH_PIXEL || *p == BACKGROUND_PIXEL));
    }

    #[test]
    fn notification_icon_extracts_white_glyph() {
        let logo = two_tone_logo(512);
        let icon = notification_icon(&logo, 48, FilterType::Lanczos3).expect("notification");

        assert_eq!(*icon.get_pixel(24, 24), GLYPH_PIXEL);
        assert_eq!(*icon.get_pixel(0, 0), BACKGROUND_PIXEL);
        assert_eq!(*icon.get_pixel(47, 47), BACKGROUND_PIXEL);
        assert_eq!(*icon.get_pixel(47, 0), BACKGROUND_PIXEL);
    }
}
