//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconGenerator` 只负责流程编排，处理链路固定为：
//! 1. 加载并校验源图（失败时不写任何文件）
//! 2. 启动图标阶段
//! 3. 前景图标阶段
//! 4. 通知图标阶段
//!
//! ## 实现思路
//!
//! - 三个阶段只读共享同一张源图，互不依赖。
//! - 任一文件失败立即返回，已写出的文件保留在磁盘上。
//! - 记录 `load/launcher/foreground/notification/total` 阶段耗时，便于诊断。

use std::time::Instant;

use image::RgbaImage;

use super::config::resize_filter_name;
use super::pipeline::{notification_icon, pad_into_canvas, resize_square};
use super::source::{GenerationReport, IconKind};
use super::{GeneratorConfig, IconError};

/// 图标生成器。
pub struct IconGenerator {
    pub(super) config: GeneratorConfig,
}

impl IconGenerator {
    /// 校验配置并创建生成器。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use launcher_icon_gen::icon_generator::{GeneratorConfig, IconGenerator};
    ///
    /// let generator = IconGenerator::new(GeneratorConfig::default())?;
    /// let report = generator.run()?;
    /// println!("generated {} icons", report.total());
    /// # Ok::<(), launcher_icon_gen::icon_generator::IconError>(())
    /// ```
    pub fn new(config: GeneratorConfig) -> Result<Self, IconError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// 处理主入口：读取源图并生成全部图标。
    pub fn run(&self) -> Result<GenerationReport, IconError> {
        let total_start = Instant::now();

        let load_start = Instant::now();
        let source = Self::load_source(&self.config)?;
        let load_elapsed = load_start.elapsed();

        let report = self.generate_from(&source)?;

        log::info!(
            "✅ 源图处理完成 - load={}ms total={}ms",
            load_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(report)
    }

    /// 基于已加载的 RGBA 源图执行三个生成阶段。
    pub fn generate_from(&self, source: &RgbaImage) -> Result<GenerationReport, IconError> {
        log::info!(
            "📐 输出目录: {}（filter={}）",
            self.config.res_dir.display(),
            resize_filter_name(self.config.resize_filter)
        );

        let mut report = GenerationReport::default();

        log::info!("🚀 生成启动图标...");
        let launcher_start = Instant::now();
        self.launcher_pass(source, &mut report)?;
        let launcher_elapsed = launcher_start.elapsed();

        log::info!("🎨 生成前景图标...");
        let foreground_start = Instant::now();
        self.foreground_pass(source, &mut report)?;
        let foreground_elapsed = foreground_start.elapsed();

        log::info!("🔔 生成通知图标（单色）...");
        let notification_start = Instant::now();
        self.notification_pass(source, &mut report)?;
        let notification_elapsed = notification_start.elapsed();

        log::info!(
            "✅ 图标生成完成 - launcher={}ms foreground={}ms notification={}ms files={}",
            launcher_elapsed.as_millis(),
            foreground_elapsed.as_millis(),
            notification_elapsed.as_millis(),
            report.total()
        );

        Ok(report)
    }

    fn launcher_pass(
        &self,
        source: &RgbaImage,
        report: &mut GenerationReport,
    ) -> Result<(), IconError> {
        for &(density, size) in IconKind::Launcher.sizes() {
            let icon = resize_square(source, size, self.config.resize_filter)?;
            self.write_icon(IconKind::Launcher, density, &icon, report)?;
        }
        Ok(())
    }

    fn foreground_pass(
        &self,
        source: &RgbaImage,
        report: &mut GenerationReport,
    ) -> Result<(), IconError> {
        for &(density, size) in IconKind::Foreground.sizes() {
            let icon = pad_into_canvas(source, size, self.config.resize_filter)?;
            self.write_icon(IconKind::Foreground, density, &icon, report)?;
        }
        Ok(())
    }

    fn notification_pass(
        &self,
        source: &RgbaImage,
        report: &mut GenerationReport,
    ) -> Result<(), IconError> {
        for &(density, size) in IconKind::Notification.sizes() {
            let icon = notification_icon(source, size, self.config.resize_filter)?;
            self.write_icon(IconKind::Notification, density, &icon, report)?;
        }
        Ok(())
    }
}
