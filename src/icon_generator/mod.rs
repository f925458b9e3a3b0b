//! # 图标生成模块（icon_generator）
//!
//! ## 设计思路
//!
//! 将“源图加载校验 → 缩放/合成/二值化 → 写盘 → 汇总报告”按职责拆分为多个子模块，
//! 避免单文件膨胀与耦合。
//!
//! - `handler`：编排三个生成阶段 + 阶段耗时日志
//! - `loader`：源图存在性、体积、像素上限校验与 RGBA 归一化
//! - `pipeline`：缩放、安全区合成、通知剪影像素分类
//! - `writer`：建目录、PNG 编码、写文件
//! - `config/error/source`：配置、错误、密度表与中间数据模型
//!
//! ## 新同事快速上手
//!
//! ```text
//! main.rs（参数 + 设置文件合并）
//!    ↓
//! handler.rs  IconGenerator::run
//!    ├─ loader.rs（读取 + 校验 + RGBA）
//!    ├─ pipeline.rs（resize / pad / mask）
//!    └─ writer.rs（mipmap-* / drawable-* 写盘）
//!    ↓
//! GenerationReport → 控制台摘要
//! ```
//!
//! ## 分层职责建议
//!
//! - 新增密度或文件名优先改 `source.rs`
//! - 阈值与缩放行为优先改 `pipeline.rs`
//! - 阶段顺序变更优先改 `handler.rs`

mod config;
mod error;
mod handler;
mod loader;
mod pipeline;
mod source;
mod writer;

pub use config::{
    parse_resize_filter, resize_filter_name, GeneratorConfig, DEFAULT_RES_DIR, DEFAULT_SOURCE_LOGO,
};
pub use error::IconError;
pub use handler::IconGenerator;
pub use pipeline::{
    classify_pixel, notification_icon, notification_mask, pad_into_canvas, paste_with_alpha_mask,
    resize_square, safe_zone_padding, PixelClass, BACKGROUND_PIXEL, GLYPH_PIXEL,
};
pub use source::{
    Density, DensityTable, GeneratedIcon, GenerationReport, IconKind, FOREGROUND_SIZES,
    LAUNCHER_SIZES, NOTIFICATION_SIZES,
};
