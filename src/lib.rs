//! # Android 图标生成工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! final-logo.png
//!      │
//!      ▼
//! ┌───────────────────────────────────────────────┐
//! │  settings ── icon-gen.json + 命令行覆盖        │
//! │      ↓                                        │
//! │  icon_generator::IconGenerator                │
//! │   ├─ loader     读取·校验·RGBA                 │
//! │   ├─ pipeline   缩放·安全区合成·通知剪影        │
//! │   └─ writer     mipmap-* / drawable-* 写盘     │
//! └───────────────────────────────────────────────┘
//!      │
//!      ▼
//! android/app/src/main/res/
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，决定进程退出码 |
//! | [`settings`] | 设置文件读取与命令行参数合并 |
//! | [`icon_generator`] | 启动图标、自适应前景、通知剪影三阶段生成 |

pub mod error;
pub mod icon_generator;
pub mod settings;
