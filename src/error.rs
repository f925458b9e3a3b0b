//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 二进制入口统一返回 `Result<T, AppError>`，由 `main` 决定退出码。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `IconError` / `std::io::Error` 提供 `From` 转换，无需手动 map。

use crate::icon_generator::IconError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 图标生成链路错误（加载 / 缩放 / 写盘）
    #[error("{0}")]
    Icon(#[from] IconError),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),

    /// 设置文件缺失或无法解析
    #[error("设置文件错误: {0}")]
    Settings(String),
}

impl AppError {
    /// 源图缺失或无法解码时为 true，这两类错误一定发生在写盘之前。
    pub fn is_source_error(&self) -> bool {
        matches!(
            self,
            Self::Icon(IconError::SourceNotFound(_)) | Self::Icon(IconError::SourceDecode(_))
        )
    }
}
