//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 图标生成链路中的所有失败来源集中到单一枚举，调用侧可按分支匹配。
//! 其中 `SourceNotFound` / `SourceDecode` 一定发生在任何输出写入之前。

/// 图标生成统一错误类型。
///
/// 在二进制入口被上转为 `AppError`，最终决定进程退出码。
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("源图不存在：{0}")]
    SourceNotFound(String),

    #[error("源图解码失败：{0}")]
    SourceDecode(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),

    #[error("配置错误：{0}")]
    InvalidConfig(String),

    #[error("缩放失败：{0}")]
    Resize(String),

    #[error("编码错误：{0}")]
    Encode(String),

    #[error("文件错误：{0}")]
    FileSystem(String),
}
