//! # 密度表与中间模型
//!
//! ## 设计思路
//!
//! 将“静态规格”和“生成结果”解耦：
//! - `Density` / `IconKind` 以及三张密度表描述要生成什么
//! - `GeneratedIcon` 描述已经写盘的单个文件
//! - `GenerationReport` 汇总一次运行的全部输出，供控制台摘要使用

use std::fmt;
use std::path::PathBuf;

/// Android 屏幕密度档位（封闭枚举）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Density {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl Density {
    pub const ALL: [Density; 5] = [
        Density::Mdpi,
        Density::Hdpi,
        Density::Xhdpi,
        Density::Xxhdpi,
        Density::Xxxhdpi,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mdpi => "mdpi",
            Self::Hdpi => "hdpi",
            Self::Xhdpi => "xhdpi",
            Self::Xxhdpi => "xxhdpi",
            Self::Xxxhdpi => "xxxhdpi",
        }
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 单张密度表：密度档位 → 正方形边长（像素）。
pub type DensityTable = [(Density, u32); 5];

pub const LAUNCHER_SIZES: DensityTable = [
    (Density::Mdpi, 48),
    (Density::Hdpi, 72),
    (Density::Xhdpi, 96),
    (Density::Xxhdpi, 144),
    (Density::Xxxhdpi, 192),
];

pub const FOREGROUND_SIZES: DensityTable = [
    (Density::Mdpi, 108),
    (Density::Hdpi, 162),
    (Density::Xhdpi, 216),
    (Density::Xxhdpi, 324),
    (Density::Xxxhdpi, 432),
];

pub const NOTIFICATION_SIZES: DensityTable = [
    (Density::Mdpi, 24),
    (Density::Hdpi, 36),
    (Density::Xhdpi, 48),
    (Density::Xxhdpi, 72),
    (Density::Xxxhdpi, 96),
];

/// 图标类别，每个类别对应一个生成阶段。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    /// 启动图标（`mipmap-*`），同一缓冲写两个文件名。
    Launcher,
    /// 自适应图标前景层（`drawable-*`），带安全区留白。
    Foreground,
    /// 通知栏单色剪影（`drawable-*`）。
    Notification,
}

impl IconKind {
    pub const ALL: [IconKind; 3] = [IconKind::Launcher, IconKind::Foreground, IconKind::Notification];

    pub fn sizes(self) -> &'static DensityTable {
        match self {
            Self::Launcher => &LAUNCHER_SIZES,
            Self::Foreground => &FOREGROUND_SIZES,
            Self::Notification => &NOTIFICATION_SIZES,
        }
    }

    /// 资源目录前缀，与密度拼成 `mipmap-hdpi` 之类的目录名。
    pub fn dir_prefix(self) -> &'static str {
        match self {
            Self::Launcher => "mipmap",
            Self::Foreground | Self::Notification => "drawable",
        }
    }

    /// 该类别每个密度写出的文件名。
    ///
    /// `launcher_icon.png` 是通知服务引用的别名，内容与 `ic_launcher.png` 相同。
    pub fn file_names(self) -> &'static [&'static str] {
        match self {
            Self::Launcher => &["ic_launcher.png", "launcher_icon.png"],
            Self::Foreground => &["ic_launcher_foreground.png"],
            Self::Notification => &["ic_notification.png"],
        }
    }

    pub fn dir_name(self, density: Density) -> String {
        format!("{}-{}", self.dir_prefix(), density)
    }

    /// 一次完整运行中该类别应产出的文件数。
    pub fn expected_file_count(self) -> usize {
        self.sizes().len() * self.file_names().len()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Launcher => "启动图标",
            Self::Foreground => "前景图标",
            Self::Notification => "通知图标",
        }
    }
}

/// 已写盘的单个图标。
#[derive(Debug, Clone)]
pub struct GeneratedIcon {
    pub kind: IconKind,
    pub density: Density,
    /// 正方形边长（像素）。
    pub size: u32,
    pub path: PathBuf,
}

/// 一次运行的输出汇总。
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub icons: Vec<GeneratedIcon>,
}

impl GenerationReport {
    pub fn total(&self) -> usize {
        self.icons.len()
    }

    pub fn count_for(&self, kind: IconKind) -> usize {
        self.icons.iter().filter(|icon| icon.kind == kind).count()
    }

    pub(crate) fn push(&mut self, icon: GeneratedIcon) {
        self.icons.push(icon);
    }
}
