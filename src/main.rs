//! # Android 图标生成工具 — 命令行入口
//!
//! 本文件仅负责日志初始化、参数解析与摘要输出。
//! 生成逻辑分布在各子模块中，详见 `lib.rs` 架构文档。

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use launcher_icon_gen::error::AppError;
use launcher_icon_gen::icon_generator::{GenerationReport, IconGenerator, IconKind};
use launcher_icon_gen::settings;

#[derive(Debug, Parser)]
#[command(
    name = "launcher-icon-gen",
    version,
    about = "Regenerate Android launcher, adaptive foreground and notification icons from one logo"
)]
struct Args {
    /// Project root; defaults to the current working directory.
    ///
    /// Relative paths resolve from the working directory, not from where the
    /// binary lives, so build steps should pass `--project-dir` explicitly.
    #[arg(long, value_name = "DIR")]
    project_dir: Option<PathBuf>,

    /// Source logo, relative to the project root.
    #[arg(long, value_name = "PATH")]
    source: Option<PathBuf>,

    /// Android `res` directory to write into, relative to the project root.
    #[arg(long, value_name = "DIR")]
    res_dir: Option<PathBuf>,

    /// JSON settings file (defaults to `icon-gen.json` in the project root when present).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match run(args) {
        Ok(report) => {
            print_summary(&report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            if err.is_source_error() {
                log::error!("❌ 未生成任何图标: {err}");
            } else {
                log::error!("❌ 图标生成中断: {err}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<GenerationReport, AppError> {
    let project_dir = match args.project_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let settings = settings::load_settings(&project_dir, args.config.as_deref())?;
    let config = settings::resolve_config(
        &project_dir,
        &settings,
        args.source.as_deref(),
        args.res_dir.as_deref(),
    )?;

    let generator = IconGenerator::new(config)?;
    Ok(generator.run()?)
}

fn print_summary(report: &GenerationReport) {
    println!("\n✨ 成功生成 {} 个图标", report.total());
    println!("📋 摘要:");
    for kind in IconKind::ALL {
        println!("   • {}: {} 个文件", kind.label(), report.count_for(kind));
    }
}
