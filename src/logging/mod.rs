//! 日志系统.
//!
//! 双输出:
//! - console: 彩色, debug 级别
//! - file: 无色, 按日翻滚到 {directory}/{prefix}.{date}.log,
//!   级别来自配置, HENG_LOG 环境变量可覆盖
//!
//! 历史日志的保留与压缩由 [`task`] 中的维护任务负责.

use anyhow::{Context, Result};
use chrono::{Datelike, Local, Timelike};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing_subscriber::{
    EnvFilter, Registry,
    fmt::{self, FormatEvent, FormatFields, format::Writer},
    layer::{Layer, SubscriberExt},
    registry::LookupSpan,
    util::SubscriberInitExt,
};

mod task;

/// 日志系统配置
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 文件输出级别 (如 "info", "debug")
    pub level: String,
    /// 日志目录
    pub directory: String,
    /// 日志文件名前缀
    pub file_prefix: String,
    /// 历史日志保留天数
    #[serde(default = "default_retention_days")]
    pub retention_days: i64,
    /// 是否把非当日日志压缩为 .gz
    #[serde(default = "default_true")]
    pub compress_history: bool,
    /// 维护任务的执行间隔 (秒)
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval_seconds: u64,
}

fn default_true() -> bool {
    true
}

fn default_retention_days() -> i64 {
    30
}

fn default_cleanup_interval() -> u64 {
    3600
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: "logs".to_string(),
            file_prefix: "heng".to_string(),
            retention_days: default_retention_days(),
            compress_history: default_true(),
            cleanup_interval_seconds: default_cleanup_interval(),
        }
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// 初始化日志系统并启动维护任务
///
/// 全局订阅器只能安装一次, 重复调用会失败; 需要在 tokio 运行时内
/// 调用, 维护任务挂在当前运行时上.
pub fn init(config: LoggingConfig) -> Result<()> {
    std::fs::create_dir_all(&config.directory)
        .with_context(|| format!("创建日志目录失败, path={}", config.directory))?;

    let file_appender = tracing_appender::rolling::RollingFileAppender::builder()
        .rotation(tracing_appender::rolling::Rotation::DAILY)
        .filename_prefix(config.file_prefix.as_str())
        .filename_suffix("log")
        .build(&config.directory)
        .context("创建日志文件写入器失败")?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    LOG_GUARD.set(guard).ok();

    let console_layer = fmt::Layer::default()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .event_format(LineFormatter { ansi: true })
        .with_filter(EnvFilter::new("debug"));

    // 文件级别以 HENG_LOG 环境变量优先, 其次落回配置
    let file_filter =
        EnvFilter::try_from_env("HENG_LOG").unwrap_or_else(|_| EnvFilter::new(&config.level));
    let file_layer = fmt::Layer::default()
        .with_writer(non_blocking)
        .with_ansi(false)
        .event_format(LineFormatter { ansi: false })
        .with_filter(file_filter);

    Registry::default()
        .with(console_layer)
        .with(file_layer)
        .init();

    task::spawn_maintenance_task(config);

    Ok(())
}

/// 单行日志格式: 时间戳 + 级别 + 消息, console 侧附带颜色
struct LineFormatter {
    ansi: bool,
}

impl LineFormatter {
    fn level_color(level: &tracing::Level) -> &'static str {
        match *level {
            tracing::Level::ERROR => "\x1b[31m",
            tracing::Level::WARN => "\x1b[33m",
            tracing::Level::INFO => "\x1b[32m",
            _ => "\x1b[34m",
        }
    }
}

impl<S, N> FormatEvent<S, N> for LineFormatter
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let now = Local::now();
        let level = event.metadata().level();
        write!(
            writer,
            "[{:02}-{:02} {:02}:{:02}:{:02}.{:03}] ",
            now.month(),
            now.day(),
            now.hour(),
            now.minute(),
            now.second(),
            now.timestamp_subsec_millis(),
        )?;
        if self.ansi {
            write!(writer, "{}{:5}\x1b[0m > ", Self::level_color(level), level)?;
        } else {
            write!(writer, "{:5} > ", level)?;
        }
        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
