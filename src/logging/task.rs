//! 日志维护任务: 历史日志的保留期清理与 gzip 压缩.
//!
//! 文件本身的按日翻滚由 tracing-appender 完成, 本任务只按固定间隔
//! 扫描日志目录.

use super::LoggingConfig;
use anyhow::{Context, Result};
use chrono::{Duration as ChronoDuration, Local, NaiveDate};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{error, warn};

pub(super) fn spawn_maintenance_task(config: LoggingConfig) {
    tokio::spawn(async move {
        let seconds = config.cleanup_interval_seconds.max(1);
        let mut ticker = tokio::time::interval(Duration::from_secs(seconds));
        loop {
            // 首次 tick 立即完成, 启动时就做一轮清理
            ticker.tick().await;
            if let Err(err) = cleanup_logs(&config) {
                error!("日志维护失败: {}", err);
            }
        }
    });
}

/// 翻滚产出的日志文件名解析结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RotatedLog {
    date: NaiveDate,
    compressed: bool,
}

/// 扫描日志目录: 超过保留期的删除, 非当日且未压缩的按需压缩
fn cleanup_logs(config: &LoggingConfig) -> Result<()> {
    let directory = Path::new(&config.directory);
    if !directory.exists() {
        return Ok(());
    }

    let today = Local::now().date_naive();
    let cutoff = today - ChronoDuration::days(config.retention_days);

    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        let Some(rotated) = parse_rotated_log_name(&name, &config.file_prefix) else {
            continue;
        };

        if rotated.date < cutoff {
            if let Err(err) = fs::remove_file(entry.path()) {
                warn!("删除过期日志失败: {} ({})", name, err);
            }
        } else if config.compress_history && !rotated.compressed && rotated.date < today {
            if let Err(err) = compress_log(&entry.path()) {
                warn!("压缩历史日志失败: {} ({})", name, err);
            }
        }
    }

    Ok(())
}

/// 把日志压缩为同名 .gz 并删除原文件, 目标已存在时跳过
fn compress_log(path: &Path) -> Result<()> {
    let gz_path = PathBuf::from(format!("{}.gz", path.display()));
    if gz_path.exists() {
        return Ok(());
    }

    let mut input = File::open(path)
        .with_context(|| format!("打开待压缩日志失败, path={}", path.display()))?;
    let output = File::create(&gz_path)
        .with_context(|| format!("创建压缩日志失败, path={}", gz_path.display()))?;
    let mut encoder = GzEncoder::new(output, Compression::default());
    std::io::copy(&mut input, &mut encoder)?;
    encoder.finish()?;

    fs::remove_file(path)
        .with_context(|| format!("删除已压缩日志失败, path={}", path.display()))?;
    Ok(())
}

/// 解析 `{prefix}.{YYYY-MM-DD}.log[.gz]` 形式的文件名
fn parse_rotated_log_name(file_name: &str, prefix: &str) -> Option<RotatedLog> {
    let rest = file_name.strip_prefix(prefix)?.strip_prefix('.')?;
    let (date_part, compressed) = if let Some(stem) = rest.strip_suffix(".log.gz") {
        (stem, true)
    } else if let Some(stem) = rest.strip_suffix(".log") {
        (stem, false)
    } else {
        return None;
    };
    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()?;
    Some(RotatedLog { date, compressed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_config(directory: &Path, compress: bool) -> LoggingConfig {
        LoggingConfig {
            level: "info".to_string(),
            directory: directory.to_string_lossy().to_string(),
            file_prefix: "heng".to_string(),
            retention_days: 30,
            compress_history: compress,
            cleanup_interval_seconds: 3600,
        }
    }

    fn log_name(date: NaiveDate) -> String {
        format!("heng.{}.log", date.format("%Y-%m-%d"))
    }

    #[test]
    fn test_parse_rotated_log_name() {
        let parsed = parse_rotated_log_name("heng.2026-02-06.log", "heng");
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2026, 2, 6).map(|date| RotatedLog {
                date,
                compressed: false
            })
        );

        let parsed = parse_rotated_log_name("heng.2026-02-06.log.gz", "heng");
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2026, 2, 6).map(|date| RotatedLog {
                date,
                compressed: true
            })
        );

        // 前缀不符 / 没有日期段的文件名不参与维护
        assert!(parse_rotated_log_name("other.2026-02-06.log", "heng").is_none());
        assert!(parse_rotated_log_name("heng.log", "heng").is_none());
        assert!(parse_rotated_log_name("heng.not-a-date.log", "heng").is_none());
    }

    #[test]
    fn test_cleanup_过期删除_历史压缩_当日不动() {
        let temp_dir = TempDir::new().expect("创建临时目录失败");
        let today = Local::now().date_naive();
        let yesterday = today - ChronoDuration::days(1);
        let expired = NaiveDate::from_ymd_opt(2020, 1, 1).expect("测试日期初始化失败");

        let expired_path = temp_dir.path().join(log_name(expired));
        let yesterday_path = temp_dir.path().join(log_name(yesterday));
        let today_path = temp_dir.path().join(log_name(today));
        fs::write(&expired_path, "旧日志").unwrap();
        fs::write(&yesterday_path, "昨日日志").unwrap();
        fs::write(&today_path, "当日日志").unwrap();

        let config = test_config(temp_dir.path(), true);
        cleanup_logs(&config).expect("清理日志失败");

        assert!(!expired_path.exists(), "过期日志应该被删除");
        assert!(!yesterday_path.exists(), "昨日日志应该被压缩后删除原文件");
        assert!(
            yesterday_path.with_extension("log.gz").exists(),
            "昨日日志应该留下 .gz"
        );
        assert!(today_path.exists(), "当日日志不应被触碰");
        assert!(!today_path.with_extension("log.gz").exists());
    }

    #[test]
    fn test_cleanup_关闭压缩时保留原文件() {
        let temp_dir = TempDir::new().expect("创建临时目录失败");
        let yesterday = Local::now().date_naive() - ChronoDuration::days(1);
        let yesterday_path = temp_dir.path().join(log_name(yesterday));
        fs::write(&yesterday_path, "昨日日志").unwrap();

        let config = test_config(temp_dir.path(), false);
        cleanup_logs(&config).expect("清理日志失败");

        assert!(yesterday_path.exists());
        assert!(!yesterday_path.with_extension("log.gz").exists());
    }

    #[test]
    fn test_cleanup_目录不存在时静默返回() {
        let config = test_config(Path::new("data/tmp/不存在的目录"), true);
        assert!(cleanup_logs(&config).is_ok());
    }
}
