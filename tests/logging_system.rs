//! 日志系统集成测试.

use chrono::Datelike;
use heng::logging::{init, LoggingConfig};
use std::fs;
use std::path::PathBuf;

// 注意: tracing 的全局订阅器只能安装一次,
// 涉及 init() 的测试必须单独运行, 统一用 #[ignore] 标记

/// 获取测试专用的日志目录
fn test_log_dir(test_name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("heng_test_logs_{test_name}"))
}

/// 清理测试日志目录
fn cleanup_test_logs(test_name: &str) {
    let log_dir = test_log_dir(test_name);
    if log_dir.exists() {
        let _ = fs::remove_dir_all(&log_dir);
    }
}

/// 获取当前日期的日志文件路径
fn today_log_path(test_name: &str, prefix: &str) -> PathBuf {
    let today = chrono::Local::now().date_naive();
    test_log_dir(test_name).join(format!("{}.{}.log", prefix, today.format("%Y-%m-%d")))
}

fn test_config(test_name: &str, level: &str, prefix: &str) -> LoggingConfig {
    LoggingConfig {
        level: level.to_string(),
        directory: test_log_dir(test_name).to_string_lossy().to_string(),
        file_prefix: prefix.to_string(),
        retention_days: 7,
        compress_history: false,
        cleanup_interval_seconds: 3600,
    }
}

#[tokio::test]
#[ignore] // 需要单独运行: cargo test --test logging_system test_logging_init_basic -- --ignored
async fn test_logging_init_basic() {
    let test_name = "init_basic";
    cleanup_test_logs(test_name);

    let result = init(test_config(test_name, "info", "heng-test"));
    assert!(result.is_ok(), "日志系统初始化应该成功");
    assert!(test_log_dir(test_name).exists(), "日志目录应该被创建");

    cleanup_test_logs(test_name);
}

#[tokio::test]
#[ignore] // 需要单独运行: cargo test --test logging_system test_logging_file_content -- --ignored
async fn test_logging_file_content() {
    let test_name = "file_content";
    cleanup_test_logs(test_name);

    init(test_config(test_name, "info", "heng-test")).expect("日志初始化失败");

    // 写入不同级别, info 过滤下 debug 不应落盘
    tracing::info!("协商开始_INFO_MSG");
    tracing::warn!("容器被跳过_WARN_MSG");
    tracing::debug!("候选明细_DEBUG_MSG");

    std::thread::sleep(std::time::Duration::from_millis(200));

    let log_file = today_log_path(test_name, "heng-test");
    let content = fs::read_to_string(&log_file)
        .unwrap_or_else(|e| panic!("读取日志文件失败: {:?}, 错误: {}", log_file, e));

    assert!(content.contains("协商开始_INFO_MSG"), "应该包含 info 日志");
    assert!(content.contains("容器被跳过_WARN_MSG"), "应该包含 warn 日志");
    assert!(
        !content.contains("候选明细_DEBUG_MSG"),
        "debug 日志应该被过滤掉"
    );
    assert!(content.contains("INFO"), "日志应该包含级别标记");

    cleanup_test_logs(test_name);
}

#[tokio::test]
#[ignore] // 需要单独运行: cargo test --test logging_system test_logging_directory_creation -- --ignored
async fn test_logging_directory_creation() {
    let test_name = "directory_creation";
    cleanup_test_logs(test_name);

    let nested = test_log_dir(test_name).join("nested").join("logs");
    assert!(!nested.exists(), "测试前日志目录不应该存在");

    let config = LoggingConfig {
        directory: nested.to_string_lossy().to_string(),
        ..test_config(test_name, "info", "dir-test")
    };
    init(config).expect("日志初始化失败");

    tracing::info!("测试目录创建");
    std::thread::sleep(std::time::Duration::from_millis(100));

    assert!(nested.exists(), "嵌套日志目录应该被创建");

    cleanup_test_logs(test_name);
}

#[test]
fn test_logging_file_naming_format() {
    // 只验证文件名约定, 不实际初始化
    let today = chrono::Local::now().date_naive();
    for prefix in ["heng", "heng-probe"] {
        let expected = format!("{}.{}.log", prefix, today.format("%Y-%m-%d"));
        assert!(expected.starts_with(prefix));
        assert!(expected.ends_with(".log"));
        assert!(
            expected.contains(&today.year().to_string()),
            "文件名应该包含年份"
        );
    }
}

#[test]
fn test_logging_config_defaults() {
    // 序列化侧只给必填字段, 其余应补默认值
    let config: LoggingConfig =
        serde_json::from_str(r#"{ "level": "info", "directory": "logs", "file_prefix": "heng" }"#)
            .expect("配置解析失败");

    assert_eq!(config.retention_days, 30, "默认保留天数应该是 30");
    assert!(config.compress_history, "默认应该开启压缩");
    assert_eq!(
        config.cleanup_interval_seconds, 3600,
        "默认清理间隔应该是 3600 秒"
    );
}
