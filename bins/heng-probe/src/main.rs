//! heng-probe - 能力协商探测工具
//!
//! 读取设备能力描述 (JSON), 在容器与编解码目录上枚举可播放配置,
//! 输出 `isTypeSupported` 就绪的协商识别串.

use clap::Parser;
use serde::Serialize;
use std::process;

use heng_codec::CodecDescriptor;
use heng_negotiate::{
    supported_configurations, DeviceDescription, MediaProfile, StreamRequirements,
};

/// Heng 能力协商探测工具
#[derive(Parser, Debug)]
#[command(name = "heng-probe", version, about = "纯 Rust 媒体能力协商探测工具")]
struct Cli {
    /// 设备能力描述文件 (JSON)
    device: Option<String>,

    /// 结果需要视频轨
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    video: bool,

    /// 结果需要音频轨
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    audio: bool,

    /// 输出 JSON 格式
    #[arg(long)]
    json: bool,

    /// 静默模式 (只输出识别串)
    #[arg(short, long)]
    quiet: bool,
}

// ============================================================
// JSON 输出结构体
// ============================================================

/// 完整协商结果
#[derive(Serialize)]
struct NegotiationOutput {
    device: String,
    requirements: RequirementsInfo,
    configurations: Vec<ConfigurationInfo>,
}

/// 本次协商的轨道需求
#[derive(Serialize)]
struct RequirementsInfo {
    video: bool,
    audio: bool,
}

/// 单条可播放配置
#[derive(Serialize)]
struct ConfigurationInfo {
    container: String,
    mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    video: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    audio: Option<String>,
    identifier: String,
}

// ============================================================
// 主逻辑
// ============================================================

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let Some(device_path) = cli.device.as_ref() else {
        print_banner();
        return;
    };

    if !cli.quiet {
        eprintln!(
            "heng-probe 版本 {} -- 纯 Rust 能力协商探测工具",
            env!("CARGO_PKG_VERSION")
        );
        eprintln!("设备描述: {device_path}");
    }

    // 读取并解析设备描述
    let raw = match std::fs::read_to_string(device_path) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("错误: 无法读取设备描述 '{device_path}': {e}");
            process::exit(1);
        }
    };
    let device: DeviceDescription = match serde_json::from_str(&raw) {
        Ok(device) => device,
        Err(e) => {
            eprintln!("错误: 设备描述不是合法的 JSON: {e}");
            process::exit(1);
        }
    };
    log::debug!(
        "设备描述加载完成: 容器 {} 项, 视频 {} 项, 音频 {} 项",
        device.containers.len(),
        device.video.len(),
        device.audio.len()
    );

    // 枚举可播放配置
    let requirements = StreamRequirements {
        video: cli.video,
        audio: cli.audio,
    };
    let profiles = match supported_configurations(&device, requirements) {
        Ok(profiles) => profiles,
        Err(e) => {
            eprintln!("错误: 能力协商失败: {e}");
            process::exit(1);
        }
    };

    // 输出结果
    if cli.json {
        let output = NegotiationOutput {
            device: device_path.clone(),
            requirements: RequirementsInfo {
                video: cli.video,
                audio: cli.audio,
            },
            configurations: profiles.iter().map(build_configuration_info).collect(),
        };
        let json = serde_json::to_string_pretty(&output).unwrap();
        println!("{json}");
    } else if cli.quiet {
        for profile in &profiles {
            println!("{}", profile.identifier());
        }
    } else {
        print_profiles_text(&profiles);
    }
}

/// 从 MediaProfile 构建 JSON 输出条目
fn build_configuration_info(profile: &MediaProfile) -> ConfigurationInfo {
    ConfigurationInfo {
        container: profile.container().name().to_string(),
        mime_type: profile.container().mime_type().to_string(),
        video: profile.video().map(|codec| codec.identifier_fragment()),
        audio: profile.audio().map(|codec| codec.identifier_fragment()),
        identifier: profile.identifier(),
    }
}

/// 文本输出: 逐条配置
fn print_profiles_text(profiles: &[MediaProfile]) {
    for (index, profile) in profiles.iter().enumerate() {
        println!("[PROFILE #{index}]");
        println!(
            "  容器         : {} ({})",
            profile.container().name(),
            profile.container().mime_type()
        );
        if let Some(video) = profile.video() {
            println!(
                "  视频         : {} ({})",
                video.identifier_fragment(),
                video.family()
            );
        }
        if let Some(audio) = profile.audio() {
            println!(
                "  音频         : {} ({})",
                audio.identifier_fragment(),
                audio.family()
            );
        }
        println!("  识别串       : {}", profile.identifier());
        println!("[/PROFILE]");
        println!();
    }
    println!("共 {} 个可播放配置", profiles.len());
}

/// 打印版本横幅
fn print_banner() {
    println!(
        "heng-probe 版本 {} -- 纯 Rust 能力协商探测工具",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("用法: heng-probe [选项] <设备描述.json>");
    println!();
    println!("设备描述是一份允许清单, 形如:");
    println!("  {{");
    println!("    \"containers\": [\"mp4\", \"webm\"],");
    println!("    \"video\": [{{ \"family\": \"hevc\", \"profiles\": [\"main\"], \"max_level\": 5 }}],");
    println!("    \"audio\": [{{ \"family\": \"aac\" }}]");
    println!("  }}");
    println!();
    println!("选项:");
    println!("  --video <true|false>   结果需要视频轨 (默认 true)");
    println!("  --audio <true|false>   结果需要音频轨 (默认 true)");
    println!("  --json                 以 JSON 格式输出");
    println!("  -q, --quiet            静默模式, 只输出识别串");
    println!();
    println!("使用 --help 查看完整用法.");
}
