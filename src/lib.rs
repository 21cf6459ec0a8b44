//! # Heng (衡)
//!
//! 纯 Rust 实现的媒体播放能力协商库, 对标 MSE `isTypeSupported` /
//! Cast 接收端 `canDisplayType` 的查询侧.
//!
//! Heng 把设备能力协商拆成三份静态目录和一个枚举器:
//! - **编解码目录**: 视频 (HEVC, VP9) 与音频 (AAC, E-AC-3, AC-3, Opus)
//!   家族各自合法的 profile 与 level
//! - **容器目录**: 每种容器 (MP4, WebM, TS...) 允许承载的家族
//! - **枚举器**: 在目录上展开候选, 请注入的设备能力接口逐项审批,
//!   产出 `video/mp4; codecs="hev1.1.0.L150.B0, mp4a.40.2"` 这样的
//!   识别串列表
//!
//! # 快速开始
//!
//! ```rust
//! use heng::negotiate::{DeviceDescription, StreamRequirements, VideoSupport};
//!
//! // 一台只认 MP4 + HEVC 的设备
//! let device = DeviceDescription {
//!     containers: vec!["mp4".into()],
//!     video: vec![VideoSupport {
//!         family: "hevc".into(),
//!         profiles: vec!["main".into()],
//!         max_level: Some(5),
//!     }],
//!     ..Default::default()
//! };
//!
//! let identifiers =
//!     heng::negotiation_strings(&device, StreamRequirements::VIDEO_ONLY).unwrap();
//! assert!(identifiers.contains(&"video/mp4; codecs=\"hev1.1.0.L150.B0\"".to_string()));
//! ```
//!
//! # Crate 结构
//!
//! | Crate | 功能 |
//! |-------|------|
//! | `heng-core` | 统一错误与基础类型 |
//! | `heng-codec` | 编解码家族目录与识别串片段 |
//! | `heng-format` | 容器目录 |
//! | `heng-negotiate` | 设备能力边界与枚举器 |

/// 统一错误与基础类型
pub use heng_core as core;

/// 编解码家族目录与识别串片段
pub use heng_codec as codec;

/// 容器目录
pub use heng_format as format;

/// 设备能力边界与枚举器
pub use heng_negotiate as negotiate;

pub mod logging;

use heng_core::HengResult;
use heng_negotiate::{supported_configurations, DeviceCapabilities, StreamRequirements};

/// 获取 Heng 版本号
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// 一步完成协商: 枚举设备可播放的配置并渲染成识别串列表
///
/// 列表顺序即偏好顺序, 空列表表示设备与目录没有任何交集.
pub fn negotiation_strings(
    device: &dyn DeviceCapabilities,
    requirements: StreamRequirements,
) -> HengResult<Vec<String>> {
    let profiles = supported_configurations(device, requirements)?;
    Ok(profiles.iter().map(|profile| profile.identifier()).collect())
}
