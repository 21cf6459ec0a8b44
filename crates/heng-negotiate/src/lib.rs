//! # heng-negotiate
//!
//! 协商枚举器: 在容器目录与编解码家族目录上展开候选组合, 请注入的
//! 设备能力接口逐项审批, 产出可直接喂给 MSE `isTypeSupported` /
//! Cast `canDisplayType` 类接口的媒体配置列表.

pub mod capabilities;
#[cfg(feature = "serde")]
pub mod description;
pub mod enumerate;
pub mod media_profile;

pub use capabilities::DeviceCapabilities;
#[cfg(feature = "serde")]
pub use description::{AudioSupport, DeviceDescription, VideoSupport};
pub use enumerate::{supported_configurations, StreamRequirements};
pub use media_profile::MediaProfile;
