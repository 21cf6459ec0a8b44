//! 设备能力边界.
//!
//! 对标 Cast 接收端的 `canDisplayType` / MSE 的 `isTypeSupported`:
//! 枚举器对每个候选逐项询问, 自己不保存任何设备知识.

use heng_codec::{AudioFamily, Profile, VideoFamily};
use heng_format::ContainerId;

/// 设备能力查询接口
///
/// 协商期间唯一的外部协作者. 实现必须只读, 同步, 无副作用;
/// 一次枚举内同样的询问必须得到同样的回答, 结果列表的确定性
/// 依赖这一点.
pub trait DeviceCapabilities {
    /// 设备能否处理该容器
    fn supports_container(&self, id: ContainerId) -> bool;

    /// 设备能否解码该视频 (家族, profile, level) 组合
    fn supports_video(&self, family: VideoFamily, profile: &Profile, level: u8) -> bool;

    /// 设备能否解码该音频 (家族, profile) 组合
    fn supports_audio(&self, family: AudioFamily, profile: &Profile) -> bool;
}
