//! 协商枚举器.
//!
//! 在容器目录上展开全部候选组合, 请设备逐项审批, 产出识别串就绪的
//! [`MediaProfile`] 列表. 设备拒绝是正常过滤, 不产生错误; 空列表是
//! 合法结果.

use heng_codec::{AudioCodec, AudioFamily, Profile, VideoCodec, VideoFamily};
use heng_core::HengResult;
use heng_format::{Container, CATALOG};

use crate::capabilities::DeviceCapabilities;
use crate::media_profile::MediaProfile;

/// 本次协商需要哪些轨道
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StreamRequirements {
    /// 结果必须包含视频编解码器
    pub video: bool,
    /// 结果必须包含音频编解码器
    pub audio: bool,
}

impl StreamRequirements {
    /// 音视频组合播放
    pub const AUDIO_VIDEO: StreamRequirements = StreamRequirements {
        video: true,
        audio: true,
    };
    /// 纯视频播放
    pub const VIDEO_ONLY: StreamRequirements = StreamRequirements {
        video: true,
        audio: false,
    };
    /// 纯音频播放
    pub const AUDIO_ONLY: StreamRequirements = StreamRequirements {
        video: false,
        audio: true,
    };
    /// 什么都不要 (枚举结果恒为空)
    pub const NONE: StreamRequirements = StreamRequirements {
        video: false,
        audio: false,
    };
}

/// 设备认可的视频候选 (家族, profile, level)
type VideoCandidate = (VideoFamily, Profile, u8);

/// 设备认可的音频候选 (家族, profile)
type AudioCandidate = (AudioFamily, Profile);

/// 枚举设备可播放的媒体配置
///
/// 按容器目录声明顺序逐容器处理: 先批量拿到设备对该容器全部
/// (家族, profile, level) 候选的回答, 再做组合展开, 展开阶段不再
/// 询问设备. 结果顺序由目录顺序决定, 同样的设备回答得到同样的
/// 列表.
///
/// 组合需求只由同时承载音视频两类轨道的容器满足; 两个需求位都
/// 未置位时直接返回空列表 (空配置无法构造).
pub fn supported_configurations(
    device: &dyn DeviceCapabilities,
    requirements: StreamRequirements,
) -> HengResult<Vec<MediaProfile>> {
    if !requirements.video && !requirements.audio {
        return Ok(Vec::new());
    }

    let mut profiles = Vec::new();
    for container in CATALOG {
        if !device.supports_container(container.id) {
            log::debug!("容器 {} 未通过设备能力检查, 跳过", container.id);
            continue;
        }
        if requirements.video
            && requirements.audio
            && !(container.carries_video() && container.carries_audio())
        {
            log::debug!("容器 {} 不同时承载音视频, 组合需求下跳过", container.id);
            continue;
        }

        // 先批量审批, 后组合展开
        let video_candidates = if requirements.video {
            approved_video(device, container)
        } else {
            Vec::new()
        };
        let audio_candidates = if requirements.audio {
            approved_audio(device, container)
        } else {
            Vec::new()
        };

        let before = profiles.len();
        if requirements.video && requirements.audio {
            for &(family, profile, level) in &video_candidates {
                let video = VideoCodec::new(family, &profile, level)?;
                for &(audio_family, audio_profile) in &audio_candidates {
                    let audio = AudioCodec::new(audio_family, &audio_profile)?;
                    profiles.push(MediaProfile::new(container.id, Some(video), Some(audio))?);
                }
            }
        } else if requirements.video {
            for &(family, profile, level) in &video_candidates {
                let video = VideoCodec::new(family, &profile, level)?;
                profiles.push(MediaProfile::new(container.id, Some(video), None)?);
            }
        } else {
            for &(family, profile) in &audio_candidates {
                let audio = AudioCodec::new(family, &profile)?;
                profiles.push(MediaProfile::new(container.id, None, Some(audio))?);
            }
        }
        log::debug!("容器 {} 产出 {} 个候选配置", container.id, profiles.len() - before);
    }
    Ok(profiles)
}

/// 批量收集设备认可的视频候选
///
/// 遍历顺序: 家族按容器目录顺序, 家族内 level 在外层, profile 在
/// 内层, 均按家族目录顺序. 这个顺序直接决定结果列表的排序.
fn approved_video(device: &dyn DeviceCapabilities, container: &Container) -> Vec<VideoCandidate> {
    let mut approved = Vec::new();
    for &family in container.video_families {
        for &level in family.available_levels() {
            for profile in family.available_profiles() {
                if device.supports_video(family, profile, level) {
                    approved.push((family, *profile, level));
                }
            }
        }
    }
    approved
}

/// 批量收集设备认可的音频候选
fn approved_audio(device: &dyn DeviceCapabilities, container: &Container) -> Vec<AudioCandidate> {
    let mut approved = Vec::new();
    for &family in container.audio_families {
        for profile in family.available_profiles() {
            if device.supports_audio(family, profile) {
                approved.push((family, *profile));
            }
        }
    }
    approved
}
