//! 表驱动的设备能力描述.
//!
//! 以允许清单声明设备能力, 可从 JSON 反序列化, 供 CLI 与集成测试
//! 使用. 清单里的未知名称不是错误, 只是永远匹配不到目录条目.

use serde::{Deserialize, Serialize};

use heng_codec::{AudioFamily, Profile, VideoFamily};
use heng_format::ContainerId;

use crate::capabilities::DeviceCapabilities;

/// 视频能力条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSupport {
    /// 家族名称, 如 "hevc"
    pub family: String,
    /// 允许的 profile 名称, 为空表示家族目录内全部
    #[serde(default)]
    pub profiles: Vec<String>,
    /// 允许的最高 level, 省略表示不设上限
    #[serde(default)]
    pub max_level: Option<u8>,
}

/// 音频能力条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioSupport {
    /// 家族名称, 如 "aac"
    pub family: String,
    /// 允许的 profile 名称, 为空表示家族目录内全部
    #[serde(default)]
    pub profiles: Vec<String>,
}

/// 设备能力描述
///
/// `Default` 即一无所支持的设备.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceDescription {
    /// 支持的容器名称
    #[serde(default)]
    pub containers: Vec<String>,
    /// 视频能力条目
    #[serde(default)]
    pub video: Vec<VideoSupport>,
    /// 音频能力条目
    #[serde(default)]
    pub audio: Vec<AudioSupport>,
}

impl DeviceCapabilities for DeviceDescription {
    fn supports_container(&self, id: ContainerId) -> bool {
        self.containers
            .iter()
            .any(|name| name.eq_ignore_ascii_case(id.name()))
    }

    fn supports_video(&self, family: VideoFamily, profile: &Profile, level: u8) -> bool {
        self.video.iter().any(|entry| {
            entry.family.eq_ignore_ascii_case(family.name())
                && (entry.profiles.is_empty()
                    || entry
                        .profiles
                        .iter()
                        .any(|name| name.eq_ignore_ascii_case(profile.name)))
                && entry.max_level.is_none_or(|max| level <= max)
        })
    }

    fn supports_audio(&self, family: AudioFamily, profile: &Profile) -> bool {
        self.audio.iter().any(|entry| {
            entry.family.eq_ignore_ascii_case(family.name())
                && (entry.profiles.is_empty()
                    || entry
                        .profiles
                        .iter()
                        .any(|name| name.eq_ignore_ascii_case(profile.name)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heng_codec::audio::{AAC_HE, AAC_LC, EAC3_DDP, OPUS_DEFAULT};
    use heng_codec::video::{HEVC_MAIN, HEVC_MAIN_10, VP9_PROFILE_0};

    #[test]
    fn test_json_反序列化() {
        let json = r#"{
            "containers": ["mp4", "webm"],
            "video": [
                { "family": "hevc", "profiles": ["main"], "max_level": 5 },
                { "family": "vp9" }
            ],
            "audio": [
                { "family": "aac", "profiles": ["lc"] }
            ]
        }"#;
        let device: DeviceDescription = serde_json::from_str(json).unwrap();
        assert_eq!(device.containers.len(), 2);
        assert_eq!(device.video[1].profiles, Vec::<String>::new());
        assert_eq!(device.video[1].max_level, None);
    }

    #[test]
    fn test_容器允许清单() {
        let device = DeviceDescription {
            containers: vec!["MP4".into(), "mpegts".into()],
            ..Default::default()
        };
        assert!(device.supports_container(ContainerId::Mp4));
        assert!(device.supports_container(ContainerId::MpegTs));
        assert!(!device.supports_container(ContainerId::Webm));
    }

    #[test]
    fn test_视频条目_profile与level过滤() {
        let device = DeviceDescription {
            video: vec![VideoSupport {
                family: "hevc".into(),
                profiles: vec!["main".into()],
                max_level: Some(4),
            }],
            ..Default::default()
        };
        assert!(device.supports_video(VideoFamily::Hevc, &HEVC_MAIN, 4));
        // level 超过上限
        assert!(!device.supports_video(VideoFamily::Hevc, &HEVC_MAIN, 5));
        // profile 不在允许清单
        assert!(!device.supports_video(VideoFamily::Hevc, &HEVC_MAIN_10, 4));
        // 家族不在清单
        assert!(!device.supports_video(VideoFamily::Vp9, &VP9_PROFILE_0, 4));
    }

    #[test]
    fn test_空profile清单_放行全家族() {
        let device = DeviceDescription {
            audio: vec![AudioSupport {
                family: "aac".into(),
                profiles: vec![],
            }],
            ..Default::default()
        };
        assert!(device.supports_audio(AudioFamily::Aac, &AAC_LC));
        assert!(device.supports_audio(AudioFamily::Aac, &AAC_HE));
        assert!(!device.supports_audio(AudioFamily::Eac3, &EAC3_DDP));
    }

    #[test]
    fn test_未知名称_永远不匹配() {
        let device = DeviceDescription {
            containers: vec!["mkv".into()],
            video: vec![VideoSupport {
                family: "av1".into(),
                profiles: vec![],
                max_level: None,
            }],
            audio: vec![AudioSupport {
                family: "opus".into(),
                profiles: vec!["stereo".into()],
            }],
            ..Default::default()
        };
        for id in ContainerId::ALL {
            assert!(!device.supports_container(*id));
        }
        assert!(!device.supports_video(VideoFamily::Hevc, &HEVC_MAIN, 4));
        // 家族存在但 profile 名不存在
        assert!(!device.supports_audio(AudioFamily::Opus, &OPUS_DEFAULT));
    }
}
