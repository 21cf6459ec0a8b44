//! 容器目录: 容器与编解码家族的合法搭配.
//!
//! 目录是编译期数据表, 条目顺序即协商时的偏好顺序, 不做运行时注册.

use heng_codec::{AudioFamily, VideoFamily};

use crate::container_id::ContainerId;

/// 容器目录条目
///
/// 描述一个容器允许承载的视频/音频家族. 任一列表为空表示该容器
/// 不承载对应类型的轨道.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Container {
    /// 容器标识
    pub id: ContainerId,
    /// 允许的视频家族 (偏好顺序)
    pub video_families: &'static [VideoFamily],
    /// 允许的音频家族 (偏好顺序)
    pub audio_families: &'static [AudioFamily],
}

impl Container {
    /// 容器是否承载视频轨
    pub const fn carries_video(&self) -> bool {
        !self.video_families.is_empty()
    }

    /// 容器是否承载音频轨
    pub const fn carries_audio(&self) -> bool {
        !self.audio_families.is_empty()
    }

    /// 按标识查找目录条目
    pub fn get(id: ContainerId) -> Option<&'static Container> {
        CATALOG.iter().find(|c| c.id == id)
    }
}

/// 容器目录, 条目顺序即偏好顺序
pub const CATALOG: &[Container] = &[
    Container {
        id: ContainerId::Mp4,
        video_families: &[VideoFamily::Hevc, VideoFamily::Vp9],
        audio_families: &[AudioFamily::Aac, AudioFamily::Eac3, AudioFamily::Ac3],
    },
    Container {
        id: ContainerId::Webm,
        video_families: &[VideoFamily::Vp9],
        audio_families: &[AudioFamily::Opus],
    },
    Container {
        id: ContainerId::MpegTs,
        video_families: &[VideoFamily::Hevc],
        audio_families: &[],
    },
    Container {
        id: ContainerId::Mp4Audio,
        video_families: &[],
        audio_families: &[AudioFamily::Aac, AudioFamily::Eac3],
    },
];
