//! 容器格式标识符.
//!
//! 对标 MSE `isTypeSupported` 查询串里的 MIME 主体部分.

use std::fmt;

/// 容器格式标识符
///
/// 标识一种可协商的封装容器, 每个变体对应一个固定的 MIME 文本.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ContainerId {
    // ========================
    // 音视频容器
    // ========================
    /// MPEG-4 Part 14 (MP4)
    Mp4,
    /// WebM (Matroska 子集)
    Webm,

    // ========================
    // 单轨容器
    // ========================
    /// MPEG Transport Stream (仅视频轨)
    MpegTs,
    /// MP4 纯音频形态 (audio/mp4)
    Mp4Audio,
}

impl ContainerId {
    /// 获取容器的人类可读名称
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mp4 => "mp4",
            Self::Webm => "webm",
            Self::MpegTs => "mpegts",
            Self::Mp4Audio => "mp4audio",
        }
    }

    /// 获取容器在识别串中使用的 MIME 文本
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp4 => "video/mp4",
            Self::Webm => "video/webm",
            Self::MpegTs => "video/mp2t",
            Self::Mp4Audio => "audio/mp4",
        }
    }
}

impl ContainerId {
    /// 所有已知容器标识的列表
    pub const ALL: &[ContainerId] = &[Self::Mp4, Self::Webm, Self::MpegTs, Self::Mp4Audio];

    /// 按名称查找容器标识 (大小写不敏感)
    pub fn from_name(name: &str) -> Option<ContainerId> {
        Self::ALL
            .iter()
            .find(|id| id.name().eq_ignore_ascii_case(name))
            .copied()
    }

    /// 按 MIME 文本查找容器标识
    pub fn from_mime_type(mime: &str) -> Option<ContainerId> {
        Self::ALL
            .iter()
            .find(|id| id.mime_type().eq_ignore_ascii_case(mime))
            .copied()
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
