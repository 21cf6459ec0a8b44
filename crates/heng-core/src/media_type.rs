//! 媒体类型定义.
//!
//! 能力协商只区分视频与音频两种流, 不涉及字幕/数据流.

use std::fmt;

/// 媒体流类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// 视频流
    Video,
    /// 音频流
    Audio,
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Video => "视频",
            Self::Audio => "音频",
        };
        write!(f, "{name}")
    }
}
