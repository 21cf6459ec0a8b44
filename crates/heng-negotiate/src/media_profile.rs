//! 媒体配置与协商识别串.

use std::fmt;

use heng_codec::{AudioCodec, CodecDescriptor, VideoCodec};
use heng_core::{HengError, HengResult};
use heng_format::ContainerId;

/// 一条可播放的媒体配置
///
/// 容器 + 可选视频编解码器 + 可选音频编解码器. 构造保证至少有
/// 一个编解码器在场, 不存在空配置.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaProfile {
    container: ContainerId,
    video: Option<VideoCodec>,
    audio: Option<AudioCodec>,
}

impl MediaProfile {
    /// 构造媒体配置
    ///
    /// # 错误
    /// - `HengError::EmptyMediaProfile`: 视频与音频均缺席
    pub fn new(
        container: ContainerId,
        video: Option<VideoCodec>,
        audio: Option<AudioCodec>,
    ) -> HengResult<Self> {
        if video.is_none() && audio.is_none() {
            return Err(HengError::EmptyMediaProfile);
        }
        Ok(Self {
            container,
            video,
            audio,
        })
    }

    /// 获取容器标识
    pub const fn container(&self) -> ContainerId {
        self.container
    }

    /// 获取视频编解码器 (纯音频配置为 `None`)
    pub const fn video(&self) -> Option<VideoCodec> {
        self.video
    }

    /// 获取音频编解码器 (纯视频配置为 `None`)
    pub const fn audio(&self) -> Option<AudioCodec> {
        self.audio
    }

    /// 生成协商识别串
    ///
    /// 形如 `video/mp4; codecs="hev1.1.0.L150.B0, mp4a.40.2"`:
    /// 视频片段在前, 两者都在场时以 `", "` 分隔. 输出逐字节确定,
    /// 可直接喂给 `isTypeSupported` 类接口.
    pub fn identifier(&self) -> String {
        let mut fragments: Vec<String> = Vec::with_capacity(2);
        if let Some(video) = &self.video {
            fragments.push(video.identifier_fragment());
        }
        if let Some(audio) = &self.audio {
            fragments.push(audio.identifier_fragment());
        }
        format!(
            "{}; codecs=\"{}\"",
            self.container.mime_type(),
            fragments.join(", ")
        )
    }
}

impl fmt::Display for MediaProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}
