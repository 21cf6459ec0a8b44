//! 编码 profile 定义.
//!
//! profile 是一组不可变的命名编码参数, 每个编解码家族在编译期声明
//! 自己封闭的 profile 目录. profile 的同一性按结构相等判定, 不使用
//! 独立的 id 字段.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// 承载特性掩码, 每个位代表一种设备侧能力
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ProfileTraits: u8 {
        /// 支持环绕声 (多声道) 输出
        const SURROUND    = 1 << 0;
        /// 支持比特流直通 (交由功放/电视解码)
        const PASSTHROUGH = 1 << 1;
    }
}

/// 编码 profile
///
/// 一个家族变体的参数集合. 视频 profile 携带约束位与位深标志,
/// 音频 profile 的 `flag` 直接就是完整识别串片段.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Profile {
    /// 稳定查找名 (serde/CLI 边界使用), 家族内唯一
    pub name: &'static str,
    /// 标志串: 视频为层级字母 (如 "L"), 音频为完整识别串 (如 "mp4a.40.2")
    pub flag: &'static str,
    /// 数值约束位 (HEVC 式识别串的第三段)
    pub constraint_flag: Option<u8>,
    /// 位深 (bit)
    pub bit_depth: Option<u8>,
    /// 位深标志串 (按家族规则拼入识别串)
    pub bit_depth_flag: Option<&'static str>,
    /// 承载特性 (环绕声/直通)
    pub traits: ProfileTraits,
}

impl Profile {
    /// 是否支持环绕声
    pub const fn supports_surround(&self) -> bool {
        self.traits.contains(ProfileTraits::SURROUND)
    }

    /// 是否支持比特流直通
    pub const fn passthrough_supported(&self) -> bool {
        self.traits.contains(ProfileTraits::PASSTHROUGH)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
