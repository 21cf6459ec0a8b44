//! 视频编解码家族目录与识别串片段生成.
//!
//! 每个家族是封闭的数据表: profile 目录 + level 目录 + 一条片段拼装
//! 规则. 新增家族 = 新增一张数据表和一个枚举分支, 不做运行时注册.

use heng_core::{HengError, HengResult, MediaType};
use std::fmt;

use crate::descriptor::CodecDescriptor;
use crate::profile::{Profile, ProfileTraits};

// ========================
// HEVC 家族目录
// ========================

/// HEVC 识别串家族标签
pub const HEVC_TAG: &str = "hev1";
/// HEVC 识别串固定子标签 (profile space + idc 段)
pub const HEVC_SUB_TAG: &str = "1";
/// HEVC 识别串固定兼容尾段
pub const HEVC_COMPAT_TAG: &str = "B0";

/// HEVC main profile (8-bit)
pub const HEVC_MAIN: Profile = Profile {
    name: "main",
    flag: "L",
    constraint_flag: Some(0),
    bit_depth: None,
    bit_depth_flag: None,
    traits: ProfileTraits::empty(),
};

/// HEVC main10 profile (10-bit)
pub const HEVC_MAIN_10: Profile = Profile {
    name: "main10",
    flag: "L",
    constraint_flag: Some(2),
    bit_depth: Some(10),
    bit_depth_flag: None,
    traits: ProfileTraits::empty(),
};

/// HEVC profile 目录
pub const HEVC_PROFILES: &[Profile] = &[HEVC_MAIN, HEVC_MAIN_10];

/// HEVC level 目录
///
/// level 以 10 为单位存储: 5 代表 level 5.0. 识别串中的 level_idc
/// 按 `level * 30` 换算 (level 5.0 → L150).
pub const HEVC_LEVELS: &[u8] = &[4, 5];

// ========================
// VP9 家族目录
// ========================

/// VP9 识别串家族标签
pub const VP9_TAG: &str = "vp09";

/// VP9 profile 0 (8-bit, 4:2:0)
pub const VP9_PROFILE_0: Profile = Profile {
    name: "profile0",
    flag: "00",
    constraint_flag: None,
    bit_depth: Some(8),
    bit_depth_flag: Some("08"),
    traits: ProfileTraits::empty(),
};

/// VP9 profile 2 (10-bit, 4:2:0)
pub const VP9_PROFILE_2: Profile = Profile {
    name: "profile2",
    flag: "02",
    constraint_flag: None,
    bit_depth: Some(10),
    bit_depth_flag: Some("10"),
    traits: ProfileTraits::empty(),
};

/// VP9 profile 目录
pub const VP9_PROFILES: &[Profile] = &[VP9_PROFILE_0, VP9_PROFILE_2];

/// VP9 level 目录 (与 HEVC 同样以 10 为单位: 5 代表 level 5.0)
pub const VP9_LEVELS: &[u8] = &[4, 5];

/// 视频编解码家族
///
/// 家族集合封闭, 每个变体对应一张编译期目录表.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum VideoFamily {
    /// H.265 / HEVC
    Hevc,
    /// VP9
    Vp9,
}

impl VideoFamily {
    /// 所有视频家族的列表
    pub const ALL: &[VideoFamily] = &[Self::Hevc, Self::Vp9];

    /// 获取家族名称
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Hevc => "hevc",
            Self::Vp9 => "vp9",
        }
    }

    /// 获取家族对应的媒体类型
    pub const fn media_type(&self) -> MediaType {
        MediaType::Video
    }

    /// 按名称查找家族 (大小写不敏感)
    pub fn from_name(name: &str) -> Option<VideoFamily> {
        Self::ALL
            .iter()
            .find(|family| family.name().eq_ignore_ascii_case(name))
            .copied()
    }

    /// 本家族的 profile 目录
    pub const fn available_profiles(&self) -> &'static [Profile] {
        match self {
            Self::Hevc => HEVC_PROFILES,
            Self::Vp9 => VP9_PROFILES,
        }
    }

    /// 本家族的 level 目录
    pub const fn available_levels(&self) -> &'static [u8] {
        match self {
            Self::Hevc => HEVC_LEVELS,
            Self::Vp9 => VP9_LEVELS,
        }
    }

    /// 判断 profile 是否属于本家族目录 (结构相等)
    ///
    /// 这是构造 [`VideoCodec`] 的唯一准入检查.
    pub fn has_profile(&self, candidate: &Profile) -> bool {
        self.available_profiles().iter().any(|p| p == candidate)
    }

    /// 判断 level 是否属于本家族目录
    pub fn has_level(&self, level: u8) -> bool {
        self.available_levels().contains(&level)
    }

    /// 按名称查找本家族的 profile
    pub fn profile_by_name(&self, name: &str) -> Option<&'static Profile> {
        self.available_profiles()
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for VideoFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 已配置的视频编解码器实例
///
/// 由枚举器按候选组合构造, 构造成功即保证 profile 与 level 均在家族
/// 目录之内, 不存在半配置状态; 生成识别串片段后即可丢弃.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VideoCodec {
    family: VideoFamily,
    profile: Profile,
    level: u8,
}

impl VideoCodec {
    /// 构造视频编解码器实例
    ///
    /// # 错误
    /// - `HengError::InvalidConfiguration`: profile 或 level 不在家族目录中
    pub fn new(family: VideoFamily, profile: &Profile, level: u8) -> HengResult<Self> {
        if !family.has_profile(profile) {
            return Err(HengError::InvalidConfiguration(format!(
                "profile {} 不在 {} 家族目录中",
                profile.name, family
            )));
        }
        if !family.has_level(level) {
            return Err(HengError::InvalidConfiguration(format!(
                "level {} 不在 {} 家族目录中",
                level, family
            )));
        }
        Ok(Self {
            family,
            profile: *profile,
            level,
        })
    }

    /// 获取所属家族
    pub const fn family(&self) -> VideoFamily {
        self.family
    }

    /// 获取生效的 profile
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    /// 获取生效的 level (以 10 为单位)
    pub const fn level(&self) -> u8 {
        self.level
    }
}

impl CodecDescriptor for VideoCodec {
    fn media_type(&self) -> MediaType {
        MediaType::Video
    }

    /// 生成视频识别串片段
    ///
    /// - HEVC: `hev1.1.<约束位>.<层级字母><level*30>.B0`, profile 若带
    ///   位深标志则追加在尾部 (目录内的 main/main10 均不带后缀).
    /// - VP9: 位置式 `vp09.<profile 位>.<level*10>.<位深位>`,
    ///   如 `vp09.00.50.08` (profile 0, level 5.0, 8-bit).
    fn identifier_fragment(&self) -> String {
        match self.family {
            VideoFamily::Hevc => {
                let constraint = self.profile.constraint_flag.unwrap_or(0);
                let level_idc = u32::from(self.level) * 30;
                let mut fragment = format!(
                    "{HEVC_TAG}.{HEVC_SUB_TAG}.{constraint}.{}{level_idc}.{HEVC_COMPAT_TAG}",
                    self.profile.flag
                );
                if let Some(suffix) = self.profile.bit_depth_flag {
                    fragment.push_str(suffix);
                }
                fragment
            }
            VideoFamily::Vp9 => {
                let level_tag = u32::from(self.level) * 10;
                let depth = self.profile.bit_depth_flag.unwrap_or("08");
                format!("{VP9_TAG}.{}.{level_tag}.{depth}", self.profile.flag)
            }
        }
    }
}

impl fmt::Display for VideoCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier_fragment())
    }
}
