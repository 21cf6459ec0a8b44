//! 音频编解码家族目录与识别串片段生成.
//!
//! 音频不携带 level, 片段在目录里预先写死: profile 的 `flag` 字段
//! 即完整片段文本, 生成阶段原样取出.

use heng_core::{HengError, HengResult, MediaType};
use std::fmt;

use crate::descriptor::CodecDescriptor;
use crate::profile::{Profile, ProfileTraits};

// ========================
// AAC 家族目录
// ========================

/// AAC-LC (mp4a OTI 0x40, AOT 2)
pub const AAC_LC: Profile = Profile {
    name: "lc",
    flag: "mp4a.40.2",
    constraint_flag: None,
    bit_depth: None,
    bit_depth_flag: None,
    traits: ProfileTraits::empty(),
};

/// HE-AAC / AAC+ (AOT 5)
pub const AAC_HE: Profile = Profile {
    name: "he",
    flag: "mp4a.40.5",
    constraint_flag: None,
    bit_depth: None,
    bit_depth_flag: None,
    traits: ProfileTraits::empty(),
};

/// AAC profile 目录
pub const AAC_PROFILES: &[Profile] = &[AAC_LC, AAC_HE];

// ========================
// Dolby 家族目录
// ========================

/// E-AC-3 / Dolby Digital Plus
pub const EAC3_DDP: Profile = Profile {
    name: "ddp",
    flag: "ec-3",
    constraint_flag: None,
    bit_depth: None,
    bit_depth_flag: None,
    traits: ProfileTraits::SURROUND.union(ProfileTraits::PASSTHROUGH),
};

/// E-AC-3 profile 目录
pub const EAC3_PROFILES: &[Profile] = &[EAC3_DDP];

/// AC-3 / Dolby Digital
pub const AC3_DD: Profile = Profile {
    name: "dd",
    flag: "ac-3",
    constraint_flag: None,
    bit_depth: None,
    bit_depth_flag: None,
    traits: ProfileTraits::SURROUND.union(ProfileTraits::PASSTHROUGH),
};

/// AC-3 profile 目录
pub const AC3_PROFILES: &[Profile] = &[AC3_DD];

// ========================
// Opus 家族目录
// ========================

/// Opus (WebM 内唯一形态)
pub const OPUS_DEFAULT: Profile = Profile {
    name: "default",
    flag: "opus",
    constraint_flag: None,
    bit_depth: None,
    bit_depth_flag: None,
    traits: ProfileTraits::SURROUND,
};

/// Opus profile 目录
pub const OPUS_PROFILES: &[Profile] = &[OPUS_DEFAULT];

/// 音频编解码家族
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum AudioFamily {
    /// AAC (LC / HE)
    Aac,
    /// E-AC-3 (Dolby Digital Plus)
    Eac3,
    /// AC-3 (Dolby Digital)
    Ac3,
    /// Opus
    Opus,
}

impl AudioFamily {
    /// 所有音频家族的列表
    pub const ALL: &[AudioFamily] = &[Self::Aac, Self::Eac3, Self::Ac3, Self::Opus];

    /// 获取家族名称
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Aac => "aac",
            Self::Eac3 => "eac3",
            Self::Ac3 => "ac3",
            Self::Opus => "opus",
        }
    }

    /// 获取家族对应的媒体类型
    pub const fn media_type(&self) -> MediaType {
        MediaType::Audio
    }

    /// 按名称查找家族 (大小写不敏感)
    pub fn from_name(name: &str) -> Option<AudioFamily> {
        Self::ALL
            .iter()
            .find(|family| family.name().eq_ignore_ascii_case(name))
            .copied()
    }

    /// 本家族的 profile 目录
    pub const fn available_profiles(&self) -> &'static [Profile] {
        match self {
            Self::Aac => AAC_PROFILES,
            Self::Eac3 => EAC3_PROFILES,
            Self::Ac3 => AC3_PROFILES,
            Self::Opus => OPUS_PROFILES,
        }
    }

    /// 判断 profile 是否属于本家族目录 (结构相等)
    pub fn has_profile(&self, candidate: &Profile) -> bool {
        self.available_profiles().iter().any(|p| p == candidate)
    }

    /// 按名称查找本家族的 profile
    pub fn profile_by_name(&self, name: &str) -> Option<&'static Profile> {
        self.available_profiles()
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for AudioFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 已配置的音频编解码器实例
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AudioCodec {
    family: AudioFamily,
    profile: Profile,
}

impl AudioCodec {
    /// 构造音频编解码器实例
    ///
    /// # 错误
    /// - `HengError::InvalidConfiguration`: profile 不在家族目录中
    pub fn new(family: AudioFamily, profile: &Profile) -> HengResult<Self> {
        if !family.has_profile(profile) {
            return Err(HengError::InvalidConfiguration(format!(
                "profile {} 不在 {} 家族目录中",
                profile.name, family
            )));
        }
        Ok(Self {
            family,
            profile: *profile,
        })
    }

    /// 获取所属家族
    pub const fn family(&self) -> AudioFamily {
        self.family
    }

    /// 获取生效的 profile
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }
}

impl CodecDescriptor for AudioCodec {
    fn media_type(&self) -> MediaType {
        MediaType::Audio
    }

    /// 音频片段是目录中预写好的文本, 原样返回
    fn identifier_fragment(&self) -> String {
        self.profile.flag.to_string()
    }
}

impl fmt::Display for AudioCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier_fragment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video::HEVC_MAIN;

    #[test]
    fn test_audio_fragment_预写文本() {
        let cases = [
            (AudioFamily::Aac, &AAC_LC, "mp4a.40.2"),
            (AudioFamily::Aac, &AAC_HE, "mp4a.40.5"),
            (AudioFamily::Eac3, &EAC3_DDP, "ec-3"),
            (AudioFamily::Ac3, &AC3_DD, "ac-3"),
            (AudioFamily::Opus, &OPUS_DEFAULT, "opus"),
        ];
        for (family, profile, expected) in cases {
            let codec = AudioCodec::new(family, profile).unwrap();
            assert_eq!(codec.identifier_fragment(), expected, "{family} 片段不符");
            assert_eq!(codec.media_type(), MediaType::Audio);
        }
    }

    #[test]
    fn test_has_profile_跨家族拒绝() {
        assert!(AudioFamily::Aac.has_profile(&AAC_HE));
        assert!(!AudioFamily::Aac.has_profile(&EAC3_DDP));
        assert!(!AudioFamily::Opus.has_profile(&AC3_DD));
        assert!(!AudioFamily::Aac.has_profile(&HEVC_MAIN));

        let err = AudioCodec::new(AudioFamily::Eac3, &AAC_LC).unwrap_err();
        assert!(matches!(err, HengError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_杜比家族特性位() {
        assert!(EAC3_DDP.supports_surround());
        assert!(EAC3_DDP.passthrough_supported());
        assert!(AC3_DD.supports_surround());
        assert!(AC3_DD.passthrough_supported());
        assert!(OPUS_DEFAULT.supports_surround());
        assert!(!OPUS_DEFAULT.passthrough_supported());
        assert!(!AAC_LC.supports_surround());
    }

    #[test]
    fn test_family_lookup() {
        assert_eq!(AudioFamily::from_name("aac"), Some(AudioFamily::Aac));
        assert_eq!(AudioFamily::from_name("EAC3"), Some(AudioFamily::Eac3));
        assert_eq!(AudioFamily::from_name("mp3"), None);
        assert_eq!(AudioFamily::Opus.profile_by_name("default"), Some(&OPUS_DEFAULT));
    }
}
