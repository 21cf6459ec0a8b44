//! # heng-codec
//!
//! 编解码家族目录库: 以编译期数据表描述每个家族支持的 profile 与
//! level, 并为合法组合生成 RFC 6381 风格的识别串片段.
//!
//! 上层 (heng-negotiate) 在目录上做组合枚举, 本库只负责单个实例的
//! 合法性与片段文本.

pub mod audio;
pub mod descriptor;
pub mod profile;
pub mod video;

pub use audio::{AudioCodec, AudioFamily};
pub use descriptor::CodecDescriptor;
pub use profile::{Profile, ProfileTraits};
pub use video::{VideoCodec, VideoFamily};
