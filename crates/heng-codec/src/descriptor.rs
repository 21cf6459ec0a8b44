//! 编解码器实例的公共契约.

use heng_core::MediaType;

/// 凡是能进入媒体配置的编解码器实例都实现本契约
///
/// 识别串组装方只依赖这两个能力, 不关心视频/音频的内部差异.
pub trait CodecDescriptor {
    /// 实例所属的媒体类型
    fn media_type(&self) -> MediaType;

    /// 生成 RFC 6381 风格的 codecs 片段
    ///
    /// 片段不含引号与分隔符, 由上层拼入完整识别串.
    fn identifier_fragment(&self) -> String;
}
