//! 统一错误类型定义.
//!
//! 所有 Heng crate 共用的错误类型. 设备拒绝某个组合属于正常过滤,
//! 不走错误通道; 这里只有构造期的不变量违例.

use thiserror::Error;

/// Heng 统一错误类型
#[derive(Debug, Error)]
pub enum HengError {
    /// 无效配置: profile 或 level 不在对应家族的目录中
    ///
    /// 只在向构造函数传入目录之外的组合时出现, 不是可恢复的业务错误.
    #[error("无效配置: {0}")]
    InvalidConfiguration(String),

    /// 空媒体配置: 视频与音频编解码器均未设置
    #[error("空媒体配置: 视频与音频编解码器至少需要其中之一")]
    EmptyMediaProfile,
}

/// Heng 统一 Result 类型
pub type HengResult<T> = Result<T, HengError>;
