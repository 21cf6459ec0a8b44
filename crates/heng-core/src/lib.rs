//! # heng-core
//!
//! Heng 能力协商库核心类型, 提供统一错误处理与基础媒体类型定义.
//!
//! 本 crate 是整个 Heng 工作空间的最底层, 其余 crate 均依赖于它.

pub mod error;
pub mod media_type;

// 重导出常用类型
pub use error::{HengError, HengResult};
pub use media_type::MediaType;
