//! # heng-format
//!
//! 容器目录库: 给出可协商的容器集合, 以及每个容器允许承载的
//! 视频/音频编解码家族.
//!
//! 目录顺序承载偏好语义, 枚举产物的排序直接来源于此.

pub mod container;
pub mod container_id;

pub use container::{Container, CATALOG};
pub use container_id::ContainerId;
