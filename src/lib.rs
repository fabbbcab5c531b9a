#![warn(clippy::unwrap_used)]

/// 静态量，常量
pub mod consts;
/// 错误处理
mod error;
/// 用于处理 HTTP，webhook 推送
pub mod http;
/// 消息数据结构
pub mod model;

pub use error::{Error, ErrorKind, Result};
