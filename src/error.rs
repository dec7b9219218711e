//! 全局错误类型定义
//! 检测入口（parse/detect）本身不会失败，只有规则表加载、签名编译、检测器初始化会返回错误

use thiserror::Error;
use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;

#[derive(Error, Debug)]
pub enum CapabilityError {
    // 签名编译相关错误
    #[error("正则编译失败：{0}")]
    RegexCompileError(#[from] RegexError),

    // 规则表相关错误
    #[error("规则解析失败：{0}")]
    RuleParseError(String),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 检测器相关错误
    #[error("检测器初始化失败: {0}")]
    DetectorInitError(String),

    // 基础错误
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type CapResult<T> = Result<T, CapabilityError>;
