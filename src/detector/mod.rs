//! 检测模块：UA 解析与能力检测核心逻辑
pub mod global;
pub mod parser;
pub mod detector;

// 导出核心接口
pub use self::global::{
    init_global_detector, global_detector, parse_client, detect_capabilities, detect,
};
pub use self::parser::ClientParser;
pub use self::detector::CapabilityDetector;
