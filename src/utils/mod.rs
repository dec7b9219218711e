//! 工具模块：提供版本号处理、版本提取、日志格式化等通用工具函数
pub mod version;
pub mod version_extractor;
pub mod log_format;

pub use self::version::{Version, version_at_least, version_fixer};
pub use self::version_extractor::VersionExtractor;
pub use self::log_format::{preview_compact, preview_ua, format_capabilities};
