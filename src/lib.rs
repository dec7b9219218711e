//! browser-capabilities - 基于 User-Agent 的浏览器/系统识别与前端能力判定
//!
//! ```
//! use browser_capabilities::{detect_capabilities, parse_client, BrowserFamily};
//!
//! let client = parse_client("Mozilla/5.0 (X11; Linux x86_64) Chrome/90.0.4430.93 Safari/537.36");
//! assert_eq!(client.browser, BrowserFamily::Chrome);
//!
//! let caps = detect_capabilities("Chrome/49.0.2623.112");
//! assert!(caps.contains("es2015"));
//! assert!(!caps.contains("es2016"));
//! ```

// 导出全局错误类型
pub use self::error::{CapabilityError, CapResult};

// 导出配置模块
pub use self::config::{DetectorConfig, TableOrigin, ConfigManager, CustomConfigBuilder};

// 导出规则模块核心接口
pub use self::rule::{
    BrowserFamily, OsFamily, Client, DetectResult, FeatureRule, FeatureTable, FeatureTables,
    TableLoader, feature, BUILTIN_TABLES
};

// 导出编译模块核心接口
pub use self::compiler::{SignatureCompiler, SignatureLibrary, BUILTIN_SIGNATURES};

// 导出工具模块核心接口
pub use self::utils::{Version, VersionExtractor, version_at_least, version_fixer};

// 导出检测模块核心接口
pub use self::detector::{
    CapabilityDetector,
    ClientParser,
    init_global_detector,
    global_detector,
    parse_client,
    detect_capabilities,
    detect,
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod utils;
pub mod compiler;
pub mod detector;
