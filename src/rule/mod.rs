//! 规则模块：负责客户端数据模型、内置签名、能力表的定义与加载
pub mod model;
pub mod feature_rule;
pub mod signatures;
pub mod tables;
pub mod loader;
pub mod detect_result;

// 导出核心接口
pub use self::model::{
    BrowserFamily, OsFamily, Client, VersionNormalizer, BrowserSignature, OsSignature
};
pub use self::feature_rule::{feature, FeatureRule, FeatureTable, FeatureTables};
pub use self::tables::BUILTIN_TABLES;
pub use self::loader::TableLoader;
pub use self::detect_result::DetectResult;
