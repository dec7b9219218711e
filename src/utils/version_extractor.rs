//! 版本提取工具模块
//! 负责从签名正则的捕获结果中提取版本号，提取失败一律降级为未知版本（0）

use regex::Captures;

use crate::rule::model::VersionNormalizer;
use crate::utils::version::Version;

/// 版本提取工具类
pub struct VersionExtractor;

impl VersionExtractor {
    /// 第一个捕获组的原始文本，无捕获组时为空串
    #[inline]
    pub fn raw<'u>(captures: &Captures<'u>) -> &'u str {
        captures.get(1).map_or("", |m| m.as_str())
    }

    /// 浏览器版本：只取主版本号
    pub fn browser(captures: &Captures) -> Version {
        Version::parse_major(Self::raw(captures)).unwrap_or_default()
    }

    /// 系统版本：先按签名规整，再按十进制解析
    pub fn os(captures: &Captures, normalizer: VersionNormalizer) -> Version {
        let normalized = normalizer.apply(Self::raw(captures));
        Version::parse_decimal(&normalized).unwrap_or_default()
    }
}
