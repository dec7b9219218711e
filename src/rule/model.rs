//! 客户端数据模型定义
//! 仅存储解析结果与签名数据，无匹配逻辑，支持序列化/反序列化

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CapResult, CapabilityError};
use crate::utils::version::{version_fixer, Version};

/// 浏览器家族
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrowserFamily {
    Firefox,
    Edge,
    Chrome,
    Facebook,
    GoogleApp,
    Ie,
    Safari,
    SafariMobile,
    Vivaldi,
    #[default]
    Other,
}

impl BrowserFamily {
    pub const ALL: [BrowserFamily; 10] = [
        BrowserFamily::Firefox,
        BrowserFamily::Edge,
        BrowserFamily::Chrome,
        BrowserFamily::Facebook,
        BrowserFamily::GoogleApp,
        BrowserFamily::Ie,
        BrowserFamily::Safari,
        BrowserFamily::SafariMobile,
        BrowserFamily::Vivaldi,
        BrowserFamily::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserFamily::Firefox => "firefox",
            BrowserFamily::Edge => "edge",
            BrowserFamily::Chrome => "chrome",
            BrowserFamily::Facebook => "facebook",
            BrowserFamily::GoogleApp => "google_app",
            BrowserFamily::Ie => "ie",
            BrowserFamily::Safari => "safari",
            BrowserFamily::SafariMobile => "safari_mobile",
            BrowserFamily::Vivaldi => "vivaldi",
            BrowserFamily::Other => "other",
        }
    }
}

impl fmt::Display for BrowserFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrowserFamily {
    type Err = CapabilityError;

    fn from_str(s: &str) -> CapResult<Self> {
        Self::ALL
            .into_iter()
            .find(|family| family.as_str() == s)
            .ok_or_else(|| CapabilityError::InvalidInput(format!("未知浏览器类型：{}", s)))
    }
}

/// 操作系统家族
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OsFamily {
    Ios,
    Android,
    Linux,
    Mac,
    Windows,
    Playstation,
    #[default]
    Other,
}

impl OsFamily {
    pub const ALL: [OsFamily; 7] = [
        OsFamily::Ios,
        OsFamily::Android,
        OsFamily::Linux,
        OsFamily::Mac,
        OsFamily::Windows,
        OsFamily::Playstation,
        OsFamily::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OsFamily::Ios => "ios",
            OsFamily::Android => "android",
            OsFamily::Linux => "linux",
            OsFamily::Mac => "mac",
            OsFamily::Windows => "windows",
            OsFamily::Playstation => "playstation",
            OsFamily::Other => "other",
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OsFamily {
    type Err = CapabilityError;

    fn from_str(s: &str) -> CapResult<Self> {
        Self::ALL
            .into_iter()
            .find(|os| os.as_str() == s)
            .ok_or_else(|| CapabilityError::InvalidInput(format!("未知操作系统类型：{}", s)))
    }
}

/// 客户端解析结果，所有字段均有默认值（other / 0 / false）
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Client {
    pub browser: BrowserFamily,
    pub browser_version: Version,
    pub is_mobile: bool,
    pub os: OsFamily,
    pub os_version: Version,
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} / {} {}",
            self.browser, self.browser_version, self.os, self.os_version
        )?;
        if self.is_mobile {
            f.write_str(" (mobile)")?;
        }
        Ok(())
    }
}

/// OS 版本规整方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionNormalizer {
    /// `_` → `.`，截断到 major.minor
    Fixer,
    /// Linux 仅区分位宽：x86_64 → 64，其余 → 32
    Architecture,
    /// 固定版本（无数字的 iOS 标记）
    Pinned(&'static str),
}

impl VersionNormalizer {
    pub fn apply<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        match self {
            VersionNormalizer::Fixer => Cow::Owned(version_fixer(raw)),
            VersionNormalizer::Architecture => {
                if raw == "x86_64" {
                    Cow::Borrowed("64")
                } else {
                    Cow::Borrowed("32")
                }
            }
            VersionNormalizer::Pinned(value) => Cow::Borrowed(*value),
        }
    }
}

/// 浏览器签名：正则中的第一个捕获组为原始版本串
#[derive(Debug, Clone, Copy)]
pub struct BrowserSignature {
    pub family: BrowserFamily,
    pub pattern: &'static str,
}

/// 操作系统签名
#[derive(Debug, Clone, Copy)]
pub struct OsSignature {
    pub family: OsFamily,
    pub pattern: &'static str,
    pub normalizer: VersionNormalizer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_names_round_trip() {
        for family in BrowserFamily::ALL {
            assert_eq!(family.as_str().parse::<BrowserFamily>().unwrap(), family);
            let json = serde_json::to_string(&family).unwrap();
            assert_eq!(json, format!("\"{}\"", family.as_str()));
        }
        for os in OsFamily::ALL {
            assert_eq!(os.as_str().parse::<OsFamily>().unwrap(), os);
        }
        assert!("opera".parse::<BrowserFamily>().is_err());
        assert!("beos".parse::<OsFamily>().is_err());
    }

    #[test]
    fn test_client_default() {
        let client = Client::default();
        assert_eq!(client.browser, BrowserFamily::Other);
        assert_eq!(client.os, OsFamily::Other);
        assert!(client.browser_version.is_unknown());
        assert!(client.os_version.is_unknown());
        assert!(!client.is_mobile);
        assert_eq!(client.to_string(), "other 0 / other 0");
    }

    #[test]
    fn test_normalizers() {
        assert_eq!(VersionNormalizer::Fixer.apply("10_15_7"), "10.15");
        assert_eq!(VersionNormalizer::Architecture.apply("x86_64"), "64");
        assert_eq!(VersionNormalizer::Architecture.apply("x86"), "32");
        assert_eq!(VersionNormalizer::Pinned("0").apply(""), "0");
    }
}
