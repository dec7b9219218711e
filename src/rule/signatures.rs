//! 内置签名列表
//! 顺序即优先级，首个命中即生效：Facebook 内嵌浏览器必须排在 Chrome 之前，
//! iOS 的 `like Mac OS X` 必须排在桌面 Mac 之前

use super::model::{BrowserFamily, BrowserSignature, OsFamily, OsSignature, VersionNormalizer};

pub const BROWSER_SIGNATURES: &[BrowserSignature] = &[
    BrowserSignature { family: BrowserFamily::Facebook, pattern: r"FBAV/([0-9.]+)" },
    BrowserSignature { family: BrowserFamily::Facebook, pattern: r"FBSV/([0-9.]+)" },
    BrowserSignature { family: BrowserFamily::GoogleApp, pattern: r"GSA/([0-9.]+)" },
    BrowserSignature { family: BrowserFamily::Chrome, pattern: r"Chrome/([0-9.]+)" },
    BrowserSignature { family: BrowserFamily::Chrome, pattern: r"CriOS/([0-9.]+)" },
    BrowserSignature { family: BrowserFamily::Firefox, pattern: r"Firefox/([0-9.]+)" },
    BrowserSignature { family: BrowserFamily::Firefox, pattern: r"FxiOS/([0-9.]+)" },
    BrowserSignature { family: BrowserFamily::Safari, pattern: r"Version/([0-9.]+).+Safari" },
    BrowserSignature { family: BrowserFamily::Edge, pattern: r"Edge/([0-9.]+)" },
    BrowserSignature { family: BrowserFamily::Ie, pattern: r"Trident/.+rv[: ]?([0-9]+)" },
    BrowserSignature { family: BrowserFamily::Vivaldi, pattern: r"Vivaldi/([0-9.]+)" },
];

pub const OS_SIGNATURES: &[OsSignature] = &[
    OsSignature {
        family: OsFamily::Ios,
        pattern: r"([0-9_]+) like Mac OS X",
        normalizer: VersionNormalizer::Fixer,
    },
    OsSignature {
        family: OsFamily::Ios,
        pattern: r"CPU like Mac OS X",
        normalizer: VersionNormalizer::Pinned("0"),
    },
    OsSignature {
        family: OsFamily::Android,
        pattern: r"Android ([0-9.]+)",
        normalizer: VersionNormalizer::Fixer,
    },
    OsSignature {
        family: OsFamily::Linux,
        pattern: r"Linux (x86_64|x86)",
        normalizer: VersionNormalizer::Architecture,
    },
    OsSignature {
        family: OsFamily::Mac,
        pattern: r"Macintosh.+Mac OS X ([0-9_]+)",
        normalizer: VersionNormalizer::Fixer,
    },
    OsSignature {
        family: OsFamily::Windows,
        pattern: r"Windows NT ([0-9.]+)",
        normalizer: VersionNormalizer::Fixer,
    },
    OsSignature {
        family: OsFamily::Playstation,
        pattern: r"PlayStation ([0-9.]+)",
        normalizer: VersionNormalizer::Fixer,
    },
];
