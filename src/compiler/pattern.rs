//! 编译后签名模型
//! 正则编译后的结构，保持原始顺序（顺序即优先级）

use regex::{Captures, Regex};

use crate::rule::model::{BrowserFamily, OsFamily, VersionNormalizer};

/// 编译后的浏览器签名
#[derive(Debug, Clone)]
pub struct CompiledBrowserSignature {
    pub family: BrowserFamily,
    pub regex: Regex,
}

/// 编译后的操作系统签名
#[derive(Debug, Clone)]
pub struct CompiledOsSignature {
    pub family: OsFamily,
    pub regex: Regex,
    pub normalizer: VersionNormalizer,
}

/// 编译后的签名库（有序）
#[derive(Debug, Clone, Default)]
pub struct SignatureLibrary {
    pub browsers: Vec<CompiledBrowserSignature>,
    pub oses: Vec<CompiledOsSignature>,
}

impl SignatureLibrary {
    /// 首个命中的浏览器签名及其捕获结果
    pub fn match_browser<'a, 'u>(
        &'a self,
        user_agent: &'u str,
    ) -> Option<(&'a CompiledBrowserSignature, Captures<'u>)> {
        self.browsers
            .iter()
            .find_map(|sig| sig.regex.captures(user_agent).map(|caps| (sig, caps)))
    }

    /// 首个命中的操作系统签名及其捕获结果
    pub fn match_os<'a, 'u>(
        &'a self,
        user_agent: &'u str,
    ) -> Option<(&'a CompiledOsSignature, Captures<'u>)> {
        self.oses
            .iter()
            .find_map(|sig| sig.regex.captures(user_agent).map(|caps| (sig, caps)))
    }
}
