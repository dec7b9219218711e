//! 签名编译器
//! 仅负责将原始签名编译为可执行的正则，保持列表顺序不变

use std::sync::Arc;
use std::time::Instant;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::pattern::{CompiledBrowserSignature, CompiledOsSignature, SignatureLibrary};
use crate::error::CapResult;
use crate::rule::model::{BrowserSignature, OsSignature};
use crate::rule::signatures::{BROWSER_SIGNATURES, OS_SIGNATURES};

/// 全局懒加载的内置签名库，首次访问时编译，进程内仅一份
pub static BUILTIN_SIGNATURES: Lazy<Arc<SignatureLibrary>> = Lazy::new(|| {
    let lib = SignatureCompiler::compile(BROWSER_SIGNATURES, OS_SIGNATURES).unwrap_or_else(|e| {
        panic!("内置签名编译失败，请检查 rule/signatures.rs：{}", e);
    });
    Arc::new(lib)
});

/// 签名编译器
pub struct SignatureCompiler;

impl SignatureCompiler {
    /// 编译签名库，任意一条正则非法即返回错误
    pub fn compile(
        browsers: &[BrowserSignature],
        oses: &[OsSignature],
    ) -> CapResult<SignatureLibrary> {
        let start = Instant::now();

        let browsers = browsers
            .iter()
            .map(|sig| -> CapResult<CompiledBrowserSignature> {
                Ok(CompiledBrowserSignature {
                    family: sig.family,
                    regex: Regex::new(sig.pattern)?,
                })
            })
            .collect::<CapResult<Vec<_>>>()?;

        let oses = oses
            .iter()
            .map(|sig| -> CapResult<CompiledOsSignature> {
                Ok(CompiledOsSignature {
                    family: sig.family,
                    regex: Regex::new(sig.pattern)?,
                    normalizer: sig.normalizer,
                })
            })
            .collect::<CapResult<Vec<_>>>()?;

        debug!(
            "签名编译完成：浏览器签名{}条、系统签名{}条，耗时{:?}",
            browsers.len(),
            oses.len(),
            start.elapsed()
        );

        Ok(SignatureLibrary { browsers, oses })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CapabilityError;
    use crate::rule::model::{BrowserFamily, OsFamily, VersionNormalizer};

    #[test]
    fn test_builtin_signatures_compile_in_order() {
        let lib = &*BUILTIN_SIGNATURES;
        assert_eq!(lib.browsers.len(), BROWSER_SIGNATURES.len());
        assert_eq!(lib.oses.len(), OS_SIGNATURES.len());
        assert_eq!(lib.browsers[0].family, BrowserFamily::Facebook);
        assert_eq!(lib.oses[0].family, OsFamily::Ios);
        for (compiled, raw) in lib.browsers.iter().zip(BROWSER_SIGNATURES) {
            assert_eq!(compiled.regex.as_str(), raw.pattern);
        }
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        let bad = [BrowserSignature { family: BrowserFamily::Chrome, pattern: r"Chrome/([0-9.]+" }];
        let result = SignatureCompiler::compile(&bad, &[]);
        assert!(matches!(result, Err(CapabilityError::RegexCompileError(_))));

        let bad_os = [OsSignature {
            family: OsFamily::Linux,
            pattern: r"Linux (",
            normalizer: VersionNormalizer::Architecture,
        }];
        assert!(SignatureCompiler::compile(&[], &bad_os).is_err());
    }

    #[test]
    fn test_first_match_wins() {
        let lib = &*BUILTIN_SIGNATURES;
        let ua = "Mozilla/5.0 [FBAN/FBIOS;FBAV/300.0.0.1] Chrome/80.0.3987";
        let (sig, caps) = lib.match_browser(ua).unwrap();
        assert_eq!(sig.family, BrowserFamily::Facebook);
        assert_eq!(&caps[1], "300.0.0.1");
        assert!(lib.match_browser("curl/8.0").is_none());
    }
}
