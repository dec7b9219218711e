//! 全局检测器单例管理
//! 进程内唯一的只读检测器，未显式初始化时首次使用即按内置规则创建

use std::collections::BTreeSet;

use once_cell::sync::OnceCell;
use tracing::{debug, info};

use super::detector::CapabilityDetector;
use crate::config::DetectorConfig;
use crate::error::{CapResult, CapabilityError};
use crate::rule::{Client, DetectResult};

/// 全局检测器实例
static GLOBAL_DETECTOR: OnceCell<CapabilityDetector> = OnceCell::new();

/// 带自定义配置初始化全局检测器
/// 已初始化（包括已被懒加载为内置检测器）时直接返回 Ok(())
pub fn init_global_detector(config: DetectorConfig) -> CapResult<()> {
    if GLOBAL_DETECTOR.get().is_some() {
        debug!("全局检测器已初始化，跳过重复初始化");
        return Ok(());
    }

    let detector = CapabilityDetector::new(config).map_err(|e| {
        CapabilityError::DetectorInitError(format!("创建 CapabilityDetector 失败：{}", e))
    })?;

    if GLOBAL_DETECTOR.set(detector).is_err() {
        debug!("全局检测器已被其他线程初始化，保留已有实例");
        return Ok(());
    }

    info!("全局检测器初始化完成");
    Ok(())
}

/// 获取全局检测器（未初始化时使用内置规则懒加载）
pub fn global_detector() -> &'static CapabilityDetector {
    GLOBAL_DETECTOR.get_or_init(|| {
        debug!("懒加载全局检测器（内置规则）");
        CapabilityDetector::builtin()
    })
}

/// 解析 UA 得到客户端信息
pub fn parse_client(user_agent: &str) -> Client {
    global_detector().parse_client(user_agent)
}

/// 检测 UA 支持的特性名集合
pub fn detect_capabilities(user_agent: &str) -> BTreeSet<String> {
    global_detector().detect_capabilities(user_agent)
}

/// 完整检测结果
pub fn detect(user_agent: &str) -> DetectResult {
    global_detector().detect(user_agent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{feature, BrowserFamily, OsFamily};
    use std::thread;

    #[test]
    fn test_free_functions() {
        let client = parse_client("Mozilla/5.0 (Linux; Android 10.0) Chrome/90.0");
        assert_eq!(client.browser, BrowserFamily::Chrome);
        assert_eq!(client.os, OsFamily::Android);

        let caps = detect_capabilities("Chrome/49.0.2623.112");
        assert!(caps.contains(feature::ES2015));
        assert!(!caps.contains(feature::ES2016));

        assert_eq!(detect("Chrome/90.0").capabilities.len(), feature::ALL.len());
    }

    #[test]
    fn test_init_is_idempotent() {
        // 全局实例可能已被其他测试懒加载，两次初始化都应成功
        assert!(init_global_detector(DetectorConfig::default()).is_ok());
        assert!(init_global_detector(DetectorConfig::default()).is_ok());
        assert!(std::ptr::eq(global_detector(), global_detector()));
    }

    #[test]
    fn test_concurrent_callers_agree() {
        let ua = "Mozilla/5.0 (iPhone; CPU iPhone OS 12_0 like Mac OS X) Mobile/15E148";
        let expected = detect_capabilities(ua);
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(move || detect_capabilities(ua)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
