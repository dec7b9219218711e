//! 内置能力表（手工维护的版本阈值快照）
//! ie / google_app / other 没有表，查询结果为空集

use once_cell::sync::Lazy;

use super::feature_rule::{feature, FeatureRule, FeatureTables};
use super::model::BrowserFamily;

/// 全局懒加载的内置能力表，进程内仅一份，只读
pub static BUILTIN_TABLES: Lazy<FeatureTables> = Lazy::new(builtin_tables);

fn since(version: &[u32]) -> FeatureRule {
    FeatureRule::since_browser(version)
}

fn since_os(version: &[u32]) -> FeatureRule {
    FeatureRule::since_os(version)
}

/// 构建内置能力表
pub fn builtin_tables() -> FeatureTables {
    use BrowserFamily::*;

    FeatureTables::new()
        // chrome（facebook 内嵌浏览器同样使用此表）
        .with_rule(Chrome, feature::ES2015, since(&[49]))
        .with_rule(Chrome, feature::ES2016, since(&[58]))
        .with_rule(Chrome, feature::ES2017, since(&[58]))
        .with_rule(Chrome, feature::ES2018, since(&[64]))
        .with_rule(Chrome, feature::PUSH, since(&[41]))
        .with_rule(Chrome, feature::SERVICE_WORKER, since(&[45]))
        .with_rule(Chrome, feature::MODULES, since(&[64]))
        // vivaldi
        .with_rule(Vivaldi, feature::ES2015, since(&[1]))
        .with_rule(Vivaldi, feature::ES2016, since(&[1, 14]))
        .with_rule(Vivaldi, feature::ES2017, since(&[1, 14]))
        .with_rule(Vivaldi, feature::ES2018, since(&[1, 14]))
        .with_rule(Vivaldi, feature::PUSH, since(&[1]))
        .with_rule(Vivaldi, feature::SERVICE_WORKER, since(&[1]))
        .with_rule(Vivaldi, feature::MODULES, since(&[1, 14]))
        // iOS 上的所有浏览器都按系统版本判定
        .with_rule(SafariMobile, feature::ES2015, since_os(&[10]))
        .with_rule(SafariMobile, feature::ES2016, since_os(&[10, 3]))
        .with_rule(SafariMobile, feature::ES2017, since_os(&[10, 3]))
        .with_rule(SafariMobile, feature::ES2018, FeatureRule::Never)
        .with_rule(SafariMobile, feature::PUSH, since_os(&[9, 2]))
        .with_rule(SafariMobile, feature::SERVICE_WORKER, since_os(&[11, 3]))
        .with_rule(SafariMobile, feature::MODULES, since_os(&[11, 3]))
        // 桌面 safari
        .with_rule(Safari, feature::ES2015, since(&[10]))
        .with_rule(Safari, feature::ES2016, since(&[10, 1]))
        .with_rule(Safari, feature::ES2017, since(&[10, 1]))
        .with_rule(Safari, feature::ES2018, FeatureRule::Never)
        // 桌面 Safari 的 HTTP/2 需要 macOS 10.11
        .with_rule(Safari, feature::PUSH, FeatureRule::all([since(&[9]), since_os(&[10, 11])]))
        .with_rule(Safari, feature::SERVICE_WORKER, since(&[11, 1]))
        .with_rule(Safari, feature::MODULES, since(&[11, 1]))
        // edge：15.15063 之前的 Chakra 存在 ES6 构造函数 JIT bug，es2015~2017 阈值一致
        .with_rule(Edge, feature::ES2015, since(&[15, 15063]))
        .with_rule(Edge, feature::ES2016, since(&[15, 15063]))
        .with_rule(Edge, feature::ES2017, since(&[15, 15063]))
        .with_rule(Edge, feature::ES2018, FeatureRule::Never)
        .with_rule(Edge, feature::PUSH, since(&[12]))
        .with_rule(Edge, feature::SERVICE_WORKER, FeatureRule::Never)
        .with_rule(Edge, feature::MODULES, FeatureRule::Never)
        // firefox
        .with_rule(Firefox, feature::ES2015, since(&[51]))
        .with_rule(Firefox, feature::ES2016, since(&[52]))
        .with_rule(Firefox, feature::ES2017, since(&[52]))
        .with_rule(Firefox, feature::ES2018, since(&[58]))
        // https://bugzilla.mozilla.org/show_bug.cgi?id=1409570
        .with_rule(Firefox, feature::PUSH, since(&[63]))
        .with_rule(Firefox, feature::SERVICE_WORKER, since(&[44]))
        .with_rule(Firefox, feature::MODULES, since(&[67]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_cover_vocabulary() {
        let tables = &*BUILTIN_TABLES;
        assert_eq!(
            tables.families(),
            vec![
                BrowserFamily::Firefox,
                BrowserFamily::Edge,
                BrowserFamily::Chrome,
                BrowserFamily::Safari,
                BrowserFamily::SafariMobile,
                BrowserFamily::Vivaldi,
            ]
        );
        for family in tables.families() {
            let table = tables.get(family).unwrap();
            for name in feature::ALL {
                assert!(table.contains_key(name), "{} 缺少特性 {}", family, name);
            }
            assert_eq!(table.len(), feature::ALL.len());
        }
        assert!(tables.validate().is_ok());
    }

    #[test]
    fn test_no_table_for_unsupported_families() {
        for family in [
            BrowserFamily::Ie,
            BrowserFamily::GoogleApp,
            BrowserFamily::Facebook,
            BrowserFamily::Other,
        ] {
            assert!(!BUILTIN_TABLES.contains(family));
        }
    }
}
