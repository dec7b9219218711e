//! 能力表加载管理器
//! 负责按配置选择内置表或解析 JSON 表，并支持在内置表上叠加覆盖

use tracing::{debug, info, warn};

use super::feature_rule::FeatureTables;
use super::tables::BUILTIN_TABLES;
use crate::config::TableOrigin;
use crate::error::{CapResult, CapabilityError};

/// 能力表加载管理器
pub struct TableLoader;

impl TableLoader {
    /// 按来源加载能力表
    pub fn load(origin: &TableOrigin) -> CapResult<FeatureTables> {
        let tables = match origin {
            TableOrigin::Builtin => {
                debug!("使用内置能力表");
                BUILTIN_TABLES.clone()
            }
            TableOrigin::Json(source) => {
                let tables = Self::from_json_str(source)?;
                info!("已加载自定义能力表，浏览器数：{}", tables.len());
                tables
            }
            TableOrigin::BuiltinWithOverrides(source) => {
                let overrides = Self::from_json_str(source)?;
                info!("在内置能力表上叠加覆盖，浏览器数：{}", overrides.len());
                Self::merge(BUILTIN_TABLES.clone(), overrides)
            }
        };

        if tables.is_empty() {
            warn!("能力表为空，所有浏览器都将返回空能力集");
        }
        Self::debug_count_rules(&tables);
        Ok(tables)
    }

    /// 解析 JSON 格式的能力表：`{ "<browser>": { "<feature>": <rule> } }`
    pub fn from_json_str(source: &str) -> CapResult<FeatureTables> {
        let tables: FeatureTables = serde_json::from_str(source)
            .map_err(|e| CapabilityError::RuleParseError(format!("能力表 JSON 解析失败：{}", e)))?;
        tables.validate()?;
        Ok(tables)
    }

    /// 合并能力表：覆盖表中出现的特性替换或追加到基础表同一浏览器下
    pub fn merge(mut base: FeatureTables, overrides: FeatureTables) -> FeatureTables {
        for (family, table) in overrides.iter() {
            for (name, rule) in table {
                debug!("覆盖能力规则：{}.{}", family, name);
                base.insert_rule(*family, name, rule.clone());
            }
        }
        base
    }

    // ===== 统计规则数量 =====
    fn debug_count_rules(tables: &FeatureTables) {
        let total: usize = tables.iter().map(|(_, table)| table.len()).sum();
        debug!("能力表统计：浏览器数 {}，规则总数 {}", tables.len(), total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::feature_rule::{feature, FeatureRule};
    use crate::rule::model::BrowserFamily;

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "chrome": {
                "es2015": {"kind": "since_browser", "version": [49]},
                "push": {"kind": "all", "rules": [
                    {"kind": "since_browser", "version": [41]},
                    {"kind": "since_os", "version": [10]}
                ]}
            },
            "ie": { "modules": {"kind": "never"} }
        }"#;
        let tables = TableLoader::from_json_str(json).unwrap();
        assert_eq!(tables.families(), vec![BrowserFamily::Chrome, BrowserFamily::Ie]);
        let chrome = tables.get(BrowserFamily::Chrome).unwrap();
        assert_eq!(chrome.get(feature::ES2015), Some(&FeatureRule::since_browser(&[49])));
        assert_eq!(tables.get(BrowserFamily::Ie).unwrap().get("modules"), Some(&FeatureRule::Never));
    }

    #[test]
    fn test_from_json_str_errors() {
        // JSON 语法错误
        assert!(matches!(
            TableLoader::from_json_str("{"),
            Err(CapabilityError::RuleParseError(_))
        ));
        // 未知浏览器
        assert!(TableLoader::from_json_str(r#"{"opera": {}}"#).is_err());
        // 未知规则类型
        assert!(TableLoader::from_json_str(r#"{"chrome": {"push": {"kind": "maybe"}}}"#).is_err());
        // 空版本
        assert!(TableLoader::from_json_str(
            r#"{"chrome": {"push": {"kind": "since_browser", "version": []}}}"#
        )
        .is_err());
    }

    #[test]
    fn test_merge_overrides_per_feature() {
        let overrides = FeatureTables::new()
            .with_rule(BrowserFamily::Chrome, feature::PUSH, FeatureRule::Never)
            .with_rule(BrowserFamily::Chrome, "webgpu", FeatureRule::since_browser(&[113]))
            .with_rule(BrowserFamily::Ie, feature::ES2015, FeatureRule::since_browser(&[11]));
        let merged = TableLoader::merge(BUILTIN_TABLES.clone(), overrides);

        let chrome = merged.get(BrowserFamily::Chrome).unwrap();
        assert_eq!(chrome.get(feature::PUSH), Some(&FeatureRule::Never));
        assert_eq!(chrome.get(feature::ES2015), Some(&FeatureRule::since_browser(&[49])));
        assert!(chrome.contains_key("webgpu"));
        assert!(merged.contains(BrowserFamily::Ie));
        // 内置表本身不受影响
        assert_eq!(
            BUILTIN_TABLES.get(BrowserFamily::Chrome).unwrap().get(feature::PUSH),
            Some(&FeatureRule::since_browser(&[41]))
        );
    }

    #[test]
    fn test_load_by_origin() {
        assert_eq!(TableLoader::load(&TableOrigin::Builtin).unwrap(), *BUILTIN_TABLES);

        let json = r#"{"ie": {"es2015": {"kind": "since_browser", "version": [11]}}}"#;
        let only = TableLoader::load(&TableOrigin::Json(json.to_string())).unwrap();
        assert_eq!(only.families(), vec![BrowserFamily::Ie]);

        let merged = TableLoader::load(&TableOrigin::BuiltinWithOverrides(json.to_string())).unwrap();
        assert!(merged.contains(BrowserFamily::Ie));
        assert!(merged.contains(BrowserFamily::Chrome));
    }
}
