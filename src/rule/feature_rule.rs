//! 能力规则：特性名 → 判定谓词，每个浏览器家族一张表

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::model::{BrowserFamily, Client};
use crate::error::{CapResult, CapabilityError};

/// 内置特性名
pub mod feature {
    pub const ES2015: &str = "es2015";
    pub const ES2016: &str = "es2016";
    pub const ES2017: &str = "es2017";
    pub const ES2018: &str = "es2018";
    pub const PUSH: &str = "push";
    pub const SERVICE_WORKER: &str = "serviceworker";
    pub const MODULES: &str = "modules";

    pub const ALL: [&str; 7] = [ES2015, ES2016, ES2017, ES2018, PUSH, SERVICE_WORKER, MODULES];
}

/// 特性判定规则
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeatureRule {
    /// 浏览器版本不低于 version
    SinceBrowser { version: Vec<u32> },
    /// 系统版本不低于 version
    SinceOs { version: Vec<u32> },
    /// 所有子规则均成立
    All { rules: Vec<FeatureRule> },
    /// 永不支持
    Never,
}

impl FeatureRule {
    pub fn since_browser(version: &[u32]) -> Self {
        FeatureRule::SinceBrowser { version: version.to_vec() }
    }

    pub fn since_os(version: &[u32]) -> Self {
        FeatureRule::SinceOs { version: version.to_vec() }
    }

    pub fn all(rules: impl IntoIterator<Item = FeatureRule>) -> Self {
        FeatureRule::All { rules: rules.into_iter().collect() }
    }

    /// 对客户端求值
    pub fn evaluate(&self, client: &Client) -> bool {
        match self {
            FeatureRule::SinceBrowser { version } => client.browser_version.at_least(version),
            FeatureRule::SinceOs { version } => client.os_version.at_least(version),
            FeatureRule::All { rules } => rules.iter().all(|rule| rule.evaluate(client)),
            FeatureRule::Never => false,
        }
    }

    /// 校验规则结构（空版本列表会让 since 恒成立，视为配置错误）
    pub fn validate(&self) -> CapResult<()> {
        match self {
            FeatureRule::SinceBrowser { version } | FeatureRule::SinceOs { version }
                if version.is_empty() =>
            {
                Err(CapabilityError::RuleParseError(
                    "since 规则的 version 不能为空".to_string(),
                ))
            }
            FeatureRule::All { rules } => rules.iter().try_for_each(FeatureRule::validate),
            _ => Ok(()),
        }
    }
}

/// 单个浏览器的特性表
pub type FeatureTable = FxHashMap<String, FeatureRule>;

/// 全部特性表（按生效的浏览器 key 索引）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureTables {
    tables: FxHashMap<BrowserFamily, FeatureTable>,
}

impl FeatureTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// 链式注册一条规则
    pub fn with_rule(mut self, family: BrowserFamily, name: &str, rule: FeatureRule) -> Self {
        self.insert_rule(family, name, rule);
        self
    }

    pub fn insert_rule(&mut self, family: BrowserFamily, name: &str, rule: FeatureRule) {
        self.tables
            .entry(family)
            .or_default()
            .insert(name.to_string(), rule);
    }

    /// 整表替换，返回旧表
    pub fn insert_table(&mut self, family: BrowserFamily, table: FeatureTable) -> Option<FeatureTable> {
        self.tables.insert(family, table)
    }

    pub fn get(&self, family: BrowserFamily) -> Option<&FeatureTable> {
        self.tables.get(&family)
    }

    pub fn contains(&self, family: BrowserFamily) -> bool {
        self.tables.contains_key(&family)
    }

    /// 已注册的浏览器 key（有序）
    pub fn families(&self) -> Vec<BrowserFamily> {
        let mut families: Vec<_> = self.tables.keys().copied().collect();
        families.sort();
        families
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BrowserFamily, &FeatureTable)> {
        self.tables.iter()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// 用 family 对应的表评估客户端；无表返回 None
    pub fn evaluate(&self, family: BrowserFamily, client: &Client) -> Option<BTreeSet<String>> {
        self.get(family).map(|table| {
            table
                .iter()
                .filter(|(_, rule)| rule.evaluate(client))
                .map(|(name, _)| name.clone())
                .collect()
        })
    }

    pub fn validate(&self) -> CapResult<()> {
        for (family, table) in &self.tables {
            for (name, rule) in table {
                rule.validate().map_err(|e| {
                    CapabilityError::RuleParseError(format!("{}.{}: {}", family, name, e))
                })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::model::OsFamily;
    use crate::utils::version::Version;

    fn client(browser_version: &[u32], os_version: &[u32]) -> Client {
        Client {
            browser: BrowserFamily::Safari,
            browser_version: Version::from(browser_version),
            is_mobile: false,
            os: OsFamily::Mac,
            os_version: Version::from(os_version),
        }
    }

    #[test]
    fn test_since_rules() {
        let rule = FeatureRule::since_browser(&[9, 10]);
        assert!(!rule.evaluate(&client(&[9, 9], &[])));
        assert!(rule.evaluate(&client(&[9, 10], &[])));
        assert!(rule.evaluate(&client(&[9, 11], &[])));
        assert!(rule.evaluate(&client(&[10, 0], &[])));

        let rule = FeatureRule::since_os(&[10, 11]);
        assert!(rule.evaluate(&client(&[], &[10, 15])));
        assert!(!rule.evaluate(&client(&[], &[10, 9])));
    }

    #[test]
    fn test_composite_and_never() {
        let rule = FeatureRule::all([
            FeatureRule::since_browser(&[9]),
            FeatureRule::since_os(&[10, 11]),
        ]);
        assert!(rule.evaluate(&client(&[14], &[10, 15])));
        assert!(!rule.evaluate(&client(&[14], &[10, 10])));
        assert!(!rule.evaluate(&client(&[8], &[10, 15])));
        assert!(!FeatureRule::Never.evaluate(&client(&[999], &[999])));
    }

    #[test]
    fn test_rule_json_shape() {
        let json = r#"{"kind":"since_browser","version":[10,1]}"#;
        let rule: FeatureRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule, FeatureRule::since_browser(&[10, 1]));
        assert_eq!(serde_json::to_string(&FeatureRule::Never).unwrap(), r#"{"kind":"never"}"#);
    }

    #[test]
    fn test_validate_rejects_empty_since() {
        assert!(FeatureRule::since_os(&[]).validate().is_err());
        assert!(FeatureRule::all([FeatureRule::since_browser(&[])]).validate().is_err());
        assert!(FeatureRule::since_os(&[9, 2]).validate().is_ok());

        let tables = FeatureTables::new().with_rule(BrowserFamily::Chrome, "push", FeatureRule::since_browser(&[]));
        let err = tables.validate().unwrap_err();
        assert!(err.to_string().contains("chrome.push"));
    }

    #[test]
    fn test_evaluate_missing_table() {
        let tables = FeatureTables::new().with_rule(BrowserFamily::Chrome, "push", FeatureRule::since_browser(&[41]));
        assert!(tables.evaluate(BrowserFamily::Ie, &Client::default()).is_none());
        let found = tables.evaluate(BrowserFamily::Chrome, &client(&[41], &[])).unwrap();
        assert!(found.contains("push"));
    }
}
