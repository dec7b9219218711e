//! 能力检测结果结构

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::model::{BrowserFamily, Client};

/// 检测结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectResult {
    pub client: Client,
    // 实际使用的能力表（重映射后的浏览器 key），无表时为 None
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<BrowserFamily>,
    pub capabilities: BTreeSet<String>,
}

impl DetectResult {
    pub fn supports(&self, feature: &str) -> bool {
        self.capabilities.contains(feature)
    }
}

impl fmt::Display for DetectResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.client)?;
        if let Some(table) = self.table {
            write!(f, " [{}]", table)?;
        }
        let names: Vec<&str> = self.capabilities.iter().map(String::as_str).collect();
        write!(f, " => {{{}}}", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_serialize() {
        let result = DetectResult {
            client: Client::default(),
            table: None,
            capabilities: BTreeSet::new(),
        };
        assert_eq!(result.to_string(), "other 0 / other 0 => {}");

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("table").is_none());
        assert_eq!(json["client"]["browser"], "other");
        assert_eq!(json["client"]["browser_version"], "0");
        assert!(!result.supports("es2015"));
    }
}
