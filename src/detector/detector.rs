//! 能力检测器核心
//! 核心职责：
//! 1. 调用客户端解析器得到 Client
//! 2. 计算生效的能力表 key（iOS → safari_mobile，facebook → chrome）
//! 3. 逐条评估能力规则，输出成立的特性名集合

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, info};

use super::parser::ClientParser;
use crate::config::{DetectorConfig, TableOrigin};
use crate::error::CapResult;
use crate::rule::{BrowserFamily, Client, DetectResult, FeatureTables, OsFamily, TableLoader, BUILTIN_TABLES};
use crate::utils::log_format::{format_capabilities, preview_ua};

/// 能力检测器
/// - parser: 客户端解析器（内含共享的签名库）
/// - tables: 能力表（Arc 共享，只读）
#[derive(Debug, Clone)]
pub struct CapabilityDetector {
    parser: ClientParser,
    tables: Arc<FeatureTables>,
    config: DetectorConfig,
}

impl Default for CapabilityDetector {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CapabilityDetector {
    /// 按配置创建检测器（自定义能力表解析失败时返回错误）
    pub fn new(config: DetectorConfig) -> CapResult<Self> {
        let tables = match &config.table_origin {
            TableOrigin::Builtin => BUILTIN_TABLES.clone(),
            origin => TableLoader::load(origin)?,
        };
        info!(
            "能力检测器初始化完成：能力表{}张，UA长度上限={:?}",
            tables.len(),
            config.max_ua_length
        );
        Ok(Self::with_tables(tables, config))
    }

    /// 使用内置签名与内置能力表，无需配置
    pub fn builtin() -> Self {
        Self::with_tables(BUILTIN_TABLES.clone(), DetectorConfig::default())
    }

    /// 使用内存中的能力表创建检测器
    pub fn with_tables(tables: FeatureTables, config: DetectorConfig) -> Self {
        Self {
            parser: ClientParser::new().max_ua_length(config.max_ua_length),
            tables: Arc::new(tables),
            config,
        }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn tables(&self) -> &FeatureTables {
        &self.tables
    }

    /// 解析客户端
    pub fn parse_client(&self, user_agent: &str) -> Client {
        self.parser.parse(user_agent)
    }

    /// 生效的能力表 key
    /// iOS 上的浏览器均为 Safari 内核；Facebook 内嵌浏览器基于 Chromium
    pub fn effective_key(client: &Client) -> BrowserFamily {
        if client.os == OsFamily::Ios {
            BrowserFamily::SafariMobile
        } else if client.browser == BrowserFamily::Facebook {
            BrowserFamily::Chrome
        } else {
            client.browser
        }
    }

    /// 评估已解析的客户端，无对应能力表时返回空集
    pub fn capabilities_of(&self, client: &Client) -> BTreeSet<String> {
        let key = Self::effective_key(client);
        self.tables.evaluate(key, client).unwrap_or_else(|| {
            debug!("浏览器 {} 无能力表，返回空能力集", key);
            BTreeSet::new()
        })
    }

    /// 检测 UA 支持的特性名集合
    pub fn detect_capabilities(&self, user_agent: &str) -> BTreeSet<String> {
        self.detect(user_agent).capabilities
    }

    /// 完整检测：解析结果 + 生效表 + 能力集
    pub fn detect(&self, user_agent: &str) -> DetectResult {
        let client = self.parse_client(user_agent);
        let key = Self::effective_key(&client);
        let capabilities = self.capabilities_of(&client);
        let table = self.tables.contains(key).then_some(key);

        if self.config.verbose {
            info!(
                "能力检测：{} 使用表={:?} 结果={} <- {}",
                client,
                table,
                format_capabilities(&capabilities),
                preview_ua(user_agent)
            );
        } else {
            debug!("能力检测：{} 结果={}", client, format_capabilities(&capabilities));
        }

        DetectResult {
            client,
            table,
            capabilities,
        }
    }

    /// 单个特性判定
    pub fn supports(&self, user_agent: &str, feature: &str) -> bool {
        let client = self.parse_client(user_agent);
        self.tables
            .get(Self::effective_key(&client))
            .and_then(|table| table.get(feature))
            .is_some_and(|rule| rule.evaluate(&client))
    }
}
