//! 全局配置管理,存储所有可配置项

/// 能力表来源
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TableOrigin {
    #[default]
    Builtin,                      // 内置能力表
    Json(String),                 // 自定义 JSON 能力表（完全替换内置表）
    BuiltinWithOverrides(String), // 在内置表上按特性覆盖
}

/// 检测器配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorConfig {
    // 能力表来源
    pub table_origin: TableOrigin,
    // UA 最大处理长度（字符边界对齐截断），None 表示不限制
    pub max_ua_length: Option<usize>,
    // 是否输出每次检测的详细日志
    pub verbose: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            table_origin: TableOrigin::Builtin,
            max_ua_length: None,
            verbose: false,
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> DetectorConfig {
        DetectorConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: DetectorConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: DetectorConfig::default(),
        }
    }

    pub fn table_origin(mut self, origin: TableOrigin) -> Self {
        self.config.table_origin = origin;
        self
    }

    pub fn tables_json(mut self, json: impl Into<String>) -> Self {
        self.config.table_origin = TableOrigin::Json(json.into());
        self
    }

    pub fn tables_json_overrides(mut self, json: impl Into<String>) -> Self {
        self.config.table_origin = TableOrigin::BuiltinWithOverrides(json.into());
        self
    }

    pub fn max_ua_length(mut self, max_len: usize) -> Self {
        self.config.max_ua_length = Some(max_len);
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> DetectorConfig {
        self.config
    }
}
