//! 版本号模型与比较工具
//! 版本在解析时即拆分为整数分量（如 `[10, 15]`），比较时逐分量进行，
//! 因此 `9.10` 严格大于 `9.9`，不会出现浮点比较的误判

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CapResult, CapabilityError};

/// 版本号（规范形式：去掉末尾的 0 分量，未知版本为空列表）
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Version {
    components: Vec<u32>,
}

impl Version {
    /// 未知版本（等价于 `0`）
    pub const fn unknown() -> Self {
        Self { components: Vec::new() }
    }

    /// 由分量列表构建，自动规范化
    pub fn new(components: impl Into<Vec<u32>>) -> Self {
        let mut components = components.into();
        while components.last() == Some(&0) {
            components.pop();
        }
        Self { components }
    }

    /// 解析浏览器版本：按 `.` 切分后仅取首段，作为 32 位整数解析
    /// 返回 None 表示首段不是合法整数
    pub fn parse_major(raw: &str) -> Option<Self> {
        let first = raw.split('.').next()?;
        let major: i32 = first.parse().ok()?;
        u32::try_from(major).ok().map(|m| Self::new(vec![m]))
    }

    /// 解析十进制版本串（`10`、`10.15`、`10.`、`.5`），其他格式返回 None
    pub fn parse_decimal(raw: &str) -> Option<Self> {
        let (int_part, frac_part) = match raw.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (raw, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }

        let major = parse_digits(int_part)?;
        let minor = parse_digits(frac_part)?;
        Some(Self::new(vec![major, minor]))
    }

    /// 版本分量（规范形式）
    pub fn components(&self) -> &[u32] {
        &self.components
    }

    /// 主版本号，未知时为 0
    pub fn major(&self) -> u32 {
        self.component(0)
    }

    /// 取第 index 个分量，越界视为 0
    #[inline]
    pub fn component(&self, index: usize) -> u32 {
        self.components.get(index).copied().unwrap_or(0)
    }

    pub fn is_unknown(&self) -> bool {
        self.components.is_empty()
    }

    /// 数值视图（major.minor），仅用于展示和粗略比较
    pub fn as_f64(&self) -> f64 {
        format!("{}.{}", self.major(), self.component(1))
            .parse()
            .unwrap_or(0.0)
    }

    /// 当前版本是否不低于 `required`
    pub fn at_least(&self, required: &[u32]) -> bool {
        version_at_least(required, self)
    }
}

/// 空串视为 0，其余必须全部为 ASCII 数字
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() {
        return Some(0);
    }
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// 逐分量比较：实际分量大于要求 → 成立；小于 → 不成立；相等 → 继续；
/// 要求分量比较完毕仍相等 → 成立。实际版本较短时缺失分量按 0 处理
pub fn version_at_least(required: &[u32], actual: &Version) -> bool {
    for (index, required) in required.iter().enumerate() {
        match actual.component(index).cmp(required) {
            Ordering::Greater => return true,
            Ordering::Less => return false,
            Ordering::Equal => continue,
        }
    }
    true
}

/// OS 版本规整：`_` 替换为 `.`，只保留 major.minor
pub fn version_fixer(raw: &str) -> String {
    let replaced = raw.replace('_', ".");
    let mut parts = replaced.split('.');
    match (parts.next(), parts.next()) {
        (Some(major), Some(minor)) => format!("{}.{}", major, minor),
        (Some(major), None) => major.to_string(),
        _ => "0".to_string(),
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.components.is_empty() {
            return f.write_str("0");
        }
        for (index, component) in self.components.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", component)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = CapabilityError;

    /// 任意长度的点分版本（`15.15063`、`1.2.3`）
    fn from_str(s: &str) -> CapResult<Self> {
        let components = s
            .trim()
            .split('.')
            .map(|part| {
                part.parse::<u32>()
                    .map_err(|_| CapabilityError::InvalidInput(format!("无效版本号：{}", s)))
            })
            .collect::<CapResult<Vec<u32>>>()?;
        Ok(Self::new(components))
    }
}

impl From<&[u32]> for Version {
    fn from(components: &[u32]) -> Self {
        Self::new(components.to_vec())
    }
}

// 序列化为字符串，避免 9.10 / 9.1 这类浮点歧义
impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
