//! 客户端解析器：按签名顺序匹配 UA，首个命中即生效
//! 解析永不失败，未命中的字段保持默认值（other / 0 / false）

use std::sync::Arc;

use tracing::trace;

use crate::compiler::{SignatureLibrary, BUILTIN_SIGNATURES};
use crate::rule::model::Client;
use crate::utils::log_format::preview_ua;
use crate::utils::VersionExtractor;

/// 移动端标记
const MOBILE_MARKER: &str = "Mobile";

/// 客户端解析器
#[derive(Debug, Clone)]
pub struct ClientParser {
    signatures: Arc<SignatureLibrary>,
    max_ua_length: Option<usize>,
}

impl Default for ClientParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientParser {
    /// 使用内置签名库
    pub fn new() -> Self {
        Self::with_signatures(BUILTIN_SIGNATURES.clone())
    }

    /// 使用自定义签名库
    pub fn with_signatures(signatures: Arc<SignatureLibrary>) -> Self {
        Self {
            signatures,
            max_ua_length: None,
        }
    }

    /// 设置 UA 最大处理长度
    pub fn max_ua_length(mut self, max_len: Option<usize>) -> Self {
        self.max_ua_length = max_len;
        self
    }

    /// 解析 UA
    pub fn parse(&self, user_agent: &str) -> Client {
        let ua = match self.max_ua_length {
            Some(max_len) => truncate_at_char_boundary(user_agent, max_len),
            None => user_agent,
        };

        let mut client = Client::default();

        // 1. 浏览器
        if let Some((sig, captures)) = self.signatures.match_browser(ua) {
            client.browser = sig.family;
            client.browser_version = VersionExtractor::browser(&captures);
            trace!(
                "浏览器签名命中：{} {}，规则={}",
                client.browser,
                client.browser_version,
                sig.regex.as_str()
            );
        }

        // 2. 移动端
        client.is_mobile = ua.contains(MOBILE_MARKER);

        // 3. 操作系统
        if let Some((sig, captures)) = self.signatures.match_os(ua) {
            client.os = sig.family;
            client.os_version = VersionExtractor::os(&captures, sig.normalizer);
            trace!(
                "系统签名命中：{} {}，规则={}",
                client.os,
                client.os_version,
                sig.regex.as_str()
            );
        }

        trace!("UA解析完成：{} <- {}", client, preview_ua(ua));
        client
    }
}

/// 按字节上限截断，向下对齐到 UTF-8 字符边界
fn truncate_at_char_boundary(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
