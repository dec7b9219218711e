//! 日志格式化工具：UA 预览与能力集合压缩输出

use std::collections::BTreeSet;
use std::fmt::{self, Write};

/// 日志中 UA 预览的默认最大字符数
pub const UA_PREVIEW_LEN: usize = 96;

/// 空白字符折叠 + 截断，零堆分配，遍历到最大长度立即终止
#[inline(always)]
pub fn preview_compact<'a>(s: &'a str, max_len: usize) -> impl fmt::Display + 'a {
    struct CompactView<'a> {
        source: &'a str,
        max_length: usize,
    }

    impl fmt::Display for CompactView<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut char_count = 0;
            let mut last_was_whitespace = false;

            for ch in self.source.chars() {
                if char_count >= self.max_length {
                    f.write_str("…")?;
                    break;
                }

                if ch.is_whitespace() {
                    if !last_was_whitespace {
                        f.write_char(' ')?;
                        char_count += 1;
                        last_was_whitespace = true;
                    }
                } else {
                    f.write_char(ch)?;
                    char_count += 1;
                    last_was_whitespace = false;
                }
            }
            Ok(())
        }
    }

    CompactView {
        source: s,
        max_length: max_len,
    }
}

/// UA 预览（默认长度）
#[inline]
pub fn preview_ua(user_agent: &str) -> impl fmt::Display + '_ {
    preview_compact(user_agent, UA_PREVIEW_LEN)
}

/// 能力集合日志格式：[a, b, c]，空集合输出 [empty]
pub fn format_capabilities(capabilities: &BTreeSet<String>) -> String {
    if capabilities.is_empty() {
        return "[empty]".to_string();
    }

    let mut result = String::with_capacity(capabilities.len() * 12 + 2);
    result.push('[');
    for (idx, name) in capabilities.iter().enumerate() {
        if idx > 0 {
            result.push_str(", ");
        }
        result.push_str(name);
    }
    result.push(']');
    result
}
