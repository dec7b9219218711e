//! uacaps - 命令行 UA 能力检测工具
//! 用法：
//!   uacaps "Mozilla/5.0 ... Chrome/90.0"
//!   cat uas.txt | uacaps --pretty
//!   uacaps --tables my_tables.json --merge "..."

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use browser_capabilities::{CapabilityDetector, ConfigManager};

#[derive(Debug, Parser)]
#[command(name = "uacaps", version, about = "根据 User-Agent 判定浏览器/系统及前端能力")]
struct Cli {
    /// 待检测的 UA，省略时从标准输入逐行读取
    user_agents: Vec<String>,

    /// 自定义能力表 JSON 文件
    #[arg(long, value_name = "FILE")]
    tables: Option<PathBuf>,

    /// 将 --tables 叠加到内置能力表上，而不是替换
    #[arg(long, requires = "tables")]
    merge: bool,

    /// 仅输出解析后的客户端信息
    #[arg(long)]
    client_only: bool,

    /// 格式化 JSON 输出
    #[arg(long)]
    pretty: bool,

    /// UA 最大处理长度
    #[arg(long, value_name = "BYTES")]
    max_length: Option<usize>,

    /// 输出详细日志
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ========== 1. 日志系统初始化 ==========
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    // ========== 2. 构建检测器 ==========
    let mut builder = ConfigManager::custom().verbose(cli.verbose);
    if let Some(path) = &cli.tables {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("读取能力表失败：{}", path.display()))?;
        builder = if cli.merge {
            builder.tables_json_overrides(json)
        } else {
            builder.tables_json(json)
        };
    }
    if let Some(max_len) = cli.max_length {
        builder = builder.max_ua_length(max_len);
    }
    let detector = CapabilityDetector::new(builder.build()).context("检测器初始化失败")?;

    // ========== 3. 逐条检测并输出 ==========
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.user_agents.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("读取标准输入失败")?;
            if line.trim().is_empty() {
                continue;
            }
            emit(&mut out, &detector, &cli, &line)?;
        }
    } else {
        for ua in &cli.user_agents {
            emit(&mut out, &detector, &cli, ua)?;
        }
    }

    Ok(())
}

fn emit(out: &mut impl Write, detector: &CapabilityDetector, cli: &Cli, user_agent: &str) -> Result<()> {
    let value = if cli.client_only {
        serde_json::to_value(detector.parse_client(user_agent))?
    } else {
        serde_json::to_value(detector.detect(user_agent))?
    };

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    writeln!(out, "{}", rendered)?;
    Ok(())
}
