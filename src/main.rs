// ==========================================
// AFOCS 电报生成系统 - 命令行入口
// ==========================================
// 输入: AFOCS 文本（文件或 stdin） + 表单参数
// 输出: 电报全文（stdout）
// ==========================================

use afocs_telex::config::ConfigManager;
use afocs_telex::{logging, TelexApi, TelexRequest, APP_NAME, VERSION};
use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "afocs-telex")]
#[command(about = "AFOCS 运行报文 → ULD 协调电报", long_about = None)]
#[command(version)]
struct Cli {
    /// AFOCS 文本文件（缺省读取 stdin）
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// 配置文件（JSON），缺省读取环境变量 AFOCS_TELEX_CONFIG
    #[arg(long)]
    config: Option<PathBuf>,

    /// 收件地址预设（NRT / HND）
    #[arg(short, long)]
    preset: Option<String>,

    /// 覆盖收件地址 1
    #[arg(long)]
    to1: Option<String>,
    /// 覆盖收件地址 2
    #[arg(long)]
    to2: Option<String>,
    /// 覆盖收件地址 3
    #[arg(long)]
    to3: Option<String>,
    /// 覆盖收件地址 4
    #[arg(long)]
    to4: Option<String>,
    /// 覆盖收件地址 5
    #[arg(long)]
    to5: Option<String>,
    /// 覆盖收件地址 6
    #[arg(long)]
    to6: Option<String>,

    /// 货物重量 (KG)
    #[arg(short, long, default_value = "")]
    weight: String,

    /// 货物 ULD 描述，无货物时为 NIL
    #[arg(long, default_value = "NIL")]
    cargo: String,

    /// 署名
    #[arg(short, long, default_value = "")]
    name: String,

    /// 行李 ULD 类型（AKE / ALF / AKH），缺省取配置
    #[arg(short, long)]
    bag_type: Option<String>,

    /// 每个 LD3 的旅客数，缺省取配置
    #[arg(long)]
    ratio_ake: Option<i32>,

    /// 每个 LD3-45 的旅客数，缺省取配置
    #[arg(long)]
    ratio_akh: Option<i32>,

    /// 以 JSON 输出（航班事实 + 行李需求 + 电报）
    #[arg(long)]
    json: bool,

    /// 打印生效配置后退出
    #[arg(long)]
    print_config: bool,

    /// 日志级别（RUST_LOG 优先）
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// 日志以 JSON 行输出
    #[arg(long)]
    log_json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // 初始化日志系统
    logging::init(&cli.log_level, cli.log_json);
    tracing::info!("{} v{}", APP_NAME, VERSION);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("错误: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let manager = ConfigManager::resolve(cli.config.as_deref()).context("加载配置失败")?;
    tracing::info!(source = %manager.source(), "配置来源");

    if cli.print_config {
        println!("{}", manager.to_json()?);
        return Ok(());
    }

    let mut request = manager
        .config()
        .request_template(cli.preset.as_deref())
        .context("构建请求失败")?;
    apply_overrides(&mut request, &cli);

    let afocs_text = read_input(cli.input.as_deref())?;
    let output = TelexApi::new()
        .generate(&afocs_text, &request)
        .context("电报生成失败")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", output.text);
    }
    Ok(())
}

/// 命令行参数覆盖配置默认值
fn apply_overrides(request: &mut TelexRequest, cli: &Cli) {
    let overrides = [&cli.to1, &cli.to2, &cli.to3, &cli.to4, &cli.to5, &cli.to6];
    for (slot, value) in request.addressees.iter_mut().zip(overrides) {
        if let Some(v) = value {
            *slot = v.trim().to_string();
        }
    }

    request.weight = cli.weight.trim().to_string();
    request.cargo_uld = cli.cargo.trim().to_string();
    request.name = cli.name.trim().to_string();

    if let Some(bag_type) = &cli.bag_type {
        request.bag_type = bag_type.trim().to_uppercase();
    }
    if let Some(ratio) = cli.ratio_ake {
        request.ratio_ake = ratio;
    }
    if let Some(ratio) = cli.ratio_akh {
        request.ratio_akh = ratio;
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => fs::read_to_string(p)
            .with_context(|| format!("读取 AFOCS 文本失败: {}", p.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("读取 stdin 失败")?;
            Ok(buf)
        }
    }
}
