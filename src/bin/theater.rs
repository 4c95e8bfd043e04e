//! 剧院排队仿真
//!
//! 读入收银员 / 零食售卖员 / 检票员人数，运行到截止时间，输出平均等待时间。

use clap::Parser;
use serde::Serialize;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use theater_sim::theater::{SeededRandom, SimulationConfig, TheaterError, simulate, staffing_or_default};
use tracing::error;

#[derive(Debug, Parser)]
#[command(name = "theater", about = "剧院仿真：收银 -> 检票 -> (零食) -> 入座，输出平均等待时间")]
struct Args {
    /// 收银员人数；三项人数任一非数字时整体退回 1/1/1
    #[arg(long)]
    cashiers: Option<String>,

    /// 零食售卖员人数
    #[arg(long)]
    servers: Option<String>,

    /// 检票员人数
    #[arg(long)]
    ushers: Option<String>,

    /// JSON 配置文件（缺省字段取默认值）；提供时人数取自文件，不再交互询问
    #[arg(long)]
    config: Option<PathBuf>,

    /// 随机种子
    #[arg(long)]
    seed: Option<u64>,

    /// 仿真运行到多少分钟
    #[arg(long)]
    horizon: Option<f64>,

    /// 顾客到达间隔（分钟）
    #[arg(long)]
    arrival_interval: Option<f64>,

    /// t=0 时的顾客数
    #[arg(long)]
    initial_population: Option<u64>,

    /// 输出顾客事件追踪 JSON；不填则不生成
    #[arg(long)]
    trace_json: Option<PathBuf>,

    /// 输出运行报告 JSON（等待样本、资源统计）；不填则不生成
    #[arg(long)]
    report_json: Option<PathBuf>,
}

/// 仿真结束后要写出的文件
struct Outputs {
    trace_json: Option<PathBuf>,
    report_json: Option<PathBuf>,
}

/// 人数来源：命令行 > 配置文件 > 交互式询问
fn answer(prompt: &str, given: Option<String>, from_config: Option<u32>) -> io::Result<String> {
    if let Some(v) = given {
        return Ok(v);
    }
    if let Some(n) = from_config {
        return Ok(n.to_string());
    }
    let mut out = io::stdout();
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn build_config(args: Args) -> Result<(SimulationConfig, Outputs), Box<dyn std::error::Error>> {
    let (mut config, from_file) = match &args.config {
        Some(path) => (SimulationConfig::from_json_file(path)?, true),
        None => (SimulationConfig::default(), false),
    };

    let known = |n: u32| from_file.then_some(n);
    let cashiers = answer("Input # of cashiers working:", args.cashiers, known(config.cashier_count))?;
    let servers = answer("Input # of servers working:", args.servers, known(config.server_count))?;
    let ushers = answer("Input # of ushers working:", args.ushers, known(config.usher_count))?;
    config = config.with_staffing(staffing_or_default(&cashiers, &servers, &ushers));

    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(horizon) = args.horizon {
        config.horizon = horizon;
    }
    if let Some(interval) = args.arrival_interval {
        config.arrival_interval = interval;
    }
    if let Some(n) = args.initial_population {
        config.initial_population = n;
    }
    let outputs = Outputs {
        trace_json: args.trace_json,
        report_json: args.report_json,
    };
    Ok((config, outputs))
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    fs::write(path, json)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let (config, outputs) = match build_config(Args::parse()) {
        Ok(v) => v,
        Err(e) => {
            error!(error = %e, "配置无效");
            return ExitCode::FAILURE;
        }
    };

    let rng = Box::new(SeededRandom::new(config.seed));
    let report = match simulate(&config, rng, outputs.trace_json.is_some()) {
        Ok(r) => r,
        Err(e) => {
            error!(error = %e, "仿真失败");
            return ExitCode::FAILURE;
        }
    };

    if let (Some(path), Some(trace)) = (&outputs.trace_json, report.trace.as_ref()) {
        if let Err(e) = write_json(path, &trace.events) {
            error!(error = %e, path = %path.display(), "写追踪文件失败");
            return ExitCode::FAILURE;
        }
        eprintln!("wrote trace events to {}", path.display());
    }
    if let Some(path) = &outputs.report_json {
        if let Err(e) = write_json(path, &report) {
            error!(error = %e, path = %path.display(), "写报告文件失败");
            return ExitCode::FAILURE;
        }
        eprintln!("wrote run report to {}", path.display());
    }

    match report.summary() {
        Ok(summary) => {
            println!("Running simulation...\nThe average wait time is {summary}.");
            println!(
                "  seated={}, in_flight={}, spawned={}, final_time={}",
                report.stats.len(),
                report.in_flight,
                report.spawned,
                report.final_time
            );
            ExitCode::SUCCESS
        }
        Err(TheaterError::NoCompletedJourneys) => {
            error!(
                spawned = report.spawned,
                horizon = config.horizon,
                "截止时间前没有顾客入座，无法计算平均等待时间"
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            error!(error = %e, "统计失败");
            ExitCode::FAILURE
        }
    }
}
