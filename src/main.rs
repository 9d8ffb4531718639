// ==========================================
// 仓储货位优化系统 - 命令行入口
// ==========================================
// 用法:
//   warehouse-slotting demo [--json] [--log-json] [--config <path>]
//   warehouse-slotting run <items.csv> <orders.csv> [--json] [--log-json] [--config <path>]
// ==========================================

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use warehouse_slotting::app::render;
use warehouse_slotting::app::{AppState, SeedSummary};
use warehouse_slotting::domain::{InventoryRow, ProcessOutcome, ZoneSummary};
use warehouse_slotting::importer::{read_items_file, read_orders_file};
use warehouse_slotting::{logging, APP_NAME, VERSION};

const USAGE: &str = "\
用法:
  warehouse-slotting demo [--json] [--log-json] [--config <path>]
  warehouse-slotting run <items.csv> <orders.csv> [--json] [--log-json] [--config <path>]

物品文件列: name,frequency,size
订单文件列: order_id,priority,item_name,quantity";

/// 数据来源
enum Command {
    Demo,
    Run { items: PathBuf, orders: PathBuf },
}

struct CliArgs {
    command: Command,
    json: bool,
    log_json: bool,
    config: Option<PathBuf>,
}

/// JSON 模式输出
#[derive(Serialize)]
struct RunReport {
    seed: SeedSummary,
    outcomes: Vec<ProcessOutcome>,
    inventory: Vec<InventoryRow>,
    zone_summary: ZoneSummary,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs> {
    let mut positional = Vec::new();
    let mut json = false;
    let mut log_json = false;
    let mut config = None;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--log-json" => log_json = true,
            "--config" => {
                let path = iter.next().context("--config 缺少路径参数")?;
                config = Some(PathBuf::from(path));
            }
            "-h" | "--help" => bail!("{}", USAGE),
            _ => positional.push(arg),
        }
    }

    let command = match positional.as_slice() {
        [cmd] if cmd == "demo" => Command::Demo,
        [cmd, items, orders] if cmd == "run" => Command::Run {
            items: PathBuf::from(items),
            orders: PathBuf::from(orders),
        },
        _ => bail!("参数无效\n{}", USAGE),
    };

    Ok(CliArgs {
        command,
        json,
        log_json,
        config,
    })
}

fn main() -> Result<()> {
    let args = parse_args(std::env::args().skip(1))?;

    if args.log_json {
        logging::init_json();
    } else {
        logging::init();
    }

    tracing::info!("==================================================");
    tracing::info!("{} v{}", APP_NAME, VERSION);
    tracing::info!("==================================================");

    let mut state =
        AppState::new(args.config.as_deref()).context("无法初始化AppState")?;

    let seed = match &args.command {
        Command::Demo => state.load_sample(),
        Command::Run { items, orders } => {
            let items = read_items_file(items)
                .with_context(|| format!("物品文件导入失败: {}", items.display()))?;
            let orders = read_orders_file(orders)
                .with_context(|| format!("订单文件导入失败: {}", orders.display()))?;
            let seed = state.seed_items(&items);
            state.enqueue_orders(orders);
            seed
        }
    };

    let api = &mut state.warehouse_api;
    let threshold = api.config().hot_threshold;

    if !args.json {
        print!("{}", render::render_layout(api)?);
        print!("{}", render::render_zone_summary(&api.zone_summary(), threshold));
        print!("{}", render::render_queue_status(&api.queue_status()));
    }

    let outcomes = api.process_all_orders()?;

    if args.json {
        let report = RunReport {
            seed,
            outcomes,
            inventory: api.inventory()?,
            zone_summary: api.zone_summary(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for outcome in &outcomes {
            print!("{}", render::render_outcome(outcome));
        }
        println!("\nAll orders done!");
        print!("{}", render::render_inventory(api)?);
        print!("{}", render::render_zone_summary(&api.zone_summary(), threshold));
    }

    tracing::info!(
        actions = api.action_logs().len(),
        events = state.events.events().len(),
        "运行结束"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_demo_with_flags() {
        let cli = parse_args(args(&["demo", "--json", "--log-json", "--config", "cfg.json"])).unwrap();
        assert!(matches!(cli.command, Command::Demo));
        assert!(cli.json);
        assert!(cli.log_json);
        assert_eq!(cli.config, Some(PathBuf::from("cfg.json")));
    }

    #[test]
    fn test_parse_run() {
        let cli = parse_args(args(&["run", "items.csv", "orders.csv"])).unwrap();
        match cli.command {
            Command::Run { items, orders } => {
                assert_eq!(items, PathBuf::from("items.csv"));
                assert_eq!(orders, PathBuf::from("orders.csv"));
            }
            Command::Demo => panic!("应解析为 run 命令"),
        }
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_args(args(&["run", "items.csv"])).is_err());
        assert!(parse_args(args(&["demo", "--config"])).is_err());
    }
}
