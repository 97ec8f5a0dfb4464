// ==========================================
// 餐厅点单系统 - 命令行入口
// ==========================================
// 用法:
//   restaurant-status <domain> <code> [--locale <loc>] [--description] [--user <id>]
//   restaurant-status list <domain> [--locale <loc>]
// 输出: JSON（展示元数据 + 徽标片段）
// ==========================================

use anyhow::{bail, Context};
use restaurant_status::api::{map_api_error, RequestContext};
use restaurant_status::{logging, AppState};
use serde_json::json;

/// 命令行子命令
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Show { domain: String, code: String },
    List { domain: String },
}

/// 命令行参数
#[derive(Debug, PartialEq, Eq)]
struct CliArgs {
    command: Command,
    locale: String,
    include_description: bool,
    user: Option<String>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<CliArgs> {
    let mut positional = Vec::new();
    let mut locale = String::new();
    let mut include_description = false;
    let mut user = None;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--locale" => locale = iter.next().context("--locale 需要参数")?,
            "--user" => user = Some(iter.next().context("--user 需要参数")?),
            "--description" => include_description = true,
            flag if flag.starts_with("--") => bail!("未知参数: {}", flag),
            _ => positional.push(arg),
        }
    }

    let command = match positional.as_slice() {
        [list, domain] if list == "list" => Command::List {
            domain: domain.clone(),
        },
        [domain, code] => Command::Show {
            domain: domain.clone(),
            code: code.clone(),
        },
        _ => bail!(
            "用法: restaurant-status <domain> <code> [--locale <loc>] [--description] \
             [--user <id>]\n      restaurant-status list <domain> [--locale <loc>]"
        ),
    };

    Ok(CliArgs {
        command,
        locale,
        include_description,
        user,
    })
}

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    let args = parse_args(std::env::args().skip(1))?;
    tracing::info!("{} v{}", restaurant_status::APP_NAME, restaurant_status::VERSION);

    let state = AppState::from_env().context("配置加载失败")?;

    let mut ctx = RequestContext::new(args.locale);
    if let Some(user) = args.user {
        ctx = ctx.with_user(user);
    }

    let output = match &args.command {
        Command::Show { domain, code } => {
            let api = &state.status_api;
            let result = api.get_status_display(&ctx, domain, code).and_then(|display| {
                let badge = api.get_badge(&ctx, domain, code, args.include_description)?;
                let row_class = api.get_row_class(&ctx, domain, code)?;
                Ok(json!({ "display": display, "badge": badge, "row_class": row_class }))
            });
            result.map_err(|e| anyhow::anyhow!(map_api_error(e)))?
        }
        Command::List { domain } => {
            let statuses = state
                .status_api
                .list_statuses(&ctx, domain)
                .map_err(|e| anyhow::anyhow!(map_api_error(e)))?;
            json!(statuses)
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
