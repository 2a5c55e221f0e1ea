pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod history;
pub mod rating;
pub mod report;
pub mod roster;
pub mod services;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::errors::read_context;
use crate::history::load_records;
use crate::roster::MemberId;
use crate::services::history::HistoryService;
use crate::services::roster::RosterService;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_roster(input: Option<&Path>, json: bool) -> Result<()> {
    let config = AppConfig::new();
    let service = RosterService::new(config.parser)?;
    let parsed = service.parse(&read_input(input)?);

    if json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
        return Ok(());
    }

    if parsed.entries.is_empty() {
        println!("No roster entries found. Paste id / name / rating lines, one per line.");
    } else {
        print!("{}", report::render_roster(&parsed.entries));
    }
    if !parsed.skipped.is_empty() {
        println!("\nSkipped {} lines:", parsed.skipped.len());
        print!("{}", report::render_skipped(&parsed.skipped));
    }
    Ok(())
}

pub fn handle_names(input: Option<&Path>) -> Result<()> {
    let config = AppConfig::new();
    let service = RosterService::new(config.parser)?;
    let names = service.names(&read_input(input)?);

    if names.is_empty() {
        println!("No member ids found.");
    } else {
        print!("{}", report::render_names(&names));
    }
    Ok(())
}

pub fn handle_adjust(
    reference: MemberId,
    losses: &[MemberId],
    input: Option<&Path>,
    json: bool,
) -> Result<()> {
    let config = AppConfig::new();
    let service = RosterService::new(config.parser)?;
    let outcomes: Vec<(MemberId, bool)> = losses.iter().map(|&id| (id, false)).collect();

    let summary = service.adjust(&read_input(input)?, reference, &outcomes)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", report::render_adjustments(&summary));
    }
    Ok(())
}

pub fn handle_history(
    csv: Option<&Path>,
    members: &[u32],
    roster: Option<&Path>,
    from: Option<i32>,
    to: Option<i32>,
    json: bool,
) -> Result<()> {
    let config = AppConfig::new();
    let csv_path = csv
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.history.csv_path.clone());
    let history = load_records(&csv_path)?;
    let service = HistoryService::new(&history, &config.history);

    let legend = match roster {
        Some(path) => {
            let roster_service = RosterService::new(config.parser.clone())?;
            let text = read_input(Some(path))?;
            let ids = roster_service.members(&text);
            roster_service.legend(&text, &ids)
        }
        None => {
            let ids = if members.is_empty() {
                service.default_members()
            } else {
                members.iter().copied().map(MemberId::new).collect()
            };
            ids.into_iter().map(|id| (id, id.to_string())).collect()
        }
    };

    let dashboard = service.report(legend, from, to);

    if json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
        return Ok(());
    }

    println!("レイティング 年平均比較表");
    print!("{}", report::render_yearly(&dashboard.yearly, &dashboard.legend));
    println!("\n最低・最高・最大変動");
    print!("{}", report::render_swings(&dashboard.swings, &dashboard.legend));
    if let Some((id, label)) = dashboard.legend.first() {
        println!("\n{} ({}) の詳細データ", label, id);
        print!("{}", report::render_member_detail(&dashboard.detail));
    }
    Ok(())
}

pub fn handle_serve(port: u16, csv: Option<PathBuf>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config, csv);
        service.run().await
    })
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).with_context(|| read_context(path)),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}
