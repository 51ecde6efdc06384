pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod services;
pub mod stats;
pub mod upstream;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::services::report::ReportService;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16, upstream: Option<String>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, upstream, config);
        service.run().await
    })
}

pub fn handle_report(file: Option<PathBuf>, upstream: Option<String>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ReportService::new(file, upstream, config);
        service.run().await
    })
}
