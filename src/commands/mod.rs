pub mod calc;
pub mod diff;
pub mod init;
pub mod session;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Start an interactive session to log and total records")]
    Session(session::SessionArgs),
    #[command(about = "Total active and leave time from a CSV or JSON record file", arg_required_else_help = true)]
    Calc(calc::CalcArgs),
    #[command(about = "Show the calendar difference between two dates", arg_required_else_help = true)]
    Diff(diff::DiffArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Session(args) => session::cmd(args),
            Commands::Calc(args) => calc::cmd(args),
            Commands::Diff(args) => diff::cmd(args),
        }
    }
}
