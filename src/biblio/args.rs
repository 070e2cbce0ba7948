use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "biblio")]
#[command(about = "Track a small library's books, patrons, and loans", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Library name for this session (overrides the config file)
    #[arg(short, long, global = true)]
    pub name: Option<String>,

    /// Books one patron may hold at once (overrides the config file)
    #[arg(short, long, global = true)]
    pub limit: Option<usize>,

    /// Start with an empty catalog instead of the sample data
    #[arg(long, global = true)]
    pub empty: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive menu (the default when no subcommand is given)
    #[command(alias = "sh")]
    Shell,

    /// Scripted walkthrough of the lending workflow
    Demo,
}
