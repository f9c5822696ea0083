mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand, ValueEnum};
use lvars_core::store::parse_assignment;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "lvars", version, about = "Typed access to host local variables")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    /// Set or override a variable (repeatable)
    #[arg(long = "var", global = true, value_name = "NAME=VALUE", value_parser = parse_var)]
    vars: Vec<(String, String)>,

    /// Seed the random source (overrides the profile seed)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print the resolved profile
    Doctor,

    /// List the variables visible to the active profile
    List(ListArgs),

    /// Convert a variable to a typed value and print it
    Get(GetArgs),

    /// Run presence, file, and directory checks on a variable
    Check(CheckArgs),
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Doctor => "doctor",
            Commands::List(_) => "list",
            Commands::Get(_) => "get",
            Commands::Check(_) => "check",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Conversion {
    /// Raw value
    Text,
    /// true / false
    Bool,
    /// Base-10 integer
    Int,
    /// Separator-delimited list
    List,
    /// Lines of the file the value points at
    Lines,
    /// Random integer from "<min>-<max>" or "<bound>"
    Random,
    /// Spintax expansion
    Spin,
}

#[derive(Debug, Args)]
pub struct GetArgs {
    /// Variable name
    pub name: String,

    #[arg(long = "as", value_enum, default_value = "text")]
    pub conversion: Conversion,

    /// List separator (defaults to the profile separator)
    #[arg(long)]
    pub sep: Option<char>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Variable name
    pub name: String,

    /// Require a non-blank value (the default when no other check is given)
    #[arg(long)]
    pub non_empty: bool,

    /// Message reported when the value is blank
    #[arg(long)]
    pub message: Option<String>,

    /// Require the value to name an existing file
    #[arg(long)]
    pub file: bool,

    /// Require the value to name an existing directory
    #[arg(long, conflicts_with = "file")]
    pub dir: bool,

    /// Accept an empty file or directory
    #[arg(long)]
    pub allow_empty: bool,
}

fn parse_var(s: &str) -> Result<(String, String), String> {
    parse_assignment(s).map_err(|e| e.to_string())
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let name = cli.command.name();

    let result = match cli.command {
        Commands::Doctor => cmd::doctor::run(cli.config.as_deref(), cli.profile.as_deref()),
        Commands::List(ref args) => cmd::host(&cli).and_then(|host| cmd::list::run(&host, args)),
        Commands::Get(ref args) => cmd::host(&cli).and_then(|mut host| cmd::get::run(&mut host, args)),
        Commands::Check(ref args) => {
            cmd::host(&cli).and_then(|host| cmd::check::run(&host, args))
        }
    };

    if let Err(e) = result {
        eprintln!("FAIL lvars {name}");
        eprintln!("{e}");
        for cause in e.chain().skip(1) {
            eprintln!("caused by: {cause}");
        }
        std::process::exit(1);
    }
    Ok(())
}
