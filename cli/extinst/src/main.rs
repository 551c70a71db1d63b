//! extinst CLI — inspect the extended instruction set registry.

mod commands;
mod config;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use config::Config;

#[derive(Parser)]
#[command(name = "extinst", version, about = "Extended instruction set registry inspector")]
struct Cli {
    /// Configuration file (default: nearest extinst.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List target environments and the table family each one uses
    Envs,
    /// Resolve an OpExtInstImport name to its instruction set
    Import {
        /// Import name (e.g., GLSL.std.450)
        name: String,
    },
    /// Look up one instruction by name or opcode
    Lookup {
        /// Import name of the instruction set
        import: String,
        /// Instruction name
        #[arg(long, conflicts_with = "opcode", required_unless_present = "opcode")]
        name: Option<String>,
        /// Instruction opcode
        #[arg(long)]
        opcode: Option<u32>,
        /// Target environment (e.g., vulkan1.0, opencl2.2)
        #[arg(long)]
        target: Option<String>,
    },
    /// Dump the table for a target environment
    Dump {
        /// Target environment (e.g., vulkan1.0, opencl2.2)
        #[arg(long)]
        target: Option<String>,
        /// Output format (text, json, toml)
        #[arg(long)]
        format: Option<String>,
    },
    /// Check a table's name and opcode invariants
    Check {
        /// Target environment (default: every environment)
        #[arg(long)]
        target: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| run(cli, &cwd));
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Dispatch `cli`, searching upward from `cwd` for a config file when a
/// command needs one. `envs` and `import` never read configuration.
fn run(cli: Cli, cwd: &Path) -> anyhow::Result<()> {
    match cli.command {
        Commands::Envs => commands::envs::run(),

        Commands::Import { name } => commands::import::run(&name),

        Commands::Lookup {
            import,
            name,
            opcode,
            target,
        } => {
            let config = load_config(cli.config.as_deref(), cwd)?;
            let env = config.resolve_target(target.as_deref())?;
            let key = match (name, opcode) {
                (Some(name), _) => commands::lookup::Key::Name(name),
                (None, Some(opcode)) => commands::lookup::Key::Opcode(opcode),
                (None, None) => anyhow::bail!("specify --name <NAME> or --opcode <OPCODE>"),
            };
            commands::lookup::run(env, &import, &key)
        }

        Commands::Dump { target, format } => {
            let config = load_config(cli.config.as_deref(), cwd)?;
            let env = config.resolve_target(target.as_deref())?;
            commands::dump::run(env, config.resolve_format(format.as_deref()))
        }

        Commands::Check { target } => {
            let env = match target {
                Some(name) => {
                    let config = load_config(cli.config.as_deref(), cwd)?;
                    Some(config.resolve_target(Some(name.as_str()))?)
                }
                None => None,
            };
            commands::check::run(env)
        }
    }
}

/// Load the explicit config file, or the nearest `extinst.toml` above `cwd`,
/// or defaults.
fn load_config(path: Option<&Path>, cwd: &Path) -> anyhow::Result<Config> {
    if let Some(path) = path {
        return Config::load(path);
    }
    Ok(Config::find_and_load(cwd)?
        .map(|(config, _)| config)
        .unwrap_or_default())
}
