mod cli;
mod columns;
mod config;
mod error;
mod menu;
mod runner;
mod stack;
mod table;
mod tools;

use std::path::Path;
use std::process::ExitCode;
use tracing::{Level, debug, warn};
use tracing_subscriber::EnvFilter;

use cli::{Commands, StackCommand};
use config::Config;
use error::Error;
use menu::Format;
use runner::SystemExec;
use tools::Tool;

fn main() -> ExitCode {
    let cli = cli::decode(std::env::args_os()).unwrap_or_else(|err| err.exit());
    init_logging(cli.verbose);
    if let Some(kind) = cli.rejected {
        debug!(?kind, "arguments not understood, rendering the menu");
    }

    let config_path = cli.config.as_deref();
    let result = match cli.command {
        Some(Commands::Info) => print_info(config_path),
        Some(Commands::Init { global }) => create_config(global),
        Some(Commands::Stack(command)) => run_action(command, config_path),
        Some(Commands::Unknown(args)) => {
            debug!(?args, "unrecognized mode, rendering the menu");
            render(config_path, cli.format)
        }
        None => render(config_path, cli.format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[docker-bar] error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; stdout is read by the menu-bar host.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::try_from_env("DOCKER_BAR_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("docker_bar={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Render mode never fails on configuration: the problem becomes the menu.
fn render(config_path: Option<&Path>, format: Format) -> Result<(), Error> {
    let settings = match Config::load(config_path).and_then(|config| config.settings()) {
        Ok(settings) => settings,
        Err(err) => {
            warn!(%err, "configuration unusable");
            let entries = menu::builder::config_error(&err);
            print!("{}", menu::serialize(&entries, format)?);
            return Ok(());
        }
    };

    let exec = SystemExec::new(&settings);
    let plugin = std::env::current_exe()?;
    let tool = tools::menu::MenuTool::new(settings, plugin, format);
    print!("{}", tool.run(&exec)?);
    Ok(())
}

fn run_action(command: StackCommand, config_path: Option<&Path>) -> Result<(), Error> {
    let settings = Config::load(config_path)?.settings()?;
    let exec = SystemExec::new(&settings);

    debug!(?command, "running action");
    let output = tools::select(command).run(&exec)?;
    println!("{output}");
    Ok(())
}

fn print_info(config_path: Option<&Path>) -> Result<(), Error> {
    let show = |path: Option<std::path::PathBuf>| {
        path.map_or_else(|| "(unavailable)".to_string(), |p| p.display().to_string())
    };

    println!("[docker-bar info]");
    println!("  version: {}", env!("CARGO_PKG_VERSION"));
    println!("  global config: {}", show(config::global_config_path()));
    println!("  plugin config: {}", show(config::local_config_path()));
    if let Some(path) = config_path {
        println!("  explicit config: {}", path.display());
    }

    let cfg = Config::load(config_path)?;
    println!("  docker_path: {}", show(cfg.docker_path.clone()));
    println!("  compose_dir: {}", show(cfg.compose_dir.clone()));
    println!("  all_containers: {}", cfg.all_containers);
    println!("  max_column_width: {}", cfg.max_column_width);
    println!("  name_pattern: {}", cfg.name_pattern);
    println!("  column_offsets: {:?}", cfg.column_offsets);
    match cfg.settings() {
        Ok(_) => println!("  status: ok"),
        Err(err) => println!("  status: {err}"),
    }
    Ok(())
}

fn create_config(global: bool) -> Result<(), Error> {
    let path = if global {
        config::global_config_path()
    } else {
        config::local_config_path()
    }
    .ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "could not determine the config location",
        )
    })?;

    if path.exists() {
        println!("[docker-bar] config already exists: {}", path.display());
        return Ok(());
    }

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(&path, Config::default_toml())?;
    println!("[docker-bar] created {}", path.display());
    Ok(())
}
