use clap::Parser;
use nook::cli::commands::Cli;
use nook::cli::handlers;
use nook::io::config_io;
use nook::logging;

fn main() {
    let cli = Cli::parse();
    let data_dir = cli.data_dir.clone().unwrap_or_else(config_io::data_dir);

    if let Err(e) = logging::init(&data_dir) {
        eprintln!("warning: logging disabled: {}", e);
    }

    let config_path = cli.config.clone().unwrap_or_else(config_io::config_path);
    let config = match config_io::read_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        // No subcommand → launch the dashboard
        None => nook::tui::run(&data_dir, config),
        Some(command) => handlers::dispatch(command, &data_dir, config, cli.json),
    };
    if let Err(e) = result {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
