use std::path::Path;

use clap::Parser;
use scribe::{
    cli::{Args, Commands},
    config::Config,
    errors::ScribeError,
    logo::{create_logo, FONT_PATH, LOGO_PATH},
    probe::run_probe,
    server::serve,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = Config::load();
    let res = match args.command {
        Commands::Serve { addr } => run_server(config, &addr),
        Commands::Probe => run_probe(&config, &mut std::io::stdout()),
        Commands::Logo => create_logo(Path::new(LOGO_PATH), Path::new(FONT_PATH)).map(|_| {
            println!("Logo created successfully!");
        }),
    };
    res.unwrap_or_else(|e| {
        // The probe has already printed its own instructions.
        if !matches!(e, ScribeError::MissingApiKey) {
            eprintln!("{}", e);
        }
        std::process::exit(1);
    });
}

fn run_server(config: Config, addr: &str) -> Result<(), ScribeError> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(serve(config, addr))
}
