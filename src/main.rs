use anyhow::{Context, Result};
use clap::Parser;
use solarsim::config::Args;
use std::fs::File;

fn main() -> Result<()> {
    let args = Args::parse();

    // logs go to a file when asked; stderr would scribble over the alternate screen
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut logger = env_logger::Builder::from_env(env);
    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        logger.target(env_logger::Target::Pipe(Box::new(file)));
    }
    logger.init();

    let settings = args.settings()?;
    log::info!("starting with {settings:?}");
    solarsim::app::run(settings)
}
