//! Text driver for the Jazzcube cube-state engine.

mod cli;
mod render;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    cli::exec(args)
}
