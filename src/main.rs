//! # BASIC
//!
//! A line-numbered BASIC with a teletype style command shell.
//!

use basic::term::{self, Config};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "basic", version, about = "Line-numbered BASIC interpreter")]
struct Cli {
    /// Program to load at startup
    file: Option<String>,

    /// Run the loaded program and exit
    #[arg(long, requires = "file")]
    run: bool,

    /// Read commands from stdin without line editing
    #[arg(long)]
    plain: bool,

    /// Seed for RND
    #[arg(long, env = "BASIC_SEED", default_value_t = 0)]
    seed: u64,

    /// Start with TRON
    #[arg(long)]
    trace: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let code = term::main(Config {
        file: cli.file,
        run: cli.run,
        plain: cli.plain,
        seed: cli.seed,
        trace: cli.trace,
    });
    std::process::exit(code);
}
