use anyhow::Result;
use clap::Parser;
use tab_shuttle::cli::{self, Cli};
use tokio::runtime::Runtime;

fn main() -> Result<()> {
    let args = Cli::parse();

    // CLI --log-level takes precedence, then RUST_LOG, then settings (applied later)
    tab_shuttle::debug::init_log_bridge(args.log_level.map(cli::LogLevelArg::to_level_filter));

    log::info!("Starting tab-shuttle {}", tab_shuttle::VERSION);

    let runtime = Runtime::new()?;
    match runtime.block_on(cli::run(args)) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(e) => {
            eprintln!("tab-shuttle: error: {e:#}");
            Err(e)
        }
    }
}
