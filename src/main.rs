use clap::Parser;
use stockprofit::cli::{run, Cli};
use stockprofit::logging;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    logging::init(&cli.log_level);
    run(cli)
}
