//! CLI entry point for scratch card rounds

use clap::Parser;
use scratchgrid::io::cli::{Cli, RoundRunner};
use scratchgrid::io::logging::init_logging;

fn main() -> scratchgrid::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    let output = RoundRunner::new(cli).run()?;

    // Allow print for the JSON result, which is the program's output
    #[allow(clippy::print_stdout)]
    {
        println!("{output}");
    }
    Ok(())
}
