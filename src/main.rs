use clap::Parser;
use hexatlas::cli::{Cli, Commands};
use hexatlas::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new(cli.quiet);

    match cli.command {
        Commands::Build(args) => hexatlas::cli::build::run(args, &printer)?,
        Commands::Validate(args) => hexatlas::cli::validate::run(args, &printer)?,
        Commands::Completions(args) => hexatlas::cli::completions::run(args)?,
    }

    Ok(())
}
