use clap::Parser;
use std::process::ExitCode;
use zssd_check::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    zssd_check::logging::init(cli.verbose);

    match zssd_check::run(&cli) {
        Ok(pure) => {
            println!("{}", zssd_check::summary_line(pure));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
