use std::process::ExitCode;

mod cli;
mod commands;
mod config;
mod display;
mod io;
mod logging;
mod util;

fn main() -> ExitCode {
    let cli = cli::parse();
    logging::init(cli.verbose);

    let quiet = match &cli.command {
        cli::Command::Render(args) => args.io.quiet,
        cli::Command::Fields(_) | cli::Command::Types => true,
    };
    let ctx = display::Context::new(quiet);

    if ctx.interactive {
        display::print_banner();
    }

    match commands::dispatch(cli.command, ctx) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            display::print_error(&e);
            ExitCode::FAILURE
        }
    }
}
