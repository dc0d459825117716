use std::process::ExitCode;

fn main() -> ExitCode {
    clipclean::cli::run()
}
