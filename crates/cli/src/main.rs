use std::process::ExitCode;

fn main() -> ExitCode {
    babywear_cli::run()
}
