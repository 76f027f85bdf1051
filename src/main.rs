use std::process::ExitCode;

fn main() -> ExitCode {
    httpsuite::app::run()
}
