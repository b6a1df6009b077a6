use std::process::ExitCode;

use propmap::ui::output;

fn main() -> ExitCode {
    match propmap::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
