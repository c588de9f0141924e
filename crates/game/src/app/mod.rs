use std::process::ExitCode;

mod bootstrap;
mod loop_runner;
mod settings;

pub(crate) fn run() -> ExitCode {
    match bootstrap::build_app() {
        Some(app) => loop_runner::run(app),
        None => ExitCode::FAILURE,
    }
}
