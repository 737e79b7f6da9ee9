//! Binary entrypoint for the reference diagram plugin.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

fn main() -> ExitCode {
    let stdin = io::stdin();
    let stdin_is_terminal = stdin.is_terminal();
    let mut reader = stdin.lock();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    diagram_plugin_example::run(
        std::env::args_os(),
        &mut reader,
        &mut stdout,
        &mut stderr,
        stdin_is_terminal,
    )
}
