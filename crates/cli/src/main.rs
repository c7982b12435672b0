//! encoderize - draw a line of text as ten SVG encodings, in light and dark mode

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    cli::run()
}
