use std::process::ExitCode;

use shunt::Mode;

fn main() -> ExitCode {
    shunt::main(Mode::Convert)
}
