// Runs the built-in self-test suites.
// Usage: rollcall [--color auto|always|never] [--format text|json] [--log <filter>] [--list]

use std::process;

fn main() {
    process::exit(rollcall::cli::run());
}
