//! `cxxscan` binary.

use cxxscan::{init_tracing, parse_args, run, Invocation, USAGE};

fn main() {
    let invocation = match parse_args(std::env::args().skip(1)) {
        Ok(invocation) => invocation,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("Run `cxxscan --help` for usage.");
            std::process::exit(err.exit_code());
        }
    };

    let args = match invocation {
        Invocation::Help => {
            println!("{USAGE}");
            return;
        }
        Invocation::Scan(args) => args,
    };

    init_tracing();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = run(&args, &mut out) {
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }
}
