use clap::Parser;
use hexsweep::{DumpCli, run_dump};

fn main() {
    #[cfg(unix)]
    hexsweep::reset_sigpipe();

    let cli = DumpCli::parse();

    if let Err(e) = run_dump(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
