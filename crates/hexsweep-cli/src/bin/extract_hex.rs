use clap::Parser;
use hexsweep::{ColorsCli, run_colors};

fn main() {
    #[cfg(unix)]
    hexsweep::reset_sigpipe();

    let cli = ColorsCli::parse();

    if let Err(e) = run_colors(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
