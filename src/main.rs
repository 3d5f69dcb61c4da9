use clap::Parser;

use minicalc::selftest;

/// Simple command-line calculator supporting `+`, `-`, `*`, `/` and
/// the interactive commands `help`, `clear`, `exit`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Run the built-in self-tests and exit.
    #[arg(long)]
    test: bool,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if args.test {
        let ok = selftest::run();
        std::process::exit(if ok { 0 } else { 1 });
    }

    if let Err(e) = minicalc::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
