//! Todalu interpreter CLI.

use todaluc::commands::{run_file, run_repl, DriverOptions};

fn main() {
    todaluc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let mut options = DriverOptions::default();
    let mut file_path = None;

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "help" | "--help" | "-h" => {
                print_usage();
                return;
            }
            "version" | "--version" | "-v" => {
                println!("Todalu {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            "--no-prelude" => options.prelude = false,
            _ if arg.starts_with('-') => {
                eprintln!("Unknown option: {arg}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
            _ if file_path.is_none() => file_path = Some(arg.as_str()),
            _ => {
                eprintln!("error: only one source file may be given");
                std::process::exit(1);
            }
        }
    }

    let status = match file_path {
        Some(path) => run_file(path, options),
        None => run_repl(options),
    };
    std::process::exit(status);
}

fn print_usage() {
    println!("Todalu interpreter");
    println!();
    println!("Usage: todalu [options] [file]");
    println!();
    println!("With no file, starts an interactive session.");
    println!();
    println!("Options:");
    println!("  --no-prelude        Do not load the built-in definitions");
    println!("  help, --help, -h    Show this help message");
    println!("  version, --version  Show version information");
}
