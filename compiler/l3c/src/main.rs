//! L3 translator CLI.

use std::path::PathBuf;

use l3_diagnostic::ErrorCode;
use l3c::{compile_file, explain, init_tracing, list_codes, parse_compile_options, CompileOptions};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "help" | "--help" | "-h" => print_usage(),
        "--version" | "-V" => println!("l3c {}", env!("CARGO_PKG_VERSION")),
        "--explain" => match args.get(2) {
            None => println!("{}", list_codes()),
            Some(code_str) => {
                let Ok(code) = code_str.parse::<ErrorCode>() else {
                    eprintln!("Unknown error code: {code_str}");
                    eprintln!("Run `l3c --explain` to list all codes.");
                    std::process::exit(1);
                };
                println!("{}", explain(code));
            }
        },
        input => {
            // Parse options, handling -o specially (needs lookahead)
            let mut options = CompileOptions::default();
            let mut i = 2;
            while i < args.len() {
                if args[i] == "-o" && i + 1 < args.len() {
                    options.output = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                } else {
                    let parsed = parse_compile_options(&args[i..=i]);
                    options.merge(&parsed);
                    i += 1;
                }
            }

            if let Err(err) = compile_file(input, &options) {
                eprintln!("{}", err.to_diagnostic_string());
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    eprintln!("Usage: l3c <input.json | -> [options]");
    eprintln!("       l3c --explain [code]");
    eprintln!();
    eprintln!("Reads a JSON-encoded L31/L2 AST and translates it.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --emit=<target>     l3 (lower classes, default) or python (render L2)");
    eprintln!("  --max-depth=<n>     Maximum expression nesting (default: 1000)");
    eprintln!("  -o <path>           Output file (default: stdout)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  RUST_LOG            Enable tracing, e.g. RUST_LOG=l3_lower=trace");
    eprintln!("  L3C_LOG_TREE        Show tracing as an indented span tree");
}
