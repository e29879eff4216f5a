//! makemkv-rs command line binary

use clap::Parser;
use makemkv::cli::{self, Cli};
use makemkv::exit_codes::*;
use makemkv::logger::{self, JsonLogger};
use std::{env, panic, process};

fn main() {
    // Set up panic handler to return specific exit code
    panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC: {}", panic_info);
        process::exit(EXIT_PANIC);
    }));

    let result = panic::catch_unwind(run);

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(_) => {
            eprintln!("Fatal: Unhandled panic in makemkv-rs");
            process::exit(EXIT_PANIC);
        }
    }
}

fn run() -> i32 {
    // Handle --version before clap so build details are included
    if env::args().nth(1).as_deref() == Some("--version") {
        println!("makemkv-rs {}", makemkv::version::full_version());
        return EXIT_SUCCESS;
    }

    let args = Cli::parse();
    let common = args.command.common();
    JsonLogger::init_with_spec(logger::cli_spec(common.verbose, common.quiet));

    log::debug!("🚀 makemkv-rs {} started", makemkv::version::VERSION);
    log::trace!("📋 Arguments: {:?}", args);

    cli::execute(&args.command)
}
