//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use huffrune::tools::cli::{huffopts_init, Mode, LOG_ENV};
use huffrune::{compress, decompress, CodecError};

use log::{error, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    let options = huffopts_init();

    // Available log levels are Off, Error, Warn, Info, Debug, Trace (set through HUFFRUNE_LOG)
    if let Err(e) = TermLogger::init(
        options.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Could not start logging: {}", e);
    }
    info!(
        "huffrune {}: {} {} (log level {} from {})",
        env!("CARGO_PKG_VERSION"),
        options.op_mode,
        options.file.display(),
        options.log_level,
        LOG_ENV
    );

    //----- Figure how what we need to do and go do it
    let result = match options.op_mode {
        Mode::Zip => compress(&options),
        Mode::Unzip => decompress(&options),
    };

    std::process::exit(exit_code(&result));
}

/// Log how the run ended and pick the process exit status. The error is reported here only.
fn exit_code(result: &Result<(), CodecError>) -> i32 {
    match result {
        Ok(()) => {
            info!("Done.");
            0
        }
        Err(e) => {
            error!("{}", e);
            1
        }
    }
}
