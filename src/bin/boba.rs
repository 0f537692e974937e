use std::env;
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// T-cycles in one 154-scanline frame (154 * 456).
const CYCLES_PER_FRAME: u32 = 70224;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <rom_path>", args[0]);
        return ExitCode::FAILURE;
    }
    let rom_path = &args[1];

    let rom_data = match fs::read(rom_path) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("failed to read ROM '{}': {}", rom_path, err);
            return ExitCode::FAILURE;
        }
    };

    let mut emulator = match boba::Emulator::new(&rom_data) {
        Ok(emulator) => emulator,
        Err(err) => {
            eprintln!("failed to initialize emulator: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let shutdown_requested = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&shutdown_requested);
    if let Err(err) = ctrlc::set_handler(move || handler_flag.store(true, Ordering::Relaxed)) {
        eprintln!("failed to install shutdown signal handler: {}", err);
        return ExitCode::FAILURE;
    }

    let mut serial_drained = 0usize;
    while !shutdown_requested.load(Ordering::Relaxed) {
        if let Err(err) = emulator.run_cycles(CYCLES_PER_FRAME) {
            eprintln!("emulator halted: {}", err);
            return ExitCode::FAILURE;
        }

        let serial_output = emulator.serial_output();
        if serial_output.len() > serial_drained {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            let _ = handle.write_all(&serial_output[serial_drained..]);
            let _ = handle.flush();
            serial_drained = serial_output.len();
        }
    }

    ExitCode::SUCCESS
}
