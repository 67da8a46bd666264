//! Demo binary: configures the process-wide logger and hammers it from a few
//! worker threads.

use std::{env, process, thread};

use rustylog::config::{Config, LoggerConfig};
use rustylog::log::{self, LogLevel};
use rustylog::{log_info, logger_log};

fn parse_count(arg: Option<&String>, default: usize, what: &str) -> usize {
    match arg {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            eprintln!("invalid {what}: {raw}");
            process::exit(1);
        }),
    }
}

fn main() {
    // --- Parse CLI args ----------------------------------------------------
    //
    // Supported:
    //   cargo run
    //      -> rustylog.conf if present, 4 threads x 5 messages
    //
    //   cargo run -- demo.conf
    //      -> explicit config file
    //
    //   cargo run -- demo.conf 8 100
    //      -> explicit config, 8 threads x 100 messages

    let args: Vec<String> = env::args().collect();
    if args.len() > 4 {
        eprintln!("Usage:");
        eprintln!("  {} [CONFIG] [THREADS] [MESSAGES]", args[0]);
        eprintln!();
        eprintln!("CONFIG is an INI file with a [Logging] section:");
        eprintln!("  log_file = path/to/app.log   (empty: console)");
        eprintln!("  buffer_size = 1024           (bytes)");
        process::exit(1);
    }

    let config_path = args.get(1).map_or("rustylog.conf", String::as_str);
    let threads = parse_count(args.get(2), 4, "thread count");
    let messages = parse_count(args.get(3), 5, "message count");

    // --- Configure process logger ------------------------------------------
    let config = Config::load(config_path).unwrap_or_else(|e| {
        eprintln!("Error loading config: {e}. Using empty config.");
        Config::empty()
    });

    let logger_config = LoggerConfig::from_config(&config).unwrap_or_else(|e| {
        eprintln!("{e}. Using default logger settings.");
        LoggerConfig::default()
    });

    let logger = log::instance();
    if let Err(e) = logger.apply_config(&logger_config) {
        eprintln!("[rustylog] {e}; logging to console");
    }

    log_info!("starting {threads} workers x {messages} messages");

    // --- Run workers --------------------------------------------------------
    let workers: Vec<_> = (0..threads)
        .map(|worker| {
            let handle = logger.clone();
            thread::spawn(move || {
                for i in 0..messages {
                    let level = LogLevel::ALL[i % LogLevel::ALL.len()];
                    logger_log!(handle, level, "worker {worker} message {i}");
                }
            })
        })
        .collect();

    for w in workers {
        if w.join().is_err() {
            logger.error("worker thread panicked");
        }
    }

    log_info!("all workers done");

    if let Err(e) = logger.shutdown() {
        eprintln!("[rustylog] {e}");
        process::exit(1);
    }
}
