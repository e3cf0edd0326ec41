//! Demo and stress driver: opens a rotated log file, hammers the logger from
//! N OS threads with a burst of leveled records (including deliberate
//! duplicates so the repeat collapsing is visible), dumps a small buffer, and
//! prints the log path for inspection.

use clap::Parser;
use relog::Logger;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::thread;

#[derive(Parser)]
#[command(
    name = "relog",
    version,
    about = "Write a burst of test records through the relog pipeline"
)]
struct Args {
    /// Directory for <app>.log; defaults to the platform state directory.
    #[arg(long)]
    dir: Option<String>,

    /// Application name used for the log and backup file names.
    #[arg(long, default_value = "relog")]
    app: String,

    /// Number of OS threads logging concurrently.
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Verbosity: -1 none, 0 normal, 1 debug, 2 debug-freemem.
    #[arg(long, default_value_t = 1)]
    verbosity: i32,
}

fn default_dir() -> String {
    directories::ProjectDirs::from("", "", "relog").map_or_else(
        || "logs".to_string(),
        |dirs| {
            dirs.state_dir()
                .unwrap_or_else(|| dirs.data_dir())
                .to_string_lossy()
                .into_owned()
        },
    )
}

/// One worker's burst. The duplicated debug and warning lines collapse into
/// repeat summaries when a single thread runs them back to back.
fn burst(log: &Logger) {
    log.debug("this is first line log");
    log.debug("this is first line log");
    log.notice("this is notice line log");
    log.info("this is info line log");
    log.warning("this is warning log msg");
    log.warning("this is warning log msg");
    log.error("this is error log msg");
    log.severe("this is severe log msg");
    log.fatal("fatal msg, app crash");

    log.mem_dump(b"0123456789abcdefghijklmnopqrstuvwxyz");
}

fn main() -> ExitCode {
    let args = Args::parse();

    let dir = args
        .dir
        .map_or_else(default_dir, |d| shellexpand::tilde(&d).into_owned());

    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("cannot create {dir}: {e}");
        return ExitCode::FAILURE;
    }

    let log = Arc::new(Logger::new());
    if let Err(e) = log.init(&dir, &args.app) {
        eprintln!("cannot open log file in {dir}: {e}");
        return ExitCode::FAILURE;
    }
    log.set_log_level(args.verbosity);

    if args.threads > 1 {
        let handles: Vec<_> = (0..args.threads)
            .map(|_| {
                let log = Arc::clone(&log);
                thread::spawn(move || burst(&log))
            })
            .collect();
        for handle in handles {
            let _ = handle.join();
        }
    } else {
        burst(&log);
    }

    log.close();

    println!(
        "{}",
        PathBuf::from(&dir).join(format!("{}.log", args.app)).display()
    );
    ExitCode::SUCCESS
}
