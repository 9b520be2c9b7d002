use std::io::{self, BufRead, BufWriter, IsTerminal, Write};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use droidcol::cli::{Cli, ColorMode, OutputFormat};
use droidcol::config::Config;
use droidcol::formatter::format_line;
use droidcol::{LogLine, PriorityRankable};

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior so upstream writers get a clean
    // SIGPIPE signal instead of a BrokenPipeError when droidcol exits early.
    reset_sigpipe();
    init_tracing();

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "droidcol", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("droidcol: {e}");
            return ExitCode::from(1);
        }
    };

    if cli.score {
        return score(&config, cli.sample_size);
    }

    let use_color = resolve_color_mode(config.color_mode);
    let columnizer = config.columnizer();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let mut line_buf = String::new();

    let reader = stdin.lock();
    for (idx, line_result) in reader.lines().enumerate() {
        let line = match line_result {
            Ok(l) => LogLine::new(l, idx + 1),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                tracing::debug!(line = idx + 1, "skipping non UTF-8 line");
                continue;
            }
            Err(e) => {
                eprintln!("droidcol: read error: {e}");
                return ExitCode::from(2);
            }
        };

        line_buf.clear();
        format_line(&line, &columnizer, &config, use_color, &mut line_buf);

        // Filtered-out lines produce an empty buffer, skip them. Blank input
        // lines survive as separators except in JSON mode.
        let keep_blank = line.full_line.is_empty() && config.output_format != OutputFormat::Json;
        if line_buf.is_empty() && !keep_blank {
            continue;
        }

        if let Err(e) = writeln!(writer, "{line_buf}") {
            if e.kind() == io::ErrorKind::BrokenPipe {
                return ExitCode::SUCCESS;
            }
            eprintln!("droidcol: write error: {e}");
            return ExitCode::from(2);
        }
    }

    if let Err(e) = writer.flush() {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return ExitCode::SUCCESS;
        }
        eprintln!("droidcol: flush error: {e}");
        return ExitCode::from(2);
    }

    ExitCode::SUCCESS
}

/// Read up to `sample_size` lines and print how well they fit logcat.
fn score(config: &Config, sample_size: usize) -> ExitCode {
    let mut samples = Vec::with_capacity(sample_size);
    for (idx, line_result) in io::stdin().lock().lines().take(sample_size).enumerate() {
        match line_result {
            Ok(l) => samples.push(LogLine::new(l, idx + 1)),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {}
            Err(e) => {
                eprintln!("droidcol: read error: {e}");
                return ExitCode::from(2);
            }
        }
    }

    let priority = config.columnizer().priority("<stdin>", &samples);
    tracing::info!(samples = samples.len(), priority = priority.as_str(), "scored stdin");
    println!("{}", priority.as_str());
    ExitCode::SUCCESS
}

/// Diagnostics go to stderr, filtered by `DROIDCOL_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("DROIDCOL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn resolve_color_mode(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            let stdout = io::stdout();
            if !stdout.is_terminal() {
                return false;
            }
            if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
                return false;
            }
            if std::env::var("TERM").is_ok_and(|v| v == "dumb") {
                return false;
            }
            true
        }
    }
}

/// Reset SIGPIPE to the default (terminate) behavior.
///
/// By default, Rust ignores SIGPIPE to surface `BrokenPipe` I/O errors.
/// For a filter sitting behind `adb logcat`, restoring `SIG_DFL` lets the OS
/// end the pipeline normally when the reader goes away.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
