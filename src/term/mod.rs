use crate::mach::{Event, Runtime};
use crate::{error, lang::Error};
use ansi_term::Style;
use linefeed::{Interface, ReadResult, Signal, Terminal};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: sbasic <filename>");
        std::process::exit(2);
    }
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        tracing::warn!(%error, "Ctrl-C handler not installed");
    }
    match main_loop(&args[1], interrupted) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    }
}

/// Logging is off unless `RUST_LOG` is set, e.g. `RUST_LOG=sbasic=trace`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

/// Returns whether the program ran to completion.
fn main_loop(filename: &str, interrupted: Arc<AtomicBool>) -> std::io::Result<bool> {
    let interface = Interface::new("sbasic")?;
    interface.set_report_signal(Signal::Interrupt, true);
    let source = match load(filename) {
        Ok(source) => source,
        Err(error) => {
            report(&interface, &error)?;
            return Ok(false);
        }
    };
    let mut runtime = Runtime::new(&source);

    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
            interface.write_fmt(format_args!("BREAK\n"))?;
            return Ok(false);
        }
        match runtime.execute(5000) {
            Event::Stopped => return Ok(true),
            Event::Running => {}
            Event::Print(s) => {
                interface.write_fmt(format_args!("{}", s))?;
            }
            Event::Input(prompt) => {
                interface.set_prompt(&prompt)?;
                match interface.read_line() {
                    Ok(ReadResult::Input(string)) => runtime.enter(&string),
                    Ok(ReadResult::Signal(Signal::Interrupt)) => {
                        runtime.interrupt();
                        interface.write_fmt(format_args!("BREAK\n"))?;
                        return Ok(false);
                    }
                    Ok(ReadResult::Signal(_)) | Ok(ReadResult::Eof) => runtime.end_of_input(),
                    Err(error) => {
                        tracing::warn!(%error, "INPUT read failed");
                        runtime.end_of_input();
                    }
                }
            }
            Event::Warning(s) => {
                interface.write_fmt(format_args!("{}\n", s))?;
            }
            Event::Error(error) => {
                report(&interface, &error)?;
                return Ok(false);
            }
        }
    }
}

fn report<T: Terminal>(interface: &Interface<T>, error: &Error) -> std::io::Result<()> {
    interface.write_fmt(format_args!(
        "{}\n",
        Style::new().bold().paint(error.to_string())
    ))
}

/// Reads the whole program. A trailing DOS end-of-file mark is dropped.
pub fn load(filename: &str) -> Result<String, Error> {
    let mut file = match File::open(filename) {
        Ok(file) => file,
        Err(error) => {
            let msg = error.to_string();
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(SourceNotFound; msg.as_str())),
                _ => return Err(error!(SourceReadError; msg.as_str())),
            }
        }
    };
    let mut source = String::new();
    if let Err(error) = file.read_to_string(&mut source) {
        return Err(error!(SourceReadError; error.to_string().as_str()));
    }
    if source.ends_with('\u{1a}') {
        source.pop();
    }
    tracing::debug!(filename, chars = source.chars().count(), "program loaded");
    Ok(source)
}
