#![allow(dead_code)]
use sbasic::lang::ErrorCode;
use sbasic::mach::{Event, Runtime};

pub fn exec(source: &str) -> String {
    exec_input(source, &[])
}

pub fn exec_input(source: &str, input: &[&str]) -> String {
    let mut runtime = Runtime::new(source);
    run(&mut runtime, input)
}

pub fn run(runtime: &mut Runtime, input: &[&str]) -> String {
    run_n(runtime, input, 5000)
}

pub fn run_n(runtime: &mut Runtime, input: &[&str], cycles: usize) -> String {
    let mut s = String::new();
    let mut input = input.iter();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("{}\n", error));
            }
            Event::Warning(warning) => {
                s.push_str(&format!("{}\n", warning));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(&ps);
            }
            Event::Input(ps) => {
                s.push_str(&ps);
                match input.next() {
                    Some(line) => runtime.enter(line),
                    None => runtime.end_of_input(),
                }
            }
        }
        match event {
            Event::Running => prev_running = true,
            _ => prev_running = false,
        }
    }
    s
}

/// Runs to completion and returns the code of the fatal error, if any.
pub fn fail(source: &str) -> Option<ErrorCode> {
    let mut runtime = Runtime::new(source);
    loop {
        match runtime.execute(5000) {
            Event::Stopped => return None,
            Event::Error(error) => return Some(error.code()),
            Event::Input(_) => runtime.end_of_input(),
            Event::Running | Event::Print(_) | Event::Warning(_) => {}
        }
    }
}
