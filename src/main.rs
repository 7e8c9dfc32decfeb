use std::{
    io::{self, Write},
    process,
};

use clap::Parser;
use fgpolicy::cli::{Args, run};

fn main() {
    env_logger::init();

    let args = Args::try_parse().unwrap_or_else(|err| {
        let code = if err.use_stderr() { 1 } else { 0 };
        let _ = err.print();
        process::exit(code);
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = run(&args, &mut out) {
        let _ = out.flush();
        eprintln!("\nFATAL: {err}");
        process::exit(1);
    }
}
