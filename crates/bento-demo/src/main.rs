#![forbid(unsafe_code)]

use std::io::{self, Write};
use std::process;

use bento_demo::app;
use bento_demo::cli::Opts;
use tracing_subscriber::EnvFilter;

fn main() {
    let opts = Opts::parse();

    let filter = EnvFilter::try_from_env("BENTO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = app::run(&opts, &mut out).and_then(|()| out.flush().map_err(Into::into)) {
        eprintln!("bento-demo: {err}");
        process::exit(1);
    }
}
