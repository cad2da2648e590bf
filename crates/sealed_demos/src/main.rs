//! Sealed demos CLI
//!
//! Runs every demonstration section and prints it to stdout. Takes no
//! arguments; set `RUST_LOG` to see tracing output on stderr.

fn main() {
    sealed_demos::init_tracing();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = sealed_demos::run_all(&mut out) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
