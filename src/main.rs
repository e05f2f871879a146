use std::env;

use tinta::flags::Flags;
use tinta::shell::Shell;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), tinta::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("tinta {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(flags.is_set("debug"));

    let mut shell = Shell::new(flags)?;
    shell.run()
}

/// `RUST_LOG` wins; otherwise warnings only, or everything from debug up with `--debug`.
fn init_logging(debug: bool) {
    let fallback = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
