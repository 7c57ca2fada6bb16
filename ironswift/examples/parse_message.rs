//! Parses a SWIFT MT message and prints its fields.
//!
//! Reads the message from the file given as first argument, or from stdin.
//!
//! ```text
//! cargo run --example parse_message -- message.fin
//! RUST_LOG=debug cargo run --example parse_message < message.fin
//! ```

use anyhow::Context;
use ironswift::prelude::*;
use std::io::Read;
use std::{env, fs, io};
use tracing::info;

/// Initialize logging with tracing-subscriber.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}

fn read_message() -> anyhow::Result<String> {
    match env::args().nth(1) {
        Some(path) => fs::read_to_string(&path).with_context(|| format!("reading {path}")),
        None => {
            let mut message = String::new();
            io::stdin()
                .read_to_string(&mut message)
                .context("reading stdin")?;
            Ok(message)
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let message = read_message()?;
    let fields = Parser::new(ParserConfig::default())
        .parse(&message)
        .context("decoding message")?;
    info!(fields = fields.len(), "message decoded");

    for (name, value) in fields.sorted() {
        println!("{name} = {value:?}");
    }
    Ok(())
}
