//! Basic formatter usage example
//!
//! Formats the same entries with the text and JSON formatters, including
//! fields that clash with the reserved `time`, `msg` and `level` keys.
//!
//! Run with: cargo run --example basic_usage

use rust_log_formatter::fields;
use rust_log_formatter::prelude::*;
use std::io::Write;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== Rust Log Formatter - Basic Usage Example ===\n");

    let io_err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
    let entries = vec![
        Entry::new(Level::Info, "Server started").with_field("port", 8080),
        Entry::new(Level::Warn, "Clashing fields are renamed").with_fields(fields! {
            "level" => 1,
            "msg" => "user supplied",
            "user" => "alice",
        }),
        Entry::new(Level::Error, "Upstream call failed").with_error(&io_err),
    ];

    let formatters: Vec<Box<dyn Formatter>> = vec![
        Box::new(TextFormatter::new()),
        Box::new(TextFormatter::new().with_colors(true)),
        Box::new(JsonFormatter::new()),
        FormatterConfig::new()
            .with_output_format(OutputFormat::Json)
            .with_data_key("fields")
            .with_timestamp_format(TimestampFormat::UnixMillis)
            .build(),
    ];

    let mut stdout = std::io::stdout().lock();
    for (idx, formatter) in formatters.iter().enumerate() {
        writeln!(stdout, "{}. {} formatter:", idx + 1, formatter.name())?;
        for entry in &entries {
            stdout.write_all(&formatter.format(entry)?)?;
        }
        writeln!(stdout)?;
    }
    drop(stdout);

    println!("=== Example completed successfully! ===");

    Ok(())
}
