//! Basic logger usage example
//!
//! Demonstrates the console and null loggers behind the shared `Logger` trait,
//! and field derivation with `with_fields`.
//!
//! Run with: cargo run --example basic_usage

use rust_logger_shim::prelude::*;
use rust_logger_shim::{fields, info, infof};

/// Library code only sees the trait
fn sync_inventory(logger: &dyn Logger, items: usize) {
    let logger = logger.with_fields(fields! { "component" => "inventory" });
    info!(logger, "syncing ", items, " items");
    logger.warnf(format_args!("{} items had stale prices", items / 10));
}

fn main() -> Result<()> {
    println!("=== Rust Logger Shim - Basic Usage Example ===\n");

    // Console logger on stderr
    let logger = ConsoleLogger::stderr();

    println!("1. Logging at different levels:");
    logger.debug(&[&"This is a debug message"]);
    logger.info(&[&"This is an info message"]);
    logger.warn(&[&"This is a warning message"]);
    logger.error(&[&"This is an error message"]);
    infof!(logger, "Server listening on port {}", 8080);

    println!("\n2. Deriving loggers with fields:");
    let request = logger.with_fields(fields! { "request_id" => "abc-123", "user" => "ana" });
    request.info(&[&"request accepted"]);
    request
        .with_fields(fields! { "user" => "bob" })
        .info(&[&"user switched, request_id kept"]);

    println!("\n3. Library code with console and null loggers:");
    sync_inventory(&logger, 120);
    sync_inventory(&NullLogger::new(), 120);

    println!("\n4. Logger selected from configuration:");
    let config = LoggerConfig::console().with_timestamp("%Y/%m/%d %H:%M:%S");
    let configured = config.build(LogSink::stderr())?;
    configured.info(&[&"timestamped line"]);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
