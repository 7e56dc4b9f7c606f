//! Line-oriented command server for the record services.
//!
//! Reads one JSON command per line and writes one JSON response per line.
//! Everything runs on the calling thread; each command completes before the
//! next line is read.

pub mod handlers;

pub use handlers::{Command, RecordServer, Response};

use crate::config::Config;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::info;

/// Run the server until `reader` is exhausted.
///
/// Blank lines are skipped. A command that fails produces a failure response;
/// only I/O errors end the loop early.
///
/// # Arguments
/// * `server` - The server holding the services
/// * `reader` - Source of command lines (stdin in the binary)
/// * `writer` - Sink for responses (stdout in the binary)
/// * `config` - Output formatting options
pub fn run_server<R: BufRead, W: Write>(
    server: &mut RecordServer,
    reader: R,
    mut writer: W,
    config: &Config,
) -> Result<()> {
    let mut handled = 0usize;

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = server.handle_line(&line);
        if config.pretty_output {
            serde_json::to_writer_pretty(&mut writer, &response)?;
        } else {
            serde_json::to_writer(&mut writer, &response)?;
        }
        writeln!(writer)?;
        writer.flush()?;
        handled += 1;
    }

    info!(commands = handled, "Input exhausted");
    Ok(())
}
