//! Cart fulfillment constraint function entrypoint.
//!
//! The function runtime evaluates this binary once per cart evaluation:
//! one JSON request on stdin, one JSON response on stdout, nothing else.
//! The sandbox enforces hard time and memory ceilings, so the entrypoint
//! does no logging, reads no environment, and opens no connections.
//!
//! Malformed input is a contract violation by the host and terminates the
//! process with a nonzero exit; every well-formed input produces a response.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::{Read, Write};

use pinpoint_core::constraint::{GenerateInput, generate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut raw = String::new();
    std::io::stdin().lock().read_to_string(&mut raw)?;

    let input: GenerateInput = serde_json::from_str(&raw)?;
    let output = generate(&input);

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer(&mut stdout, &output)?;
    stdout.flush()?;

    Ok(())
}
