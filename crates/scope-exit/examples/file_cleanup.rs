// Example demonstrating guard-backed cleanup of a scratch file across
// both failure and success exit paths.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use scope_exit::defer;

/// Writes a two-line report. The partial file is removed on every exit
/// path until the footer lands, after which the guard is disarmed and
/// the file is kept.
fn write_report(path: &Path, complete: bool) -> io::Result<()> {
    let mut file = File::create(path)?;

    let mut remove_partial = defer(|| {
        if let Err(error) = fs::remove_file(path) {
            eprintln!("failed to remove partial report: {error}");
        }
    });

    writeln!(file, "report: begin")?;
    if !complete {
        return Err(io::Error::other("interrupted before the footer"));
    }
    writeln!(file, "report: end")?;

    // The report reached its final form, keep it.
    remove_partial.disarm();
    Ok(())
}

fn main() {
    let path = std::env::temp_dir().join("scope_exit_demo.report");

    // However this demo exits, leave no scratch file behind.
    defer! {
        let _ = fs::remove_file(&path);
    }

    println!("writing a report that fails partway:");
    match write_report(&path, false) {
        Ok(()) => println!("  unexpected success"),
        Err(error) => println!("  write failed: {error}"),
    }
    println!("  partial file removed: {}", !path.exists());

    println!("writing a report to completion:");
    match write_report(&path, true) {
        Ok(()) => println!("  report kept at {}", path.display()),
        Err(error) => println!("  write failed: {error}"),
    }
    println!("  file present: {}", path.exists());
}
