use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    let msg = err.to_string();
    for line in wrap(&msg, 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
    }

    if let Some(hints) = collect_hints(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn collect_hints(err: &Error) -> Option<Vec<String>> {
    let mut hints = Vec::new();

    if let Some(io_err) = err.downcast_ref::<hydro_tally::io::Error>() {
        let hydro_tally::io::Error::Io { source } = io_err;
        std_io_hints(&mut hints, source);
    } else if let Some(source) = err.downcast_ref::<std::io::Error>() {
        std_io_hints(&mut hints, source);
    } else {
        fallback_hints(&mut hints, err);
    }

    if hints.is_empty() {
        None
    } else {
        Some(hints)
    }
}

fn std_io_hints(hints: &mut Vec<String>, source: &std::io::Error) {
    use std::io::ErrorKind;

    match source.kind() {
        ErrorKind::NotFound => {
            hints.push("File or directory not found".into());
            hints.push("Check the path spelling and ensure the file exists".into());
        }

        ErrorKind::PermissionDenied => {
            hints.push("Permission denied accessing the file".into());
            hints.push("Check file permissions with `ls -la`".into());
        }

        ErrorKind::InvalidData => {
            hints.push("Input contains invalid data (not UTF-8 text?)".into());
            hints.push("Records are plain whitespace-separated text".into());
        }

        ErrorKind::UnexpectedEof => {
            hints.push("Unexpected end of input".into());
            hints.push("The file may be truncated or incomplete".into());
        }

        ErrorKind::WriteZero => {
            hints.push("Failed to write the listing (disk full?)".into());
            hints.push("Check available disk space".into());
        }

        ErrorKind::BrokenPipe => {
            hints.push("Broken pipe — output consumer terminated".into());
            hints.push("This may occur when piping to commands like `head`".into());
        }

        _ => {
            hints.push("I/O operation failed".into());
            hints.push("Check file path, permissions, and disk space".into());
        }
    }
}

fn fallback_hints(hints: &mut Vec<String>, err: &Error) {
    let msg = error_chain_text(err);

    if msg.contains("terminal") || msg.contains("stdin") || msg.contains("tty") {
        hints.push("Input appears to be from a terminal".into());
        hints.push("Provide input via -i/--input or pipe records to stdin".into());
        return;
    }

    if msg.contains("no such file") || msg.contains("not found") {
        hints.push("Check that the file path is correct".into());
        hints.push("Verify the file exists and is readable".into());
        return;
    }

    if msg.contains("permission denied") {
        hints.push("Check file permissions with `ls -la`".into());
        hints.push("Ensure you have the required access rights".into());
    }
}

fn error_chain_text(err: &Error) -> String {
    err.chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
}
