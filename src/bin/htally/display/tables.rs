use std::io::{self, Write};

use hydro_tally::io::Ingest;

use crate::util::text::truncate;

const INDENT: &str = "      ";

pub fn print_tally_summary(ingest: &Ingest) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let mut rows = vec![
        ("Records read", ingest.records.to_string()),
        ("Distinct formulas", ingest.table.entry_count().to_string()),
        ("Total names", ingest.table.name_count().to_string()),
    ];

    if let Some(largest) = ingest.table.entries.iter().max_by_key(|e| e.names.len()) {
        rows.push((
            "Largest group",
            format!("{} ({} names)", largest.formula, largest.names.len()),
        ));
    }

    if let Some(line) = ingest.halted_line {
        rows.push((
            "Stopped early",
            format!("unrecognized record near line {}", line),
        ));
    }

    print_kv_table(&mut out, "Tally Summary", &rows);
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let label_w = 18usize;
    let value_w = 34usize;

    let label_line = "─".repeat(label_w + 2);
    let value_line = "─".repeat(value_w + 2);

    let _ = writeln!(out, "{}┌─ {} ─┐", INDENT, title);
    let _ = writeln!(out, "{}┌{label_line}┬{value_line}┐", INDENT);
    for (label, value) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<label_w$} │ {:<value_w$} │",
            INDENT,
            label,
            truncate(value, value_w)
        );
    }
    let _ = writeln!(out, "{}└{label_line}┴{value_line}┘", INDENT);
    let _ = writeln!(out);
}
