use std::io::Write;

use anyhow::{bail, Context as _, Result};

use hydro_tally::io::{read, write as write_table, Ingest};
use hydro_tally::FormulaTable;

use crate::cli::Cli;
use crate::display::{print_tally_summary, Context as DisplayContext, Progress};
use crate::io::{create_output, open_input, stdin_is_tty};

const TOTAL_STEPS: u8 = 4;

pub fn run(cli: Cli, ctx: DisplayContext) -> Result<()> {
    if cli.io.input.is_none() && stdin_is_tty() {
        bail!(
            "No input file specified and stdin is a terminal.\n\nUsage: htally -i <INPUT> or pipe records via stdin."
        );
    }

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading records");
    let input = open_input(cli.io.input.as_deref())?;
    let ingest = read(input).context("Failed to read records")?;
    progress.complete_step("Reading records", &read_substeps(&ingest));

    if ctx.interactive {
        print_tally_summary(&ingest);
    }

    let mut table = ingest.table;
    let mut out = create_output(cli.io.output.as_deref())?;

    progress.step("Writing unsorted listing");
    write_listing(&mut out, "unsorted", &table)?;
    progress.complete_step(
        "Writing unsorted listing",
        &[format!("List {} formulas in encounter order", table.entry_count())],
    );

    progress.step("Sorting formulas");
    table.sort();
    progress.complete_step(
        "Sorting formulas",
        &["Order by carbon count, then hydrogen count".to_string()],
    );

    progress.step("Writing sorted listing");
    write_listing(&mut out, "sorted", &table)?;
    out.flush().context("Failed to flush output")?;
    progress.complete_step(
        "Writing sorted listing",
        &[format!("List {} formulas in sorted order", table.entry_count())],
    );

    progress.finish();

    Ok(())
}

fn read_substeps(ingest: &Ingest) -> Vec<String> {
    let mut steps = vec![
        format!("Ingest {} records", ingest.records),
        format!("Group names under {} formulas", ingest.table.entry_count()),
    ];

    if let Some(line) = ingest.halted_line {
        steps.push(format!("Stop at unrecognized record near line {}", line));
    }

    steps
}

fn write_listing(out: &mut impl Write, header: &str, table: &FormulaTable) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{header}")?;
    write_table(&mut *out, table).context("Failed to write listing")?;
    Ok(())
}
