use std::io::Write;

use crate::io::error::Error;
use crate::model::table::FormulaTable;

/// Writes the listing for `table` in its current order: one line per entry,
/// the formula label followed by every recorded name.
pub fn write<W: Write>(mut writer: W, table: &FormulaTable) -> Result<(), Error> {
    for entry in &table.entries {
        write!(writer, "{}", entry.formula)?;
        for name in &entry.names {
            write!(writer, " {}", name)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::formula::Formula;

    fn listing(table: &FormulaTable) -> String {
        let mut out = Vec::new();
        write(&mut out, table).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn one_line_per_entry_no_trailing_space() {
        let mut table = FormulaTable::new();
        table.record("methane", Formula::new(1, 4));
        table.record("isobutane", Formula::new(4, 10));
        table.record("butane", Formula::new(4, 10));

        assert_eq!(listing(&table), "C1H4 methane\nC4H10 isobutane butane\n");
    }

    #[test]
    fn empty_table_writes_nothing() {
        assert_eq!(listing(&FormulaTable::new()), "");
    }

    #[test]
    fn follows_current_table_order() {
        let mut table = FormulaTable::new();
        table.record("b", Formula::new(3, 8));
        table.record("a", Formula::new(1, 4));
        assert_eq!(listing(&table), "C3H8 b\nC1H4 a\n");

        table.sort();
        assert_eq!(listing(&table), "C1H4 a\nC3H8 b\n");
    }
}
