use std::io::BufRead;

use crate::io::error::Error;
use crate::model::formula::Formula;
use crate::model::table::FormulaTable;

/// Outcome of consuming a record stream: the aggregated table plus how far
/// ingestion got.
#[derive(Debug, Clone)]
pub struct Ingest {
    pub table: FormulaTable,
    /// Number of complete records folded into the table.
    pub records: usize,
    /// 1-based line of the first token group that failed to match the
    /// record pattern, or `None` when the stream was consumed to its end.
    pub halted_line: Option<usize>,
}

/// Reads `<name> C<carbons> H<hydrogens>` records from `reader` and
/// aggregates them into a [`FormulaTable`].
///
/// Tokens are whitespace-separated and records may span lines. A tag and
/// its count may arrive fused in one token (`C4`) or split across two
/// (`C 4`). The first token group that fails to complete the pattern ends
/// ingestion; the partial record is discarded and no error is raised.
pub fn read<R: BufRead>(reader: R) -> Result<Ingest, Error> {
    let mut tokens = TokenStream::new(reader);
    let mut table = FormulaTable::new();
    let mut records = 0;

    let halted_line = loop {
        // End-of-input between records is the clean way out.
        let Some(name) = tokens.next()? else {
            break None;
        };
        let Some(carbons) = tagged_count(&mut tokens, 'C')? else {
            break Some(tokens.line());
        };
        let Some(hydrogens) = tagged_count(&mut tokens, 'H')? else {
            break Some(tokens.line());
        };
        table.record(name, Formula::new(carbons, hydrogens));
        records += 1;
    };

    Ok(Ingest {
        table,
        records,
        halted_line,
    })
}

/// Consumes a `<tag><count>` token group. Accepts the count fused into the
/// tag token or as the following token. `None` means the group did not
/// match: wrong tag, unparsable count, or end of input.
fn tagged_count<R: BufRead>(tokens: &mut TokenStream<R>, tag: char) -> Result<Option<u32>, Error> {
    let Some(token) = tokens.next()? else {
        return Ok(None);
    };
    let Some(rest) = token.strip_prefix(tag) else {
        return Ok(None);
    };

    let digits = if rest.is_empty() {
        match tokens.next()? {
            Some(next) => next,
            None => return Ok(None),
        }
    } else {
        rest.to_string()
    };

    Ok(digits.parse::<u32>().ok())
}

/// Whitespace tokenizer over a buffered reader, tracking the line the most
/// recently yielded token came from.
struct TokenStream<R> {
    lines: std::io::Lines<R>,
    pending: std::vec::IntoIter<String>,
    line: usize,
}

impl<R: BufRead> TokenStream<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            pending: Vec::new().into_iter(),
            line: 0,
        }
    }

    fn next(&mut self) -> Result<Option<String>, Error> {
        loop {
            if let Some(token) = self.pending.next() {
                return Ok(Some(token));
            }
            match self.lines.next() {
                Some(content) => {
                    let content = content?;
                    self.line += 1;
                    self.pending = content
                        .split_whitespace()
                        .map(str::to_owned)
                        .collect::<Vec<_>>()
                        .into_iter();
                }
                None => return Ok(None),
            }
        }
    }

    /// Line of the most recently yielded token (or the last line read when
    /// the stream ended).
    fn line(&self) -> usize {
        self.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_str(input: &str) -> Ingest {
        read(input.as_bytes()).unwrap()
    }

    fn rendered(table: &FormulaTable) -> Vec<String> {
        table
            .entries
            .iter()
            .map(|e| format!("{} {}", e.formula, e.names.join(" ")))
            .collect()
    }

    #[test]
    fn aggregates_records_in_first_seen_order() {
        let ingest = read_str("methane C1 H4\nethane C2 H6\nisobutane C4 H10\nbutane C4 H10\n");

        assert_eq!(ingest.records, 4);
        assert_eq!(ingest.halted_line, None);
        assert_eq!(
            rendered(&ingest.table),
            ["C1H4 methane", "C2H6 ethane", "C4H10 isobutane butane"]
        );
    }

    #[test]
    fn empty_input_yields_empty_table() {
        let ingest = read_str("");
        assert_eq!(ingest.records, 0);
        assert_eq!(ingest.halted_line, None);
        assert!(ingest.table.is_empty());

        let blank = read_str("  \n\t\n");
        assert_eq!(blank.records, 0);
        assert_eq!(blank.halted_line, None);
        assert!(blank.table.is_empty());
    }

    #[test]
    fn accepts_split_tag_and_count_tokens() {
        let ingest = read_str("methane C 1 H 4\nethane C2 H 6\n");
        assert_eq!(ingest.records, 2);
        assert_eq!(rendered(&ingest.table), ["C1H4 methane", "C2H6 ethane"]);
    }

    #[test]
    fn records_may_span_lines() {
        let ingest = read_str("methane\nC1\nH4\nethane C2\nH6\n");
        assert_eq!(ingest.records, 2);
        assert_eq!(ingest.halted_line, None);
        assert_eq!(rendered(&ingest.table), ["C1H4 methane", "C2H6 ethane"]);
    }

    #[test]
    fn halts_on_wrong_tag_keeping_prior_records() {
        let ingest = read_str("methane C1 H4\nethane X2 H6\npropane C3 H8\n");
        assert_eq!(ingest.records, 1);
        assert_eq!(ingest.halted_line, Some(2));
        assert_eq!(rendered(&ingest.table), ["C1H4 methane"]);
    }

    #[test]
    fn halts_on_unparsable_count() {
        let ingest = read_str("methane C1 H4\nethane C2 Hsix\n");
        assert_eq!(ingest.records, 1);
        assert_eq!(ingest.halted_line, Some(2));

        let negative = read_str("weird C-3 H8\n");
        assert_eq!(negative.records, 0);
        assert_eq!(negative.halted_line, Some(1));
    }

    #[test]
    fn halts_on_truncated_trailing_record() {
        let ingest = read_str("methane C1 H4\npropane C3\n");
        assert_eq!(ingest.records, 1);
        assert_eq!(ingest.halted_line, Some(2));
        assert_eq!(rendered(&ingest.table), ["C1H4 methane"]);
    }

    #[test]
    fn halts_on_fused_cross_field_token() {
        // "C4H10" in one token is outside the record grammar.
        let ingest = read_str("methane C1 H4\nbutane C4H10\n");
        assert_eq!(ingest.records, 1);
        assert_eq!(ingest.halted_line, Some(2));
    }

    #[test]
    fn unsorted_order_is_encounter_order() {
        let ingest = read_str("b C3 H8\na C1 H4\n");
        assert_eq!(rendered(&ingest.table), ["C3H8 b", "C1H4 a"]);
    }
}
