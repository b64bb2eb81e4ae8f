use super::formula::Formula;

/// One distinct formula together with every compound name recorded for it,
/// in the order the names were encountered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaEntry {
    pub formula: Formula,
    pub names: Vec<String>,
}

impl FormulaEntry {
    pub fn new(formula: Formula, name: impl Into<String>) -> Self {
        Self {
            formula,
            names: vec![name.into()],
        }
    }
}

/// Ordered collection of formula entries.
///
/// No two entries share a formula; `record` is the only insertion path and
/// it appends to an existing entry instead of creating a duplicate. Entries
/// are never removed.
#[derive(Debug, Clone, Default)]
pub struct FormulaTable {
    pub entries: Vec<FormulaEntry>,
}

impl FormulaTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of the entry matching `formula`, scanning in table order.
    pub fn locate(&self, formula: Formula) -> Option<usize> {
        self.entries.iter().position(|e| e.formula == formula)
    }

    /// Files `name` under `formula`, creating the entry the first time the
    /// formula is seen. Distinct formulas keep their first-seen order.
    pub fn record(&mut self, name: impl Into<String>, formula: Formula) {
        match self.locate(formula) {
            Some(idx) => self.entries[idx].names.push(name.into()),
            None => self.entries.push(FormulaEntry::new(formula, name)),
        }
    }

    /// Reorders entries in place: carbon count ascending, hydrogen count
    /// ascending within equal carbon counts. Stable and idempotent.
    pub fn sort(&mut self) {
        self.entries.sort_by_key(|e| e.formula);
    }

    #[inline]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of recorded names across all entries.
    pub fn name_count(&self) -> usize {
        self.entries.iter().map(|e| e.names.len()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
