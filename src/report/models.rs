/*!
 * Models for JaCoCo coverage data.
 *
 * An overview of the models and their relationships:
 * - Each class in a CSV export has a [`ClassRecord`] with the counters
 *   JaCoCo measured for it.
 * - Each measurement is a [`Counter`]: how many units of one metric were
 *   missed and how many were covered. A class carries five counters
 *   (instructions, branches, lines, complexity, methods).
 * - [`CoverageTotals`] aggregates the counters of an entire export by
 *   folding records field-wise. Summation is associative, so totals do
 *   not depend on record order.
 * - [`CoverageMetric`] names the four metrics the threshold gate
 *   evaluates. Complexity is aggregated alongside them, but JaCoCo's
 *   complexity counter is not a coverage percentage in the same sense,
 *   so it is not gated.
 *
 * Counts are non-negative, so numeric fields use `u64` outright. The
 * largest real-world counters (instructions) stay far below `u32::MAX`,
 * but totals are sums over arbitrarily many classes and `u64` keeps the
 * arithmetic trivially overflow-free.
 */

use strum_macros::{Display, EnumString};

/// The coverage metrics evaluated by the threshold gate.
#[derive(EnumString, Display, Debug, PartialEq, Eq, Clone, Copy)]
pub enum CoverageMetric {
    Instruction,
    Branch,
    Line,
    Method,
}

impl CoverageMetric {
    /// All gated metrics, in report order.
    pub const ALL: [CoverageMetric; 4] = [
        CoverageMetric::Instruction,
        CoverageMetric::Branch,
        CoverageMetric::Line,
        CoverageMetric::Method,
    ];
}

/// One JaCoCo counter: the number of units of a metric a class missed and
/// covered.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub struct Counter {
    pub missed: u64,
    pub covered: u64,
}

impl Counter {
    pub fn new(missed: u64, covered: u64) -> Self {
        Counter { missed, covered }
    }

    /// The total number of units tracked by this counter.
    pub fn total(&self) -> u64 {
        self.missed + self.covered
    }

    /// The percentage of units covered, or `None` for an empty counter.
    ///
    /// An empty counter is not an error: a class without conditional logic
    /// legitimately reports `0,0` branch columns.
    pub fn coverage_pct(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            total => Some(self.covered as f64 / total as f64 * 100.0),
        }
    }

    /// Folds another counter into this one.
    pub fn add(&mut self, other: Counter) {
        self.missed += other.missed;
        self.covered += other.covered;
    }
}

/// One row of a JaCoCo CSV export: the counters for a single class.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct ClassRecord {
    /// The GROUP column; names the Maven module the class belongs to.
    pub group: String,

    /// The PACKAGE column. Ex: `com.acme.billing.model`.
    pub package: String,

    /// The CLASS column, without the package prefix. Ex: `Invoice`.
    pub name: String,

    pub instructions: Counter,
    pub branches: Counter,
    pub lines: Counter,
    pub complexity: Counter,
    pub methods: Counter,
}

/// Aggregated counters for a whole export.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct CoverageTotals {
    pub instructions: Counter,
    pub branches: Counter,
    pub lines: Counter,
    pub complexity: Counter,
    pub methods: Counter,
}

impl CoverageTotals {
    /// Folds a class's counters into the running totals.
    pub fn add_class(&mut self, class: &ClassRecord) {
        self.instructions.add(class.instructions);
        self.branches.add(class.branches);
        self.lines.add(class.lines);
        self.complexity.add(class.complexity);
        self.methods.add(class.methods);
    }

    /// Aggregates the totals of an entire export.
    pub fn aggregate<'a>(records: impl IntoIterator<Item = &'a ClassRecord>) -> Self {
        let mut totals = CoverageTotals::default();
        for record in records {
            totals.add_class(record);
        }
        totals
    }

    /// The aggregated counter for a gated metric.
    pub fn counter(&self, metric: CoverageMetric) -> &Counter {
        match metric {
            CoverageMetric::Instruction => &self.instructions,
            CoverageMetric::Branch => &self.branches,
            CoverageMetric::Line => &self.lines,
            CoverageMetric::Method => &self.methods,
        }
    }
}
