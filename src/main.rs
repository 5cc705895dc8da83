use std::io::stdout;

use jacoco_rs::{
    error::Result,
    parsers::csv::parse_export,
    report::{CoverageReport, JACOCO_EXPORT},
};

fn main() -> Result<()> {
    let records = parse_export(JACOCO_EXPORT)?;
    let report = CoverageReport::from_records(&records);

    report.render(&mut stdout().lock())?;

    Ok(())
}
