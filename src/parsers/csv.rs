//! A parser for the CSV report that JaCoCo's `csv` output format emits.
//!
//! The export is a plain CSV table: a fixed header row followed by one data
//! row per class. Each data row starts with three identifier columns and
//! then carries a `MISSED`/`COVERED` column pair for each of JaCoCo's five
//! counters, in the order instructions, branches, lines, complexity,
//! methods.
//!
//! Input example:
//! ```notrust
//! GROUP,PACKAGE,CLASS,INSTRUCTION_MISSED,INSTRUCTION_COVERED,BRANCH_MISSED,BRANCH_COVERED,LINE_MISSED,LINE_COVERED,COMPLEXITY_MISSED,COMPLEXITY_COVERED,METHOD_MISSED,METHOD_COVERED
//! acme-billing,com.acme.billing.model,Invoice,2,103,2,12,0,22,2,13,0,8
//! acme-billing,com.acme.billing.service,BillingService,0,295,3,59,0,79,3,42,0,14
//! ```
//!
//! Counts are non-negative decimal integers; JaCoCo never writes signs,
//! floats, or thousands separators. Identifier columns never contain commas
//! so no quoting is needed.

use winnow::{
    ascii::{digit1, line_ending},
    combinator::{delimited, preceded, separated},
    token::take_while,
    PResult, Parser,
};

use crate::{
    error::{JacocoError, Result},
    parsers::ws,
    report::models::{ClassRecord, Counter},
};

/// The header row every JaCoCo CSV export begins with.
pub const EXPORT_HEADER: &str = "GROUP,PACKAGE,CLASS,INSTRUCTION_MISSED,INSTRUCTION_COVERED,BRANCH_MISSED,BRANCH_COVERED,LINE_MISSED,LINE_COVERED,COMPLEXITY_MISSED,COMPLEXITY_COVERED,METHOD_MISSED,METHOD_COVERED";

/// Parses a non-negative decimal count, returning the value as a `u64`.
pub fn count(buf: &mut &str) -> PResult<u64> {
    digit1.parse_to().parse_next(buf)
}

/// Parses a `missed,covered` column pair, returning a [`Counter`].
pub fn counter(buf: &mut &str) -> PResult<Counter> {
    (count, ',', count)
        .map(|(missed, _, covered)| Counter { missed, covered })
        .parse_next(buf)
}

/// Parses a GROUP, PACKAGE, or CLASS identifier, returning it as a slice.
///
/// An identifier is any non-empty run of characters up to the next column
/// or row delimiter.
pub fn name_field<'a>(buf: &mut &'a str) -> PResult<&'a str> {
    take_while(1.., |c: char| c != ',' && c != '\n' && c != '\r').parse_next(buf)
}

/// Parses one data row of an export, returning a [`ClassRecord`].
pub fn class_row(buf: &mut &str) -> PResult<ClassRecord> {
    let (group, _, package, _, name) =
        (name_field, ',', name_field, ',', name_field).parse_next(buf)?;

    let instructions = preceded(',', counter).parse_next(buf)?;
    let branches = preceded(',', counter).parse_next(buf)?;
    let lines = preceded(',', counter).parse_next(buf)?;
    let complexity = preceded(',', counter).parse_next(buf)?;
    let methods = preceded(',', counter).parse_next(buf)?;

    Ok(ClassRecord {
        group: group.to_string(),
        package: package.to_string(),
        name: name.to_string(),
        instructions,
        branches,
        lines,
        complexity,
        methods,
    })
}

/// Parses the header row, which must match [`EXPORT_HEADER`] exactly.
pub fn header_row<'a>(buf: &mut &'a str) -> PResult<&'a str> {
    EXPORT_HEADER.parse_next(buf)
}

/// Parses a complete export: the header row followed by one or more class
/// rows, separated by line endings.
pub fn export(buf: &mut &str) -> PResult<Vec<ClassRecord>> {
    preceded(
        (header_row, line_ending),
        separated(1.., class_row, line_ending),
    )
    .parse_next(buf)
}

/// Parses a complete JaCoCo CSV export, tolerating whitespace around the
/// table. The entire input must be consumed.
pub fn parse_export(input: &str) -> Result<Vec<ClassRecord>> {
    delimited(ws, export, ws)
        .parse(input)
        .map_err(|e| JacocoError::ParserError(e.into_inner()))
}
