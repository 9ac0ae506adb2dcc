// crates/domain/src/loader.rs

//! Batch loader: ordered raw lines in, ordered records out.

use namedata_shared_kernel::DomainResult;

use crate::model::Person;
use crate::schema;

/// Convert header + data lines into records, preserving input order.
///
/// The first line is always treated as the header and discarded without
/// inspection. Loading is all-or-nothing: the first bad row aborts the
/// whole load, with the 1-based row number (header = row 1) attached to
/// the parser's error. No partial collection is ever returned.
pub fn load_records<I, S>(lines: I) -> DomainResult<Vec<Person>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut people = Vec::new();
    for (index, line) in lines.into_iter().enumerate().skip(1) {
        let person = schema::parse_row(line.as_ref()).map_err(|e| e.at_row(index + 1))?;
        people.push(person);
    }
    Ok(people)
}
