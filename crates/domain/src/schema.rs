// crates/domain/src/schema.rs

//! Fixed positional schema of the input format and the row parser.
//!
//! Each data row carries exactly [`EXPECTED_COLUMNS`] comma-separated
//! fields with no quoting or escaping, so a plain split is the whole
//! lexical story. Embedded commas inside a field are not representable in
//! the source format.

use chrono::NaiveDate;
use namedata_shared_kernel::{DomainError, DomainResult};
use uuid::Uuid;

use crate::model::{Gender, Person};

/// Column count of every data row, header included.
pub const EXPECTED_COLUMNS: usize = 45;

/// Split a raw line and map it positionally onto a [`Person`].
pub fn parse_row(raw_line: &str) -> DomainResult<Person> {
    let fields: Vec<&str> = raw_line.split(',').collect();
    person_from_fields(&fields)
}

/// Build a [`Person`] from an already-split field list.
///
/// The list must have exactly [`EXPECTED_COLUMNS`] entries; any deviation
/// is a schema violation, never a best-effort parse. Column 18 (1-based)
/// is blank in the source format and is skipped.
pub fn person_from_fields(fields: &[&str]) -> DomainResult<Person> {
    if fields.len() != EXPECTED_COLUMNS {
        return Err(DomainError::RowFormat {
            expected: EXPECTED_COLUMNS,
            actual: fields.len(),
        });
    }

    Ok(Person {
        number: parse_int("Number", fields[0])?,
        gender: Gender::from_token(fields[1]),
        name_set: fields[2].to_string(),
        title: fields[3].to_string(),
        given_name: fields[4].to_string(),
        middle_initial: fields[5].to_string(),
        surname: fields[6].to_string(),
        street_address: fields[7].to_string(),
        city: fields[8].to_string(),
        state: fields[9].to_string(),
        state_full: fields[10].to_string(),
        zip_code: fields[11].to_string(),
        country: fields[12].to_string(),
        country_full: fields[13].to_string(),
        email_address: fields[14].to_string(),
        username: fields[15].to_string(),
        password: fields[16].to_string(),
        // fields[17] is the blank column
        telephone_number: fields[18].to_string(),
        telephone_country_code: fields[19].to_string(),
        mothers_maiden: fields[20].to_string(),
        birthday: parse_date("Birthday", fields[21])?,
        age: parse_age("Age", fields[22])?,
        tropical_zodiac: fields[23].to_string(),
        cc_type: fields[24].to_string(),
        cc_number: fields[25].to_string(),
        cvv2: fields[26].to_string(),
        cc_expires: fields[27].to_string(),
        national_id: fields[28].to_string(),
        ups_tracking: fields[29].to_string(),
        western_union_mtcn: fields[30].to_string(),
        money_gram_mtcn: fields[31].to_string(),
        color: fields[32].to_string(),
        occupation: fields[33].to_string(),
        company: fields[34].to_string(),
        vehicle: fields[35].to_string(),
        domain: fields[36].to_string(),
        blood_type: fields[37].to_string(),
        pounds: parse_float("Pounds", fields[38])?,
        kilograms: parse_float("Kilograms", fields[39])?,
        feet_inches: fields[40].to_string(),
        centimeters: parse_float("Centimeters", fields[41])?,
        guid: parse_guid("GUID", fields[42])?,
        latitude: parse_float("Latitude", fields[43])?,
        longitude: parse_float("Longitude", fields[44])?,
    })
}

fn parse_int(column: &'static str, value: &str) -> DomainResult<i32> {
    value.trim().parse().map_err(|e: std::num::ParseIntError| DomainError::FieldConversion {
        column,
        value: value.to_string(),
        details: e.to_string(),
    })
}

fn parse_age(column: &'static str, value: &str) -> DomainResult<u32> {
    value.trim().parse().map_err(|e: std::num::ParseIntError| DomainError::FieldConversion {
        column,
        value: value.to_string(),
        details: e.to_string(),
    })
}

fn parse_float(column: &'static str, value: &str) -> DomainResult<f64> {
    value.trim().parse().map_err(|e: std::num::ParseFloatError| DomainError::FieldConversion {
        column,
        value: value.to_string(),
        details: e.to_string(),
    })
}

/// Accepts ISO dates and the US-style form the generator exports.
fn parse_date(column: &'static str, value: &str) -> DomainResult<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%m/%d/%Y"))
        .map_err(|e| DomainError::FieldConversion {
            column,
            value: value.to_string(),
            details: e.to_string(),
        })
}

fn parse_guid(column: &'static str, value: &str) -> DomainResult<Uuid> {
    Uuid::parse_str(value.trim()).map_err(|e| DomainError::FieldConversion {
        column,
        value: value.to_string(),
        details: e.to_string(),
    })
}
