// crates/domain/src/model/person.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Gender classification of a record.
///
/// The input token mapping is deliberately permissive: only the exact
/// lowercase strings "male" and "female" map to their variants, and every
/// other token collapses into [`Gender::Unspecified`] instead of failing
/// the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Unspecified,
}

impl Gender {
    pub fn from_token(token: &str) -> Self {
        match token {
            "male" => Self::Male,
            "female" => Self::Female,
            _ => Self::Unspecified,
        }
    }
}

/// One parsed input row. Field order mirrors the input column order; the
/// blank column between `password` and `telephone_number` is the only input
/// column without a counterpart here.
///
/// A `Person` is immutable after construction: the loader either produces a
/// fully populated record or rejects the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub number: i32,
    pub gender: Gender,
    pub name_set: String,
    pub title: String,
    pub given_name: String,
    pub middle_initial: String,
    pub surname: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub state_full: String,
    pub zip_code: String,
    pub country: String,
    pub country_full: String,
    pub email_address: String,
    pub username: String,
    pub password: String,
    pub telephone_number: String,
    pub telephone_country_code: String,
    pub mothers_maiden: String,
    pub birthday: NaiveDate,
    pub age: u32,
    pub tropical_zodiac: String,
    pub cc_type: String,
    pub cc_number: String,
    pub cvv2: String,
    pub cc_expires: String,
    pub national_id: String,
    pub ups_tracking: String,
    pub western_union_mtcn: String,
    pub money_gram_mtcn: String,
    pub color: String,
    pub occupation: String,
    pub company: String,
    pub vehicle: String,
    pub domain: String,
    pub blood_type: String,
    pub pounds: f64,
    pub kilograms: f64,
    pub feet_inches: String,
    pub centimeters: f64,
    pub guid: Uuid,
    pub latitude: f64,
    pub longitude: f64,
}

impl Person {
    /// "Given Surname" display form used by the report sentences.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.surname)
    }
}
