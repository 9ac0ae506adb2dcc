// crates/usecase/src/questions.rs

//! The fixed question list of the report.
//!
//! Each question owns its sentence template and the aggregation that fills
//! it in; questions never see each other, so one failing aggregation (for
//! example an extremum over an empty collection) stays local to its own
//! answer.

use namedata_domain::analytics::aggregate::{
    self, Direction, FrequencyMode,
};
use namedata_domain::model::{Gender, Person, VehicleInfo};
use namedata_shared_kernel::{DomainError, DomainResult};

/// Caller-chosen knobs affecting individual answers.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    /// Grouping semantics for the most-popular-vehicle question.
    pub vehicle_grouping: FrequencyMode,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { vehicle_grouping: FrequencyMode::ByValue }
    }
}

/// One question/aggregation pair of the report.
pub struct Question {
    pub title: &'static str,
    answer: fn(&[Person], &ReportOptions) -> DomainResult<String>,
}

impl Question {
    pub fn answer(&self, people: &[Person], options: &ReportOptions) -> DomainResult<String> {
        (self.answer)(people, options)
    }
}

/// The report's questions, in their stable output order.
pub fn default_questions() -> Vec<Question> {
    vec![
        Question { title: "Total people", answer: total_people },
        Question { title: "Males", answer: males },
        Question { title: "Married women", answer: married_women },
        Question { title: "Most populous state", answer: most_populous_state },
        Question { title: "Heaviest person", answer: heaviest_person },
        Question { title: "Lightest person", answer: lightest_person },
        Question { title: "Oldest person", answer: oldest_person },
        Question { title: "Most popular vehicle", answer: most_popular_vehicle },
    ]
}

fn total_people(people: &[Person], _: &ReportOptions) -> DomainResult<String> {
    Ok(format!("There are {} people in this file.", aggregate::count(people)))
}

fn males(people: &[Person], _: &ReportOptions) -> DomainResult<String> {
    let males = aggregate::count_where(people, |p| p.gender == Gender::Male);
    Ok(format!("There are {males} males."))
}

fn married_women(people: &[Person], _: &ReportOptions) -> DomainResult<String> {
    let mrs = aggregate::count_where(people, |p| p.title == "Mrs.");
    Ok(format!("There are {mrs} married women."))
}

fn most_populous_state(people: &[Person], _: &ReportOptions) -> DomainResult<String> {
    let by_state = aggregate::group_by(people, |p| p.state.clone());
    let state = by_state
        .most_populous()
        .ok_or(DomainError::EmptyCollection { operation: "most populous state" })?;
    Ok(format!("The most populous state is {state}."))
}

fn heaviest_person(people: &[Person], _: &ReportOptions) -> DomainResult<String> {
    let person = aggregate::extremum_by(people, |p| p.pounds, Direction::Max)?;
    Ok(format!(
        "The heaviest person is {} at {} lbs.",
        person.full_name(),
        person.pounds
    ))
}

fn lightest_person(people: &[Person], _: &ReportOptions) -> DomainResult<String> {
    let person = aggregate::extremum_by(people, |p| p.pounds, Direction::Min)?;
    Ok(format!(
        "The lightest person is {} at {} lbs.",
        person.full_name(),
        person.pounds
    ))
}

fn oldest_person(people: &[Person], _: &ReportOptions) -> DomainResult<String> {
    let person = aggregate::extremum_by(people, |p| p.age, Direction::Max)?;
    Ok(format!(
        "The oldest person is {} at {} years.",
        person.full_name(),
        person.age
    ))
}

fn most_popular_vehicle(people: &[Person], options: &ReportOptions) -> DomainResult<String> {
    let vehicles: Vec<VehicleInfo> = people
        .iter()
        .map(|p| VehicleInfo::parse(&p.vehicle))
        .collect::<DomainResult<_>>()?;
    let winner = aggregate::most_frequent(&vehicles, |v| v.clone(), options.vehicle_grouping)?;
    Ok(format!("The most popular vehicle is the {winner}."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::test_support::{person, base_people};

    #[test]
    fn question_order_is_stable() {
        let titles: Vec<&str> = default_questions().iter().map(|q| q.title).collect();
        assert_eq!(
            titles,
            [
                "Total people",
                "Males",
                "Married women",
                "Most populous state",
                "Heaviest person",
                "Lightest person",
                "Oldest person",
                "Most popular vehicle",
            ]
        );
    }

    #[test]
    fn counting_questions_never_fail_on_empty_input() {
        let options = ReportOptions::default();
        let answer = total_people(&[], &options).unwrap();
        assert_eq!(answer, "There are 0 people in this file.");
        assert_eq!(males(&[], &options).unwrap(), "There are 0 males.");
        assert_eq!(married_women(&[], &options).unwrap(), "There are 0 married women.");
    }

    #[test]
    fn extremum_questions_fail_on_empty_input() {
        let options = ReportOptions::default();
        assert!(heaviest_person(&[], &options).is_err());
        assert!(lightest_person(&[], &options).is_err());
        assert!(oldest_person(&[], &options).is_err());
        assert!(most_populous_state(&[], &options).is_err());
        assert!(most_popular_vehicle(&[], &options).is_err());
    }

    #[test]
    fn heaviest_ties_keep_the_earlier_record() {
        let mut people = base_people();
        people[0].pounds = 200.0;
        people[1].pounds = 200.0;
        let answer = heaviest_person(&people, &ReportOptions::default()).unwrap();
        assert!(answer.contains(&people[0].full_name()));
    }

    #[test]
    fn most_popular_vehicle_honors_grouping_mode() {
        let people = vec![
            person(1, "2018 Nissan Leaf"),
            person(2, "2020 Honda Civic"),
            person(3, "2020 Honda Civic"),
        ];

        let by_value = most_popular_vehicle(
            &people,
            &ReportOptions { vehicle_grouping: FrequencyMode::ByValue },
        )
        .unwrap();
        assert_eq!(by_value, "The most popular vehicle is the 2020 Honda Civic.");

        // The faithful mode never merges groups, so the first vehicle wins.
        let first_appearance = most_popular_vehicle(
            &people,
            &ReportOptions { vehicle_grouping: FrequencyMode::FirstAppearance },
        )
        .unwrap();
        assert_eq!(first_appearance, "The most popular vehicle is the 2018 Nissan Leaf.");
    }

    #[test]
    fn malformed_vehicle_fails_only_that_question() {
        let mut people = base_people();
        people[0].vehicle = "just a bicycle".into();
        let err = most_popular_vehicle(&people, &ReportOptions::default()).unwrap_err();
        assert!(matches!(err, DomainError::VehicleFormat { .. }));
        // ...while unrelated questions still answer.
        assert!(total_people(&people, &ReportOptions::default()).is_ok());
    }
}
