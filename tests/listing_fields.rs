use std::collections::HashMap;

use academia_core::domain::course::{Course, NewCourse};
use academia_core::domain::interest::{Interest, NewInterest};
use academia_core::domain::job::{Job, NewJob};
use academia_core::domain::master_field::{MasterField, NewMasterField};
use academia_core::domain::sub_field::{NewSubField, SubField};
use academia_core::domain::types::{
    Label, PersonName, SanitizedText, Title, UserEmail, UserRole,
};
use academia_core::domain::user::{NewUser, User};
use academia_core::listing::{
    FieldKind, FieldValue, FixedClock, ListEngine, ListRequest, ListSettings, Record,
    ResourceSpec,
};
use academia_core::repository::{
    Collection, CourseWriter, DieselRepository, InterestWriter, JobWriter, MasterFieldWriter,
    SubFieldWriter, UserWriter,
};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

mod common;

fn anchor() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 20)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn seeded_at() -> NaiveDateTime {
    anchor() - TimeDelta::hours(1)
}

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn query_value(value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::Integer(number) => Some(number.to_string()),
        FieldValue::Text(text) => Some(text.clone()),
        FieldValue::Timestamp(_) => None,
    }
}

/// Runs every sortable and filterable field of `resource` against the
/// database and checks each query succeeds with the expected total.
fn exercise_resource<T, C>(repo: &C, resource: &ResourceSpec, seeded: &[T])
where
    T: Record,
    C: Collection<T>,
{
    let clock = FixedClock(anchor());
    let settings = ListSettings::default();
    let engine = ListEngine::new(&clock, &settings);
    let size = seeded.len().to_string();

    for &field in resource.sortable {
        let request = ListRequest::from_query(
            &params(&[("sortBy", field), ("sortOrder", "desc"), ("size", size.as_str())]),
            resource,
        );
        let result = engine
            .list::<T, _>(repo, resource, &request)
            .unwrap_or_else(|err| panic!("{} sort by {field}: {err}", resource.name));

        assert_eq!(result.meta.total, seeded.len() as i64, "{} sort by {field}", resource.name);
        let keys: Vec<Option<FieldValue>> =
            result.data.iter().map(|record| record.field(field)).collect();
        assert!(
            keys.windows(2).all(|pair| pair[0] >= pair[1]),
            "{} sort by {field} is not descending",
            resource.name
        );
    }

    for &(field, kind) in resource.filterable {
        let (value, expected) = match kind {
            FieldKind::TimeBucket => ("1month".to_string(), seeded.len()),
            FieldKind::Equals | FieldKind::FoldedEquals => {
                let sample = seeded[0]
                    .field(field)
                    .unwrap_or_else(|| panic!("{} has no field {field}", resource.name));
                let value = query_value(&sample)
                    .unwrap_or_else(|| panic!("{} field {field} is not filterable", resource.name));
                let expected = seeded
                    .iter()
                    .filter(|record| record.field(field).as_ref() == Some(&sample))
                    .count();
                (value, expected)
            }
        };
        let request = ListRequest::from_query(&params(&[(field, value.as_str())]), resource);
        let result = engine
            .list::<T, _>(repo, resource, &request)
            .unwrap_or_else(|err| panic!("{} filter on {field}: {err}", resource.name));

        assert_eq!(result.meta.total, expected as i64, "{} filter on {field}", resource.name);
        assert!(expected > 0, "{} filter on {field} matched nothing", resource.name);
    }
}

#[test]
fn every_declared_field_reaches_the_database() {
    let test_db = common::TestDb::new("declared_fields.db");
    let repo = DieselRepository::new(test_db.pool());

    let courses: Vec<Course> = [
        ("Intro to AI", "CS-101", "Open"),
        ("Web Dev", "WD-200", "Closed"),
        ("Databases", "CS-101", "Open"),
    ]
    .iter()
        .map(|(title, code, status)| {
            repo.create_course(&NewCourse::new(
                Title::new(*title).unwrap(),
                Label::new(*code).unwrap(),
                SanitizedText::new(format!("About {title}")),
                Label::new(*status).unwrap(),
                seeded_at(),
            ))
            .unwrap()
        })
        .collect();

    let jobs: Vec<Job> = [
        ("Engineer", "Acme", "Berlin", "Full-time", "Open"),
        ("Analyst", "Globex", "Paris", "Part-time", "Closed"),
        ("Researcher", "Acme", "Berlin", "Full-time", "Open"),
    ]
    .iter()
    .map(|(title, company, location, job_type, status)| {
        repo.create_job(&NewJob {
            title: Title::new(*title).unwrap(),
            company: Label::new(*company).unwrap(),
            location: Label::new(*location).unwrap(),
            job_type: Label::new(*job_type).unwrap(),
            status: Label::new(*status).unwrap(),
            timestamp: seeded_at(),
        })
        .unwrap()
    })
    .collect();

    let master_fields: Vec<MasterField> = ["Engineering", "Arts"]
        .iter()
        .map(|title| {
            repo.create_master_field(&NewMasterField {
                title: Title::new(*title).unwrap(),
                timestamp: seeded_at(),
            })
            .unwrap()
        })
        .collect();

    let sub_fields: Vec<SubField> = [(0, "Robotics"), (1, "Painting"), (0, "Vision")]
        .iter()
        .map(|(parent, title)| {
            repo.create_sub_field(&NewSubField {
                master_field_id: master_fields[*parent].id,
                title: Title::new(*title).unwrap(),
                timestamp: seeded_at(),
            })
            .unwrap()
        })
        .collect();

    let interests: Vec<Interest> = [(0, "Drones"), (0, "Manipulators"), (1, "Oil")]
        .iter()
        .map(|(parent, title)| {
            repo.create_interest(&NewInterest {
                sub_field_id: sub_fields[*parent].id,
                title: Title::new(*title).unwrap(),
                timestamp: seeded_at(),
            })
            .unwrap()
        })
        .collect();

    let users: Vec<User> = [
        ("Ada", "Lovelace", "ada@example.com", UserRole::Student),
        ("Alan", "Turing", "alan@example.com", UserRole::Admin),
    ]
    .iter()
    .map(|(first, last, email, role)| {
        repo.create_user(&NewUser {
            first_name: PersonName::new(*first).unwrap(),
            last_name: PersonName::new(*last).unwrap(),
            email: UserEmail::new(*email).unwrap(),
            role: *role,
            timestamp: seeded_at(),
        })
        .unwrap()
    })
    .collect();

    exercise_resource(&repo, &Course::RESOURCE, &courses);
    exercise_resource(&repo, &Job::RESOURCE, &jobs);
    exercise_resource(&repo, &MasterField::RESOURCE, &master_fields);
    exercise_resource(&repo, &SubField::RESOURCE, &sub_fields);
    exercise_resource(&repo, &Interest::RESOURCE, &interests);
    exercise_resource(&repo, &User::RESOURCE, &users);
}

#[test]
fn email_filter_ignores_case() {
    let test_db = common::TestDb::new("email_case.db");
    let repo = DieselRepository::new(test_db.pool());
    repo.create_user(&NewUser {
        first_name: PersonName::new("Ada").unwrap(),
        last_name: PersonName::new("Lovelace").unwrap(),
        email: UserEmail::new("Ada@Example.com").unwrap(),
        role: UserRole::Student,
        timestamp: seeded_at(),
    })
    .unwrap();
    let clock = FixedClock(anchor());
    let settings = ListSettings::default();
    let engine = ListEngine::new(&clock, &settings);

    let request = ListRequest::from_query(
        &params(&[("email", "ADA@example.COM")]),
        &User::RESOURCE,
    );
    let result = engine
        .list::<User, _>(&repo, &User::RESOURCE, &request)
        .unwrap();

    assert_eq!(result.meta.total, 1);
    assert_eq!(result.data[0].email.as_str(), "ada@example.com");
}
