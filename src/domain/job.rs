use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::{JobId, Label, Title};
use crate::listing::{FieldKind, FieldValue, Record, ResourceSpec, SortDirection};

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub title: Title,
    pub company: Label,
    pub location: Label,
    /// Employment type, e.g. `Full-time` or `Internship`.
    pub job_type: Label,
    pub status: Label,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Job {
    pub const RESOURCE: ResourceSpec = ResourceSpec {
        name: "Job",
        searchable: &["title", "company", "location"],
        filterable: &[
            ("status", FieldKind::Equals),
            ("jobType", FieldKind::Equals),
            ("location", FieldKind::Equals),
            ("createdAt", FieldKind::TimeBucket),
            ("updatedAt", FieldKind::TimeBucket),
        ],
        sortable: &["title", "company", "location", "createdAt", "updatedAt"],
        default_sort: ("title", SortDirection::Asc),
        existence_guard: true,
    };
}

impl Record for Job {
    fn id(&self) -> i32 {
        self.id.get()
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "title" => Some(FieldValue::text(self.title.as_str())),
            "company" => Some(FieldValue::text(self.company.as_str())),
            "location" => Some(FieldValue::text(self.location.as_str())),
            "jobType" => Some(FieldValue::text(self.job_type.as_str())),
            "status" => Some(FieldValue::text(self.status.as_str())),
            "createdAt" => Some(FieldValue::Timestamp(self.created_at)),
            "updatedAt" => Some(FieldValue::Timestamp(self.updated_at)),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewJob {
    pub title: Title,
    pub company: Label,
    pub location: Label,
    pub job_type: Label,
    pub status: Label,
    pub timestamp: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateJob {
    pub title: Option<Title>,
    pub company: Option<Label>,
    pub location: Option<Label>,
    pub job_type: Option<Label>,
    pub status: Option<Label>,
    pub updated_at: NaiveDateTime,
}
