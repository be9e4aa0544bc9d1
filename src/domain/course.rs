use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::{CourseId, Label, SanitizedText, Title};
use crate::listing::{FieldKind, FieldValue, Record, ResourceSpec, SortDirection};

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub title: Title,
    pub code: Label,
    pub description: SanitizedText,
    pub status: Label,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Course {
    pub const RESOURCE: ResourceSpec = ResourceSpec {
        name: "Course",
        searchable: &["title", "code", "description"],
        filterable: &[
            ("status", FieldKind::Equals),
            ("code", FieldKind::Equals),
            ("createdAt", FieldKind::TimeBucket),
            ("updatedAt", FieldKind::TimeBucket),
        ],
        sortable: &["title", "code", "description", "createdAt", "updatedAt"],
        default_sort: ("title", SortDirection::Asc),
        existence_guard: true,
    };
}

impl Record for Course {
    fn id(&self) -> i32 {
        self.id.get()
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "title" => Some(FieldValue::text(self.title.as_str())),
            "code" => Some(FieldValue::text(self.code.as_str())),
            "description" => Some(FieldValue::text(self.description.as_str())),
            "status" => Some(FieldValue::text(self.status.as_str())),
            "createdAt" => Some(FieldValue::Timestamp(self.created_at)),
            "updatedAt" => Some(FieldValue::Timestamp(self.updated_at)),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewCourse {
    pub title: Title,
    pub code: Label,
    pub description: SanitizedText,
    pub status: Label,
    /// Stored as both `created_at` and `updated_at`.
    pub timestamp: NaiveDateTime,
}

impl NewCourse {
    #[must_use]
    pub fn new(
        title: Title,
        code: Label,
        description: SanitizedText,
        status: Label,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            title,
            code,
            description,
            status,
            timestamp,
        }
    }
}

/// Partial update; `None` leaves the stored value untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateCourse {
    pub title: Option<Title>,
    pub code: Option<Label>,
    pub description: Option<SanitizedText>,
    pub status: Option<Label>,
    pub updated_at: NaiveDateTime,
}
