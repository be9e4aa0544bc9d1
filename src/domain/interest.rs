use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::{InterestId, SubFieldId, Title};
use crate::listing::{FieldKind, FieldValue, Record, ResourceSpec, SortDirection};

/// Research or career interest filed under a sub-field.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Interest {
    pub id: InterestId,
    pub sub_field_id: SubFieldId,
    pub title: Title,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Interest {
    pub const RESOURCE: ResourceSpec = ResourceSpec {
        name: "Interest",
        searchable: &["title"],
        filterable: &[
            ("subFieldId", FieldKind::Equals),
            ("createdAt", FieldKind::TimeBucket),
            ("updatedAt", FieldKind::TimeBucket),
        ],
        sortable: &["title", "createdAt", "updatedAt"],
        default_sort: ("title", SortDirection::Asc),
        existence_guard: true,
    };
}

impl Record for Interest {
    fn id(&self) -> i32 {
        self.id.get()
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "subFieldId" => Some(FieldValue::Integer(i64::from(self.sub_field_id.get()))),
            "title" => Some(FieldValue::text(self.title.as_str())),
            "createdAt" => Some(FieldValue::Timestamp(self.created_at)),
            "updatedAt" => Some(FieldValue::Timestamp(self.updated_at)),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewInterest {
    pub sub_field_id: SubFieldId,
    pub title: Title,
    pub timestamp: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateInterest {
    pub sub_field_id: Option<SubFieldId>,
    pub title: Option<Title>,
    pub updated_at: NaiveDateTime,
}
