//! Top level of the academic taxonomy.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::{MasterFieldId, Title};
use crate::listing::{FieldKind, FieldValue, Record, ResourceSpec, SortDirection};

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MasterField {
    pub id: MasterFieldId,
    pub title: Title,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl MasterField {
    pub const RESOURCE: ResourceSpec = ResourceSpec {
        name: "Master field",
        searchable: &["title"],
        filterable: &[
            ("createdAt", FieldKind::TimeBucket),
            ("updatedAt", FieldKind::TimeBucket),
        ],
        sortable: &["title", "createdAt", "updatedAt"],
        default_sort: ("title", SortDirection::Asc),
        existence_guard: false,
    };
}

impl Record for MasterField {
    fn id(&self) -> i32 {
        self.id.get()
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "title" => Some(FieldValue::text(self.title.as_str())),
            "createdAt" => Some(FieldValue::Timestamp(self.created_at)),
            "updatedAt" => Some(FieldValue::Timestamp(self.updated_at)),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewMasterField {
    pub title: Title,
    pub timestamp: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateMasterField {
    pub title: Option<Title>,
    pub updated_at: NaiveDateTime,
}
