//! Second level of the academic taxonomy, owned by a master field.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::{MasterFieldId, SubFieldId, Title};
use crate::listing::{FieldKind, FieldValue, Record, ResourceSpec, SortDirection};

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubField {
    pub id: SubFieldId,
    pub master_field_id: MasterFieldId,
    pub title: Title,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl SubField {
    pub const RESOURCE: ResourceSpec = ResourceSpec {
        name: "Sub field",
        searchable: &["title"],
        filterable: &[
            ("masterFieldId", FieldKind::Equals),
            ("createdAt", FieldKind::TimeBucket),
            ("updatedAt", FieldKind::TimeBucket),
        ],
        sortable: &["title", "createdAt", "updatedAt"],
        default_sort: ("title", SortDirection::Asc),
        existence_guard: false,
    };
}

impl Record for SubField {
    fn id(&self) -> i32 {
        self.id.get()
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "masterFieldId" => Some(FieldValue::Integer(i64::from(self.master_field_id.get()))),
            "title" => Some(FieldValue::text(self.title.as_str())),
            "createdAt" => Some(FieldValue::Timestamp(self.created_at)),
            "updatedAt" => Some(FieldValue::Timestamp(self.updated_at)),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewSubField {
    pub master_field_id: MasterFieldId,
    pub title: Title,
    pub timestamp: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateSubField {
    pub master_field_id: Option<MasterFieldId>,
    pub title: Option<Title>,
    pub updated_at: NaiveDateTime,
}
