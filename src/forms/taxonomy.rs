//! Payloads for the master field / sub-field / interest taxonomy.

use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

use crate::domain::interest::{NewInterest, UpdateInterest};
use crate::domain::master_field::{NewMasterField, UpdateMasterField};
use crate::domain::sub_field::{NewSubField, UpdateSubField};
use crate::domain::types::{MasterFieldId, SubFieldId, Title, TypeConstraintError};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMasterFieldForm {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
}

impl CreateMasterFieldForm {
    pub fn into_domain(self, now: NaiveDateTime) -> Result<NewMasterField, TypeConstraintError> {
        Ok(NewMasterField {
            title: Title::new(self.title)?,
            timestamp: now,
        })
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMasterFieldForm {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
}

impl UpdateMasterFieldForm {
    pub fn into_domain(
        self,
        now: NaiveDateTime,
    ) -> Result<UpdateMasterField, TypeConstraintError> {
        Ok(UpdateMasterField {
            title: self.title.map(Title::new).transpose()?,
            updated_at: now,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubFieldForm {
    #[validate(range(min = 1))]
    pub master_field_id: i32,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
}

impl CreateSubFieldForm {
    pub fn into_domain(self, now: NaiveDateTime) -> Result<NewSubField, TypeConstraintError> {
        Ok(NewSubField {
            master_field_id: MasterFieldId::new(self.master_field_id)?,
            title: Title::new(self.title)?,
            timestamp: now,
        })
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubFieldForm {
    #[validate(range(min = 1))]
    pub master_field_id: Option<i32>,
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
}

impl UpdateSubFieldForm {
    pub fn into_domain(self, now: NaiveDateTime) -> Result<UpdateSubField, TypeConstraintError> {
        Ok(UpdateSubField {
            master_field_id: self.master_field_id.map(MasterFieldId::new).transpose()?,
            title: self.title.map(Title::new).transpose()?,
            updated_at: now,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInterestForm {
    #[validate(range(min = 1))]
    pub sub_field_id: i32,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
}

impl CreateInterestForm {
    pub fn into_domain(self, now: NaiveDateTime) -> Result<NewInterest, TypeConstraintError> {
        Ok(NewInterest {
            sub_field_id: SubFieldId::new(self.sub_field_id)?,
            title: Title::new(self.title)?,
            timestamp: now,
        })
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInterestForm {
    #[validate(range(min = 1))]
    pub sub_field_id: Option<i32>,
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
}

impl UpdateInterestForm {
    pub fn into_domain(self, now: NaiveDateTime) -> Result<UpdateInterest, TypeConstraintError> {
        Ok(UpdateInterest {
            sub_field_id: self.sub_field_id.map(SubFieldId::new).transpose()?,
            title: self.title.map(Title::new).transpose()?,
            updated_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_id_must_be_positive() {
        let form = CreateSubFieldForm {
            master_field_id: 0,
            title: "Robotics".into(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn interest_update_with_only_title() {
        let form: UpdateInterestForm =
            serde_json::from_str(r#"{"title":"Computer Vision"}"#).expect("valid json");
        assert!(form.validate().is_ok());

        let now = chrono::NaiveDate::from_ymd_opt(2024, 4, 4)
            .unwrap()
            .and_hms_opt(4, 4, 4)
            .unwrap();
        let update = form.into_domain(now).expect("valid update");
        assert!(update.sub_field_id.is_none());
        assert_eq!(update.title.map(Title::into_inner).as_deref(), Some("Computer Vision"));
    }
}
