use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use time::OffsetDateTime;
use crate::helpers::form_fields::FormFields;

#[derive(Clone, Debug, Default)]
pub struct FeedbackForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub rating: Option<String>,
    pub comments: Option<String>,
}

impl From<FormFields> for FeedbackForm {
    fn from(fields: FormFields) -> Self {
        Self {
            name: fields.get("name"),
            email: fields.get("email"),
            rating: fields.get("rating"),
            comments: fields.get("comments"),
        }
    }
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub id: u64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub rating: Option<String>,
    pub comments: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub submitted_at: OffsetDateTime,
}

impl Feedback {
    pub fn from_form(
        id: u64,
        form: FeedbackForm,
        submitted_at: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            name: form.name,
            email: form.email,
            rating: form.rating,
            comments: form.comments,
            submitted_at,
        }
    }
}
