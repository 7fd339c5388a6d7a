use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use time::OffsetDateTime;
use crate::helpers::form_fields::FormFields;

/// Fields posted by the reservation form. Nothing is validated; a missing
/// field stays `None`.
#[derive(Clone, Debug, Default)]
pub struct ReservationForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub guests: Option<String>,
    pub special_requests: Option<String>,
}

impl From<FormFields> for ReservationForm {
    fn from(fields: FormFields) -> Self {
        Self {
            name: fields.get("name"),
            email: fields.get("email"),
            phone: fields.get("phone"),
            date: fields.get("date"),
            time: fields.get("time"),
            guests: fields.get("guests"),
            special_requests: fields.get("special_requests"),
        }
    }
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Reservation {
    pub id: u64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub guests: Option<String>,
    pub special_requests: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub booked_at: OffsetDateTime,
}

impl Reservation {
    pub fn from_form(
        id: u64,
        form: ReservationForm,
        booked_at: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            name: form.name,
            email: form.email,
            phone: form.phone,
            date: form.date,
            time: form.time,
            guests: form.guests,
            special_requests: form.special_requests,
            booked_at,
        }
    }
}
