use serde::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ContactInfo {
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub hours: OpeningHours,
    pub social: SocialLinks,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct OpeningHours {
    pub weekdays: &'static str,
    pub weekends: &'static str,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SocialLinks {
    pub instagram: &'static str,
    pub facebook: &'static str,
    pub twitter: &'static str,
}
