use serde::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Cuisine {
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub specialties: &'static [&'static str],
}
