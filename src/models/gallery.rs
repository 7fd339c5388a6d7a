use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GalleryCategory {
    Ambience,
    Food,
    Interior,
    Events,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub category: GalleryCategory,
    pub alt: &'static str,
}
