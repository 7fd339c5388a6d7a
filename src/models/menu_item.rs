use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DietaryTag {
    Veg,
    Vegan,
    Spicy,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub image: &'static str,
    pub dietary: &'static [DietaryTag],
    pub special: bool,
}

impl MenuItem {
    pub fn has_tag(&self, tag: DietaryTag) -> bool {
        self.dietary.contains(&tag)
    }
}

/// Menu sections in the order the menu page lists them.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Menu {
    pub starters: &'static [MenuItem],
    pub mains: &'static [MenuItem],
    pub desserts: &'static [MenuItem],
    pub beverages: &'static [MenuItem],
}

impl Menu {
    pub fn items(&self) -> impl Iterator<Item = &'static MenuItem> {
        self.starters
            .iter()
            .chain(self.mains)
            .chain(self.desserts)
            .chain(self.beverages)
    }
}
