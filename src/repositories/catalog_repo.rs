use crate::models::contact::{ContactInfo, OpeningHours, SocialLinks};
use crate::models::cuisine::Cuisine;
use crate::models::gallery::{GalleryCategory, GalleryImage};
use crate::models::menu_item::{DietaryTag, Menu, MenuItem};

use DietaryTag::{Spicy, Vegan, Veg};

const fn item(
    name: &'static str,
    description: &'static str,
    price: &'static str,
    image: &'static str,
    dietary: &'static [DietaryTag],
) -> MenuItem {
    MenuItem {
        name,
        description,
        price,
        image,
        dietary,
        special: false,
    }
}

const fn special(mut menu_item: MenuItem) -> MenuItem {
    menu_item.special = true;
    menu_item
}

static MENU: Menu = Menu {
    starters: &[
        item(
            "Bruschetta Trio",
            "Classic Italian toasted bread with tomato, mozzarella, and basil",
            "₹380",
            "bruschetta.jpg",
            &[Veg],
        ),
        item(
            "Paneer Tikka",
            "Tandoor-grilled cottage cheese with mint chutney",
            "₹420",
            "paneer_tikka.jpg",
            &[Veg, Spicy],
        ),
        item(
            "Chicken Wings",
            "Crispy wings tossed in BBQ glaze",
            "₹480",
            "chicken_wings.jpg",
            &[Spicy],
        ),
        item(
            "Mezze Platter",
            "Hummus, falafel, pita bread, and Mediterranean dips",
            "₹520",
            "mezze_platter.jpg",
            &[Veg, Vegan],
        ),
    ],
    mains: &[
        special(item(
            "Butter Chicken",
            "Tender chicken in rich tomato and cream gravy",
            "₹620",
            "butter_chicken.jpg",
            &[],
        )),
        item(
            "Risotto Al Funghi",
            "Creamy Italian rice with wild mushrooms",
            "₹580",
            "risotto.jpg",
            &[Veg],
        ),
        special(item(
            "Grilled Sea Bass",
            "Fresh sea bass with lemon butter and seasonal vegetables",
            "₹880",
            "seabass.jpg",
            &[],
        )),
        item(
            "Dal Makhani",
            "Slow-cooked black lentils with butter and cream",
            "₹380",
            "dal_makhani.jpg",
            &[Veg],
        ),
        special(item(
            "Truffle Pasta",
            "Handmade pasta with truffle oil and parmesan",
            "₹680",
            "truffle_pasta.jpg",
            &[Veg],
        )),
    ],
    desserts: &[
        item(
            "Tiramisu",
            "Classic Italian coffee-soaked ladyfingers with mascarpone",
            "₹320",
            "tiramisu.jpg",
            &[Veg],
        ),
        special(item(
            "Cheesecake",
            "Classic New York style with fresh strawberries",
            "₹340",
            "cheesecake.jpg",
            &[Veg],
        )),
        item(
            "Chocolate Lava Cake",
            "Warm molten chocolate center with vanilla ice cream",
            "₹360",
            "lava_cake.jpg",
            &[Veg],
        ),
    ],
    beverages: &[
        item(
            "Café Latte",
            "Smooth espresso with steamed milk",
            "₹180",
            "latte.jpg",
            &[Veg],
        ),
        item(
            "Mumbai Masala Chai",
            "Authentic Indian spiced tea",
            "₹120",
            "masala_chai.jpg",
            &[Veg],
        ),
        item(
            "Fresh Lime Soda",
            "Refreshing mint and lime sparkler",
            "₹150",
            "lime_soda.jpg",
            &[Veg, Vegan],
        ),
        item(
            "Mango Lassi",
            "Creamy yogurt drink with fresh mango",
            "₹160",
            "mango_lassi.jpg",
            &[Veg],
        ),
    ],
};

static CUISINES: [Cuisine; 4] = [
    Cuisine {
        name: "Indian",
        description: "Authentic flavors from across India, featuring rich gravies, aromatic spices, and traditional cooking methods. Our chefs bring generations of culinary wisdom to every dish.",
        image: "cuisine_indian.jpg",
        specialties: &["Butter Chicken", "Dal Makhani", "Paneer Tikka", "Biryani"],
    },
    Cuisine {
        name: "Italian",
        description: "Classic Italian cuisine with handmade pasta, wood-fired pizzas, and authentic recipes from Rome to Sicily. Experience the taste of Italy in Mumbai.",
        image: "cuisine_italian.jpg",
        specialties: &["Truffle Pasta", "Risotto", "Bruschetta", "Tiramisu"],
    },
    Cuisine {
        name: "Continental",
        description: "A sophisticated blend of European culinary traditions, featuring grilled meats, fresh seafood, and elegant presentations.",
        image: "cuisine_continental.jpg",
        specialties: &["Grilled Sea Bass", "Steaks", "Mezze Platter"],
    },
    Cuisine {
        name: "Café Specials",
        description: "Our signature fusion creations that blend global flavors with local ingredients. Innovative dishes you won't find anywhere else.",
        image: "cuisine_fusion.jpg",
        specialties: &["Cheesecake", "Mumbai Masala Chai", "Fusion Platters"],
    },
];

static GALLERY_IMAGES: [GalleryImage; 10] = [
    GalleryImage { src: "gallery_ambience_1.jpg", category: GalleryCategory::Ambience, alt: "Cozy dining area" },
    GalleryImage { src: "gallery_ambience_2.jpg", category: GalleryCategory::Ambience, alt: "Modern interior design" },
    GalleryImage { src: "gallery_ambience_3.jpg", category: GalleryCategory::Ambience, alt: "Elegant seating" },
    GalleryImage { src: "gallery_food_1.jpg", category: GalleryCategory::Food, alt: "Signature dish plating" },
    GalleryImage { src: "gallery_food_2.jpg", category: GalleryCategory::Food, alt: "Fresh ingredients" },
    GalleryImage { src: "gallery_food_3.jpg", category: GalleryCategory::Food, alt: "Dessert presentation" },
    GalleryImage { src: "gallery_interior_1.jpg", category: GalleryCategory::Interior, alt: "Bar area" },
    GalleryImage { src: "gallery_interior_2.jpg", category: GalleryCategory::Interior, alt: "Private dining room" },
    GalleryImage { src: "gallery_event_1.jpg", category: GalleryCategory::Events, alt: "Live music night" },
    GalleryImage { src: "gallery_event_2.jpg", category: GalleryCategory::Events, alt: "Special celebration" },
];

static CONTACT_INFO: ContactInfo = ContactInfo {
    address: "Bandra West, Mumbai, Maharashtra, India",
    phone: "+91 98765 43210",
    email: "info@chillpillcafe.com",
    hours: OpeningHours {
        weekdays: "11:00 AM - 11:00 PM",
        weekends: "10:00 AM - 12:00 AM",
    },
    social: SocialLinks {
        instagram: "https://instagram.com/chillpillcafe",
        facebook: "https://facebook.com/chillpillcafe",
        twitter: "https://twitter.com/chillpillcafe",
    },
};

pub fn get_menu() -> &'static Menu {
    &MENU
}

pub fn get_cuisines() -> &'static [Cuisine] {
    &CUISINES
}

pub fn get_gallery_images() -> &'static [GalleryImage] {
    &GALLERY_IMAGES
}

pub fn get_contact_info() -> &'static ContactInfo {
    &CONTACT_INFO
}

/// Signature dishes shown on the home page, in menu order.
pub fn menu_specials() -> Vec<&'static MenuItem> {
    MENU.items()
        .filter(|menu_item| menu_item.special)
        .collect()
}

pub fn menu_with_dietary(tag: DietaryTag) -> Vec<&'static MenuItem> {
    MENU.items()
        .filter(|menu_item| menu_item.has_tag(tag))
        .collect()
}

pub fn gallery_in_category(category: GalleryCategory) -> Vec<&'static GalleryImage> {
    GALLERY_IMAGES
        .iter()
        .filter(|image| image.category == category)
        .collect()
}
