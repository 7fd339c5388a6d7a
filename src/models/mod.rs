pub mod contact;
pub mod cuisine;
pub mod feedback;
pub mod gallery;
pub mod menu_item;
pub mod reservation;
