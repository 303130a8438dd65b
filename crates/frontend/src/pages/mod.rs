pub mod about;
pub mod contact;
pub mod destinations;
pub mod gallery;
pub mod home;
pub mod legal;
pub mod not_found;
