pub mod home;
pub mod ingredients;
pub mod recipes;
