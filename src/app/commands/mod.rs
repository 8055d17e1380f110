pub mod build_images;
pub mod catalog;
pub mod test_roles;
