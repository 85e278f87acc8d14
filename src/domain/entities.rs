pub mod blog_post;
pub mod contact;
pub mod education;
pub mod experience;
pub mod hackathon;
pub mod navbar;
pub mod profile;
pub mod project;
pub mod section;
pub mod tweet;
