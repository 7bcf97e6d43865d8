pub mod article_create;
pub mod article_detail;
pub mod feed;
pub mod home;
pub mod login;
pub mod profile;
pub mod register;
pub mod subjects;
