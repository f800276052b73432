pub mod accounts;
pub mod home;
pub mod projects;
