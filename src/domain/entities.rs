pub mod account;
pub mod option_fields;
pub mod project;
pub mod technology;
