pub mod admin;
pub mod blog;
pub mod contact;
pub mod experience;
pub mod profile;
pub mod project;
pub mod skill;
