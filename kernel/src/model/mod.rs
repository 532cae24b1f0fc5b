pub mod id;
pub mod mail;
pub mod participation;
pub mod user;
pub mod webinar;
