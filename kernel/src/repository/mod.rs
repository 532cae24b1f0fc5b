pub mod participation;
pub mod user;
pub mod webinar;
