pub mod user;
pub mod webinar;
