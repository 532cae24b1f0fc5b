pub mod health;
pub mod webinar;
