pub mod health;
pub mod v1;
pub mod webinar;
