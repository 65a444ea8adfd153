pub mod admin;
pub mod lifecycle;
pub mod ticket;
