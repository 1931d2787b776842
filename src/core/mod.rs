pub mod auth;
pub mod checkin;
pub mod log;
pub mod review;
pub mod view;
