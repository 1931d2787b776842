pub mod checkin_config;
pub mod client;
pub mod record;
pub mod status;
