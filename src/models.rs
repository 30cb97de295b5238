pub mod auth;
pub mod broker;
pub mod client;
pub mod insurance_type;
pub mod movement;
pub mod user;
