pub mod auth;
pub mod broker_service;
pub mod client_service;
pub mod insurance_type_service;
pub mod movement_service;
pub mod user_service;
