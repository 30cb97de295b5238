pub mod user_repo;
pub use user_repo::UserRepository;
pub mod broker_repo;
pub use broker_repo::BrokerRepository;
pub mod client_repo;
pub use client_repo::ClientRepository;
pub mod insurance_type_repo;
pub use insurance_type_repo::InsuranceTypeRepository;
pub mod movement_repo;
pub use movement_repo::MovementRepository;
