pub mod booking_repository;
pub mod entitlement_repository;
pub mod office_repository;
