pub mod entitlement_repository;
pub mod notification_service;
pub mod office_repository;

#[allow(unused_imports)]
pub use entitlement_repository::EntitlementRepository;
#[allow(unused_imports)]
pub use notification_service::NotificationService;
#[allow(unused_imports)]
pub use office_repository::OfficeRepository;
