#[allow(unused_imports)]
pub mod booking_repository;
#[allow(unused_imports)]
pub mod entitlement_repository;
#[allow(unused_imports)]
pub mod notification_service;
#[allow(unused_imports)]
pub mod office_repository;

#[allow(unused_imports)]
pub use booking_repository::*;
#[allow(unused_imports)]
pub use entitlement_repository::*;
#[allow(unused_imports)]
pub use notification_service::*;
#[allow(unused_imports)]
pub use office_repository::*;
