mod booking_service;
mod errors;

#[allow(unused_imports)]
pub use booking_service::{
    ServiceDependencies, confirm_payment, create_booking, get_booking, list_bookings_for_office,
};
#[allow(unused_imports)]
pub use errors::{BookingApplicationError, Result};
