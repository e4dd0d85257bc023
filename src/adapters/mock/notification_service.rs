use crate::domain::commands::PaymentEventStatus;
use crate::domain::value_objects::{BookingId, RenterId};
use crate::ports::notification_service::{NotificationService as NotificationServiceTrait, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Mock implementation of NotificationService
///
/// Does not send actual notifications.
/// Simply succeeds without performing any action.
#[allow(dead_code)]
pub struct NotificationService;

#[allow(dead_code)]
impl NotificationService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationServiceTrait for NotificationService {
    /// Mock booking confirmation (does nothing)
    async fn send_booking_confirmed(
        &self,
        _renter_id: &RenterId,
        _booking_id: BookingId,
        _confirmed_at: DateTime<Utc>,
    ) -> Result<()> {
        Ok(())
    }

    /// Mock payment failure notification (does nothing)
    async fn send_payment_failed(
        &self,
        _renter_id: &RenterId,
        _booking_id: BookingId,
        _status: PaymentEventStatus,
    ) -> Result<()> {
        Ok(())
    }
}
