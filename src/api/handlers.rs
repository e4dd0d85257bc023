use crate::application::booking::{
    ServiceDependencies, confirm_payment as execute_confirm_payment,
    create_booking as execute_create_booking, get_booking as execute_get_booking,
};
use crate::domain::booking;
use crate::domain::value_objects::{BookingId, OfficeId};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use uuid::Uuid;

use super::{
    error::ApiError,
    types::{
        BookingCreatedResponse, BookingResponse, CreateBookingRequest, ListBookingsQuery,
        PaymentNotificationRequest,
    },
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// Command handlers (POST)
// ============================================================================

/// POST /bookings - 新しい予約を作成
///
/// 直接予約（支払いは後続のWebhookで確認）と、`entitlement_id` を
/// 指定した会員権予約（即時確定）の両方を受け付ける。
///
/// 強制されるビジネスルール:
/// - 時間帯が正時に揃い、長さが正であること
/// - オフィスが削除済みでなく、提案日が休業に該当しないこと
/// - 稼働モデルが同日の稼働中予約に対して時間帯を受け入れること
/// - 会員権経由の場合、会員権が本人のもので予約日に有効であること
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingCreatedResponse>), ApiError> {
    let now = chrono::Utc::now();
    let cmd = req.to_command(now);

    let booking_id = execute_create_booking(&state.service_deps, cmd).await?;

    // 作成された予約を取得して完全な情報を返す
    let created = execute_get_booking(&state.service_deps, booking_id).await?;

    let response = BookingCreatedResponse {
        booking_id: booking_id.value(),
        office_id: created.office_id.value(),
        status: booking::presented_status(&created, now).as_str().to_string(),
        total_amount: created.total_amount,
        start: created.interval.start(),
        end: created.interval.end(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /payments/notifications - 決済プロバイダのWebhook
///
/// 予約単位で非同期に届く支払いイベントを処理する。
///
/// 強制されるビジネスルール:
/// - 承認（approved）のみが予約を確定させる
/// - 失敗系イベントは予約の状態を変更せず、通知のみを送る
/// - 確定済み予約への重複承認は拒否される
pub async fn payment_notification(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PaymentNotificationRequest>,
) -> Result<StatusCode, ApiError> {
    let cmd = req
        .to_command(chrono::Utc::now())
        .map_err(ApiError::BadRequest)?;

    execute_confirm_payment(&state.service_deps, cmd).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /bookings/:id - 予約詳細をIDで取得
///
/// 見つかった場合は予約情報（導出ステータスを含む）を返し、
/// 見つからない場合は404を返す。
pub async fn get_booking_by_id(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<BookingResponse>, QueryError> {
    let booking_id = BookingId::from_uuid(booking_id);

    match state
        .service_deps
        .booking_repository
        .get_by_id(booking_id)
        .await
    {
        Ok(Some(found)) => Ok(Json(BookingResponse::from_booking(
            &found,
            chrono::Utc::now(),
        ))),
        Ok(None) => Err(QueryError::NotFound(format!(
            "Booking {} not found",
            booking_id.value()
        ))),
        Err(e) => Err(QueryError::InternalError(e.to_string())),
    }
}

/// GET /bookings - オプションフィルタ付き予約一覧取得
///
/// クエリパラメータ:
/// - office_id: オフィスIDでフィルタリング（必須）
/// - date: オフィスの表示タイムゾーンにおける日付（必須）
/// - status: 表示ステータスでフィルタリング（pending, scheduled, cancelled）（オプション）
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListBookingsQuery>,
) -> Result<Json<Vec<BookingResponse>>, QueryError> {
    let office_id = query.office_id.ok_or_else(|| {
        QueryError::BadRequest("office_id query parameter is required".to_string())
    })?;
    let date = query
        .date
        .ok_or_else(|| QueryError::BadRequest("date query parameter is required".to_string()))?;

    let office_id = OfficeId::from_uuid(office_id);

    let bookings = state
        .service_deps
        .booking_repository
        .find_for_office_on_date(office_id, date)
        .await
        .map_err(|e| QueryError::InternalError(e.to_string()))?;

    let now = chrono::Utc::now();

    // 表示ステータスはここで導出してからフィルタする
    let responses: Vec<BookingResponse> = bookings
        .iter()
        .map(|b| BookingResponse::from_booking(b, now))
        .filter(|r| match &query.status {
            Some(status) => r.status == *status,
            None => true,
        })
        .collect();

    Ok(Json(responses))
}

// ============================================================================
// Error types
// ============================================================================

/// クエリハンドラー用のエラー型
#[derive(Debug)]
pub enum QueryError {
    NotFound(String),
    BadRequest(String),
    InternalError(String),
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            QueryError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            QueryError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            QueryError::InternalError(msg) => {
                // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
                tracing::error!("Internal error in query handler: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = Json(super::types::ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
