use rusty_office_ddd::{
    adapters::mock::notification_service::NotificationService as MockNotificationService,
    adapters::postgres::{
        booking_repository::BookingRepository as PostgresBookingRepository,
        entitlement_repository::EntitlementRepository as PostgresEntitlementRepository,
        office_repository::OfficeRepository as PostgresOfficeRepository,
    },
    api::{handlers::AppState, router::create_router},
    application::booking::ServiceDependencies,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rusty_office_ddd=debug,tower_http=debug,axum=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection URL
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "postgres://localhost/office".into());

    tracing::info!("Database URL: {}", database_url);

    // Initialize database connection pool
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    // Initialize adapters
    let booking_repository = Arc::new(PostgresBookingRepository::new(pool.clone()));
    let office_repository = Arc::new(PostgresOfficeRepository::new(pool.clone()));
    let entitlement_repository = Arc::new(PostgresEntitlementRepository::new(pool.clone()));
    let notification_service = Arc::new(MockNotificationService::new());

    // Create service dependencies
    let service_deps = ServiceDependencies {
        booking_repository,
        office_repository,
        entitlement_repository,
        notification_service,
    };

    // Create application state
    let app_state = Arc::new(AppState { service_deps });

    // Create router
    let app = create_router(app_state);

    // Server configuration
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".into());
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
