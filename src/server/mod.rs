mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, patch, post},
    Router,
};

use crate::server::handlers::{admin, bookings, live, locations, quotes, receipts, vehicles};
use crate::{api::API, auth::User};

type DynAPI = Arc<dyn API + Send + Sync>;

pub async fn serve<T: API + Sync + Send + 'static>(api: T) {
    let api = Arc::new(api) as DynAPI;

    let app = Router::new()
        .route("/vehicles", get(vehicles::list))
        .route("/vehicles/:id", get(vehicles::find))
        .route("/regions", get(locations::regions))
        .route("/locations/suggestions", get(locations::suggestions))
        .route("/quotes", post(quotes::create))
        .route("/quotes/:token", get(quotes::find))
        .route("/bookings", post(bookings::create))
        .route("/bookings/:id", get(bookings::find))
        .route("/bookings/:id/pay", patch(bookings::pay))
        .route("/bookings/:id/cancel", patch(bookings::cancel))
        .route("/bookings/:id/complete", patch(bookings::complete))
        .route("/receipts", get(receipts::list))
        .route("/driver/bookings", get(bookings::driver_list))
        .route("/admin/bookings", get(admin::list))
        .route("/admin/bookings/:id/driver", patch(admin::assign_driver))
        .route("/live", get(live::snapshot))
        .layer(Extension(api))
        .layer(Extension(User::new_passenger()));

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
