//! Axum route configuration and OpenAPI documentation.
//!
//! All routes are mounted flat under `/api`, with Swagger UI served at
//! `/swagger` as it always has been.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model,
    server::{controller, state::AppState},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Resort Management API",
        description = "REST backend for the resort booking platform",
        version = "1.0.0"
    ),
    paths(
        controller::booking::create_booking,
        controller::booking::get_my_bookings,
        controller::booking::get_total_bookings,
        controller::booking::filter_bookings,
        controller::booking::get_booking,
        controller::booking::cancel_booking,
        controller::booking::update_booking_status,
        controller::booking::get_all_bookings,
        controller::payment::create_payment,
        controller::payment::get_my_payments,
        controller::payment::get_all_payments,
        controller::payment::get_payment_stats,
        controller::payment::get_payments_by_method,
        controller::payment::get_payment_invoice,
        controller::payment::get_payment,
        controller::payment::refund_payment,
        controller::discount::get_discounts,
        controller::discount::create_discount,
        controller::discount::update_discount,
        controller::discount::delete_discount,
        controller::resort::get_resorts,
        controller::resort::get_resort,
        controller::resort::create_resort,
        controller::resort::update_resort,
        controller::resort::delete_resort,
        controller::room::get_rooms,
        controller::room::get_top_booked_rooms,
        controller::room::get_room,
        controller::room::create_room,
        controller::room::update_room,
        controller::room::delete_room,
        controller::revenue::get_total_revenue,
        controller::revenue::get_monthly_revenue,
        controller::revenue::filter_revenue,
        controller::revenue::get_revenue_by_room_type,
        controller::user::get_users,
        controller::user::get_user,
        controller::user::create_user,
        controller::user::update_user,
        controller::user::change_password,
        controller::user::delete_user,
    ),
    components(schemas(
        model::api::ErrorDto,
        model::api::MessageDto,
        model::booking::CreateBookingDto,
        model::booking::BookingCreatedDto,
        model::booking::BookingDetailDto,
        model::booking::MyBookingDto,
        model::booking::AdminBookingDto,
        model::booking::UpdateBookingStatusDto,
        model::booking::BookingStatusChangedDto,
        model::booking::TotalDto,
        model::payment::CreatePaymentDto,
        model::payment::PaymentCreatedDto,
        model::payment::PaymentDetailDto,
        model::payment::MyPaymentDto,
        model::payment::AdminPaymentDto,
        model::payment::RefundRequestDto,
        model::payment::RefundResponseDto,
        model::payment::PaymentStatsDto,
        model::payment::PaymentsByMethodDto,
        model::payment::InvoiceDto,
        model::discount::DiscountDto,
        model::discount::CreateDiscountDto,
        model::discount::UpdateDiscountDto,
        model::discount::DiscountDeletedDto,
        model::resort::ResortDto,
        model::resort::CreateResortDto,
        model::resort::UpdateResortDto,
        model::room::RoomDto,
        model::room::CreateRoomDto,
        model::room::UpdateRoomDto,
        model::room::RoomCreatedDto,
        model::room::TopBookedRoomDto,
        model::revenue::TotalRevenueDto,
        model::revenue::MonthlyRevenueDto,
        model::revenue::RevenueFilterDto,
        model::revenue::RoomTypeRevenueDto,
        model::user::UserDto,
        model::user::CreateUserDto,
        model::user::UpdateUserDto,
        model::user::ChangePasswordDto,
    )),
    tags(
        (name = "bookings", description = "Booking lifecycle and statistics"),
        (name = "payments", description = "Payments, refunds and reporting"),
        (name = "discounts", description = "Discount voucher management"),
        (name = "resorts", description = "Resort management"),
        (name = "rooms", description = "Room inventory"),
        (name = "revenue", description = "Revenue statistics"),
        (name = "users", description = "User account management"),
    )
)]
struct ApiDoc;

async fn root() -> &'static str {
    "Resort Management API is running"
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        // Auth
        .route("/api/auth/login", post(controller::auth::login))
        .route("/api/auth/register", post(controller::auth::register))
        // Bookings
        .route(
            "/api/bookings",
            post(controller::booking::create_booking).get(controller::booking::get_all_bookings),
        )
        .route(
            "/api/bookings/my-bookings",
            get(controller::booking::get_my_bookings),
        )
        .route(
            "/api/bookings/total",
            get(controller::booking::get_total_bookings),
        )
        .route(
            "/api/bookings/filter",
            get(controller::booking::filter_bookings),
        )
        .route("/api/bookings/{id}", get(controller::booking::get_booking))
        .route(
            "/api/bookings/{id}/cancel",
            put(controller::booking::cancel_booking),
        )
        .route(
            "/api/bookings/{id}/status",
            put(controller::booking::update_booking_status),
        )
        // Payments
        .route("/api/payments", post(controller::payment::create_payment))
        .route(
            "/api/payments/my-payments",
            get(controller::payment::get_my_payments),
        )
        .route(
            "/api/payments/list",
            get(controller::payment::get_all_payments),
        )
        .route(
            "/api/payments/stats",
            get(controller::payment::get_payment_stats),
        )
        .route(
            "/api/payments/by-method",
            get(controller::payment::get_payments_by_method),
        )
        .route("/api/payments/{id}", get(controller::payment::get_payment))
        .route(
            "/api/payments/{id}/invoice",
            get(controller::payment::get_payment_invoice),
        )
        .route(
            "/api/payments/{id}/refund",
            post(controller::payment::refund_payment),
        )
        // Discounts
        .route(
            "/api/discounts",
            get(controller::discount::get_discounts).post(controller::discount::create_discount),
        )
        .route(
            "/api/discounts/{id}",
            put(controller::discount::update_discount)
                .delete(controller::discount::delete_discount),
        )
        // Resorts
        .route(
            "/api/resorts",
            get(controller::resort::get_resorts).post(controller::resort::create_resort),
        )
        .route(
            "/api/resorts/{id}",
            get(controller::resort::get_resort)
                .put(controller::resort::update_resort)
                .delete(controller::resort::delete_resort),
        )
        // Rooms
        .route(
            "/api/rooms",
            get(controller::room::get_rooms).post(controller::room::create_room),
        )
        .route(
            "/api/rooms/top-booked",
            get(controller::room::get_top_booked_rooms),
        )
        .route(
            "/api/rooms/{id}",
            get(controller::room::get_room)
                .put(controller::room::update_room)
                .delete(controller::room::delete_room),
        )
        // Room types
        .route(
            "/api/room-types",
            get(controller::room_type::get_room_types)
                .post(controller::room_type::create_room_type),
        )
        // Reviews
        .route("/api/reviews", post(controller::review::create_review))
        .route(
            "/api/reviews/room/{room_id}",
            get(controller::review::get_room_reviews),
        )
        .route(
            "/api/reviews/{id}/replies",
            get(controller::review::get_review_replies)
                .post(controller::review::create_review_reply),
        )
        .route(
            "/api/reviews/{id}",
            delete(controller::review::delete_review),
        )
        .route(
            "/api/reviews/replies/{id}",
            delete(controller::review::delete_review_reply),
        )
        // Notifications
        .route(
            "/api/notifications",
            get(controller::notification::get_notifications)
                .post(controller::notification::create_notification),
        )
        .route(
            "/api/notifications/unread-count",
            get(controller::notification::get_unread_count),
        )
        .route(
            "/api/notifications/read-all",
            put(controller::notification::mark_all_notifications_read),
        )
        .route(
            "/api/notifications/{id}",
            get(controller::notification::get_notification),
        )
        .route(
            "/api/notifications/{id}/read",
            put(controller::notification::mark_notification_read),
        )
        .route(
            "/api/notifications/{id}/unread",
            put(controller::notification::mark_notification_unread),
        )
        // Contacts
        .route(
            "/api/contacts",
            get(controller::contact::get_contacts).post(controller::contact::create_contact),
        )
        .route("/api/contacts/{id}", get(controller::contact::get_contact))
        .route(
            "/api/contacts/{id}/reply",
            post(controller::contact::reply_contact),
        )
        .route(
            "/api/contacts/{id}/status",
            put(controller::contact::update_contact_status),
        )
        // Users
        .route(
            "/api/users",
            get(controller::user::get_users).post(controller::user::create_user),
        )
        .route(
            "/api/users/{id}",
            get(controller::user::get_user)
                .put(controller::user::update_user)
                .delete(controller::user::delete_user),
        )
        .route(
            "/api/users/{id}/change-password",
            put(controller::user::change_password),
        )
        // Revenue
        .route(
            "/api/revenue/total",
            get(controller::revenue::get_total_revenue),
        )
        .route(
            "/api/revenue/monthly",
            get(controller::revenue::get_monthly_revenue),
        )
        .route(
            "/api/revenue/filter",
            get(controller::revenue::filter_revenue),
        )
        .route(
            "/api/revenue/by-room-type",
            get(controller::revenue::get_revenue_by_room_type),
        )
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
