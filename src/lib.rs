//! Hotel booking REST API: hotel owners list properties and rooms, guests
//! book stays over date ranges, completed stays can be reviewed.
//!
//! Authentication is delegated to an external identity provider; requests
//! carry the acting user id in the `X-User-Id` header (see [`identity`]).

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod identity;
pub mod models;
pub mod repo;

use actix_web::web;

/// Full route table. Shared between `main` and the HTTP-level tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("/register", web::post().to(handlers::users::register))
            .route("/profile", web::get().to(handlers::users::profile))
            .route("/profile", web::put().to(handlers::users::update_profile)),
    )
    .service(
        web::scope("/hotels")
            .route("", web::get().to(handlers::hotels::list_hotels))
            .route("", web::post().to(handlers::hotels::create_hotel))
            .route("/manage", web::get().to(handlers::hotels::manage_hotels))
            .route("/{id}", web::get().to(handlers::hotels::hotel_detail))
            .route("/{id}", web::put().to(handlers::hotels::update_hotel))
            .route("/{id}/rooms", web::post().to(handlers::rooms::add_room))
            .route("/{id}/photos", web::post().to(handlers::photos::add_hotel_photo))
            .route("/{id}/reviews", web::get().to(handlers::reviews::hotel_reviews)),
    )
    .service(
        web::scope("/rooms")
            .route("/{id}", web::put().to(handlers::rooms::update_room))
            .route("/{id}/photos", web::post().to(handlers::photos::add_room_photo))
            .route("/{id}/book", web::post().to(handlers::bookings::book_room)),
    )
    .service(
        web::scope("/bookings")
            .route("", web::get().to(handlers::bookings::my_bookings))
            .route("/{id}", web::get().to(handlers::bookings::booking_confirmation))
            .route("/{id}/confirm", web::post().to(handlers::bookings::confirm_booking))
            .route("/{id}/complete", web::post().to(handlers::bookings::complete_booking))
            .route("/{id}/cancel", web::post().to(handlers::bookings::cancel_booking))
            .route("/{id}/reviews", web::post().to(handlers::reviews::add_review)),
    );
}
