pub mod bookings;
pub mod hotels;
pub mod photos;
pub mod reviews;
pub mod rooms;
pub mod users;
