use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Reservation lifecycle. Stored as TEXT in the `bookings` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: i64,
    pub user_id: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: BookingStatus,
    pub total_price: f64,
    pub created_at: chrono::NaiveDateTime,
}

/// One room's contribution to a booking. The nightly price is a snapshot
/// taken at booking time and is never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookingRoom {
    pub id: i64,
    pub booking_id: i64,
    pub room_id: i64,
    pub quantity: i64,
    pub price_per_night: f64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateBooking {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[validate(range(min = 1))]
    pub guests: i64,
}

/// Confirmation view: the booking plus its line items and payment stub.
#[derive(Debug, Serialize)]
pub struct BookingDetail {
    #[serde(flatten)]
    pub booking: Booking,
    pub rooms: Vec<BookingRoom>,
    pub payment: Option<crate::models::payment::Payment>,
}

/// Number of nights in a stay. `None` unless check-out is strictly after
/// check-in.
pub fn stay_nights(check_in: NaiveDate, check_out: NaiveDate) -> Option<i64> {
    let nights = (check_out - check_in).num_days();
    (nights > 0).then_some(nights)
}

/// Flat-rate total for one room over the stay.
pub fn stay_total(price_per_night: f64, nights: i64) -> f64 {
    price_per_night * nights as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn three_night_stay() {
        let nights = stay_nights(date(2024, 1, 10), date(2024, 1, 13)).unwrap();
        assert_eq!(nights, 3);
        assert_eq!(stay_total(100.0, nights), 300.0);
    }

    #[test]
    fn zero_length_stay_rejected() {
        assert_eq!(stay_nights(date(2024, 1, 10), date(2024, 1, 10)), None);
    }

    #[test]
    fn inverted_range_rejected() {
        assert_eq!(stay_nights(date(2024, 1, 13), date(2024, 1, 10)), None);
    }

    #[test]
    fn single_night() {
        let nights = stay_nights(date(2024, 2, 28), date(2024, 2, 29)).unwrap();
        assert_eq!(nights, 1);
        assert_eq!(stay_total(79.5, nights), 79.5);
    }
}
