// system-tests/tests/helpers/fixtures.rs
// ============================================================================
// Module: Booking Fixtures
// Description: Test data factory for booking payloads.
// Purpose: Give each scenario its own randomized, well-formed booking.
// Dependencies: booker-contract, rand
// ============================================================================

//! ## Overview
//! Randomized booking payloads in the documented value ranges: price between
//! 50 and 500, valid calendar dates, names drawn from a fixed pool with a
//! random suffix so concurrently created bookings stay distinguishable in
//! filtered listings.

use booker_contract::Booking;
use booker_contract::BookingDates;
use rand::Rng;
use rand::distributions::Alphanumeric;

/// First names drawn for generated bookings.
const FIRST_NAMES: [&str; 6] = ["Alex", "Jordan", "Riley", "Casey", "Morgan", "Taylor"];
/// Last names drawn for generated bookings.
const LAST_NAMES: [&str; 6] = ["Doe", "Smith", "Nguyen", "Garcia", "Kimura", "Novak"];
/// Additional-needs values drawn for generated bookings.
const NEEDS: [&str; 4] = ["Breakfast", "Late checkout", "Parking", "None"];

/// Generates a fresh, fully populated booking payload.
pub fn generate_booking() -> Booking {
    let mut rng = rand::thread_rng();
    let suffix: String =
        (&mut rng).sample_iter(Alphanumeric).take(6).map(char::from).collect();
    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    Booking {
        firstname: first.to_string(),
        lastname: format!("{last}-{suffix}"),
        totalprice: f64::from(rng.gen_range(50_u32..=500)),
        depositpaid: rng.r#gen(),
        bookingdates: BookingDates {
            checkin: random_date(&mut rng, 2023),
            checkout: random_date(&mut rng, 2026),
        },
        additionalneeds: NEEDS[rng.gen_range(0..NEEDS.len())].to_string(),
    }
}

/// Returns the fixed payload used by the end-to-end lifecycle scenario.
pub fn end_to_end_booking() -> Booking {
    Booking {
        firstname: "Alex".to_string(),
        lastname: "Doe".to_string(),
        totalprice: 150.0,
        depositpaid: true,
        bookingdates: BookingDates {
            checkin: "2024-01-01".to_string(),
            checkout: "2024-01-10".to_string(),
        },
        additionalneeds: "Breakfast".to_string(),
    }
}

/// A booking id far outside anything the reference deployment assigns.
pub const NONEXISTENT_BOOKING_ID: u64 = 99_999_999;

/// Renders a valid random `YYYY-MM-DD` date in the given year. Days stay
/// within 1..=28 so every month is valid.
fn random_date<R: Rng>(rng: &mut R, year: u16) -> String {
    let month = rng.gen_range(1_u8..=12);
    let day = rng.gen_range(1_u8..=28);
    format!("{year:04}-{month:02}-{day:02}")
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::generate_booking;

    #[test]
    fn generated_bookings_stay_in_documented_ranges() {
        for _ in 0..100 {
            let booking = generate_booking();
            assert!(
                (50.0..=500.0).contains(&booking.totalprice),
                "totalprice out of range: {}",
                booking.totalprice
            );
            assert!(
                booking.lastname.contains('-'),
                "lastname is missing its random suffix: {}",
                booking.lastname
            );
            for date in [&booking.bookingdates.checkin, &booking.bookingdates.checkout] {
                assert!(
                    date.len() == 10 && date.as_bytes()[4] == b'-' && date.as_bytes()[7] == b'-',
                    "generated date is not YYYY-MM-DD: {date}"
                );
            }
        }
    }
}
