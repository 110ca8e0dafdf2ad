pub mod models {
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};

    /// A reservation record as exchanged with the booking service.
    ///
    /// The service identifies bookings by a server-assigned id which is
    /// not part of this body; see [`CreatedBooking`] and [`BookingId`].
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Booking {
        pub firstname: String,
        pub lastname: String,
        pub totalprice: i64,
        pub depositpaid: bool,
        pub bookingdates: BookingDates,
        pub additionalneeds: String,
    }

    /// Check-in/check-out pair, serialized as `YYYY-MM-DD`.
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct BookingDates {
        pub checkin: NaiveDate,
        pub checkout: NaiveDate,
    }

    /// One element of the booking listing response.
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct BookingId {
        pub bookingid: u32,
    }

    /// Response to a booking creation request: the assigned id plus an
    /// echo of the stored booking.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct CreatedBooking {
        pub bookingid: u32,
        pub booking: Booking,
    }

    /// Partial-update payload. Absent fields are omitted from the
    /// serialized body so the service leaves them untouched.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct BookingPatch {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub firstname: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub lastname: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub totalprice: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub depositpaid: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub bookingdates: Option<BookingDates>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub additionalneeds: Option<String>,
    }

    impl BookingPatch {
        /// Patch renaming first and last name, the most common case.
        pub fn names(firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
            BookingPatch {
                firstname: Some(firstname.into()),
                lastname: Some(lastname.into()),
                ..Default::default()
            }
        }
    }

    /// Query parameters for the booking listing endpoint. Absent fields
    /// are omitted so the service returns the unfiltered collection.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct BookingFilter {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub firstname: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub lastname: Option<String>,
    }

    impl BookingFilter {
        pub fn by_firstname(firstname: impl Into<String>) -> Self {
            BookingFilter {
                firstname: Some(firstname.into()),
                lastname: None,
            }
        }

        pub fn by_lastname(lastname: impl Into<String>) -> Self {
            BookingFilter {
                firstname: None,
                lastname: Some(lastname.into()),
            }
        }
    }

    /// Body of a token creation request.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct Credentials {
        pub username: String,
        pub password: String,
    }

    impl Credentials {
        pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
            Credentials {
                username: username.into(),
                password: password.into(),
            }
        }
    }

    /// Response to a token creation request.
    ///
    /// The service answers HTTP 200 in both outcomes: `token` is set on
    /// success, `reason` on bad credentials. Callers must treat a missing
    /// token as an authentication failure.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct AuthResponse {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub token: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reason: Option<String>,
    }
}

// Re-export commonly used types at the crate root
pub use models::{
    AuthResponse, Booking, BookingDates, BookingFilter, BookingId, BookingPatch, CreatedBooking,
    Credentials,
};
