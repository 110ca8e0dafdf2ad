use booking_types::{BookingDates, BookingPatch, Credentials};
use chrono::NaiveDate;

use crate::cli::{CredentialArgs, DEFAULT_PASSWORD, DEFAULT_USERNAME};
use crate::error::{CliError, Result};

/// Resolution order: flag, then environment variable, then default.
fn resolve_credential(flag: Option<&str>, env_var: &str, default: &str) -> String {
    flag.map(str::to_string)
        .or_else(|| std::env::var(env_var).ok())
        .unwrap_or_else(|| default.to_string())
}

pub fn resolve_credentials(
    args: &CredentialArgs,
    username_env_var: &str,
    password_env_var: &str,
) -> Credentials {
    Credentials::new(
        resolve_credential(args.username.as_deref(), username_env_var, DEFAULT_USERNAME),
        resolve_credential(args.password.as_deref(), password_env_var, DEFAULT_PASSWORD),
    )
}

/// Assemble a patch body from the optional field flags.
///
/// Check-in and check-out form one value on the wire, so patching only
/// one of them is rejected.
#[allow(clippy::too_many_arguments)]
pub fn build_booking_patch(
    firstname: Option<String>,
    lastname: Option<String>,
    totalprice: Option<i64>,
    depositpaid: Option<bool>,
    checkin: Option<NaiveDate>,
    checkout: Option<NaiveDate>,
    additionalneeds: Option<String>,
) -> Result<BookingPatch> {
    let bookingdates = match (checkin, checkout) {
        (Some(checkin), Some(checkout)) => Some(BookingDates { checkin, checkout }),
        (None, None) => None,
        _ => {
            return Err(CliError::InvalidInput(
                "checkin and checkout must be patched together".to_string(),
            ));
        }
    };

    Ok(BookingPatch {
        firstname,
        lastname,
        totalprice,
        depositpaid,
        bookingdates,
        additionalneeds,
    })
}
