use booking_types::{Booking, Credentials};

use crate::error::Result;

/// Handle the update-booking command.
///
/// # Workflow
///
/// 1. Obtain an auth token for this run
/// 2. Replace the booking wholesale
/// 3. Display the stored booking
pub async fn handle_update_booking_command(
    base_url: &str,
    booking_id: u32,
    booking: &Booking,
    credentials: &Credentials,
    json: bool,
) -> Result<Booking> {
    let client = booking_client::v1::Client::new(base_url);
    let session = client.create_token(credentials).await?;

    let updated = client.update_booking(booking_id, booking, &session).await?;

    if json {
        println!("{}", serde_json::to_string(&updated)?);
    } else {
        println!(
            "Booking {} updated fully:\n{}",
            booking_id,
            serde_json::to_string_pretty(&updated)?
        );
    }

    Ok(updated)
}
