use booking_types::{Booking, BookingPatch, Credentials};

use crate::error::Result;

/// Handle the patch-booking command.
///
/// # Workflow
///
/// 1. Obtain an auth token for this run
/// 2. Send the partial update
/// 3. Display the full booking the service returns
pub async fn handle_patch_booking_command(
    base_url: &str,
    booking_id: u32,
    patch: &BookingPatch,
    credentials: &Credentials,
    json: bool,
) -> Result<Booking> {
    let client = booking_client::v1::Client::new(base_url);
    let session = client.create_token(credentials).await?;

    let updated = client
        .partial_update_booking(booking_id, patch, &session)
        .await?;

    if json {
        println!("{}", serde_json::to_string(&updated)?);
    } else {
        println!(
            "Booking {} updated partially:\n{}",
            booking_id,
            serde_json::to_string_pretty(&updated)?
        );
    }

    Ok(updated)
}
