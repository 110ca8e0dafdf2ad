use booking_types::{Booking, CreatedBooking};

use crate::error::Result;

/// Handle the create-booking command.
///
/// # Workflow
///
/// 1. Post the booking to the service
/// 2. Display the assigned id and the stored booking
pub async fn handle_create_booking_command(
    base_url: &str,
    booking: &Booking,
    json: bool,
) -> Result<CreatedBooking> {
    let client = booking_client::v1::Client::new(base_url);
    let created = client.create_booking(booking).await?;

    if json {
        println!("{}", serde_json::to_string(&created)?);
    } else {
        println!("Created booking with id: {}", created.bookingid);
        println!(
            "Stored booking:\n{}",
            serde_json::to_string_pretty(&created.booking)?
        );
    }

    Ok(created)
}
