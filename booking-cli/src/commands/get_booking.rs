use booking_types::Booking;

use crate::error::Result;

/// Handle the get-booking command.
pub async fn handle_get_booking_command(
    base_url: &str,
    booking_id: u32,
    json: bool,
) -> Result<Booking> {
    let client = booking_client::v1::Client::new(base_url);
    let booking = client.booking(booking_id).await?;

    if json {
        println!("{}", serde_json::to_string(&booking)?);
    } else {
        println!("Get a booking with id: {}", booking_id);
        println!(
            "Details of the booking:\n{}",
            serde_json::to_string_pretty(&booking)?
        );
    }

    Ok(booking)
}
