use booking_types::BookingFilter;

use crate::error::Result;
use crate::output::BookingIdsOutput;

/// Handle the list-bookings command.
///
/// Lists booking ids from the service, optionally filtered by guest
/// first/last name.
///
/// # Workflow
///
/// 1. Query the listing endpoint with the filter
/// 2. Display the ids
pub async fn handle_list_bookings_command(
    base_url: &str,
    filter: &BookingFilter,
    json: bool,
) -> Result<Vec<u32>> {
    let client = booking_client::v1::Client::new(base_url);
    let entries = client.booking_ids(filter).await?;
    let booking_ids: Vec<u32> = entries.iter().map(|entry| entry.bookingid).collect();

    if json {
        println!(
            "{}",
            serde_json::to_string(&BookingIdsOutput {
                count: booking_ids.len(),
                booking_ids: booking_ids.clone(),
            })?
        );
    } else {
        println!("There are {} booking(s)", booking_ids.len());
        for id in &booking_ids {
            println!("  - {}", id);
        }
    }

    Ok(booking_ids)
}
