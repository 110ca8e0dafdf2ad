use crate::error::Result;

/// Handle the ping command.
///
/// Sends a healthcheck request to the booking service.
pub async fn handle_ping_command(base_url: &str) -> Result<()> {
    let client = booking_client::v1::Client::new(base_url);
    client.ping().await?;

    println!("Booking service at {} is up", base_url);

    Ok(())
}
