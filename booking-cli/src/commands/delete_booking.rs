use booking_types::Credentials;

use crate::error::{CliError, Result};
use crate::output::DeleteOutput;

/// Handle the delete-booking command.
///
/// # Workflow
///
/// 1. Obtain an auth token for this run
/// 2. Delete the booking
/// 3. Fetch it again and require a 404 to confirm it is gone
pub async fn handle_delete_booking_command(
    base_url: &str,
    booking_id: u32,
    credentials: &Credentials,
    json: bool,
) -> Result<()> {
    let client = booking_client::v1::Client::new(base_url);
    let session = client.create_token(credentials).await?;

    client.delete_booking(booking_id, &session).await?;

    match client.booking(booking_id).await {
        Err(e) if e.is_not_found() => {}
        Err(e) => return Err(e.into()),
        Ok(_) => {
            return Err(CliError::DeleteVerification(format!(
                "booking {} still present after delete",
                booking_id
            )));
        }
    }

    if json {
        println!(
            "{}",
            serde_json::to_string(&DeleteOutput {
                booking_id,
                deleted: true,
            })?
        );
    } else {
        println!("The booking {} is deleted successfully", booking_id);
    }

    Ok(())
}
