use booking_client::Session;
use booking_types::Credentials;

use crate::error::Result;
use crate::output::TokenOutput;

/// Handle the create-token command.
///
/// # Workflow
///
/// 1. Post the credentials to the auth endpoint
/// 2. Display the received token
pub async fn handle_create_token_command(
    base_url: &str,
    credentials: &Credentials,
    json: bool,
) -> Result<Session> {
    let client = booking_client::v1::Client::new(base_url);
    let session = client.create_token(credentials).await?;

    if json {
        println!(
            "{}",
            serde_json::to_string(&TokenOutput {
                token: session.token().to_string(),
            })?
        );
    } else {
        println!("Token received: {}", session.token());
    }

    Ok(session)
}
