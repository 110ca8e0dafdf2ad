use crate::{
    cli::{Cli, Commands, DEFAULT_BASE_URL},
    utils::{build_booking_patch, resolve_credentials},
};
use booking_types::{Booking, BookingDates, BookingFilter};

pub mod create_booking;
pub mod create_token;
pub mod delete_booking;
pub mod download;
pub mod get_booking;
pub mod list_bookings;
pub mod patch_booking;
pub mod ping;
pub mod update_booking;

use anyhow::Result;

fn base_url(explicit: &Option<String>) -> String {
    explicit
        .clone()
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

fn booking_from_args(args: &crate::cli::BookingFieldArgs) -> Booking {
    Booking {
        firstname: args.firstname.clone(),
        lastname: args.lastname.clone(),
        totalprice: args.totalprice,
        depositpaid: args.depositpaid,
        bookingdates: BookingDates {
            checkin: args.checkin,
            checkout: args.checkout,
        },
        additionalneeds: args.additionalneeds.clone(),
    }
}

/// Dispatches the command to the appropriate handler
pub fn handle_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Ping { base_url_args } => {
            let url = base_url(&base_url_args.base_url);
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(ping::handle_ping_command(&url))?;
        }
        Commands::CreateToken {
            credential_args,
            base_url_args,
            json_args,
        } => {
            let url = base_url(&base_url_args.base_url);
            let credentials = resolve_credentials(
                credential_args,
                &cli.command.username_env_var(),
                &cli.command.password_env_var(),
            );
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(create_token::handle_create_token_command(
                &url,
                &credentials,
                json_args.json,
            ))?;
        }
        Commands::ListBookings {
            firstname,
            lastname,
            base_url_args,
            json_args,
        } => {
            let url = base_url(&base_url_args.base_url);
            let filter = BookingFilter {
                firstname: firstname.clone(),
                lastname: lastname.clone(),
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(list_bookings::handle_list_bookings_command(
                &url,
                &filter,
                json_args.json,
            ))?;
        }
        Commands::GetBooking {
            booking_id,
            base_url_args,
            json_args,
        } => {
            let url = base_url(&base_url_args.base_url);
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(get_booking::handle_get_booking_command(
                &url,
                *booking_id,
                json_args.json,
            ))?;
        }
        Commands::CreateBooking {
            booking,
            base_url_args,
            json_args,
        } => {
            let url = base_url(&base_url_args.base_url);
            let new_booking = booking_from_args(booking);
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(create_booking::handle_create_booking_command(
                &url,
                &new_booking,
                json_args.json,
            ))?;
        }
        Commands::UpdateBooking {
            booking_id,
            booking,
            credential_args,
            base_url_args,
            json_args,
        } => {
            let url = base_url(&base_url_args.base_url);
            let credentials = resolve_credentials(
                credential_args,
                &cli.command.username_env_var(),
                &cli.command.password_env_var(),
            );
            let updated = booking_from_args(booking);
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(update_booking::handle_update_booking_command(
                &url,
                *booking_id,
                &updated,
                &credentials,
                json_args.json,
            ))?;
        }
        Commands::PatchBooking {
            booking_id,
            firstname,
            lastname,
            totalprice,
            depositpaid,
            checkin,
            checkout,
            additionalneeds,
            credential_args,
            base_url_args,
            json_args,
        } => {
            let url = base_url(&base_url_args.base_url);
            let credentials = resolve_credentials(
                credential_args,
                &cli.command.username_env_var(),
                &cli.command.password_env_var(),
            );
            let patch = build_booking_patch(
                firstname.clone(),
                lastname.clone(),
                *totalprice,
                *depositpaid,
                *checkin,
                *checkout,
                additionalneeds.clone(),
            )?;
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(patch_booking::handle_patch_booking_command(
                &url,
                *booking_id,
                &patch,
                &credentials,
                json_args.json,
            ))?;
        }
        Commands::DeleteBooking {
            booking_id,
            credential_args,
            base_url_args,
            json_args,
        } => {
            let url = base_url(&base_url_args.base_url);
            let credentials = resolve_credentials(
                credential_args,
                &cli.command.username_env_var(),
                &cli.command.password_env_var(),
            );
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(delete_booking::handle_delete_booking_command(
                &url,
                *booking_id,
                &credentials,
                json_args.json,
            ))?;
        }
        Commands::Download {
            file_url,
            output_dir,
            json_args,
        } => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(download::handle_download_command(
                file_url,
                output_dir.as_deref(),
                json_args.json,
            ))?;
        }
    }
    Ok(())
}
