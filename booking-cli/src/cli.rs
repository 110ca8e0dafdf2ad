use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Default booking service base URL
pub const DEFAULT_BASE_URL: &str = "https://restful-booker.herokuapp.com";

/// The demo service's documented credential pair, used when neither a
/// flag nor an environment variable provides one.
pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "password123";

#[derive(clap::Args, Debug)]
pub struct CredentialArgs {
    /// Username for the auth endpoint (falls back to env var, then the demo default)
    #[arg(long)]
    pub username: Option<String>,

    /// Password for the auth endpoint (falls back to env var, then the demo default)
    #[arg(long, short)]
    pub password: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct BaseUrlArgs {
    /// Booking service base URL (optional, defaults to DEFAULT_BASE_URL)
    #[arg(short = 'u', long)]
    pub base_url: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct JsonArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Full set of booking fields, used by create and full update.
#[derive(clap::Args, Debug)]
pub struct BookingFieldArgs {
    /// Guest first name
    #[arg(long)]
    pub firstname: String,

    /// Guest last name
    #[arg(long)]
    pub lastname: String,

    /// Total price of the stay
    #[arg(long)]
    pub totalprice: i64,

    /// Whether the deposit has been paid (true/false)
    #[arg(long, action = ArgAction::Set)]
    pub depositpaid: bool,

    /// Check-in date (YYYY-MM-DD)
    #[arg(long)]
    pub checkin: NaiveDate,

    /// Check-out date (YYYY-MM-DD)
    #[arg(long)]
    pub checkout: NaiveDate,

    /// Additional needs, e.g. "Breakfast"
    #[arg(long, default_value = "")]
    pub additionalneeds: String,
}

#[derive(Parser, Debug)]
#[command(name = "booking-cli")]
#[command(about = "A CLI client for booking service QA operations")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Healthcheck against the booking service
    Ping {
        #[command(flatten)]
        base_url_args: BaseUrlArgs,
    },

    /// Obtain an auth token from the booking service
    CreateToken {
        #[command(flatten)]
        credential_args: CredentialArgs,

        #[command(flatten)]
        base_url_args: BaseUrlArgs,

        #[command(flatten)]
        json_args: JsonArgs,
    },

    /// List booking ids, optionally filtered by guest name
    ListBookings {
        /// Only bookings with this first name
        #[arg(long)]
        firstname: Option<String>,

        /// Only bookings with this last name
        #[arg(long)]
        lastname: Option<String>,

        #[command(flatten)]
        base_url_args: BaseUrlArgs,

        #[command(flatten)]
        json_args: JsonArgs,
    },

    /// Fetch one booking by id
    GetBooking {
        /// Id of the booking to fetch
        booking_id: u32,

        #[command(flatten)]
        base_url_args: BaseUrlArgs,

        #[command(flatten)]
        json_args: JsonArgs,
    },

    /// Create a new booking
    CreateBooking {
        #[command(flatten)]
        booking: BookingFieldArgs,

        #[command(flatten)]
        base_url_args: BaseUrlArgs,

        #[command(flatten)]
        json_args: JsonArgs,
    },

    /// Replace a booking wholesale (requires auth)
    UpdateBooking {
        /// Id of the booking to update
        booking_id: u32,

        #[command(flatten)]
        booking: BookingFieldArgs,

        #[command(flatten)]
        credential_args: CredentialArgs,

        #[command(flatten)]
        base_url_args: BaseUrlArgs,

        #[command(flatten)]
        json_args: JsonArgs,
    },

    /// Update selected fields of a booking (requires auth).
    /// Check-in and check-out can only be patched together.
    PatchBooking {
        /// Id of the booking to patch
        booking_id: u32,

        /// New first name
        #[arg(long)]
        firstname: Option<String>,

        /// New last name
        #[arg(long)]
        lastname: Option<String>,

        /// New total price
        #[arg(long)]
        totalprice: Option<i64>,

        /// New deposit state (true/false)
        #[arg(long, action = ArgAction::Set)]
        depositpaid: Option<bool>,

        /// New check-in date (YYYY-MM-DD)
        #[arg(long)]
        checkin: Option<NaiveDate>,

        /// New check-out date (YYYY-MM-DD)
        #[arg(long)]
        checkout: Option<NaiveDate>,

        /// New additional needs
        #[arg(long)]
        additionalneeds: Option<String>,

        #[command(flatten)]
        credential_args: CredentialArgs,

        #[command(flatten)]
        base_url_args: BaseUrlArgs,

        #[command(flatten)]
        json_args: JsonArgs,
    },

    /// Delete a booking and verify it is gone (requires auth)
    DeleteBooking {
        /// Id of the booking to delete
        booking_id: u32,

        #[command(flatten)]
        credential_args: CredentialArgs,

        #[command(flatten)]
        base_url_args: BaseUrlArgs,

        #[command(flatten)]
        json_args: JsonArgs,
    },

    /// Download a file from a direct link
    Download {
        /// URL of the file to download (filename is taken from the last path segment)
        file_url: String,

        /// Output directory (optional, defaults to ./test-results)
        #[arg(short = 'o', long)]
        output_dir: Option<PathBuf>,

        #[command(flatten)]
        json_args: JsonArgs,
    },
}

const ENV_VAR_PREFIX: &str = "BOOKING";

enum EnvVarKind {
    Username,
    Password,
}

impl std::fmt::Display for EnvVarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            EnvVarKind::Username => "username",
            EnvVarKind::Password => "password",
        };
        write!(f, "{}", s)
    }
}

impl Commands {
    // Functions to build environment variables for commands in a standard way
    fn env_var_base(&self) -> &str {
        match self {
            Self::Ping { .. } => "PING",
            Self::CreateToken { .. } => "CREATE_TOKEN",
            Self::ListBookings { .. } => "LIST_BOOKINGS",
            Self::GetBooking { .. } => "GET_BOOKING",
            Self::CreateBooking { .. } => "CREATE_BOOKING",
            Self::UpdateBooking { .. } => "UPDATE_BOOKING",
            Self::PatchBooking { .. } => "PATCH_BOOKING",
            Self::DeleteBooking { .. } => "DELETE_BOOKING",
            Self::Download { .. } => "DOWNLOAD",
        }
    }

    fn build_env_var(cmd: &Commands, kind: EnvVarKind) -> String {
        format!(
            "{ENV_VAR_PREFIX}_{}_{}",
            cmd.env_var_base(),
            kind.to_string().to_uppercase()
        )
    }

    pub fn username_env_var(&self) -> String {
        Self::build_env_var(self, EnvVarKind::Username)
    }

    pub fn password_env_var(&self) -> String {
        Self::build_env_var(self, EnvVarKind::Password)
    }

    pub fn json_output(&self) -> bool {
        match self {
            Self::CreateToken { json_args, .. }
            | Self::ListBookings { json_args, .. }
            | Self::GetBooking { json_args, .. }
            | Self::CreateBooking { json_args, .. }
            | Self::UpdateBooking { json_args, .. }
            | Self::PatchBooking { json_args, .. }
            | Self::DeleteBooking { json_args, .. }
            | Self::Download { json_args, .. } => json_args.json,
            Self::Ping { .. } => false,
        }
    }
}
