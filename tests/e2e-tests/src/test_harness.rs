use std::path::PathBuf;
use std::thread::JoinHandle;
use tempfile::TempDir;
use tokio::sync::{Mutex, OnceCell};

use anyhow::Result;
use booking_client::{Session, v1::Client};
use booking_types::{Booking, BookingDates, Credentials};
use chrono::NaiveDate;

use crate::fixture::{FIXTURE_PASSWORD, FIXTURE_USERNAME, FixtureState, run_fixture};

pub const TEST_USERNAME: &str = FIXTURE_USERNAME;
pub const TEST_PASSWORD: &str = FIXTURE_PASSWORD;

pub const SAMPLE_FILE_NAME: &str = "sample-report.pdf";
pub const SAMPLE_FILE_CONTENT: &[u8] = b"%PDF-1.4 sample report used by the download suites";

static TEST_STATE: OnceCell<Mutex<TestState>> = OnceCell::const_new();

/// Shared fixture service and resources
///
/// The fixture is spawned programmatically once per run; the auth token
/// is obtained once, right after startup, and every test reuses the
/// resulting session. Tests hold the mutex for their whole body: the
/// booking store and session are order-sensitive shared state, so the
/// suite serializes through the lock instead of relying on runner
/// ordering.
pub struct TestState {
    pub server: TestServer,
    pub client: Client,
    pub session: Session,
    pub fixture: FixtureState,
}

pub struct TestServer {
    pub port: u16,
    pub temp_dir: TempDir,
    // Server runs on a dedicated thread with its own tokio runtime,
    // so it survives across per-test runtimes created by #[tokio::test].
    pub _server_thread: JoinHandle<()>,
}

impl TestServer {
    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// Scratch directory for downloaded artifacts, unique to this run.
    pub fn results_dir(&self) -> PathBuf {
        self.temp_dir.path().join("test-results")
    }
}

/// Initialize the shared fixture service and session
///
/// Call this at the beginning of each test. The fixture is spawned once
/// and shared across all tests via `OnceCell`.
///
/// # Example
/// ```no_run
/// # async fn test_example() {
/// let state = e2e_tests::test_harness::initialize().await;
/// let guard = state.lock().await;
/// // Use guard.client, guard.session...
/// # }
/// ```
pub async fn initialize() -> &'static Mutex<TestState> {
    TEST_STATE
        .get_or_init(|| async {
            Mutex::new(
                setup_fixture_and_session()
                    .await
                    .expect("Failed to setup fixture service"),
            )
        })
        .await
}

async fn setup_fixture_and_session() -> Result<TestState> {
    let temp_dir = TempDir::new()?;
    let files_dir = temp_dir.path().join("files");
    std::fs::create_dir_all(&files_dir)?;
    std::fs::write(files_dir.join(SAMPLE_FILE_NAME), SAMPLE_FILE_CONTENT)?;

    let port = get_random_port().await?;
    let fixture = FixtureState::new(files_dir);
    let fixture_for_server = fixture.clone();
    let server_thread = std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("Failed to create server runtime");
        rt.block_on(async move {
            if let Err(e) = run_fixture(fixture_for_server, port).await {
                panic!("Fixture service failed to start: {}", e);
            }
        });
    });

    let client = Client::new(format!("http://127.0.0.1:{}", port));
    wait_for_server(&client, None).await?;

    // Token acquisition happens exactly once per run; every test that
    // mutates state reuses this session.
    let session = client
        .create_token(&Credentials::new(TEST_USERNAME, TEST_PASSWORD))
        .await?;

    Ok(TestState {
        server: TestServer {
            port,
            temp_dir,
            _server_thread: server_thread,
        },
        client,
        session,
        fixture,
    })
}

pub async fn get_random_port() -> Result<u16> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();

    // We must drop the listener to release the port for the fixture.
    drop(listener);
    Ok(port)
}

pub async fn wait_for_server(
    client: &Client,
    deadline_in: Option<tokio::time::Instant>,
) -> Result<()> {
    let deadline =
        deadline_in.unwrap_or(tokio::time::Instant::now() + tokio::time::Duration::from_secs(5));
    loop {
        if client.ping().await.is_ok() {
            return Ok(());
        }
        if tokio::time::Instant::now() > deadline {
            return Err(anyhow::Error::msg(
                "Timed out waiting for the fixture service",
            ));
        }
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
    }
}

/// Seed a booking directly into the fixture store, bypassing HTTP, so a
/// test does not depend on the creation flow it is not exercising.
pub fn seed_booking(state: &TestState, booking: Booking) -> u32 {
    state.fixture.insert_booking(booking)
}

/// A distinct, valid booking for seeding.
pub fn booking_for(firstname: &str, lastname: &str) -> Booking {
    Booking {
        firstname: firstname.to_string(),
        lastname: lastname.to_string(),
        totalprice: 250,
        depositpaid: false,
        bookingdates: BookingDates {
            checkin: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            checkout: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        },
        additionalneeds: "None".to_string(),
    }
}
