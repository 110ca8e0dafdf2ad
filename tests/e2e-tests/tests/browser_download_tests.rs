//! Click-triggered download, end to end through a real browser.
//!
//! Needs a WebDriver endpoint (e.g. a running chromedriver); set
//! WEBDRIVER_URL (such as http://localhost:9515) to enable. Without it
//! the test reports a skip and passes, so the suite stays green on
//! machines without a browser.

use download_lib::browser::download_by_click;
use download_lib::file_exists;
use e2e_tests::test_harness;
use thirtyfour::prelude::*;

#[tokio::test]
async fn test_click_download_saves_file() -> anyhow::Result<()> {
    let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") else {
        eprintln!("skipping click-download test: WEBDRIVER_URL not set");
        return Ok(());
    };

    let state = test_harness::initialize().await;
    let guard = state.lock().await;
    let base_url = guard.server.base_url();
    let download_dir = guard.server.results_dir();

    std::fs::create_dir_all(&download_dir)?;

    let mut caps = DesiredCapabilities::chrome();
    caps.set_headless()?;
    caps.add_experimental_option(
        "prefs",
        serde_json::json!({
            "download.default_directory": download_dir.to_string_lossy(),
            "download.prompt_for_download": false,
        }),
    )?;

    let driver = WebDriver::new(&webdriver_url, caps).await?;
    driver.goto(format!("{}/download-page", base_url)).await?;

    let download_link = driver.find(By::Css("a.btn-primary")).await?;
    let saved = download_by_click(&download_link, &download_dir, None).await?;

    assert!(file_exists(&saved).await);
    assert_eq!(
        std::fs::read(&saved)?,
        test_harness::SAMPLE_FILE_CONTENT,
        "Clicked download must save the served file unchanged"
    );

    // Saving under an explicit name must also pass the existence check
    let renamed = download_by_click(
        &driver.find(By::Css("a.btn-primary")).await?,
        &download_dir,
        Some("renamed-report.pdf"),
    )
    .await?;
    assert_eq!(renamed, download_dir.join("renamed-report.pdf"));
    assert!(file_exists(&renamed).await);

    driver.quit().await?;
    Ok(())
}
