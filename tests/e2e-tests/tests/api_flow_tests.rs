#[cfg(test)]
mod tests {
    use booking_client::Session;
    use booking_types::{Booking, BookingDates, BookingFilter, BookingPatch};
    use chrono::NaiveDate;
    use e2e_tests::test_harness;

    fn jim_brown_booking() -> Booking {
        Booking {
            firstname: "Jim".to_string(),
            lastname: "Brown".to_string(),
            totalprice: 111,
            depositpaid: true,
            bookingdates: BookingDates {
                checkin: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                checkout: NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
            },
            additionalneeds: "Breakfast".to_string(),
        }
    }

    // ========================================
    // HEALTHCHECK AND AUTH
    // ========================================

    #[tokio::test]
    async fn test_ping_healthcheck() {
        let state = test_harness::initialize().await;
        let guard = state.lock().await;

        guard.client.ping().await.expect("ping should succeed");
    }

    #[tokio::test]
    async fn test_auth_token_obtained_once_per_run() {
        let state = test_harness::initialize().await;
        let guard = state.lock().await;

        assert!(
            !guard.session.token().is_empty(),
            "Harness should hold a token from startup"
        );

        // A second initialize must hand back the same session, not
        // re-authenticate
        drop(guard);
        let again = test_harness::initialize().await;
        let guard = again.lock().await;
        assert!(!guard.session.token().is_empty());
    }

    #[tokio::test]
    async fn test_auth_rejects_bad_credentials() {
        let state = test_harness::initialize().await;
        let guard = state.lock().await;

        let result = guard
            .client
            .create_token(&booking_types::Credentials::new("admin", "wrong"))
            .await;

        match result {
            Err(booking_client::ClientError::AuthFailed(reason)) => {
                assert_eq!(reason, "Bad credentials");
            }
            other => panic!("Expected AuthFailed, got: {:?}", other),
        }
    }

    // ========================================
    // LOOKUPS AND FILTERING
    // ========================================

    #[tokio::test]
    async fn test_listing_contains_seeded_bookings() {
        let state = test_harness::initialize().await;
        let guard = state.lock().await;

        let first = test_harness::seed_booking(&guard, test_harness::booking_for("Alice", "Green"));
        let second = test_harness::seed_booking(&guard, test_harness::booking_for("Bob", "Stone"));

        let ids = guard
            .client
            .booking_ids(&BookingFilter::default())
            .await
            .expect("listing should succeed");

        for expected in [first, second] {
            assert!(
                ids.iter().any(|entry| entry.bookingid == expected),
                "Expected booking {} in listing, got: {:?}",
                expected,
                ids
            );
        }
    }

    #[tokio::test]
    async fn test_listed_id_fetches_matching_booking() {
        let state = test_harness::initialize().await;
        let guard = state.lock().await;

        let seeded = test_harness::booking_for("Carol", "Reef");
        let id = test_harness::seed_booking(&guard, seeded.clone());

        let fetched = guard
            .client
            .booking(id)
            .await
            .expect("fetch by id should succeed");

        assert_eq!(fetched, seeded);
    }

    #[tokio::test]
    async fn test_get_nonexisting_booking_returns_404() {
        let state = test_harness::initialize().await;
        let guard = state.lock().await;

        let err = guard
            .client
            .booking(99999999)
            .await
            .expect_err("unknown id should fail");

        assert!(err.is_not_found(), "Expected a 404, got: {:?}", err);
    }

    #[tokio::test]
    async fn test_filter_by_own_names_includes_booking() {
        let state = test_harness::initialize().await;
        let guard = state.lock().await;

        let id = test_harness::seed_booking(&guard, test_harness::booking_for("Dora", "Winter"));
        let details = guard
            .client
            .booking(id)
            .await
            .expect("fetch by id should succeed");

        // Filtering the collection by the booking's own first name must
        // include its id
        let by_firstname = guard
            .client
            .booking_ids(&BookingFilter::by_firstname(&details.firstname))
            .await
            .expect("firstname filter should succeed");
        assert!(
            by_firstname.iter().any(|entry| entry.bookingid == id),
            "A booking with number {} is missing from: {:?}",
            id,
            by_firstname
        );

        // Same for the last name
        let by_lastname = guard
            .client
            .booking_ids(&BookingFilter::by_lastname(&details.lastname))
            .await
            .expect("lastname filter should succeed");
        assert!(
            by_lastname.iter().any(|entry| entry.bookingid == id),
            "A booking with number {} is missing from: {:?}",
            id,
            by_lastname
        );
    }

    // ========================================
    // CREATE
    // ========================================

    #[tokio::test]
    async fn test_create_booking_echoes_payload() {
        let state = test_harness::initialize().await;
        let guard = state.lock().await;

        let new_booking = jim_brown_booking();
        let created = guard
            .client
            .create_booking(&new_booking)
            .await
            .expect("create should succeed");

        assert!(created.bookingid > 0, "Assigned id must be positive");
        assert_eq!(
            created.booking, new_booking,
            "Service must echo the stored booking unchanged"
        );
    }

    // ========================================
    // UPDATE
    // ========================================

    #[tokio::test]
    async fn test_full_update_roundtrip() {
        let state = test_harness::initialize().await;
        let guard = state.lock().await;

        let id = test_harness::seed_booking(&guard, jim_brown_booking());
        let mut details = guard.client.booking(id).await.expect("fetch should succeed");

        details.firstname = "John".to_string();
        details.lastname = "Smith".to_string();
        details.additionalneeds = "Late checkout".to_string();

        let updated = guard
            .client
            .update_booking(id, &details, &guard.session)
            .await
            .expect("full update should succeed");
        assert_eq!(updated, details, "PUT must return the stored booking");

        // Re-fetching must show exactly the updated body
        let refetched = guard.client.booking(id).await.expect("re-fetch should succeed");
        assert_eq!(refetched, details);
    }

    #[tokio::test]
    async fn test_partial_update_returns_full_patched_object() {
        let state = test_harness::initialize().await;
        let guard = state.lock().await;

        let id = test_harness::seed_booking(&guard, jim_brown_booking());
        let mut expected = guard.client.booking(id).await.expect("fetch should succeed");

        expected.firstname = "John".to_string();
        expected.lastname = "Smith".to_string();

        // The service patches in place and returns the full object, so
        // the response must equal the locally patched expectation
        let updated = guard
            .client
            .partial_update_booking(id, &BookingPatch::names("John", "Smith"), &guard.session)
            .await
            .expect("partial update should succeed");
        assert_eq!(updated, expected);

        let refetched = guard.client.booking(id).await.expect("re-fetch should succeed");
        assert_eq!(refetched, expected);
    }

    #[tokio::test]
    async fn test_mutation_without_valid_token_is_rejected() {
        let state = test_harness::initialize().await;
        let guard = state.lock().await;

        let id = test_harness::seed_booking(&guard, jim_brown_booking());
        let bogus = Session::new("nosuchtoken");

        let err = guard
            .client
            .update_booking(id, &jim_brown_booking(), &bogus)
            .await
            .expect_err("update with unknown token should fail");

        match err {
            booking_client::ClientError::RequestFailed { status, .. } => {
                assert_eq!(status, 403);
            }
            other => panic!("Expected RequestFailed, got: {:?}", other),
        }
    }

    // ========================================
    // DELETE
    // ========================================

    #[tokio::test]
    async fn test_delete_then_fetch_returns_404() {
        let state = test_harness::initialize().await;
        let guard = state.lock().await;

        let id = test_harness::seed_booking(&guard, test_harness::booking_for("Eve", "Mallory"));

        guard
            .client
            .delete_booking(id, &guard.session)
            .await
            .expect("delete should succeed");

        let err = guard
            .client
            .booking(id)
            .await
            .expect_err("deleted booking should be gone");
        assert!(err.is_not_found(), "Expected a 404, got: {:?}", err);
    }
}
