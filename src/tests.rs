#[cfg(test)]
mod integration_tests {
    use crate::router::create_router;
    use crate::schemas::ErrorResponse;
    use crate::test_utils::test_utils::{setup_test_app, setup_test_app_state};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono::NaiveDate;
    use common::{ApiResponse, CreateEntryRequest, CreateUserRequest, UpdateUserRequest};
    use rust_decimal::Decimal;
    use sea_orm::{ActiveModelTrait, Set};

    fn decimal(value: &serde_json::Value) -> Decimal {
        value
            .as_str()
            .expect("expected a decimal string")
            .parse()
            .expect("expected a parseable decimal")
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn test_create_user_with_goal() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_request = CreateUserRequest {
            username: "alice".to_string(),
            carbon_goal_kg: Some(Decimal::new(1500, 0)),
        };

        let response = server.post("/api/v1/users").json(&create_request).await;

        response.assert_status(StatusCode::CREATED);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "User created successfully");
        assert_eq!(body.data["username"], "alice");
        assert_eq!(decimal(&body.data["carbon_goal_kg"]), Decimal::new(1500, 0));
        assert!(body.data["id"].as_i64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_create_user_rejects_non_positive_goal() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_request = CreateUserRequest {
            username: "bob".to_string(),
            carbon_goal_kg: Some(Decimal::ZERO),
        };

        let response = server.post("/api/v1/users").json(&create_request).await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_user_goal() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let update_request = UpdateUserRequest {
            username: None,
            carbon_goal_kg: Some(Decimal::new(3000, 0)),
        };

        let response = server.put("/api/v1/users/1").json(&update_request).await;
        response.assert_status(StatusCode::OK);

        let response = server.get("/api/v1/users/1").await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(decimal(&body.data["carbon_goal_kg"]), Decimal::new(3000, 0));
    }

    #[tokio::test]
    async fn test_get_missing_user_returns_not_found() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/users/9999").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_entry_computes_emission() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_request = CreateEntryRequest {
            category: "energy".to_string(),
            activity_type: "electricity_kwh".to_string(),
            quantity: Decimal::new(150, 0),
            occurred_on: NaiveDate::from_ymd_opt(2025, 3, 15),
            note: Some("march bill".to_string()),
        };

        let response = server
            .post("/api/v1/users/1/entries")
            .json(&create_request)
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);
        assert_eq!(body.data["category"], "energy");
        assert_eq!(body.data["activity_type"], "electricity_kwh");
        assert_eq!(decimal(&body.data["quantity"]), Decimal::new(150, 0));
        assert_eq!(decimal(&body.data["co2_kg"]), Decimal::new(6795, 2)); // 67.95
        assert_eq!(body.data["occurred_on"], "2025-03-15");
        assert_eq!(body.data["note"], "march bill");
    }

    #[tokio::test]
    async fn test_create_entry_unknown_activity() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_request = CreateEntryRequest {
            category: "energy".to_string(),
            activity_type: "cold_fusion_kwh".to_string(),
            quantity: Decimal::new(10, 0),
            occurred_on: None,
            note: None,
        };

        let response = server
            .post("/api/v1/users/1/entries")
            .json(&create_request)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert!(!body.success);
        assert_eq!(body.code, "UNKNOWN_ACTIVITY");
        assert!(body.error.contains("cold_fusion_kwh"));
    }

    #[tokio::test]
    async fn test_create_entry_category_mismatch() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // Valid key, wrong category
        let create_request = CreateEntryRequest {
            category: "food".to_string(),
            activity_type: "electricity_kwh".to_string(),
            quantity: Decimal::new(10, 0),
            occurred_on: None,
            note: None,
        };

        let response = server
            .post("/api/v1/users/1/entries")
            .json(&create_request)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "UNKNOWN_ACTIVITY");
    }

    #[tokio::test]
    async fn test_create_entry_rejects_non_positive_quantity() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_request = CreateEntryRequest {
            category: "energy".to_string(),
            activity_type: "electricity_kwh".to_string(),
            quantity: Decimal::new(-5, 0),
            occurred_on: None,
            note: None,
        };

        let response = server
            .post("/api/v1/users/1/entries")
            .json(&create_request)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "INVALID_QUANTITY");
    }

    #[tokio::test]
    async fn test_create_entry_for_missing_user() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_request = CreateEntryRequest {
            category: "energy".to_string(),
            activity_type: "electricity_kwh".to_string(),
            quantity: Decimal::new(10, 0),
            occurred_on: None,
            note: None,
        };

        let response = server
            .post("/api/v1/users/9999/entries")
            .json(&create_request)
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_entries_listed_newest_first() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let first = CreateEntryRequest {
            category: "transportation".to_string(),
            activity_type: "bus_mile".to_string(),
            quantity: Decimal::new(10, 0),
            occurred_on: NaiveDate::from_ymd_opt(2025, 3, 1),
            note: None,
        };
        let second = CreateEntryRequest {
            category: "food".to_string(),
            activity_type: "beef_meal".to_string(),
            quantity: Decimal::new(1, 0),
            occurred_on: NaiveDate::from_ymd_opt(2025, 3, 2),
            note: None,
        };

        server
            .post("/api/v1/users/1/entries")
            .json(&first)
            .await
            .assert_status(StatusCode::CREATED);
        server
            .post("/api/v1/users/1/entries")
            .json(&second)
            .await
            .assert_status(StatusCode::CREATED);

        let response = server.get("/api/v1/users/1/entries").await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert_eq!(body.data.len(), 2);
        assert_eq!(body.data[0]["activity_type"], "beef_meal");
        assert_eq!(body.data[1]["activity_type"], "bus_mile");
    }

    #[tokio::test]
    async fn test_get_and_delete_entry() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_request = CreateEntryRequest {
            category: "waste".to_string(),
            activity_type: "recycling_kg".to_string(),
            quantity: Decimal::new(4, 0),
            occurred_on: None,
            note: None,
        };

        let create_response = server
            .post("/api/v1/users/1/entries")
            .json(&create_request)
            .await;
        create_response.assert_status(StatusCode::CREATED);
        let create_body: ApiResponse<serde_json::Value> = create_response.json();
        let entry_id = create_body.data["id"].as_i64().unwrap();

        let response = server.get(&format!("/api/v1/entries/{}", entry_id)).await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(decimal(&body.data["co2_kg"]), Decimal::new(4, 1)); // 4 * 0.1

        let response = server
            .delete(&format!("/api/v1/entries/{}", entry_id))
            .await;
        response.assert_status(StatusCode::OK);

        let response = server.get(&format!("/api/v1/entries/{}", entry_id)).await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_user_stats_for_one_month() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // 150 kWh in March, plus an entry outside the window
        let in_window = CreateEntryRequest {
            category: "energy".to_string(),
            activity_type: "electricity_kwh".to_string(),
            quantity: Decimal::new(150, 0),
            occurred_on: NaiveDate::from_ymd_opt(2025, 3, 15),
            note: None,
        };
        let out_of_window = CreateEntryRequest {
            category: "food".to_string(),
            activity_type: "beef_meal".to_string(),
            quantity: Decimal::new(2, 0),
            occurred_on: NaiveDate::from_ymd_opt(2025, 4, 1),
            note: None,
        };

        server
            .post("/api/v1/users/1/entries")
            .json(&in_window)
            .await
            .assert_status(StatusCode::CREATED);
        server
            .post("/api/v1/users/1/entries")
            .json(&out_of_window)
            .await
            .assert_status(StatusCode::CREATED);

        let response = server
            .get("/api/v1/users/1/stats?year=2025&month=3")
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        let stats = &body.data;

        assert_eq!(decimal(&stats["monthly_co2"]), Decimal::new(6795, 2));
        assert_eq!(
            decimal(&stats["total_co2"]),
            Decimal::new(6795, 2) + Decimal::new(1322, 2)
        );
        // Against a 2000 kg annual goal: budget 166.66..., 40.77% used,
        // 98.72 kg remaining
        assert_eq!(
            decimal(&stats["goal_percent"]).round_dp(2),
            Decimal::new(4077, 2)
        );
        assert_eq!(
            decimal(&stats["remaining_kg"]).round_dp(2),
            Decimal::new(9872, 2)
        );
        assert_eq!(stats["goal_exceeded"], false);
        assert_eq!(stats["top_category"], "energy");
    }

    #[tokio::test]
    async fn test_user_stats_rejects_invalid_month() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/api/v1/users/1/stats?year=2025&month=13")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_stats_reflect_entry_deletion() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_request = CreateEntryRequest {
            category: "energy".to_string(),
            activity_type: "natural_gas_therm".to_string(),
            quantity: Decimal::new(3, 0),
            occurred_on: NaiveDate::from_ymd_opt(2025, 5, 10),
            note: None,
        };

        let create_response = server
            .post("/api/v1/users/1/entries")
            .json(&create_request)
            .await;
        create_response.assert_status(StatusCode::CREATED);
        let create_body: ApiResponse<serde_json::Value> = create_response.json();
        let entry_id = create_body.data["id"].as_i64().unwrap();

        let response = server
            .get("/api/v1/users/1/stats?year=2025&month=5")
            .await;
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(decimal(&body.data["monthly_co2"]), Decimal::new(159, 1));

        // Deleting must also drop the cached figure
        server
            .delete(&format!("/api/v1/entries/{}", entry_id))
            .await
            .assert_status(StatusCode::OK);

        let response = server
            .get("/api/v1/users/1/stats?year=2025&month=5")
            .await;
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(decimal(&body.data["monthly_co2"]), Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_legacy_rows_count_in_stats() {
        let state = setup_test_app_state().await;

        // A row written before the column rename: only the old-generation
        // columns are populated.
        let legacy_row = model::entities::carbon_entry::ActiveModel {
            user_id: Set(1),
            category: Set("transportation".to_string()),
            activity_type: Set("bus_mile".to_string()),
            amount: Set(Some(Decimal::new(10, 0))),
            co2_kg: Set(Some(Decimal::new(105, 2))),
            date_recorded: Set(NaiveDate::from_ymd_opt(2025, 3, 5)),
            description: Set(Some("commute".to_string())),
            ..Default::default()
        };
        legacy_row
            .insert(&state.db)
            .await
            .expect("Failed to insert legacy entry");

        let server = TestServer::new(create_router(state)).unwrap();

        let response = server.get("/api/v1/users/1/entries").await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert_eq!(body.data.len(), 1);
        assert_eq!(decimal(&body.data[0]["quantity"]), Decimal::new(10, 0));
        assert_eq!(decimal(&body.data[0]["co2_kg"]), Decimal::new(105, 2));
        assert_eq!(body.data[0]["occurred_on"], "2025-03-05");
        assert_eq!(body.data[0]["note"], "commute");

        let response = server
            .get("/api/v1/users/1/stats?year=2025&month=3")
            .await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(decimal(&body.data["monthly_co2"]), Decimal::new(105, 2));
        assert_eq!(body.data["top_category"], "transportation");
    }

    #[tokio::test]
    async fn test_community_stats() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // Entries default to today, so they land in the current window
        let user1_entry = CreateEntryRequest {
            category: "energy".to_string(),
            activity_type: "electricity_kwh".to_string(),
            quantity: Decimal::new(150, 0),
            occurred_on: None,
            note: None,
        };
        let user2_entry = CreateEntryRequest {
            category: "food".to_string(),
            activity_type: "vegan_meal".to_string(),
            quantity: Decimal::new(2, 0),
            occurred_on: None,
            note: None,
        };

        server
            .post("/api/v1/users/1/entries")
            .json(&user1_entry)
            .await
            .assert_status(StatusCode::CREATED);
        server
            .post("/api/v1/users/2/entries")
            .json(&user2_entry)
            .await
            .assert_status(StatusCode::CREATED);

        let response = server.get("/api/v1/community/stats").await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        let stats = &body.data;

        assert_eq!(stats["total_users"], 2);
        assert_eq!(stats["total_activities"], 2);
        assert_eq!(stats["active_users"], 2);
        // 67.95 + 0.32
        assert_eq!(decimal(&stats["co2_this_month"]), Decimal::new(6827, 2));
        assert_eq!(decimal(&stats["total_co2_tracked"]), Decimal::new(6827, 2));
        // 68.27 / 1.83 rounds to 37
        assert_eq!(stats["trees_equivalent"], 37);
    }

    #[tokio::test]
    async fn test_activities_listing() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/activities").await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert_eq!(body.data.len(), 21);

        let electricity = body
            .data
            .iter()
            .find(|activity| activity["key"] == "electricity_kwh")
            .unwrap();
        assert_eq!(electricity["category"], "energy");
        assert_eq!(electricity["unit"], "kWh");
        assert_eq!(decimal(&electricity["factor"]), Decimal::new(453, 3));
    }

    #[tokio::test]
    async fn test_delete_user_cascades_entries() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_request = CreateEntryRequest {
            category: "consumption".to_string(),
            activity_type: "book_item".to_string(),
            quantity: Decimal::new(1, 0),
            occurred_on: None,
            note: None,
        };

        let create_response = server
            .post("/api/v1/users/2/entries")
            .json(&create_request)
            .await;
        create_response.assert_status(StatusCode::CREATED);
        let create_body: ApiResponse<serde_json::Value> = create_response.json();
        let entry_id = create_body.data["id"].as_i64().unwrap();

        server
            .delete("/api/v1/users/2")
            .await
            .assert_status(StatusCode::OK);

        let response = server.get(&format!("/api/v1/entries/{}", entry_id)).await;
        response.assert_status(StatusCode::NOT_FOUND);
    }
}
