mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::TestApp;

const GROCERIES: i64 = 4;
const SALARY: i64 = 1;
const EUR: i64 = 2;

async fn record(
    app: &TestApp,
    token: &str,
    category_id: i64,
    amount: f64,
    date: &str,
    kind: &str,
) -> Value {
    let (status, body) = app
        .post(
            "/api/v1/transactions",
            token,
            json!({
                "categoryId": category_id,
                "amount": amount,
                "description": "test entry",
                "date": date,
                "type": kind,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body
}

#[tokio::test]
async fn budget_report_reflects_category_spending() {
    let app = TestApp::new().await;
    let token = app.sign_up("alice@example.com").await;

    let (status, budget) = app
        .post(
            "/api/v1/budgets",
            &token,
            json!({
                "categoryId": GROCERIES,
                "amount": 500,
                "period": "monthly",
                "startDate": "2024-01-01",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{budget}");
    assert_eq!(budget["endDate"], "2024-02-01");
    assert_eq!(budget["category"]["name"], "Groceries");

    record(&app, &token, GROCERIES, 200.0, "2024-01-10", "expense").await;
    record(&app, &token, GROCERIES, 150.0, "2024-01-20", "expense").await;
    record(&app, &token, GROCERIES, 75.0, "2024-03-05", "expense").await;
    record(&app, &token, SALARY, 3000.0, "2024-01-15", "income").await;

    let (status, body) = app.get("/api/v1/budgets", &token).await;
    assert_eq!(status, StatusCode::OK);
    let budgets = body["budgets"].as_array().unwrap();
    assert_eq!(budgets.len(), 1);
    let report = &budgets[0]["report"];
    assert_eq!(report["budgetAmount"].as_f64(), Some(500.0));
    assert_eq!(report["totalSpent"].as_f64(), Some(350.0));
    assert_eq!(report["remaining"].as_f64(), Some(150.0));
    assert_eq!(report["percentageUsed"].as_f64(), Some(70.0));
    assert_eq!(report["isOnTrack"], true);

    let (status, body) = app.get("/api/v1/budgets?activeOnly=true", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["budgets"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn transactions_are_filtered_and_paged() {
    let app = TestApp::new().await;
    let token = app.sign_up("alice@example.com").await;

    record(&app, &token, GROCERIES, 20.0, "2024-02-01", "expense").await;
    record(&app, &token, GROCERIES, 30.0, "2024-02-03", "expense").await;
    record(&app, &token, 5, 900.0, "2024-02-02", "expense").await;
    record(&app, &token, SALARY, 2500.0, "2024-02-04", "income").await;

    let (status, body) = app
        .get(
            "/api/v1/transactions?type=expense&categoryIds=4&limit=1&page=1",
            &token,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["limit"], 1);
    let rows = body["transactions"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["date"], "2024-02-03");

    let (_, body) = app
        .get("/api/v1/transactions?categoryIds=4,5&categoryIds=1", &token)
        .await;
    assert_eq!(body["total"], 4);
    assert_eq!(body["limit"], 20);

    let (_, body) = app
        .get(
            "/api/v1/transactions?startDate=2024-02-02&endDate=2024-02-03",
            &token,
        )
        .await;
    assert_eq!(body["total"], 2);

    let (status, body) = app
        .get("/api/v1/transactions?startDate=02/02/2024", &token)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn users_cannot_touch_each_others_records() {
    let app = TestApp::new().await;
    let alice = app.sign_up("alice@example.com").await;
    let bob = app.sign_up("bob@example.com").await;

    let transaction = record(&app, &alice, GROCERIES, 12.5, "2024-05-01", "expense").await;
    let uri = format!("/api/v1/transactions/{}", transaction["id"]);

    let (status, _) = app.delete(&uri, &bob).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (_, body) = app.get("/api/v1/transactions", &bob).await;
    assert_eq!(body["total"], 0);
    assert_eq!(body["totalPages"], 1);

    let (status, _) = app.delete(&uri, &alice).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.delete(&uri, &alice).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn categories_protect_defaults_and_allow_custom_ones() {
    let app = TestApp::new().await;
    let token = app.sign_up("alice@example.com").await;

    let (status, _) = app
        .delete(&format!("/api/v1/categories/{GROCERIES}"), &token)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, category) = app
        .post(
            "/api/v1/categories",
            &token,
            json!({ "name": "Coffee", "type": "expense" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(category["isDefault"], false);

    let (_, body) = app.get("/api/v1/categories?type=income", &token).await;
    let names: Vec<&str> = body["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Salary", "Freelance", "Investments"]);

    let uri = format!("/api/v1/categories/{}", category["id"]);
    let (status, updated) = app
        .put(
            &uri,
            &token,
            json!({ "name": "Coffee & tea", "color": "#6b4f2a", "type": "expense" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Coffee & tea");

    let (status, _) = app.delete(&uri, &token).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn default_currency_applies_to_new_transactions() {
    let app = TestApp::new().await;
    let token = app.sign_up("alice@example.com").await;

    let (status, currency) = app.get("/api/v1/currencies/default", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(currency["code"], "USD");

    let (status, currency) = app
        .put(
            "/api/v1/currencies/default",
            &token,
            json!({ "currencyId": EUR }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(currency["code"], "EUR");

    let transaction = record(&app, &token, GROCERIES, 9.99, "2024-06-01", "expense").await;
    assert_eq!(transaction["currencyId"], EUR);

    let franc = json!({ "code": "chf", "name": "Swiss franc", "symbol": "Fr" });
    let (status, created) = app.post("/api/v1/currencies", &token, franc.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["code"], "CHF");
    let (status, _) = app.post("/api/v1/currencies", &token, franc).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn currency_in_use_cannot_be_deleted() {
    let app = TestApp::new().await;
    let token = app.sign_up("alice@example.com").await;

    let (status, franc) = app
        .post(
            "/api/v1/currencies",
            &token,
            json!({ "code": "CHF", "name": "Swiss franc", "symbol": "Fr" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{franc}");
    let (status, _) = app
        .put(
            "/api/v1/currencies/default",
            &token,
            json!({ "currencyId": franc["id"] }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    record(&app, &token, GROCERIES, 42.0, "2024-06-01", "expense").await;

    let uri = format!("/api/v1/currencies/{}", franc["id"]);
    let (status, body) = app.delete(&uri, &token).await;
    assert_eq!(status, StatusCode::CONFLICT, "{body}");

    let (status, currencies) = app.get("/api/v1/currencies", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert!(currencies["currencies"]
        .as_array()
        .unwrap()
        .iter()
        .any(|c| c["code"] == "CHF"));
}

#[tokio::test]
async fn invalid_payloads_are_bad_requests() {
    let app = TestApp::new().await;
    let token = app.sign_up("alice@example.com").await;

    let payloads = [
        json!({ "categoryId": GROCERIES, "amount": 0, "date": "2024-01-01", "type": "expense" }),
        json!({ "categoryId": GROCERIES, "amount": 5, "date": "2024-01-01", "type": "transfer" }),
        json!({ "categoryId": GROCERIES, "amount": 5, "date": "January 1st", "type": "expense" }),
        json!({ "categoryId": GROCERIES, "amount": 1e20, "date": "2024-01-01", "type": "expense" }),
    ];
    for payload in payloads {
        let (status, body) = app.post("/api/v1/transactions", &token, payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    }

    let (status, _) = app
        .post(
            "/api/v1/budgets",
            &token,
            json!({
                "categoryId": GROCERIES,
                "amount": 100,
                "period": "fortnightly",
                "startDate": "2024-01-01",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn recurring_templates_can_be_paused_and_removed() {
    let app = TestApp::new().await;
    let token = app.sign_up("alice@example.com").await;

    let (status, template) = app
        .post(
            "/api/v1/recurring-transactions",
            &token,
            json!({
                "categoryId": 5,
                "amount": 1200,
                "description": "Rent",
                "type": "expense",
                "frequency": "monthly",
                "nextDueDate": "2020-01-01",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{template}");

    let (_, body) = app
        .get("/api/v1/recurring-transactions?dueOnly=true", &token)
        .await;
    assert_eq!(body["recurringTransactions"].as_array().unwrap().len(), 1);

    let uri = format!("/api/v1/recurring-transactions/{}", template["id"]);
    let (status, paused) = app
        .put(&format!("{uri}/active"), &token, json!({ "isActive": false }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(paused["isActive"], false);

    let (_, body) = app
        .get("/api/v1/recurring-transactions?dueOnly=true", &token)
        .await;
    assert!(body["recurringTransactions"].as_array().unwrap().is_empty());

    let (status, _) = app.delete(&uri, &token).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn analytics_summary_counts_this_year() {
    let app = TestApp::new().await;
    let token = app.sign_up("alice@example.com").await;
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();

    record(&app, &token, SALARY, 1000.0, &today, "income").await;
    record(&app, &token, GROCERIES, 250.0, &today, "expense").await;

    let (status, summary) = app
        .get("/api/v1/analytics/summary?period=yearly", &token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["period"], "yearly");
    assert_eq!(summary["totalIncome"].as_f64(), Some(1000.0));
    assert_eq!(summary["totalSpent"].as_f64(), Some(250.0));
    assert_eq!(summary["netAmount"].as_f64(), Some(750.0));
    assert_eq!(summary["transactionCount"], 2);
}
