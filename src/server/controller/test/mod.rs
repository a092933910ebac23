use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{Datelike, Duration, NaiveDate, TimeDelta, Weekday};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{
    model::schedule::SchedulePolicy, router, service::token::TokenKeys, state::AppState,
};


async fn setup() -> (TestContext, AppState) {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();
    let state = AppState::new(
        db,
        TokenKeys::new("controller-secret", TimeDelta::days(7)),
        SchedulePolicy::default(),
    );

    (test, state)
}

fn app(state: &AppState) -> Router {
    router::app(state.clone())
}

/// Sends a request and returns the status with the parsed JSON body.
async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// The next occurrence of `weekday` strictly after the local current day.
fn next(weekday: Weekday) -> NaiveDate {
    let mut date = chrono::Local::now().date_naive() + Duration::days(1);
    while date.weekday() != weekday {
        date += Duration::days(1);
    }
    date
}
