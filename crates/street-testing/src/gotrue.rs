//! In-process fake of the GoTrue identity API (`/auth/v1`).
//!
//! Serves the three calls the vendor service makes: token lookup, password sign-up and
//! password sign-in. Every request must carry the configured `apikey` header.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};

/// A user known to the fake. An empty `id` simulates an upstream that returns no user id.
#[derive(Debug, Clone)]
pub struct FakeAccount {
    pub id: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

impl FakeAccount {
    pub fn new(id: &str, email: &str, password: &str, token: &str) -> Self {
        Self {
            id: id.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
            token: token.to_owned(),
        }
    }
}

#[derive(Clone)]
struct FakeState {
    api_key: String,
    accounts: Arc<Mutex<Vec<FakeAccount>>>,
}

/// Handle to a running fake. The server lives until the test runtime shuts down.
pub struct FakeGoTrue {
    pub base_url: String,
    pub api_key: String,
    accounts: Arc<Mutex<Vec<FakeAccount>>>,
}

impl FakeGoTrue {
    pub async fn spawn(api_key: &str, accounts: Vec<FakeAccount>) -> Self {
        let accounts = Arc::new(Mutex::new(accounts));
        let state = FakeState {
            api_key: api_key.to_owned(),
            accounts: accounts.clone(),
        };
        let app = Router::new()
            .route("/auth/v1/user", get(user))
            .route("/auth/v1/signup", post(sign_up))
            .route("/auth/v1/token", post(token))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            api_key: api_key.to_owned(),
            accounts,
        }
    }

    /// Accounts currently registered, including ones created through sign-up.
    pub fn accounts(&self) -> Vec<FakeAccount> {
        self.accounts.lock().unwrap().clone()
    }
}

#[derive(Deserialize)]
struct PasswordBody {
    email: String,
    password: String,
}

fn error(status: StatusCode, body: Value) -> Response {
    (status, Json(body)).into_response()
}

fn check_api_key(state: &FakeState, headers: &HeaderMap) -> Result<(), Response> {
    match headers.get("apikey").and_then(|v| v.to_str().ok()) {
        Some(key) if key == state.api_key => Ok(()),
        _ => Err(error(
            StatusCode::UNAUTHORIZED,
            json!({ "message": "Invalid API key" }),
        )),
    }
}

fn user_json(account: &FakeAccount) -> Value {
    json!({ "id": account.id, "email": account.email, "aud": "authenticated" })
}

fn session_json(account: &FakeAccount) -> Value {
    json!({
        "access_token": account.token,
        "refresh_token": format!("refresh-{}", account.token),
        "token_type": "bearer",
        "expires_in": 3600,
        "user": user_json(account),
    })
}

async fn user(State(state): State<FakeState>, headers: HeaderMap) -> Response {
    if let Err(resp) = check_api_key(&state, &headers) {
        return resp;
    }
    let token = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));
    let accounts = state.accounts.lock().unwrap();
    match token.and_then(|t| accounts.iter().find(|a| a.token == t)) {
        Some(account) => Json(user_json(account)).into_response(),
        None => error(
            StatusCode::UNAUTHORIZED,
            json!({ "msg": "invalid JWT: unable to parse or verify signature" }),
        ),
    }
}

async fn sign_up(
    State(state): State<FakeState>,
    headers: HeaderMap,
    Json(body): Json<PasswordBody>,
) -> Response {
    if let Err(resp) = check_api_key(&state, &headers) {
        return resp;
    }
    let mut accounts = state.accounts.lock().unwrap();
    if accounts.iter().any(|a| a.email == body.email) {
        return error(
            StatusCode::UNPROCESSABLE_ENTITY,
            json!({ "code": 422, "msg": "User already registered" }),
        );
    }
    let n = accounts.len() + 1;
    let account = FakeAccount {
        id: format!("00000000-0000-4000-8000-{n:012}"),
        email: body.email,
        password: body.password,
        token: format!("token-{n}"),
    };
    let resp = Json(session_json(&account)).into_response();
    accounts.push(account);
    resp
}

async fn token(
    State(state): State<FakeState>,
    headers: HeaderMap,
    Json(body): Json<PasswordBody>,
) -> Response {
    if let Err(resp) = check_api_key(&state, &headers) {
        return resp;
    }
    let accounts = state.accounts.lock().unwrap();
    match accounts
        .iter()
        .find(|a| a.email == body.email && a.password == body.password)
    {
        Some(account) => Json(session_json(account)).into_response(),
        None => error(
            StatusCode::BAD_REQUEST,
            json!({
                "error": "invalid_grant",
                "error_description": "Invalid login credentials",
            }),
        ),
    }
}
