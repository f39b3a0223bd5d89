use axum::{
    extract::State,
    response::{Html, IntoResponse},
};

use crate::csrf::AppState;

pub async fn greet(State(state): State<AppState>) -> impl IntoResponse {
    Html(format!(
        "<h1>{}</h1><form method=\"post\"><button>Submit</button></form>",
        state.greeting
    ))
}

pub async fn submit() -> &'static str {
    "OK\n"
}
