use actix_web::{HttpResponse, Responder, http::header::CONTENT_TYPE, web};

use crate::csrf::AppState;

pub async fn greet(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok()
        .insert_header((CONTENT_TYPE, "text/html; charset=utf-8"))
        .body(format!(
            "<h1>{}</h1><form method=\"post\"><button>Submit</button></form>",
            state.greeting
        ))
}

pub async fn submit() -> impl Responder {
    HttpResponse::Ok().body("OK\n")
}
