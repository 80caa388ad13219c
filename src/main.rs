use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{
    middleware::Logger,
    web::{self, Data},
    App, HttpResponse, HttpServer, Responder,
};
use sqlx::postgres::PgPoolOptions;

use snippet_backend::{
    auth::JwtVerifier, middleware::auth_gate::AuthGate, routes,
    store::postgres::PgSnippetStore, AppState,
};

async fn index() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "message": "Server is running" }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    dotenv::from_filename(".env")
        .or_else(|_| dotenv::dotenv())
        .ok();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Error building a connection pool");

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(5000);

    let jwt_access_secret =
        std::env::var("JWT_ACCESS_SECRET").expect("JWT_ACCESS_SECRET must be set");

    let app_data = Data::new(AppState {
        store: Arc::new(PgSnippetStore::new(pool)),
    });
    let auth_gate = AuthGate::new(Arc::new(JwtVerifier::new(&jwt_access_secret)));

    log::info!("listening on {host}:{port}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(app_data.clone())
            .wrap(Logger::default())
            .wrap(cors)
            .route("/", web::get().to(index))
            .configure(|cfg| routes::snippet_routes::config(cfg, auth_gate.clone()))
    })
    .bind((host, port))?
    .run()
    .await
}
