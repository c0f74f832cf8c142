use axum::Router;
use dotenvy::dotenv;
use mongodb::bson::doc;
use mongodb::Client;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use eventbook_server::auth::TokenIssuer;
use eventbook_server::config::Config;
use eventbook_server::graphql::build_schema;
use eventbook_server::routes::create_routes;
use eventbook_server::store::{EntityStore, MongoStore};

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env();

    let client = Client::with_uri_str(&config.mongodb_uri)
        .await
        .expect("Invalid MONGODB_URI");
    let database = client.database(&config.database_name);

    // The client connects lazily; probe in the background so a store outage
    // is logged without taking the process down.
    {
        let database = database.clone();
        tokio::spawn(async move {
            match database.run_command(doc! { "ping": 1 }, None).await {
                Ok(_) => tracing::info!("MongoDB connected"),
                Err(err) => tracing::error!(error = %err, "MongoDB connection failed"),
            }
        });
    }

    let store: Arc<dyn EntityStore> = Arc::new(MongoStore::new(&database));
    let tokens = Arc::new(TokenIssuer::new(&config.jwt_secret));
    let schema = build_schema(store, tokens.clone());

    let app: Router = create_routes(schema, tokens);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server running at http://{}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
