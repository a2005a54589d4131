use std::sync::Arc;

use auth::Authenticator;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use user_service::config::Config;
use user_service::domain::user::models::CreateUserCommand;
use user_service::domain::user::models::Username;
use user_service::domain::user::ports::UserServicePort;
use user_service::domain::user::service::UserService;
use user_service::inbound::http::router::create_router;
use user_service::outbound::clock::ServerClock;
use user_service::outbound::directory::RepositoryDirectory;
use user_service::outbound::repositories::PostgresUserRepository;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "user_service=debug,auth=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "user-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        clock = ?config.auth.clock,
        bootstrap_user = config.bootstrap_user.is_some(),
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let clock = Arc::new(ServerClock::from_source(config.auth.clock, pg_pool.clone()));
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool));

    if let Some(bootstrap) = &config.bootstrap_user {
        let user_service = UserService::new(Arc::clone(&user_repository));
        let username = Username::new(bootstrap.username.clone())?;
        let user = user_service
            .ensure_user(CreateUserCommand::new(username, bootstrap.password.clone()))
            .await?;
        tracing::info!(user_id = %user.id, username = %user.username, "Bootstrap user ready");
    }

    let directory = Arc::new(RepositoryDirectory::new(user_repository));
    let authenticator = Arc::new(Authenticator::new(directory, clock));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(authenticator);
    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");
    Ok(())
}
