use portfolio_cms::auth::{
    adapter::outgoing::{
        admin_directory_static::StaticAdminDirectory, jwt::JwtTokenService,
        security::Argon2Hasher,
    },
    application::{
        domain::entities::AdminAccount,
        ports::outgoing::{PasswordHasher, TokenProvider},
        use_cases::login_admin::LoginAdminService,
    },
};
use portfolio_cms::config::AppConfig;
use portfolio_cms::email::{
    adapter::outgoing::{MemoryEmailSender, SmtpEmailSender},
    application::{
        ports::outgoing::{EmailSender, InboxEmailNotifier},
        services::InboxEmailService,
    },
};
use portfolio_cms::resume::application::domain::UploadPolicy;
use portfolio_cms::{configure_app, AppState};

use actix_web::{App, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let mut args = std::env::args().skip(1);
    if args.next().as_deref() == Some("hash-password") {
        let password = args
            .next()
            .context("Usage: portfolio_cms hash-password <password>")?;
        return print_password_hash(&password).await;
    }

    let config = AppConfig::from_env().context("Invalid configuration")?;

    // SMTP SETUPS
    let email_sender: Arc<dyn EmailSender + Send + Sync> = match &config.smtp {
        Some(smtp) => Arc::new(
            SmtpEmailSender::new(
                &smtp.server,
                &smtp.username,
                &smtp.password,
                &config.email_from,
            )
            .context("Invalid SMTP settings")?,
        ),
        None => {
            warn!("SMTP_SERVER not set, emails are only logged");
            Arc::new(MemoryEmailSender::new())
        }
    };
    let notifier: Arc<dyn InboxEmailNotifier + Send + Sync> =
        Arc::new(InboxEmailService::new(email_sender, config.site_owner.clone()));

    // Auth
    let jwt_service = JwtTokenService::new(config.jwt.clone());
    let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let login_admin = LoginAdminService::new(
        StaticAdminDirectory::new(AdminAccount::new(
            &config.admin_email,
            &config.admin_password_hash,
        )),
        Arc::new(Argon2Hasher::from_env()),
        Arc::clone(&token_provider),
    );

    let state = AppState::persistent(
        &config.data_dir,
        Arc::new(login_admin),
        notifier,
        UploadPolicy::new(config.resume_max_bytes),
        &config.site_owner,
    )
    .await
    .with_context(|| format!("Failed to open data in {}", config.data_dir.display()))?;
    info!(data_dir = %config.data_dir.display(), "Storage ready");

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new().configure(|cfg| configure_app(cfg, &state, &token_provider))
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {}", server_url))?
    .run()
    .await?;

    Ok(())
}

/// Prints the PHC string to put in `ADMIN_PASSWORD_HASH`.
#[cfg(not(tarpaulin_include))]
async fn print_password_hash(password: &str) -> anyhow::Result<()> {
    let hash = Argon2Hasher::from_env()
        .hash_password(password)
        .await
        .context("Failed to hash password")?;
    println!("{hash}");
    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
