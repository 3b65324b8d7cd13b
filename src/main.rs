use std::sync::Arc;
use std::time::Duration;

use clubaccess::catalog::PermissionCatalog;
use clubaccess::config::Config;
use clubaccess::models::{PermissionLevel, RoleSelection};
use clubaccess::services::login::{LoginError, LoginFlow};
use clubaccess::services::submission::summarize;
use clubaccess::services::verifier::SimulatedVerifier;
use clubaccess::services::Dashboard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Scripted walkthrough of the whole flow: login gate, role creation from a
/// template, user creation, submission summary.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clubaccess=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let catalog = match &config.catalog_path {
        Some(path) => PermissionCatalog::from_file(path)?,
        None => PermissionCatalog::builtin(),
    };
    let catalog = Arc::new(catalog);
    tracing::info!(
        modules = catalog.modules().len(),
        functions = catalog.function_count(),
        "Permission catalog loaded"
    );

    // Login gate: simulated sends can fail, so retry those
    let verifier = Arc::new(SimulatedVerifier::from_config(&config));
    let mut login = LoginFlow::with_resend_cooldown(
        verifier,
        Duration::from_secs(config.resend_cooldown_secs),
    );

    loop {
        match login.submit_phone("(555) 123-4567").await {
            Ok(()) => break,
            Err(LoginError::SendFailed(message)) => {
                tracing::warn!(%message, "Resubmitting phone number");
            }
            Err(other) => return Err(other.into()),
        }
    }
    tracing::info!(phone = %login.masked_phone(), "Code sent");

    login.paste_otp(&config.bypass_code).await?;
    tracing::info!("Logged in, entering dashboard");

    // Dashboard seeded with the standard fixtures
    let mut dashboard = Dashboard::seeded(Arc::clone(&catalog));

    let mut role_builder = dashboard.new_role_builder();
    role_builder.set_name("Senior Trainer");
    role_builder.clone_from_template("front-desk");
    role_builder.set_permission("personal-info", "Reviews", PermissionLevel::ReadOnly)?;
    let role_id = dashboard.create_role(role_builder.draft())?.id.clone();

    let mut user_builder = dashboard.new_user_builder();
    user_builder.set_full_name("avery quinn");
    user_builder.set_phone_number("+1 (555) 867-5309");
    user_builder.set_email("avery.quinn@example.com");
    user_builder.set_club("club-002");
    user_builder.set_role(RoleSelection::Existing(role_id));
    if let Some(user) = user_builder.build() {
        dashboard.create_user(user);
    }

    let snapshot = dashboard.submit().clone();
    let summary = summarize(&snapshot, dashboard.clubs());

    println!(
        "Submitted at {}: {} roles, {} users",
        summary.timestamp, summary.role_count, summary.user_count
    );
    for line in &summary.role_lines {
        println!("  role: {}", line);
    }
    for line in &summary.user_lines {
        println!("  user: {}", line);
    }

    Ok(())
}
