use clap::Args;
use kiosk_app::{auth::PgAuthService, database};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct ListTokensArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Customer UUID whose tokens to list
    #[arg(long)]
    customer_uuid: Uuid,
}

pub(crate) async fn run(args: ListTokensArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgAuthService::new(pool);

    let tokens = service
        .list_api_tokens(args.customer_uuid.into())
        .await
        .map_err(|error| format!("failed to list tokens: {error}"))?;

    if tokens.is_empty() {
        println!("no tokens for customer {}", args.customer_uuid);
        return Ok(());
    }

    for token in tokens {
        let state = if token.revoked_at.is_some() {
            "revoked"
        } else {
            "active"
        };

        println!(
            "token_uuid: {} v{} {} created_at: {} last_used_at: {}",
            token.uuid,
            token.version.as_i16(),
            state,
            token.created_at,
            token
                .last_used_at
                .map_or_else(|| "never".to_string(), |at| at.to_string()),
        );
    }

    Ok(())
}
