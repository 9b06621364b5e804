use clap::Args;
use kiosk_app::{
    database,
    domain::customers::{
        CustomersService, PgCustomersService,
        models::{CustomerUuid, NewCustomer, Role},
    },
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct CreateCustomerArgs {
    /// Customer display name
    #[arg(long)]
    name: String,

    /// Customer email address (unique)
    #[arg(long)]
    email: String,

    /// Role: customer or admin
    #[arg(long, default_value = "customer")]
    role: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Optional customer UUID; generated when omitted
    #[arg(long)]
    customer_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: CreateCustomerArgs) -> Result<(), String> {
    let role = args
        .role
        .parse::<Role>()
        .map_err(|error| error.to_string())?;

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgCustomersService::new(pool);
    let customer_uuid = args.customer_uuid.map_or_else(CustomerUuid::new, Into::into);

    let customer = service
        .create_customer(NewCustomer {
            uuid: customer_uuid,
            name: args.name,
            email: args.email,
            role,
        })
        .await
        .map_err(|error| format!("failed to create customer: {error}"))?;

    println!("customer_uuid: {}", customer.uuid);
    println!("customer_name: {}", customer.name);
    println!("customer_email: {}", customer.email);
    println!("customer_role: {}", customer.role.as_str());

    Ok(())
}
