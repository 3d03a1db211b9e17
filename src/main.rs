use log::{error, info};

use user_store::config::CONFIG;
use user_store::{db, AuthService, MongoUserStore, UserRepository};

#[tokio::main]
async fn main() -> Result<(), user_store::RepoError> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let (client, database) = db::connect(&CONFIG).await?;

    let store = MongoUserStore::new(&database);
    let result = bootstrap(store).await;

    db::disconnect(client).await;
    result.inspect_err(|err| error!("Bootstrap failed: {}", err))
}

/// Prepare the users collection and optionally seed the root account.
async fn bootstrap(store: MongoUserStore) -> Result<(), user_store::RepoError> {
    store.create_indexes().await?;

    if !CONFIG.seed_root {
        info!("Root seeding is disabled (SEED_ROOT=false)");
        return Ok(());
    }

    let repository = UserRepository::new(store, AuthService::from_config(&CONFIG))
        .with_hash_cost(CONFIG.bcrypt_cost);
    repository
        .ensure_root_user(&CONFIG.root_name, &CONFIG.root_email, &CONFIG.root_password)
        .await?;
    Ok(())
}
