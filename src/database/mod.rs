use mongodb::{Client, Collection, Database};
use std::error::Error;

pub const DEFAULT_DB_NAME: &str = "quantumAssetDB";

pub const USERS_COLLECTION: &str = "users";
pub const ASSETS_COLLECTION: &str = "assets";
pub const MY_ASSETS_COLLECTION: &str = "myAssets";

/// Process-wide store handle, built once at startup and cloned into each
/// worker via `web::Data`. All pooling is the driver's own.
#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;

        let mongodb = Self::with_client(client, db_name_from_uri(uri));

        // Test connection
        mongodb.db.list_collection_names().await?;

        mongodb.ensure_indexes().await?;

        Ok(mongodb)
    }

    /// Builds a handle from an existing client without touching the server.
    pub fn with_client(client: Client, db_name: &str) -> Self {
        let db = client.database(db_name);
        Self { client, db }
    }

    /// Creates query indexes for the lookups every request path performs.
    async fn ensure_indexes(&self) -> Result<(), Box<dyn Error>> {
        use mongodb::bson::doc;
        use mongodb::IndexModel;

        log::info!("🔧 Creating database indexes...");

        // users(email) - auth gate and registration both look up by email
        let users = self.collection::<mongodb::bson::Document>(USERS_COLLECTION);
        let users_index = IndexModel::builder().keys(doc! { "email": 1 }).build();
        match users.create_index(users_index).await {
            Ok(_) => log::info!("   ✅ Index created: users(email)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        // myAssets(email) - partition key for per-user listings
        let my_assets = self.collection::<mongodb::bson::Document>(MY_ASSETS_COLLECTION);
        let my_assets_index = IndexModel::builder().keys(doc! { "email": 1 }).build();
        match my_assets.create_index(my_assets_index).await {
            Ok(_) => log::info!("   ✅ Index created: myAssets(email)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        log::info!("✅ Database indexes ready");

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    /// Check if the connection is healthy
    pub async fn health_check(&self) -> Result<bool, Box<dyn Error>> {
        use mongodb::bson::doc;

        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(true)
    }
}

/// Database name from the URI path when present, default otherwise.
fn db_name_from_uri(uri: &str) -> &str {
    uri.splitn(2, "//")
        .nth(1)
        .and_then(|rest| rest.split_once('/'))
        .and_then(|(_, path)| path.split('?').next())
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_DB_NAME)
}
