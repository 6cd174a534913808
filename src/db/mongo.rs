use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client,
};
use std::sync::Arc;
use std::time::Duration;

use crate::error::ApiError;

/// Builds a pooled client and pings `database` once. A failed ping is only
/// logged; the repositories surface storage errors per request.
pub async fn create_mongo_client(uri: &str, database: &str) -> Result<Arc<Client>, ApiError> {
    log::info!("Connecting to MongoDB database {}", database);

    let mut client_options = ClientOptions::parse(uri).await?;

    client_options.connect_timeout = Some(Duration::from_secs(10));
    client_options.server_selection_timeout = Some(Duration::from_secs(10));
    client_options.max_pool_size = Some(10);
    client_options.min_pool_size = Some(1);
    client_options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

    // MongoDB 5.0+
    let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
    client_options.server_api = Some(server_api);

    let client = Client::with_options(client_options)?;

    match client.database(database).run_command(doc! {"ping": 1}).await {
        Ok(_) => log::info!("Connected to MongoDB and verified with ping"),
        Err(e) => log::warn!("Connected to MongoDB but ping failed: {}", e),
    }

    Ok(Arc::new(client))
}
