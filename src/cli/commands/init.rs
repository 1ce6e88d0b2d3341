//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "cosmos-quickstart.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing quickstart configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Set COSMOS_ENDPOINT (or create a .env file with it)");
                println!("  2. Run on a host with a managed identity or sign in with `az login`");
                println!(
                    "  3. Validate configuration: cosmos-quickstart --config {} validate-config",
                    self.output
                );
                println!(
                    "  4. Run: cosmos-quickstart --config {} run",
                    self.output
                );
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5)
            }
        }
    }

    /// Generate configuration with comments
    fn generate_config() -> String {
        r#"# Cosmos Quickstart Configuration File

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

[cosmosdb]
# Account endpoint, e.g. https://your-account.documents.azure.com:443/
endpoint = "${COSMOS_ENDPOINT}"
database_name = "sample"
container_name = "sample-container"

# Partition key path of the container
partition_key = "/id"

# Acquire a token and read the container before the first request
verify_connection = true

[cosmosdb.credential]
# default | managed_identity | azure_cli | client_secret | key
# default tries the host's managed identity, then the Azure CLI
kind = "default"

# kind = "managed_identity"
# client_id = "${AZURE_CLIENT_ID}"

# kind = "azure_cli"

# kind = "client_secret"
# tenant_id = "${AZURE_TENANT_ID}"
# client_id = "${AZURE_CLIENT_ID}"
# client_secret = "${AZURE_CLIENT_SECRET}"

# kind = "key"
# key = "${COSMOS_KEY}"

[sample]
item_id = "Product1"
category_name = "electronics"
cross_partition = true

[logging]
local_enabled = false
local_path = "logs"
# Log rotation (daily, hourly, never)
local_rotation = "daily"
"#
        .to_string()
    }
}
