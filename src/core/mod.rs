//! Core workflow for the quickstart.
//!
//! # Modules
//!
//! - [`quickstart`] - The upsert, point read and query scenario and its report
//!
//! # Workflow
//!
//! 1. **Upsert**: Write the sample product (insert or replace)
//! 2. **Point read**: Read it back by id and partition key
//! 3. **Query**: Select every product in its category
//! 4. **Report**: Render both results for the console
//!
//! # Example
//!
//! ```rust,no_run
//! use cosmos_quickstart::adapters::database::create_document_store;
//! use cosmos_quickstart::config::QuickstartConfig;
//! use cosmos_quickstart::core::quickstart::QuickstartScenario;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = QuickstartConfig::from_env()?;
//! let store = create_document_store(&config).await?;
//!
//! let report = QuickstartScenario::from_config(&config.sample)
//!     .run(store.as_ref())
//!     .await?;
//!
//! println!("{}", report.render()?);
//! # Ok(())
//! # }
//! ```

pub mod quickstart;
