//! # FoodExpress Terminal Entry Point
//!
//! The actual setup is in lib.rs for better testability.

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    foodexpress_terminal_lib::run().await?;
    Ok(())
}
