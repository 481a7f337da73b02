//! Account commands: call the Customer Account API as a signed-in customer.
//!
//! The access token comes from `SHOPIFY_CUSTOMER_ACCESS_TOKEN`; shop and
//! retry settings come from the same variables the storefront reads.

use flagpole_storefront::config::ShopifyCustomerConfig;
use flagpole_storefront::shopify::CustomerClient;
use secrecy::SecretString;

use super::print_json;

const ACCESS_TOKEN_VAR: &str = "SHOPIFY_CUSTOMER_ACCESS_TOKEN";

/// Build a client and read the customer token from the environment.
fn connect() -> Result<(CustomerClient, SecretString), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config = ShopifyCustomerConfig::from_env()?;
    let token = std::env::var(ACCESS_TOKEN_VAR)
        .map_err(|_| format!("Missing environment variable: {ACCESS_TOKEN_VAR}"))?;

    let client = CustomerClient::new(&config);
    tracing::info!(endpoint = client.endpoint(), "Using Customer Account API");
    Ok((client, SecretString::from(token)))
}

/// Print the customer's profile.
///
/// # Errors
///
/// Returns an error if configuration is missing or the API call fails.
pub async fn profile() -> Result<(), Box<dyn std::error::Error>> {
    let (client, token) = connect()?;
    let customer = client.get_customer(&token).await?;
    tracing::info!(customer = %customer.full_name(), "Fetched profile");
    print_json(&customer)?;
    Ok(())
}

/// Print the customer's most recent orders.
///
/// # Errors
///
/// Returns an error if configuration is missing or the API call fails.
pub async fn orders(first: u32) -> Result<(), Box<dyn std::error::Error>> {
    let (client, token) = connect()?;
    let orders = client.get_orders(&token, first).await?;
    tracing::info!(count = orders.len(), "Fetched orders");
    print_json(&orders)?;
    Ok(())
}

/// Print the customer's saved addresses.
///
/// # Errors
///
/// Returns an error if configuration is missing or the API call fails.
pub async fn addresses(first: u32) -> Result<(), Box<dyn std::error::Error>> {
    let (client, token) = connect()?;
    let addresses = client.get_addresses(&token, first).await?;
    tracing::info!(count = addresses.len(), "Fetched addresses");
    print_json(&addresses)?;
    Ok(())
}
