//! Gift checkout walk-through
//!
//! Stages a draft, opens the order form, redeems points and places the order
//! against the backend configured in the environment.
//!
//! ```bash
//! GIFT_BACKEND_URL=http://localhost:8080 GIFT_TOKEN=... \
//!     cargo run -p gift-client --example checkout -- 42 2 "Happy birthday!"
//! ```

use gift_client::{ClientConfig, GiftClient};
use tracing_subscriber::EnvFilter;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "gift_client=info".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let product_id: i64 = args.next().ok_or("usage: checkout <product-id> <quantity> <message>")?.parse()?;
    let quantity: u32 = args.next().unwrap_or_else(|| "1".into()).parse()?;
    let message = args.next().unwrap_or_else(|| "Enjoy!".into());

    let config = ClientConfig::from_env()?;
    tracing::info!(base_url = %config.base_url, "Using backend");
    let client = GiftClient::new(&config)?;

    if let Ok(token) = std::env::var("GIFT_TOKEN") {
        client.sign_in_with_token(token);
    }

    if let Err(e) = client.add_to_wishlist(product_id, quantity).await {
        tracing::warn!("Wishlist: {e}");
    }

    client.send_as_gift(product_id, quantity)?;

    let mut form = client.open_order_form().await?;
    form.set_message(message);
    let redeemed = form.set_used_points(form.remaining_points().amount);
    tracing::info!(
        remaining = form.remaining_points().amount,
        redeemed,
        "Order form ready"
    );

    match client.place_order(&form).await {
        Ok(()) => tracing::info!("Order completed"),
        Err(e) => tracing::error!("Order failed: {e}"),
    }

    Ok(())
}
