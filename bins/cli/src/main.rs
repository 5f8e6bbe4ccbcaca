//! Centavo CLI
//!
//! Formats an amount and optionally exchanges it into another currency.
//!
//! ```text
//! centavo <amount> [target-currency]
//! centavo "USD $100" CAD
//! ```

use anyhow::{Context, bail};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use centavo_core::{Currency, FormatRule, MoneyContext, ToMoney};
use centavo_shared::MoneyConfig;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "centavo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let Some(amount) = args.next() else {
        bail!("usage: centavo <amount> [target-currency]");
    };
    let target = args.next().map(Currency::new);

    // Load configuration
    let config = MoneyConfig::load().context("Failed to load configuration")?;
    let ctx = MoneyContext::from_config(&config);
    info!(
        default_currency = %ctx.default_currency(),
        bank = ?config.bank.kind,
        "Money context ready"
    );

    let money = amount
        .to_money(&ctx)
        .with_context(|| format!("Invalid amount: {amount}"))?;

    let money = match target {
        Some(target) => {
            let exchanged = money
                .exchange_to(target.clone(), ctx.bank())
                .with_context(|| format!("Cannot exchange {money} into {target}"))?;
            info!(from = %money, to = %exchanged, "Exchanged");
            exchanged
        }
        None => money,
    };

    println!("{}", money.format(&[FormatRule::WithCurrency]));
    Ok(())
}
