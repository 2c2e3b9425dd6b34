//! # Checkout Flow
//!
//! One customer, one order, start to finish.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  run_session  (error boundary, never fails)                            │
//! │    └─ run_checkout                                                      │
//! │         1. list catalog                                                 │
//! │         2. read selection ── empty? ──► "Saliendo…"  (NoSelection)     │
//! │         3. read tier (unknown → Regular)                                │
//! │         4. kitchen.dispatch ──► "Estado: En Preparación"                │
//! │         5. price the order while the kitchen works                      │
//! │         6. await the kitchen                                            │
//! │         7. print summary                                                │
//! │  Err(_) ──► failure message + "Estado final: Error"                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use foodexpress_core::catalog::default_catalog;
use foodexpress_core::pricing::OrderTotals;
use foodexpress_core::report::{generate_report, Sale};
use foodexpress_core::{CustomerTier, OrderLine, OrderStatus};
use tracing::{debug, error, info, warn};

use crate::config::TerminalConfig;
use crate::console;
use crate::error::{AppError, AppResult};
use crate::kitchen::Kitchen;

/// How a checkout ended when nothing went wrong.
#[derive(Debug)]
pub enum CheckoutOutcome {
    /// No valid product was chosen; nothing was ordered.
    NoSelection,
    /// The order was priced and prepared.
    Completed {
        totals: OrderTotals,
        status: OrderStatus,
        sale: Sale,
    },
}

/// Runs the checkout, propagating any failure to the caller.
pub async fn run_checkout<R: BufRead, W: Write>(
    config: &TerminalConfig,
    input: &mut R,
    output: &mut W,
) -> AppResult<CheckoutOutcome> {
    let catalog = default_catalog()?;
    console::render_catalog(output, &config.store_name, &catalog)?;

    let raw_selection = console::prompt(input, output, console::SELECTION_PROMPT)?;
    let selection = console::parse_selection(&raw_selection, catalog.len());
    if selection.is_empty() {
        writeln!(output, "{}", console::NO_SELECTION_MESSAGE)?;
        info!("Checkout ended without a valid selection");
        return Ok(CheckoutOutcome::NoSelection);
    }

    let raw_tier = console::prompt(input, output, console::TIER_PROMPT)?;
    let tier = CustomerTier::from_input(&raw_tier);

    writeln!(output, "{}", console::PROCESSING_MESSAGE)?;

    let kitchen = Kitchen::new(config.prep_delay);
    let preparation = kitchen.dispatch(OrderStatus::Pending)?;
    writeln!(output, "Estado: {}", preparation.status())?;

    let items = catalog.select(&selection);
    let lines: Vec<OrderLine> = items.iter().map(|p| p.order_line()).collect();
    let totals = OrderTotals::compute(&items, tier, config.tax_rate);
    info!(
        items = items.len(),
        tier = %tier,
        total = %totals.total,
        estimated_prep_minutes = totals.estimated_prep_minutes,
        "Order priced"
    );

    let status = preparation.wait().await?;
    console::render_summary(output, &lines, &totals, &status)?;

    let sale = Sale::from_selection(&items, totals.total);
    Ok(CheckoutOutcome::Completed {
        totals,
        status,
        sale,
    })
}

/// Runs one checkout and turns any failure into the Error status.
///
/// Returns the final order status: Ready on success, Pending when nothing
/// was ordered, Error(message) when the flow failed.
pub async fn run_session<R: BufRead, W: Write>(
    config: &TerminalConfig,
    input: &mut R,
    output: &mut W,
) -> OrderStatus {
    match run_checkout(config, input, output).await {
        Ok(CheckoutOutcome::NoSelection) => OrderStatus::Pending,
        Ok(CheckoutOutcome::Completed { status, sale, .. }) => {
            match session_report_json(sale) {
                Ok(json) => debug!(report = %json, "Session report"),
                Err(err) => warn!(%err, "Could not serialize session report"),
            }
            status
        }
        Err(err) => {
            error!(%err, "Checkout failed");
            let message = err.to_string();
            if let Err(io_err) = console::render_failure(output, &message) {
                warn!(%io_err, "Could not print failure message");
            }
            OrderStatus::Error(message)
        }
    }
}

/// The one-sale report for this session, as JSON.
///
/// Serialization failures never reach the customer; the caller logs them.
fn session_report_json(sale: Sale) -> AppResult<String> {
    let report = generate_report(&[sale]);
    serde_json::to_string(&report).map_err(AppError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};
    use std::time::Duration;

    fn config() -> TerminalConfig {
        TerminalConfig::default()
    }

    async fn session(input: &str) -> (OrderStatus, String) {
        let mut input = Cursor::new(input.to_string());
        let mut output = Vec::new();
        let status = run_session(&config(), &mut input, &mut output).await;
        (status, String::from_utf8(output).unwrap())
    }

    #[tokio::test(start_paused = true)]
    async fn test_vip_order_end_to_end() {
        let (status, out) = session("1,7\nvip\n").await;

        assert_eq!(status, OrderStatus::Ready);
        assert!(out.contains(console::SELECTION_PROMPT));
        assert!(out.contains(console::TIER_PROMPT));
        assert!(out.contains("\nProcesando pedido...\nEstado: En Preparación\n"));
        assert!(out.contains("- Hamburguesa Clásica: $8.990\n"));
        assert!(out.contains("- Coca Cola (Mediano): $2.289\n"));
        assert!(out.contains("Subtotal: $11.279\n"));
        assert!(!out.contains("Promo"));
        assert!(out.contains("Descuento VIP (10%): -$1.128\n"));
        assert!(out.contains("IVA (19%): $1.929\n"));
        assert!(out.contains("TOTAL: $12.080\n"));
        assert!(out.ends_with("Estado final: Listo\n"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_promotions_printed_and_unknown_tier_is_regular() {
        // Three drinks: 2.289 + 990 + 2.289
        let (status, out) = session("7,8,10\ngold\n").await;

        assert_eq!(status, OrderStatus::Ready);
        assert!(out.contains("Subtotal: $5.568\n"));
        assert!(out.contains("Promo 3x2 en bebidas: -$990\n"));
        // 5% of 5.568 = 278.4 → 278
        assert!(out.contains("Descuento por cantidad (5%): -$278\n"));
        // 5.568 − 1.268 = 4.300; 5% = 215
        assert!(out.contains("Descuento REGULAR (5%): -$215\n"));
        // 4.085 × 19% = 776.15 → 776
        assert!(out.contains("IVA (19%): $776\n"));
        assert!(out.contains("TOTAL: $4.861\n"));
    }

    #[tokio::test]
    async fn test_empty_selection_exits_cleanly() {
        let (status, out) = session("x, 0, 42\n").await;

        assert_eq!(status, OrderStatus::Pending);
        assert!(out.ends_with("No se seleccionaron productos válidos. Saliendo…\n"));
        assert!(!out.contains(console::TIER_PROMPT));
        assert!(!out.contains("Estado final"));
    }

    #[tokio::test]
    async fn test_closed_input_exits_cleanly() {
        let (status, out) = session("").await;
        assert_eq!(status, OrderStatus::Pending);
        assert!(out.contains(console::NO_SELECTION_MESSAGE));
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_utf8_tokens_are_dropped() {
        let mut input = Cursor::new(b"1,\xff\nvip\n".to_vec());
        let mut output = Vec::new();

        let status = run_session(&config(), &mut input, &mut output).await;
        let out = String::from_utf8(output).unwrap();

        assert_eq!(status, OrderStatus::Ready);
        assert!(out.contains("- Hamburguesa Clásica: $8.990\n"));
        assert!(out.contains("Descuento VIP (10%): -$899\n"));
        assert!(out.ends_with("Estado final: Listo\n"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_tier_line_defaults_to_regular() {
        let (status, out) = session("1").await;
        assert_eq!(status, OrderStatus::Ready);
        assert!(out.contains("Descuento REGULAR (5%): -$450\n"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_completed_outcome_carries_sale() {
        let mut input = Cursor::new("3,3\npremium\n".to_string());
        let mut output = Vec::new();

        let outcome = run_checkout(&config(), &mut input, &mut output)
            .await
            .unwrap();

        match outcome {
            CheckoutOutcome::Completed {
                totals,
                status,
                sale,
            } => {
                assert_eq!(status, OrderStatus::Ready);
                assert_eq!(sale.items.len(), 2);
                assert_eq!(sale.total, totals.total);
                assert_eq!(totals.estimated_prep_minutes, 15);
            }
            CheckoutOutcome::NoSelection => panic!("expected a completed order"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_report_json() {
        let mut input = Cursor::new("1,7,7\nregular\n".to_string());
        let mut output = Vec::new();

        let outcome = run_checkout(&config(), &mut input, &mut output)
            .await
            .unwrap();
        let CheckoutOutcome::Completed { sale, .. } = outcome else {
            panic!("expected a completed order");
        };

        let json = session_report_json(sale).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_sales"], 1);
        assert_eq!(value["top_products"][0]["description"], "Coca Cola (Mediano)");
        assert_eq!(value["top_products"][0]["count"], 2);
    }

    #[tokio::test]
    async fn test_zero_delay_config() {
        let config = TerminalConfig {
            prep_delay: Duration::ZERO,
            ..TerminalConfig::default()
        };
        let mut input = Cursor::new("2\nvip\n".to_string());
        let mut output = Vec::new();

        let status = run_session(&config, &mut input, &mut output).await;
        assert_eq!(status, OrderStatus::Ready);
    }

    struct BrokenInput;

    impl Read for BrokenInput {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed"))
        }
    }

    #[tokio::test]
    async fn test_io_failure_maps_to_error_status() {
        let mut input = io::BufReader::new(BrokenInput);
        let mut output = Vec::new();

        let status = run_session(&config(), &mut input, &mut output).await;
        let out = String::from_utf8(output).unwrap();

        assert!(matches!(status, OrderStatus::Error(_)));
        assert!(out.contains("Ocurrió un error y el pedido no pudo completarse: console I/O failed: stdin closed\n"));
        assert!(out.ends_with("Estado final: Error\n"));
    }
}
