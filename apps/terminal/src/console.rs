//! # Console
//!
//! Everything the customer reads and types. Generic over `BufRead`/`Write`
//! so the flow runs the same against stdin/stdout and in-memory buffers.

use std::io::{self, BufRead, Write};

use foodexpress_core::catalog::Catalog;
use foodexpress_core::pricing::OrderTotals;
use foodexpress_core::{OrderLine, OrderStatus};
use tracing::debug;

pub const SELECTION_PROMPT: &str = "\nSeleccione productos (números separados por coma): ";
pub const TIER_PROMPT: &str = "Cliente tipo (regular/vip/premium): ";
pub const NO_SELECTION_MESSAGE: &str = "No se seleccionaron productos válidos. Saliendo…";
pub const PROCESSING_MESSAGE: &str = "\nProcesando pedido...";
pub const FAILURE_MESSAGE: &str = "Ocurrió un error y el pedido no pudo completarse";

/// Writes `text` without a newline and reads one line of input.
///
/// End of input reads as an empty line. Bytes that are not valid UTF-8
/// become U+FFFD, so the token they sit in is dropped by the parser.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> io::Result<String> {
    write!(output, "{}", text)?;
    output.flush()?;

    let mut raw = Vec::new();
    input.read_until(b'\n', &mut raw)?;
    let line = String::from_utf8_lossy(&raw);
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Turns `"1, 3,x,99"` into zero-based catalog positions.
///
/// Tokens that are not integers or fall outside `1..=catalog_len` are
/// dropped. Repeats are kept, so `"2,2"` orders the item twice.
pub fn parse_selection(input: &str, catalog_len: usize) -> Vec<usize> {
    input
        .split(',')
        .filter_map(|token| {
            let token = token.trim();
            match token.parse::<usize>() {
                Ok(n) if (1..=catalog_len).contains(&n) => Some(n - 1),
                _ => {
                    if !token.is_empty() {
                        debug!(token, "Ignoring invalid selection");
                    }
                    None
                }
            }
        })
        .collect()
}

/// Banner plus the numbered menu.
pub fn render_catalog<W: Write>(
    output: &mut W,
    store_name: &str,
    catalog: &Catalog,
) -> io::Result<()> {
    writeln!(output, "===SISTEMA {}===", store_name)?;
    writeln!(output, "Catálogo disponible:")?;
    for (idx, product) in catalog.products().iter().enumerate() {
        writeln!(
            output,
            "{}. {}{} - {}",
            idx + 1,
            product.name(),
            product.label_suffix().unwrap_or_default(),
            product.final_price()
        )?;
    }
    Ok(())
}

/// The order summary and the final kitchen status.
pub fn render_summary<W: Write>(
    output: &mut W,
    lines: &[OrderLine],
    totals: &OrderTotals,
    status: &OrderStatus,
) -> io::Result<()> {
    writeln!(output, "\n===RESUMEN DEL PEDIDO===")?;
    for line in lines {
        writeln!(output, "- {}: {}", line.description, line.price)?;
    }
    writeln!(output, "Subtotal: {}", totals.subtotal)?;

    for promotion in &totals.promotions.applied {
        writeln!(output, "{}", promotion)?;
    }

    writeln!(
        output,
        "Descuento {} ({}%): -{}",
        totals.tier.label().to_uppercase(),
        totals.tier.discount_percent(),
        totals.tier_discount
    )?;
    writeln!(output, "IVA ({}): {}", totals.tax_rate, totals.tax)?;
    writeln!(output, "TOTAL: {}\n", totals.total)?;
    writeln!(output, "Estado final: {}", status)?;
    Ok(())
}

/// What the customer sees when the order cannot be completed.
pub fn render_failure<W: Write>(output: &mut W, message: &str) -> io::Result<()> {
    writeln!(output, "{}: {}", FAILURE_MESSAGE, message)?;
    writeln!(output, "Estado final: {}", OrderStatus::Error(message.to_string()))?;
    Ok(())
}
