//! Statement rendering.

use theater_core::DomainResult;

use crate::catalog::Catalog;
use crate::config::StatementConfig;
use crate::currency::CurrencyFormat;
use crate::invoice::Invoice;
use crate::pricing::{PricedInvoice, price_invoice};

/// Render the statement for `invoice` with the default rates and US formatting.
pub fn compute_statement(invoice: &Invoice, catalog: &Catalog) -> DomainResult<String> {
    render(invoice, catalog, &StatementConfig::default())
}

/// Price `invoice` and render its statement.
///
/// Fails without producing any text if a performance references a missing
/// play or a play with an unpriced genre.
pub fn render(invoice: &Invoice, catalog: &Catalog, config: &StatementConfig) -> DomainResult<String> {
    let priced = price_invoice(invoice, catalog, &config.pricing)?;
    let text = render_priced(&priced, &config.currency);

    tracing::info!(
        customer = invoice.customer(),
        performances = priced.lines.len(),
        total_amount = priced.total_amount.minor_units(),
        total_credits = priced.total_credits,
        "statement rendered"
    );

    Ok(text)
}

/// Render an already-priced invoice.
pub fn render_priced(priced: &PricedInvoice<'_>, currency: &CurrencyFormat) -> String {
    let mut out = format!("Statement for {}\n", priced.invoice.customer());

    for line in &priced.lines {
        out.push_str(&format!(
            "  {}: {} ({} seats)\n",
            line.play.name(),
            currency.format(line.amount),
            line.performance.audience()
        ));
    }

    out.push_str(&format!(
        "Amount owed is {}\n",
        currency.format(priced.total_amount)
    ));
    out.push_str(&format!("You earned {} credits\n", priced.total_credits));
    out
}
