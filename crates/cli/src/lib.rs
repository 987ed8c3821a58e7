//! Command-line front end: loads plays and invoices from JSON files and
//! renders one statement per invoice.

use std::path::Path;

use anyhow::{Context, Result};

use theater_billing::{Catalog, Invoice, StatementConfig, render};

/// Environment variable naming an optional JSON `StatementConfig` file.
pub const CONFIG_ENV: &str = "THEATER_CONFIG";

/// Parse a catalog (`{ "<play id>": { "name": ..., "type": ... } }`) and
/// reject plays whose genre has no pricing rule.
pub fn parse_catalog(json: &str) -> Result<Catalog> {
    let catalog: Catalog = serde_json::from_str(json).context("malformed plays document")?;
    catalog.validate().context("invalid play catalog")?;
    Ok(catalog)
}

/// Parse a JSON array of invoices.
pub fn parse_invoices(json: &str) -> Result<Vec<Invoice>> {
    serde_json::from_str(json).context("malformed invoices document")
}

pub fn parse_config(json: &str) -> Result<StatementConfig> {
    serde_json::from_str(json).context("malformed statement config")
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Load the statement config named by `THEATER_CONFIG`, or the defaults.
pub fn load_config() -> Result<StatementConfig> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            let path = Path::new(&path);
            tracing::info!("loading statement config from {}", path.display());
            parse_config(&read(path)?)
        }
        None => Ok(StatementConfig::default()),
    }
}

/// Render every invoice against the catalog, in file order.
///
/// Stops at the first invoice that cannot be priced.
pub fn render_all(catalog: &Catalog, invoices: &[Invoice], config: &StatementConfig) -> Result<Vec<String>> {
    invoices
        .iter()
        .map(|invoice| {
            render(invoice, catalog, config)
                .with_context(|| format!("cannot produce statement for {}", invoice.customer()))
        })
        .collect()
}

/// Load both documents and render their statements.
pub fn run(plays_path: &Path, invoices_path: &Path, config: &StatementConfig) -> Result<Vec<String>> {
    let catalog = parse_catalog(&read(plays_path)?)?;
    let invoices = parse_invoices(&read(invoices_path)?)?;
    tracing::info!(
        plays = catalog.len(),
        invoices = invoices.len(),
        "loaded billing data"
    );
    render_all(&catalog, &invoices, config)
}

/// One-line failure message for stderr: every context layer, outermost first.
pub fn error_report(err: &anyhow::Error) -> String {
    format!("error: {err:#}")
}
