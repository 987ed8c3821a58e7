//! Theater billing: pricing engine and statement renderer.
//!
//! This crate turns a catalog of plays and a customer invoice into amounts,
//! volume credits and a text statement, implemented purely as deterministic
//! domain logic (no IO, no storage, no process-wide locale).

pub mod catalog;
pub mod config;
pub mod currency;
pub mod invoice;
pub mod play;
pub mod pricing;
pub mod statement;

pub use catalog::Catalog;
pub use config::{ComedyRates, CreditRates, PricingConfig, StatementConfig, TragedyRates};
pub use currency::CurrencyFormat;
pub use invoice::{Invoice, Performance};
pub use play::{Genre, Play};
pub use pricing::{
    PricedInvoice, PricedLine, amount_for, credits_for, price_invoice, resolve_play, total_amount,
    total_credits,
};
pub use statement::{compute_statement, render, render_priced};
