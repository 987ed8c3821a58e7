//! Pricing engine: amounts and volume credits per performance and per invoice.
//!
//! Everything here is a pure function of its inputs. `price_invoice` is the
//! single aggregation path; the invoice totals and the statement renderer
//! both go through it.

use theater_core::{DomainError, DomainResult, Money};

use crate::catalog::Catalog;
use crate::config::{ComedyRates, CreditRates, PricingConfig, TragedyRates};
use crate::invoice::{Invoice, Performance};
use crate::play::{Genre, Play};

/// Look up the play a performance refers to.
pub fn resolve_play<'a>(performance: &Performance, catalog: &'a Catalog) -> DomainResult<&'a Play> {
    catalog
        .get(performance.play_id())
        .ok_or_else(|| DomainError::play_not_found(performance.play_id().as_str()))
}

/// Amount charged for one performance, in minor units.
pub fn amount_for(
    performance: &Performance,
    play: &Play,
    config: &PricingConfig,
) -> DomainResult<Money> {
    let audience = u64::from(performance.audience());
    match genre_of(performance, play)? {
        Genre::Tragedy => tragedy_amount(audience, &config.tragedy),
        Genre::Comedy => comedy_amount(audience, &config.comedy),
    }
}

/// Volume credits earned by one performance.
pub fn credits_for(performance: &Performance, play: &Play, config: &PricingConfig) -> DomainResult<u64> {
    let audience = u64::from(performance.audience());
    let rates = &config.credits;
    let base = audience.saturating_sub(rates.base_threshold);
    let extra = match genre_of(performance, play)? {
        Genre::Tragedy => 0,
        Genre::Comedy => comedy_extra_credits(audience, rates),
    };
    base.checked_add(extra)
        .ok_or_else(|| DomainError::overflow(format!("credits {base} + {extra}")))
}

/// Total amount owed for an invoice.
pub fn total_amount(invoice: &Invoice, catalog: &Catalog, config: &PricingConfig) -> DomainResult<Money> {
    Ok(price_invoice(invoice, catalog, config)?.total_amount)
}

/// Total volume credits earned by an invoice.
pub fn total_credits(invoice: &Invoice, catalog: &Catalog, config: &PricingConfig) -> DomainResult<u64> {
    Ok(price_invoice(invoice, catalog, config)?.total_credits)
}

/// One priced statement line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedLine<'a> {
    pub performance: &'a Performance,
    pub play: &'a Play,
    pub amount: Money,
    pub credits: u64,
}

/// An invoice with every performance priced, in invoice order, plus totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedInvoice<'a> {
    pub invoice: &'a Invoice,
    pub lines: Vec<PricedLine<'a>>,
    pub total_amount: Money,
    pub total_credits: u64,
}

/// Price every performance of an invoice.
///
/// The first failing performance aborts the whole invoice; there is no partial
/// result.
pub fn price_invoice<'a>(
    invoice: &'a Invoice,
    catalog: &'a Catalog,
    config: &PricingConfig,
) -> DomainResult<PricedInvoice<'a>> {
    let mut lines = Vec::with_capacity(invoice.performances().len());
    let mut total_amount = Money::ZERO;
    let mut total_credits: u64 = 0;

    for performance in invoice.performances() {
        let line = price_line(performance, catalog, config).inspect_err(|err| {
            tracing::warn!(
                customer = invoice.customer(),
                play_id = %performance.play_id(),
                "cannot price performance: {err}"
            );
        })?;

        total_amount = total_amount.checked_add(line.amount)?;
        total_credits = total_credits
            .checked_add(line.credits)
            .ok_or_else(|| DomainError::overflow(format!("credits {total_credits} + {}", line.credits)))?;
        lines.push(line);
    }

    Ok(PricedInvoice {
        invoice,
        lines,
        total_amount,
        total_credits,
    })
}

fn price_line<'a>(
    performance: &'a Performance,
    catalog: &'a Catalog,
    config: &PricingConfig,
) -> DomainResult<PricedLine<'a>> {
    let play = resolve_play(performance, catalog)?;
    let amount = amount_for(performance, play, config)?;
    let credits = credits_for(performance, play, config)?;

    tracing::debug!(
        play_id = %performance.play_id(),
        audience = performance.audience(),
        amount = amount.minor_units(),
        credits,
        "priced performance"
    );

    Ok(PricedLine {
        performance,
        play,
        amount,
        credits,
    })
}

fn genre_of(performance: &Performance, play: &Play) -> DomainResult<Genre> {
    play.genre()
        .ok_or_else(|| DomainError::unknown_genre(play.genre_tag(), performance.play_id().as_str()))
}

/// Seats strictly above `threshold`, if any.
fn excess_over(audience: u64, threshold: u64) -> Option<u64> {
    audience.checked_sub(threshold).filter(|excess| *excess > 0)
}

fn tragedy_amount(audience: u64, rates: &TragedyRates) -> DomainResult<Money> {
    let mut amount = Money::from_minor(rates.base_amount);
    if let Some(excess) = excess_over(audience, rates.audience_threshold) {
        let surcharge = Money::from_minor(rates.over_threshold_per_person).checked_mul(excess)?;
        amount = amount.checked_add(surcharge)?;
    }
    Ok(amount)
}

fn comedy_amount(audience: u64, rates: &ComedyRates) -> DomainResult<Money> {
    let mut amount = Money::from_minor(rates.base_amount);
    if let Some(excess) = excess_over(audience, rates.audience_threshold) {
        let surcharge = Money::from_minor(rates.over_threshold_per_person).checked_mul(excess)?;
        amount = amount
            .checked_add(Money::from_minor(rates.over_threshold_base))?
            .checked_add(surcharge)?;
    }
    let per_seat = Money::from_minor(rates.per_audience).checked_mul(audience)?;
    amount.checked_add(per_seat)
}

fn comedy_extra_credits(audience: u64, rates: &CreditRates) -> u64 {
    audience / rates.comedy_extra_divisor.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use theater_core::PlayId;

    fn config() -> PricingConfig {
        PricingConfig::default()
    }

    fn tragedy() -> Play {
        Play::new("Hamlet", "tragedy")
    }

    fn comedy() -> Play {
        Play::new("As You Like It", "comedy")
    }

    fn catalog() -> Catalog {
        Catalog::try_from_plays([
            (PlayId::from("hamlet"), tragedy()),
            (PlayId::from("as-like"), comedy()),
            (PlayId::from("othello"), Play::new("Othello", "tragedy")),
            (PlayId::from("henry-v"), Play::new("Henry V", "history")),
        ])
        .unwrap()
    }

    fn amount(play: &Play, audience: u32) -> u64 {
        amount_for(&Performance::new("p", audience), play, &config())
            .unwrap()
            .minor_units()
    }

    fn credits(play: &Play, audience: u32) -> u64 {
        credits_for(&Performance::new("p", audience), play, &config()).unwrap()
    }

    #[test]
    fn tragedy_over_threshold_charges_per_extra_seat() {
        assert_eq!(amount(&tragedy(), 400), 40_000 + 1_000 * 370);
        assert_eq!(amount(&tragedy(), 55), 65_000);
    }

    #[test]
    fn tragedy_at_threshold_is_base_only() {
        assert_eq!(amount(&tragedy(), 30), 40_000);
        assert_eq!(amount(&tragedy(), 31), 41_000);
        assert_eq!(amount(&tragedy(), 0), 40_000);
    }

    #[test]
    fn comedy_surcharge_starts_one_above_threshold() {
        assert_eq!(amount(&comedy(), 20), 30_000 + 300 * 20);
        assert_eq!(amount(&comedy(), 21), 30_000 + 10_000 + 500 + 300 * 21);
        assert_eq!(amount(&comedy(), 35), 58_000);
    }

    #[test]
    fn zero_audience_comedy_is_base_only() {
        assert_eq!(amount(&comedy(), 0), 30_000);
        assert_eq!(credits(&comedy(), 0), 0);
    }

    #[test]
    fn credits_follow_threshold_and_comedy_bonus() {
        assert_eq!(credits(&tragedy(), 400), 370);
        assert_eq!(credits(&tragedy(), 30), 0);
        assert_eq!(credits(&comedy(), 35), 5 + 7);
        assert_eq!(credits(&comedy(), 29), 5);
        assert_eq!(credits(&comedy(), 4), 0);
    }

    #[test]
    fn custom_rates_flow_through() {
        let mut config = config();
        config.tragedy.base_amount = 10;
        config.tragedy.audience_threshold = 0;
        config.tragedy.over_threshold_per_person = 1;
        let amount = amount_for(&Performance::new("p", 5), &tragedy(), &config).unwrap();
        assert_eq!(amount, Money::from_minor(15));
    }

    #[test]
    fn unknown_genre_fails_with_play_id() {
        let play = Play::new("Henry V", "history");
        let performance = Performance::new("henry-v", 10);

        assert_eq!(
            amount_for(&performance, &play, &config()).unwrap_err(),
            DomainError::unknown_genre("history", "henry-v")
        );
        assert_eq!(
            credits_for(&performance, &play, &config()).unwrap_err(),
            DomainError::unknown_genre("history", "henry-v")
        );
    }

    #[test]
    fn resolve_play_reports_missing_id() {
        let catalog = catalog();
        assert_eq!(
            resolve_play(&Performance::new("hamlet", 1), &catalog).unwrap().name(),
            "Hamlet"
        );
        assert_eq!(
            resolve_play(&Performance::new("macbeth", 1), &catalog).unwrap_err(),
            DomainError::play_not_found("macbeth")
        );
    }

    #[test]
    fn price_invoice_keeps_invoice_order() {
        let catalog = catalog();
        let invoice = Invoice::new(
            "BigCo",
            vec![
                Performance::new("hamlet", 55),
                Performance::new("as-like", 35),
                Performance::new("othello", 40),
            ],
        );

        let priced = price_invoice(&invoice, &catalog, &config()).unwrap();
        let names: Vec<&str> = priced.lines.iter().map(|l| l.play.name()).collect();
        assert_eq!(names, ["Hamlet", "As You Like It", "Othello"]);
        assert_eq!(priced.total_amount, Money::from_minor(173_000));
        assert_eq!(priced.total_credits, 47);
    }

    #[test]
    fn empty_invoice_totals_are_zero() {
        let invoice = Invoice::new("Nobody", Vec::new());
        assert_eq!(total_amount(&invoice, &catalog(), &config()).unwrap(), Money::ZERO);
        assert_eq!(total_credits(&invoice, &catalog(), &config()).unwrap(), 0);
    }

    #[test]
    fn any_bad_line_fails_the_whole_invoice() {
        let catalog = catalog();
        let invoice = Invoice::new(
            "BigCo",
            vec![Performance::new("hamlet", 55), Performance::new("henry-v", 10)],
        );
        assert!(matches!(
            price_invoice(&invoice, &catalog, &config()),
            Err(DomainError::UnknownPlayGenre { .. })
        ));

        let invoice = Invoice::new("BigCo", vec![Performance::new("macbeth", 10)]);
        assert!(matches!(
            total_amount(&invoice, &catalog, &config()),
            Err(DomainError::PlayNotFound { .. })
        ));
    }

    #[test]
    fn overflow_is_reported_not_wrapped() {
        let mut config = config();
        config.comedy.per_audience = u64::MAX;
        let err = amount_for(&Performance::new("p", 2), &comedy(), &config).unwrap_err();
        assert!(matches!(err, DomainError::Overflow(_)));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        #[test]
        fn tragedy_up_to_threshold_is_flat(audience in 0u32..=30) {
            prop_assert_eq!(amount(&tragedy(), audience), 40_000);
        }

        #[test]
        fn tragedy_above_threshold_is_linear(audience in 31u32..100_000) {
            let expected = 40_000 + 1_000 * (u64::from(audience) - 30);
            prop_assert_eq!(amount(&tragedy(), audience), expected);
        }

        #[test]
        fn comedy_up_to_threshold(audience in 0u32..=20) {
            prop_assert_eq!(amount(&comedy(), audience), 30_000 + 300 * u64::from(audience));
        }

        #[test]
        fn comedy_above_threshold(audience in 21u32..100_000) {
            let a = u64::from(audience);
            prop_assert_eq!(amount(&comedy(), audience), 30_000 + 10_000 + 500 * (a - 20) + 300 * a);
        }

        #[test]
        fn credits_never_decrease_with_audience(audience in 0u32..1_000_000, comedic in any::<bool>()) {
            let play = if comedic { comedy() } else { tragedy() };
            prop_assert!(credits(&play, audience) <= credits(&play, audience + 1));
        }

        /// Totals equal the sum of the per-performance figures.
        #[test]
        fn totals_are_sums_of_lines(
            shows in prop::collection::vec((0usize..3, 0u32..5_000), 0..12)
        ) {
            let ids = ["hamlet", "as-like", "othello"];
            let catalog = catalog();
            let config = config();
            let invoice = Invoice::new(
                "PropCo",
                shows.iter().map(|(i, audience)| Performance::new(ids[*i], *audience)).collect(),
            );

            let mut expected_amount = 0u64;
            let mut expected_credits = 0u64;
            for performance in invoice.performances() {
                let play = resolve_play(performance, &catalog).unwrap();
                expected_amount += amount_for(performance, play, &config).unwrap().minor_units();
                expected_credits += credits_for(performance, play, &config).unwrap();
            }

            prop_assert_eq!(total_amount(&invoice, &catalog, &config).unwrap().minor_units(), expected_amount);
            prop_assert_eq!(total_credits(&invoice, &catalog, &config).unwrap(), expected_credits);
        }
    }
}
