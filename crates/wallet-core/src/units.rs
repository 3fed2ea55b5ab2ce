use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Smallest indivisible units per whole XMR.
pub const PICONERO_PER_XMR: u64 = 1_000_000_000_000;

/// Denominations an amount can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Xmr,
    Piconero,
    Usd,
}

impl Unit {
    pub fn from_label(label: &str) -> Option<Unit> {
        match label {
            "xmr" => Some(Unit::Xmr),
            "piconero" => Some(Unit::Piconero),
            "usd" => Some(Unit::Usd),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Xmr => "xmr",
            Unit::Piconero => "piconero",
            Unit::Usd => "usd",
        }
    }
}

/// Convert an amount between denominations at the given USD exchange rate.
///
/// Fiat-to-crypto divides by the rate and rounds to 12 decimal places;
/// crypto-to-fiat multiplies by the rate and rounds to 2. Piconero amounts
/// are scaled by 10^12 on the crypto side. Any same-category pair
/// (crypto-to-crypto, fiat-to-fiat) returns 0: no such conversion is
/// defined, and callers rely on the 0 result.
pub fn convert(amount: Decimal, from: Unit, to: Unit, rate: Decimal) -> Decimal {
    let piconero = Decimal::from(PICONERO_PER_XMR);

    match (from, to) {
        (Unit::Usd, Unit::Xmr) => round_crypto(amount.checked_div(rate).unwrap_or_default()),
        (Unit::Usd, Unit::Piconero) => {
            round_crypto(amount.checked_div(rate).unwrap_or_default() * piconero)
        }
        (Unit::Xmr, Unit::Usd) => round_fiat(amount * rate),
        (Unit::Piconero, Unit::Usd) => {
            round_fiat((amount * rate).checked_div(piconero).unwrap_or_default())
        }
        _ => Decimal::ZERO,
    }
}

/// Label-based entry point. Unknown labels yield 0, the same degenerate
/// result as a same-category pair.
pub fn convert_labels(amount: Decimal, from: &str, to: &str, rate: Decimal) -> Decimal {
    match (Unit::from_label(from), Unit::from_label(to)) {
        (Some(f), Some(t)) => convert(amount, f, t, rate),
        _ => Decimal::ZERO,
    }
}

/// Derive all three denominations of one snapshot from the authoritative
/// piconero amount.
pub fn balance_from_piconero(piconero: u64, rate: Decimal) -> shared::models::BalanceResponse {
    let amount = Decimal::from(piconero);
    shared::models::BalanceResponse {
        xmr: round_crypto(
            amount
                .checked_div(Decimal::from(PICONERO_PER_XMR))
                .unwrap_or_default(),
        ),
        piconero,
        usd: convert(amount, Unit::Piconero, Unit::Usd, rate),
    }
}

fn round_crypto(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(12, RoundingStrategy::MidpointAwayFromZero)
}

fn round_fiat(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn usd_to_xmr_divides_and_rounds_to_12_places() {
        let got = convert(dec("100"), Unit::Usd, Unit::Xmr, dec("150"));
        assert_eq!(got, dec("0.666666666667"));
    }

    #[test]
    fn xmr_to_usd_multiplies_and_rounds_to_2_places() {
        let got = convert(dec("1"), Unit::Xmr, Unit::Usd, dec("150"));
        assert_eq!(got, dec("150"));

        let got = convert(dec("0.333"), Unit::Xmr, Unit::Usd, dec("151.515"));
        assert_eq!(got, dec("50.45"));
    }

    #[test]
    fn usd_to_piconero_scales_by_divisibility() {
        let got = convert(dec("150"), Unit::Usd, Unit::Piconero, dec("150"));
        assert_eq!(got, dec("1000000000000"));
    }

    #[test]
    fn piconero_to_usd_scales_down() {
        let got = convert(dec("1000000000000"), Unit::Piconero, Unit::Usd, dec("150"));
        assert_eq!(got, dec("150"));
    }

    #[test]
    fn same_category_pairs_are_degenerate_zero() {
        // Crypto-to-crypto and fiat-to-fiat are defined to return 0
        assert_eq!(
            convert(dec("5"), Unit::Xmr, Unit::Piconero, dec("150")),
            Decimal::ZERO
        );
        assert_eq!(
            convert(dec("5"), Unit::Piconero, Unit::Xmr, dec("150")),
            Decimal::ZERO
        );
        assert_eq!(
            convert(dec("5"), Unit::Usd, Unit::Usd, dec("150")),
            Decimal::ZERO
        );
    }

    #[test]
    fn unknown_labels_fall_through_to_zero() {
        assert_eq!(
            convert_labels(dec("5"), "eur", "xmr", dec("150")),
            Decimal::ZERO
        );
        assert_eq!(
            convert_labels(dec("5"), "xmr", "", dec("150")),
            Decimal::ZERO
        );
    }

    #[test]
    fn labels_route_to_the_typed_converter() {
        assert_eq!(
            convert_labels(dec("100"), "usd", "xmr", dec("150")),
            dec("0.666666666667")
        );
    }

    #[test]
    fn balance_snapshot_is_consistent_across_denominations() {
        let balance = balance_from_piconero(2_500_000_000_000, dec("150"));
        assert_eq!(balance.piconero, 2_500_000_000_000);
        assert_eq!(balance.xmr, dec("2.5"));
        assert_eq!(balance.usd, dec("375"));
    }
}
