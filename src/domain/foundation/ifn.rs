//! Intuitionistic fuzzy number value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Absolute tolerance for the `μ + ν ≤ 1` check and related float comparisons.
pub const IFN_TOLERANCE: f64 = 1e-9;

/// An intuitionistic fuzzy number `(μ, ν, π)`.
///
/// Only membership and non-membership are stored. Hesitation is always
/// derived as `1 − μ − ν`, so `μ + ν + π = 1` holds after every operation
/// without having to be re-established.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "IfnRecord", try_from = "IfnRecord")]
pub struct Ifn {
    membership: f64,
    non_membership: f64,
}

impl Ifn {
    /// Full membership: `(1, 0, 0)`.
    pub const ONE: Self = Self {
        membership: 1.0,
        non_membership: 0.0,
    };

    /// Full non-membership: `(0, 1, 0)`.
    pub const ZERO: Self = Self {
        membership: 0.0,
        non_membership: 1.0,
    };

    /// Creates an IFN from a `(μ, ν)` pair, rejecting values outside the model.
    pub fn try_new(membership: f64, non_membership: f64) -> Result<Self, ValidationError> {
        check_unit("membership", membership)?;
        check_unit("non_membership", non_membership)?;
        if membership + non_membership > 1.0 + IFN_TOLERANCE {
            return Err(ValidationError::exceeds_unit_sum(membership, non_membership));
        }
        Ok(Self {
            membership,
            non_membership,
        })
    }

    /// Wraps the result of a fuzzy operator whose inputs were already valid.
    pub(crate) fn from_parts(membership: f64, non_membership: f64) -> Self {
        Self {
            membership,
            non_membership,
        }
    }

    pub fn membership(&self) -> f64 {
        self.membership
    }

    pub fn non_membership(&self) -> f64 {
        self.non_membership
    }

    /// Hesitation degree `π = 1 − μ − ν`.
    pub fn hesitation(&self) -> f64 {
        1.0 - self.membership - self.non_membership
    }

    /// Returns `[μ, ν, π]`.
    pub fn components(&self) -> [f64; 3] {
        [self.membership, self.non_membership, self.hesitation()]
    }

    /// Intuitionistic fuzzy multiplication.
    ///
    /// Membership is the product of memberships; non-membership is the
    /// probabilistic sum `ν₁ + ν₂ − ν₁ν₂`.
    pub fn multiply(&self, other: &Ifn) -> Ifn {
        let membership = self.membership * other.membership;
        let non_membership = self.non_membership + other.non_membership
            - self.non_membership * other.non_membership;
        Ifn::from_parts(membership, non_membership)
    }

    /// Sum of squared differences over all three components.
    pub fn squared_distance(&self, other: &Ifn) -> f64 {
        self.components()
            .iter()
            .zip(other.components().iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum()
    }
}

fn check_unit(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::not_finite(field));
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(ValidationError::out_of_unit_range(field, value));
    }
    Ok(())
}

impl fmt::Display for Ifn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.6}, {:.6}, {:.6})",
            self.membership,
            self.non_membership,
            self.hesitation()
        )
    }
}

/// Serialized shape of an [`Ifn`]. A supplied hesitation is ignored on input.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct IfnRecord {
    membership: f64,
    non_membership: f64,
    #[serde(default)]
    hesitation: Option<f64>,
}

impl From<Ifn> for IfnRecord {
    fn from(ifn: Ifn) -> Self {
        Self {
            membership: ifn.membership,
            non_membership: ifn.non_membership,
            hesitation: Some(ifn.hesitation()),
        }
    }
}

impl TryFrom<IfnRecord> for Ifn {
    type Error = ValidationError;

    fn try_from(record: IfnRecord) -> Result<Self, Self::Error> {
        Ifn::try_new(record.membership, record.non_membership)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ifn(mu: f64, nu: f64) -> Ifn {
        Ifn::try_new(mu, nu).unwrap()
    }

    #[test]
    fn try_new_accepts_valid_pairs() {
        assert!(Ifn::try_new(0.0, 0.0).is_ok());
        assert!(Ifn::try_new(0.45, 0.45).is_ok());
        assert!(Ifn::try_new(1.0, 0.0).is_ok());
        assert!(Ifn::try_new(0.0, 1.0).is_ok());
    }

    #[test]
    fn try_new_rejects_negative_component() {
        let result = Ifn::try_new(-0.1, 0.5);
        match result {
            Err(ValidationError::OutOfUnitRange { field, actual }) => {
                assert_eq!(field, "membership");
                assert!((actual + 0.1).abs() < f64::EPSILON);
            }
            _ => panic!("Expected OutOfUnitRange error"),
        }
    }

    #[test]
    fn try_new_rejects_sum_above_one() {
        assert!(matches!(
            Ifn::try_new(0.7, 0.4),
            Err(ValidationError::ExceedsUnitSum { .. })
        ));
    }

    #[test]
    fn try_new_rejects_nan() {
        assert!(matches!(
            Ifn::try_new(f64::NAN, 0.1),
            Err(ValidationError::NotFinite { .. })
        ));
    }

    #[test]
    fn hesitation_is_derived() {
        let value = ifn(0.65, 0.25);
        assert!((value.hesitation() - 0.1).abs() < IFN_TOLERANCE);
    }

    #[test]
    fn multiply_uses_product_and_probabilistic_sum() {
        let product = ifn(0.5, 0.4).multiply(&ifn(0.8, 0.1));
        assert!((product.membership() - 0.4).abs() < IFN_TOLERANCE);
        assert!((product.non_membership() - 0.46).abs() < IFN_TOLERANCE);
        assert!((product.hesitation() - 0.14).abs() < IFN_TOLERANCE);
    }

    #[test]
    fn multiply_by_one_is_identity() {
        let value = ifn(0.3, 0.6);
        assert_eq!(value.multiply(&Ifn::ONE), value);
    }

    #[test]
    fn squared_distance_to_self_is_zero() {
        let value = ifn(0.3, 0.6);
        assert_eq!(value.squared_distance(&value), 0.0);
    }

    #[test]
    fn squared_distance_between_extremes() {
        // (1,0,0) vs (0,1,0)
        assert!((Ifn::ONE.squared_distance(&Ifn::ZERO) - 2.0).abs() < IFN_TOLERANCE);
    }

    #[test]
    fn serializes_all_three_components() {
        let json = serde_json::to_string(&ifn(0.5, 0.25)).unwrap();
        assert!(json.contains("\"membership\":0.5"));
        assert!(json.contains("\"non_membership\":0.25"));
        assert!(json.contains("\"hesitation\":0.25"));
    }

    #[test]
    fn deserialization_ignores_supplied_hesitation() {
        let value: Ifn = serde_json::from_str(
            r#"{"membership": 0.9, "non_membership": 0.05, "hesitation": 0.5}"#,
        )
        .unwrap();
        assert!((value.hesitation() - 0.05).abs() < IFN_TOLERANCE);
    }

    #[test]
    fn deserialization_validates() {
        let result: Result<Ifn, _> =
            serde_json::from_str(r#"{"membership": 0.9, "non_membership": 0.5}"#);
        assert!(result.is_err());
    }

    fn any_ifn() -> impl Strategy<Value = Ifn> {
        (0.0..=1.0f64, 0.0..=1.0f64).prop_map(|(a, b)| ifn(a, (1.0 - a) * b))
    }

    proptest! {
        #[test]
        fn multiply_preserves_unit_sum(a in any_ifn(), b in any_ifn()) {
            let product = a.multiply(&b);
            let [mu, nu, pi] = product.components();
            prop_assert!((mu + nu + pi - 1.0).abs() < IFN_TOLERANCE);
            prop_assert!(mu >= 0.0 && nu >= 0.0);
            prop_assert!(pi >= -IFN_TOLERANCE);
        }

        #[test]
        fn squared_distance_is_symmetric(a in any_ifn(), b in any_ifn()) {
            prop_assert!((a.squared_distance(&b) - b.squared_distance(&a)).abs() < 1e-15);
        }
    }
}
