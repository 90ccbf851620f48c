//! Homomorphic operations on shares.
//!
//! A participant holding shares of several secrets at the same evaluation
//! point can locally compute a share of their sum or product. Adding keeps
//! the degree of the sharing; multiplying adds the degrees, so a product of
//! `k` degree-`t` sharings needs `k * t + 1` shares to reconstruct.

use crate::share::{ensure_compatible, Domain, Share};
use crate::{Error, Result};
use sss_util::reduce;

/// Add shares of several secrets held by the same participant, producing a
/// share of the sum of the secrets.
///
/// All shares must have the same domain, degree and evaluation point. For
/// integer sharings the secrets must also have been shared with the same
/// scale factor, which is not checked.
pub fn add(shares: &[Share]) -> Result<Share> {
    if shares.is_empty() {
        return Err(Error::NoShares);
    }
    ensure_compatible(shares, true)?;

    let first = &shares[0];
    let modulus = first.domain.modulus();
    let mut y = first.y.clone();
    for share in &shares[1..] {
        y += &share.y;
        if let Some(p) = modulus {
            y = reduce(&y, p);
        }
    }

    Ok(Share {
        domain: first.domain.clone(),
        degree: first.degree,
        x: first.x,
        y,
    })
}

/// Multiply shares of several secrets held by the same participant,
/// producing a share of the product of the secrets.
///
/// All shares must have the same domain, degree and evaluation point. The
/// degree of the result is the sum of the degrees of the factors, and over
/// the integers the scale factor is the product of the scale factors.
pub fn multiply(shares: &[Share]) -> Result<Share> {
    if shares.is_empty() {
        return Err(Error::NoShares);
    }
    ensure_compatible(shares, true)?;

    let first = &shares[0];
    let mut domain = first.domain.clone();
    let mut degree = first.degree;
    let mut y = first.y.clone();
    for share in &shares[1..] {
        y *= &share.y;
        degree = degree.checked_add(share.degree).ok_or_else(|| {
            Error::InvalidShares("degree of the product overflows".to_string())
        })?;
        match (&mut domain, &share.domain) {
            (Domain::FiniteField { modulus }, _) => y = reduce(&y, modulus),
            (Domain::Integers { scale }, Domain::Integers { scale: other }) => *scale *= other,
            // Excluded by the compatibility check.
            (Domain::Integers { .. }, Domain::FiniteField { .. }) => {
                return Err(Error::IncompatibleShares)
            }
        }
    }

    Ok(Share {
        domain,
        degree,
        x: first.x,
        y,
    })
}

/// Add whole sharings pointwise: the `i`-th result is the sum of the `i`-th
/// shares of every sharing.
pub fn add_sharings(sharings: &[Vec<Share>]) -> Result<Vec<Share>> {
    pointwise(sharings, add)
}

/// Multiply whole sharings pointwise: the `i`-th result is the product of the
/// `i`-th shares of every sharing.
pub fn multiply_sharings(sharings: &[Vec<Share>]) -> Result<Vec<Share>> {
    pointwise(sharings, multiply)
}

fn pointwise<F>(sharings: &[Vec<Share>], op: F) -> Result<Vec<Share>>
where
    F: Fn(&[Share]) -> Result<Share>,
{
    let first = sharings.first().ok_or(Error::NoShares)?;
    if sharings.iter().any(|s| s.len() != first.len()) {
        return Err(Error::IncompatibleShares);
    }
    (0..first.len())
        .map(|i| {
            let column: Vec<Share> = sharings.iter().map(|s| s[i].clone()).collect();
            op(&column)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{add, add_sharings, multiply, multiply_sharings};
    use crate::{combine, share_finite_field, share_integers, Domain, Error, Share};
    use crate::{share_finite_field_with_rng, share_integers_with_rng};
    use itertools::izip;
    use num_bigint::BigInt;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::error::Error as StdError;

    #[test]
    fn finite_field_addition() -> Result<(), Box<dyn StdError>> {
        let p = BigInt::from(7919);
        let shares1 = share_finite_field(&BigInt::from(123), &p, 3, 4);
        let shares2 = share_finite_field(&BigInt::from(456), &p, 3, 4);

        let sum = izip!(&shares1, &shares2)
            .map(|(a, b)| add(&[a.clone(), b.clone()]))
            .collect::<Result<Vec<_>, _>>()?;
        for share in &sum {
            assert_eq!(share.degree(), 3);
            assert!(share.y() < &p);
        }
        assert_eq!(combine(&sum)?, BigInt::from(579));
        Ok(())
    }

    #[test]
    fn finite_field_addition_wraps() -> Result<(), Box<dyn StdError>> {
        let p = BigInt::from(7919);
        let shares1 = share_finite_field(&BigInt::from(7000), &p, 1, 3);
        let shares2 = share_finite_field(&BigInt::from(7000), &p, 1, 3);
        let shares3 = share_finite_field(&BigInt::from(7000), &p, 1, 3);
        let sum = add_sharings(&[shares1, shares2, shares3])?;
        assert_eq!(combine(&sum)?, BigInt::from(21000 % 7919));
        Ok(())
    }

    #[test]
    fn finite_field_multiplication() -> Result<(), Box<dyn StdError>> {
        let p = BigInt::from(7919);
        let shares1 = share_finite_field(&BigInt::from(-123), &p, 2, 5);
        let shares2 = share_finite_field(&BigInt::from(456), &p, 2, 5);

        let product = izip!(&shares1, &shares2)
            .map(|(a, b)| multiply(&[a.clone(), b.clone()]))
            .collect::<Result<Vec<_>, _>>()?;
        for share in &product {
            assert_eq!(share.degree(), 4);
        }

        let expected = BigInt::from((-123i64 * 456).rem_euclid(7919));
        assert_eq!(combine(&product)?, expected);
        assert_eq!(combine(&product[..4]), Err(Error::TooFewShares(4, 5)));
        Ok(())
    }

    #[test]
    fn integer_addition() -> Result<(), Box<dyn StdError>> {
        let bound = BigInt::from(10000);
        let shares1 = share_integers(&BigInt::from(123), &bound, 100, 3, 4);
        let shares2 = share_integers(&BigInt::from(456), &bound, 100, 3, 4);

        let sum = add_sharings(&[shares1, shares2])?;
        assert_eq!(sum[0].scale(), Some(&BigInt::from(24)));
        assert_eq!(combine(&sum)?, BigInt::from(579));
        Ok(())
    }

    #[test]
    fn integer_multiplication() -> Result<(), Box<dyn StdError>> {
        let bound = BigInt::from(10000);
        let shares1 = share_integers(&BigInt::from(-123), &bound, 100, 2, 5);
        let shares2 = share_integers(&BigInt::from(456), &bound, 100, 2, 5);

        let product = multiply_sharings(&[shares1, shares2])?;
        for share in &product {
            assert_eq!(share.degree(), 4);
            assert_eq!(share.scale(), Some(&BigInt::from(120 * 120)));
        }
        assert_eq!(combine(&product)?, BigInt::from(-123 * 456));
        Ok(())
    }

    #[test]
    fn three_factor_product() -> Result<(), Box<dyn StdError>> {
        let p = BigInt::from(7919);
        let sharings: Vec<_> = [2, 3, 5]
            .iter()
            .map(|s| share_finite_field(&BigInt::from(*s), &p, 1, 4))
            .collect();
        let product = multiply_sharings(&sharings)?;
        assert_eq!(product[0].degree(), 3);
        assert_eq!(combine(&product)?, BigInt::from(30));
        Ok(())
    }

    #[test]
    fn errors() {
        assert_eq!(add(&[]), Err(Error::NoShares));
        assert_eq!(multiply(&[]), Err(Error::NoShares));
        assert_eq!(add_sharings(&[]), Err(Error::NoShares));
        assert_eq!(multiply_sharings(&[]), Err(Error::NoShares));

        let shares1 = share_finite_field(&BigInt::from(-123), &BigInt::from(1234), 2, 5);
        let shares2 = share_finite_field(&BigInt::from(456), &BigInt::from(7919), 2, 5);
        for (a, b) in izip!(&shares1, &shares2) {
            assert_eq!(add(&[a.clone(), b.clone()]), Err(Error::IncompatibleShares));
            assert_eq!(
                multiply(&[a.clone(), b.clone()]),
                Err(Error::IncompatibleShares)
            );
        }

        // Shares of different participants.
        assert_eq!(
            add(&[shares2[0].clone(), shares2[1].clone()]),
            Err(Error::IncompatibleShares)
        );

        // Sharings of different sizes.
        let shorter = share_finite_field(&BigInt::from(1), &BigInt::from(7919), 2, 4);
        assert_eq!(
            add_sharings(&[shares2, shorter]),
            Err(Error::IncompatibleShares)
        );

        // Different domains.
        let field = share_finite_field(&BigInt::from(1), &BigInt::from(7919), 2, 3);
        let integers = share_integers(&BigInt::from(1), &BigInt::from(10), 40, 2, 3);
        assert_eq!(
            multiply(&[integers[0].clone(), field[0].clone()]),
            Err(Error::IncompatibleShares)
        );
    }

    #[test]
    fn product_degree_overflow() {
        let domain = Domain::FiniteField {
            modulus: BigInt::from(7919),
        };
        let share = Share::new(domain, usize::MAX / 2 + 1, 1, BigInt::from(3));
        assert!(matches!(
            multiply(&[share.clone(), share]),
            Err(Error::InvalidShares(_))
        ));
    }

    #[test]
    fn single_share_is_identity() -> Result<(), Box<dyn StdError>> {
        let shares = share_integers(&BigInt::from(5), &BigInt::from(10), 40, 1, 3);
        assert_eq!(add(&shares[..1])?, shares[0]);
        assert_eq!(multiply(&shares[..1])?, shares[0]);
        Ok(())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_field_homomorphism(a: u32, b: u32, seed: u64, degree in 1usize..4) {
            let p = BigInt::from(4294967311u64);
            let n = 2 * degree + 1;
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let sa = share_finite_field_with_rng(&BigInt::from(a), &p, degree, n, &mut rng);
            let sb = share_finite_field_with_rng(&BigInt::from(b), &p, degree, n, &mut rng);

            let sum = add_sharings(&[sa.clone(), sb.clone()]).unwrap();
            prop_assert_eq!(combine(&sum[..=degree]), Ok((BigInt::from(a) + b) % &p));

            let product = multiply_sharings(&[sa, sb]).unwrap();
            prop_assert_eq!(combine(&product), Ok((BigInt::from(a) * b) % &p));
        }

        #[test]
        fn prop_integer_homomorphism(a in -10_000i64..=10_000, b in -10_000i64..=10_000, seed: u64, degree in 1usize..4) {
            let bound = BigInt::from(10_000);
            let n = 2 * degree + 1;
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let sa = share_integers_with_rng(&BigInt::from(a), &bound, 40, degree, n, &mut rng);
            let sb = share_integers_with_rng(&BigInt::from(b), &bound, 40, degree, n, &mut rng);

            let sum = add_sharings(&[sa.clone(), sb.clone()]).unwrap();
            prop_assert_eq!(combine(&sum[degree..]), Ok(BigInt::from(a + b)));

            let product = multiply_sharings(&[sa, sb]).unwrap();
            prop_assert_eq!(combine(&product), Ok(BigInt::from(a * b)));
        }
    }
}
