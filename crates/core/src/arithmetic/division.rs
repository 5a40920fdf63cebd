//! Fair division of a whole number of sub-units.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::ToPrimitive;
use strictmoney_shared::{MoneyError, MoneyResult};

/// Splits `total` into `parts` shares using the largest-remainder method.
///
/// Every share is `total / parts` (floor); the first `total % parts` shares
/// get one extra unit. The result is therefore sorted in descending order,
/// sums to exactly `total` and no two shares differ by more than one.
///
/// # Errors
///
/// Returns [`MoneyError::DivisionByZero`] if `parts` is zero.
pub(crate) fn fair_shares(total: &BigUint, parts: usize) -> MoneyResult<Vec<BigUint>> {
    if parts == 0 {
        return Err(MoneyError::DivisionByZero);
    }

    let (base, remainder) = total.div_rem(&BigUint::from(parts));
    // remainder < parts, so it always fits
    let extra_count = remainder.to_usize().unwrap_or(parts);
    let raised = &base + 1u8;

    Ok((0..parts)
        .map(|i| {
            if i < extra_count {
                raised.clone()
            } else {
                base.clone()
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn shares(total: u64, parts: usize) -> Vec<u64> {
        fair_shares(&BigUint::from(total), parts)
            .unwrap()
            .into_iter()
            .map(|s| s.to_u64().unwrap())
            .collect()
    }

    #[rstest]
    #[case(537, 2, vec![269, 268])]
    #[case(100, 3, vec![34, 33, 33])]
    #[case(10, 5, vec![2, 2, 2, 2, 2])]
    #[case(1, 3, vec![1, 0, 0])]
    #[case(0, 2, vec![0, 0])]
    fn test_fair_shares(#[case] total: u64, #[case] parts: usize, #[case] expected: Vec<u64>) {
        assert_eq!(shares(total, parts), expected);
    }

    #[test]
    fn test_zero_parts() {
        assert_eq!(
            fair_shares(&BigUint::from(10u8), 0),
            Err(MoneyError::DivisionByZero)
        );
    }

    #[test]
    fn test_sum_is_preserved_for_big_totals() {
        let total: BigUint = "123456789012345678901234567890".parse().unwrap();
        let result = fair_shares(&total, 7).unwrap();
        let sum: BigUint = result.iter().sum();
        assert_eq!(sum, total);
    }
}
