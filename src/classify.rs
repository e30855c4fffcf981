//! Pure numeric classification functions
//!
//! Everything in here is a total function over a plain integer with no I/O,
//! so the HTTP layer can call these in any order without coordination.

/// Check whether `n` is prime by trial division up to floor(sqrt(n)).
///
/// Returns false for all n < 2 (including negatives). O(sqrt n).
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    // i <= n / i avoids overflow of i * i near i64::MAX
    let mut i: i64 = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Check whether `n` is perfect: equal to the sum of its proper divisors.
///
/// Returns false for all n < 2. Naive O(n) scan over [1, n-1].
pub fn is_perfect(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let mut sum: i64 = 0;
    for i in 1..n {
        if n % i == 0 {
            sum += i;
        }
    }
    sum == n
}

/// Check whether `n` is an Armstrong number: the sum of its decimal digits,
/// each raised to the power of the digit count, equals `n`.
///
/// Negative numbers are never Armstrong numbers.
pub fn is_armstrong(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let digits = decimal_digits(n.unsigned_abs());
    let power = digits.len() as u32;
    // Sum in u128 so large inputs cannot overflow the accumulator
    let sum: u128 = digits.iter().map(|&d| (d as u128).pow(power)).sum();
    sum == n as u128
}

/// Sum of the decimal digits of |n|.
pub fn digit_sum(n: i64) -> u32 {
    decimal_digits(n.unsigned_abs()).iter().map(|&d| d as u32).sum()
}

/// Ordered property tags for `n`.
///
/// Appends "prime", "perfect", "armstrong" when the respective predicate
/// holds, then exactly one of "even"/"odd".
pub fn properties(n: i64) -> Vec<&'static str> {
    let mut props = Vec::new();
    if is_prime(n) {
        props.push("prime");
    }
    if is_perfect(n) {
        props.push("perfect");
    }
    if is_armstrong(n) {
        props.push("armstrong");
    }
    props.push(if n % 2 == 0 { "even" } else { "odd" });
    props
}

/// Decimal digits of `n`, most significant first.
fn decimal_digits(mut n: u64) -> Vec<u8> {
    if n == 0 {
        return vec![0];
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push((n % 10) as u8);
        n /= 10;
    }
    digits.reverse();
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prime_small_values() {
        assert!(!is_prime(-7));
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(97));
        assert!(!is_prime(100));
    }

    #[test]
    fn prime_matches_trial_division() {
        fn naive(n: i64) -> bool {
            n >= 2 && (2..n).all(|i| n % i != 0)
        }
        for n in 2..500 {
            assert_eq!(is_prime(n), naive(n), "mismatch at {}", n);
        }
    }

    #[test]
    fn perfect_numbers() {
        assert!(is_perfect(6));
        assert!(is_perfect(28));
        assert!(is_perfect(496));
        assert!(!is_perfect(27));
        assert!(!is_perfect(1));
        assert!(!is_perfect(0));
        assert!(!is_perfect(-6));
    }

    #[test]
    fn armstrong_numbers() {
        assert!(is_armstrong(0));
        assert!(is_armstrong(5));
        assert!(is_armstrong(153));
        assert!(is_armstrong(370));
        assert!(is_armstrong(9474));
        assert!(!is_armstrong(123));
        assert!(!is_armstrong(-5));
        assert!(!is_armstrong(-153));
    }

    #[test]
    fn digit_sums() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(7), 7);
        assert_eq!(digit_sum(123), 6);
        assert_eq!(digit_sum(-123), 6);
        assert_eq!(digit_sum(9474), 24);
    }

    #[test]
    fn properties_for_four() {
        let props = properties(4);
        assert!(props.contains(&"even"));
        assert!(!props.contains(&"odd"));
        assert!(!props.contains(&"prime"));
        assert!(!props.contains(&"perfect"));
        assert!(!props.contains(&"armstrong"));
    }

    #[test]
    fn properties_ordering() {
        assert_eq!(properties(7), vec!["prime", "odd"]);
        assert_eq!(properties(28), vec!["perfect", "even"]);
        assert_eq!(properties(153), vec!["armstrong", "odd"]);
        assert_eq!(properties(2), vec!["prime", "even"]);
    }

    #[test]
    fn properties_exactly_one_parity_tag() {
        for n in [-3, -2, 0, 1, 4, 6, 7, 153] {
            let props = properties(n);
            let parity = props
                .iter()
                .filter(|p| **p == "odd" || **p == "even")
                .count();
            assert_eq!(parity, 1, "expected one parity tag for {}", n);
        }
    }
}
