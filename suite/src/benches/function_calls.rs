//! Call overhead: small helpers, array passing, bounded recursion.

use crate::rng::XorShift64Star;

const ITERATIONS: u32 = 10_000;

/// Naive recursive Fibonacci, bounded on both ends: inputs above 46
/// short-circuit to 0 and partial results are rebounded by modulo so
/// the sum cannot overflow.
fn fibonacci(n: i64) -> i64 {
    if n <= 1 {
        return n;
    }
    if n > 46 {
        return 0;
    }
    fibonacci(n - 1) % 1_000_000 + fibonacci(n - 2) % 1_000_000
}

fn simple_math(a: i64, b: i64) -> i64 {
    a * b + a - b
}

fn array_sum(arr: &[i64]) -> i64 {
    let mut sum_val = 0;
    for val in arr {
        sum_val += val;
    }
    sum_val
}

pub fn run() -> Vec<String> {
    let mut rng = XorShift64Star::seeded();
    let mut res: i64 = 0;

    for i in 0..ITERATIONS {
        let a = rng.int_in(1, 100);
        let b = rng.int_in(1, 100);

        res += simple_math(a, b);

        // Pass a freshly built array through a helper. The element sum
        // is 5a + b, always positive, so the modulo is well-defined.
        let arr = [a, b, a + b, a - b, a * 2];
        res += array_sum(&arr) % 10;

        // Recursive calls, kept rare and shallow.
        if i % 1000 == 0 {
            res += fibonacci(a % 10);
        }
    }

    vec![res.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_reference_checksum() {
        assert_eq!(run(), vec!["25419701".to_string()]);
    }

    #[test]
    fn fibonacci_base_and_guard() {
        let expected = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(fibonacci(n as i64), *want);
        }
        assert_eq!(fibonacci(47), 0);
    }

    #[test]
    fn helpers_agree_with_direct_computation() {
        assert_eq!(simple_math(7, 3), 7 * 3 + 7 - 3);
        assert_eq!(array_sum(&[1, 2, 3, 4, 5]), 15);
        assert_eq!(array_sum(&[]), 0);
    }
}
