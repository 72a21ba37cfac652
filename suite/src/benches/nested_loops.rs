//! Two-level loop overhead with a modulo-bounded accumulator.
//!
//! No random inputs: the checksum is a pure function of the loop
//! bounds.

const OUTER: i64 = 1_000;
const INNER: i64 = 500;
const BOUND: i64 = 1_000_000;

pub fn run() -> Vec<String> {
    let mut sum_val: i64 = 0;

    for i in 0..OUTER {
        for j in 0..INNER {
            sum_val += i * j;
            if sum_val > BOUND {
                sum_val %= BOUND;
            }
        }
    }

    vec![sum_val.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_reference_checksum() {
        assert_eq!(run(), vec!["625000".to_string()]);
    }

    #[test]
    fn checksum_stays_bounded() {
        let value: i64 = run()[0].parse().expect("checksum parses");
        // One final increment may land above BOUND before the loop ends.
        assert!(value >= 0 && value <= BOUND + (OUTER - 1) * (INNER - 1));
    }
}
