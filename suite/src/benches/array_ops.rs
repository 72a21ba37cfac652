//! Random indexed reads and writes against a ten-slot array.

use crate::rng::XorShift64Star;

const ITERATIONS: u32 = 50_000;
const BOUND: i64 = 100_000;

pub fn run() -> Vec<String> {
    let mut rng = XorShift64Star::seeded();
    let mut arr: [i64; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    let mut sum_val: i64 = 0;

    for i in 0..ITERATIONS {
        let idx = rng.int_in(0, 9) as usize;
        let arr_val = arr[idx];
        sum_val += arr_val;

        // Write back a bounded combination so slots stay in [0, BOUND).
        let bounded_sum = sum_val % BOUND;
        let bounded_arr = arr_val % BOUND;
        arr[idx] = (bounded_sum + bounded_arr) % BOUND;

        // Periodic rebound of the running sum itself.
        if i % 1000 == 0 {
            sum_val = (sum_val % BOUND + 10) % BOUND;
        }
    }

    let mut lines = vec![sum_val.to_string()];
    for slot in arr {
        lines.push(slot.to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_reference_output() {
        let lines = run();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "49673777");
        let slots = [
            "71169", "75614", "64549", "47362", "85797", "3473", "40668", "21835", "60085",
            "94942",
        ];
        assert_eq!(&lines[1..], &slots);
    }

    #[test]
    fn slots_stay_bounded() {
        for line in &run()[1..] {
            let slot: i64 = line.parse().expect("slot parses");
            assert!((0..BOUND).contains(&slot));
        }
    }
}
