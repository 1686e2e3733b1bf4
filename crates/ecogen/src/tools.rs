use rand::Rng;

/// Short, human-readable seed that is logged with every generated texture.
pub fn generate_seed8() -> u32 {
    rand::rng().random_range(0u32..100_000_000u32)
}

pub fn expand_seed64(code: u32) -> u64 {
    splitmix64(code as u64)
}

pub fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed8_stays_within_eight_digits() {
        for _ in 0..100 {
            assert!(generate_seed8() < 100_000_000);
        }
    }

    #[test]
    fn expanded_seeds_differ_for_neighbouring_codes() {
        assert_eq!(expand_seed64(42), expand_seed64(42));
        assert_ne!(expand_seed64(42), expand_seed64(43));
    }
}
