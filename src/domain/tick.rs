/// Decide whether the given rendered frame should advance the simulation.
/// An interval of zero never simulates.
pub const fn should_simulate(frame_index: u64, interval_frames: u64) -> bool {
    match frame_index.checked_rem(interval_frames) {
        Some(rem) => rem == 0,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_third_frame() {
        let hits: Vec<u64> = (0..10).filter(|&f| should_simulate(f, 3)).collect();
        assert_eq!(hits, vec![0, 3, 6, 9]);
    }

    #[test]
    fn test_interval_one_always_simulates() {
        assert!((0..5).all(|f| should_simulate(f, 1)));
    }

    #[test]
    fn test_zero_interval_never_simulates() {
        assert!(!should_simulate(0, 0));
        assert!(!should_simulate(7, 0));
    }
}
