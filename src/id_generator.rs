use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic counter handing out identifier suffixes for one geometry kind.
///
/// Starts at zero, so the first value returned by [`IdGenerator::next`] is 1.
/// Never reset, never persisted.
#[derive(Debug)]
pub struct IdGenerator {
    value: AtomicU64,
}

impl IdGenerator {
    pub const fn new() -> Self {
        Self {
            value: AtomicU64::new(0),
        }
    }

    /// Increments the counter and returns the new value
    pub fn next(&self) -> u64 {
        self.value.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_starts_at_one() {
        let generator = IdGenerator::new();
        assert_eq!(generator.next(), 1);
        assert_eq!(generator.next(), 2);
        assert_eq!(generator.next(), 3);
    }

    #[test]
    fn test_concurrent_next_has_no_gaps() {
        let generator = Arc::new(IdGenerator::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let generator = Arc::clone(&generator);
                thread::spawn(move || (0..250).map(|_| generator.next()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for value in handle.join().unwrap() {
                assert!(seen.insert(value), "duplicate value {value}");
            }
        }

        assert_eq!(seen, (1..=2000).collect::<HashSet<u64>>());
    }
}
