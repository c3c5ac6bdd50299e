//! Bounded exponential backoff schedule, used when polling for an element
//! that may not be rendered yet.

/// Delay before each retry, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backoff {
    pub initial_ms: u32,
    pub max_attempts: u32,
    pub max_delay_ms: u32,
}

impl Default for Backoff {
    fn default() -> Self {
        Self {
            initial_ms: 16,
            max_attempts: 6,
            max_delay_ms: 500,
        }
    }
}

impl Backoff {
    /// Delays between attempts: `initial, 2*initial, ...` capped at `max_delay_ms`.
    /// There are `max_attempts - 1` of them.
    pub fn delays(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.max_attempts.saturating_sub(1)).map(move |attempt| {
            self.initial_ms
                .saturating_mul(1u32.checked_shl(attempt).unwrap_or(u32::MAX))
                .min(self.max_delay_ms)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule() {
        let delays: Vec<u32> = Backoff::default().delays().collect();
        assert_eq!(delays, vec![16, 32, 64, 128, 256]);
    }

    #[test]
    fn test_delays_are_capped() {
        let backoff = Backoff {
            initial_ms: 100,
            max_attempts: 5,
            max_delay_ms: 300,
        };
        let delays: Vec<u32> = backoff.delays().collect();
        assert_eq!(delays, vec![100, 200, 300, 300]);
    }

    #[test]
    fn test_single_attempt_has_no_delays() {
        let backoff = Backoff {
            max_attempts: 1,
            ..Backoff::default()
        };
        assert_eq!(backoff.delays().count(), 0);
    }
}
