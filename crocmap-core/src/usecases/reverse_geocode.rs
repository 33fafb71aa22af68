use super::prelude::*;
use std::time::Duration;

pub const DEFAULT_RETRIES: u32 = 3;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_BACKOFF_BASE: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts
    pub retries: u32,
    /// Timeout of each single attempt
    pub timeout: Duration,
    /// The unit of the exponential backoff
    pub backoff_base: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: DEFAULT_RETRIES,
            timeout: DEFAULT_TIMEOUT,
            backoff_base: DEFAULT_BACKOFF_BASE,
        }
    }
}

impl RetryPolicy {
    /// Delay after the timed out attempt (counting from 0).
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        self.backoff_base
            .saturating_mul(2_u32.saturating_pow(attempt))
    }

    /// Upper bound of all delays of a single lookup.
    pub fn max_total_backoff(&self) -> Duration {
        (0..self.retries)
            .map(|attempt| self.backoff_delay(attempt))
            .fold(Duration::ZERO, Duration::saturating_add)
    }
}

pub fn reverse_geocode_with_retry<G, P>(
    gateway: &G,
    pause: &P,
    pos: MapPoint,
    policy: &RetryPolicy,
) -> Resolution
where
    G: ReverseGeocodingGateway + ?Sized,
    P: Pause + ?Sized,
{
    for attempt in 0..policy.retries {
        match gateway.resolve_lat_lng_address(pos, policy.timeout) {
            Ok(Some(address)) => {
                log::debug!("Resolved address of {pos}: {address}");
                return Resolution::Resolved(address);
            }
            Ok(None) => {
                log::debug!("No address found at {pos}");
                return Resolution::NotFound;
            }
            Err(GeocodingError::TimedOut) => {
                log::warn!(
                    "Geocoding service timed out on attempt {} of {}",
                    attempt + 1,
                    policy.retries
                );
                if attempt + 1 < policy.retries {
                    pause.pause(policy.backoff_delay(attempt));
                }
            }
            Err(err @ GeocodingError::Unavailable(_)) => {
                log::warn!("{err}");
                return Resolution::Unavailable;
            }
        }
    }
    log::warn!(
        "Giving up to resolve the address of {pos} after {} attempts",
        policy.retries
    );
    Resolution::NotFound
}
