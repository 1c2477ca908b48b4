use crate::insight::backend::HttpBackend;
use crate::insight::mock;
use crate::insight::models::{BusinessData, BusinessRequest, HeadlineResponse};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Artificial delay applied before each backend attempt in demo mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    pub min: Duration,
    pub max: Duration,
}

impl SimulatedLatency {
    pub fn new(min: Duration, max: Duration) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    fn sample(&self, rng: &mut StdRng) -> Duration {
        rng.gen_range(self.min..=self.max)
    }
}

/// Resolves business insights, substituting locally synthesized data
/// whenever the backend cannot answer.
#[derive(Debug)]
pub struct InsightClient {
    backend: HttpBackend,
    rng: Mutex<StdRng>,
    latency: Option<SimulatedLatency>,
}

impl InsightClient {
    pub fn new(backend: HttpBackend) -> Self {
        Self {
            backend,
            rng: Mutex::new(StdRng::from_entropy()),
            latency: None,
        }
    }

    /// Use a deterministic random source for synthesis and latency.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    pub fn with_latency(mut self, latency: SimulatedLatency) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn backend(&self) -> &HttpBackend {
        &self.backend
    }

    /// Fetch rating, reviews and headline. Never fails.
    pub async fn fetch_insights(&self, request: &BusinessRequest) -> BusinessData {
        info!(name = %request.name, location = %request.location, "Fetching business data");
        self.simulate_latency().await;

        match self.backend.business_data(request).await {
            Ok(data) => {
                debug!(rating = data.rating, reviews = data.reviews, "Backend answered");
                data
            }
            Err(e) => {
                warn!(error = %e, "Backend not available, using mock data");
                let mut rng = self.rng();
                mock::synthesize_business_data(&mut *rng, &request.name, &request.location)
            }
        }
    }

    /// Produce a fresh headline. Never fails and never returns an empty one.
    pub async fn regenerate_headline(&self, name: &str, location: &str) -> HeadlineResponse {
        info!(name = %name, location = %location, "Regenerating headline");
        self.simulate_latency().await;

        match self.backend.regenerate_headline(name, location).await {
            Ok(headline) => headline,
            Err(e) => {
                warn!(error = %e, "Backend not available, generating mock headline");
                let mut rng = self.rng();
                mock::synthesize_headline(&mut *rng, name, location)
            }
        }
    }

    async fn simulate_latency(&self) {
        let Some(latency) = self.latency else {
            return;
        };
        let delay = {
            let mut rng = self.rng();
            latency.sample(&mut rng)
        };
        debug!(delay_ms = delay.as_millis() as u64, "Simulating network delay");
        tokio::time::sleep(delay).await;
    }

    fn rng(&self) -> MutexGuard<'_, StdRng> {
        // A panic mid-draw cannot leave StdRng in an invalid state.
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
