//! Urban-transit fare pricing.
//!
//! Every contiguous window of a journey is priced against the urban fare
//! table. Each window keeps the cheapest standard fare matching the
//! journey's peak status; the whole journey additionally gets the
//! cheapest fare of any kind.

use futures::future::try_join_all;
use tracing::debug;

use crate::domain::{Cost, FareCandidate, Journey, StationCode, TimeOfDay, is_peak};
use crate::lookup::UrbanFareAuthority;

use super::config::PricingConfig;
use super::error::PricingError;
use super::matrix::{FareEntry, FareMatrix};

/// When and how the journey is travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrbanFareRequest {
    pub time: TimeOfDay,
    pub weekday: bool,
    /// Whether the traveller holds a discount card.
    pub discount_card: bool,
}

impl UrbanFareRequest {
    pub fn new(time: TimeOfDay, weekday: bool, discount_card: bool) -> Self {
        Self {
            time,
            weekday,
            discount_card,
        }
    }

    /// Peak status for the whole journey.
    pub fn is_peak(&self) -> bool {
        is_peak(self.time, self.weekday)
    }
}

/// The cheapest standard (non-alternative) fare with the given peak status.
///
/// Returns `Cost::UNAVAILABLE` if no candidate qualifies.
pub fn select_fare(candidates: &[FareCandidate], peak: bool) -> Cost {
    cheapest(
        candidates
            .iter()
            .filter(|c| !c.is_alternative && c.is_peak == peak),
    )
}

/// The cheapest fare of any kind, or `Cost::UNAVAILABLE` if there are none.
pub fn cheapest_fare(candidates: &[FareCandidate]) -> Cost {
    cheapest(candidates.iter())
}

fn cheapest<'a>(candidates: impl Iterator<Item = &'a FareCandidate>) -> Cost {
    candidates
        .map(|c| c.cost)
        .min_by(Cost::total_cmp)
        .unwrap_or(Cost::UNAVAILABLE)
}

/// Prices journeys against an urban fare authority.
pub struct UrbanPricer<'a, A: UrbanFareAuthority> {
    authority: &'a A,
    config: &'a PricingConfig,
}

impl<'a, A: UrbanFareAuthority> UrbanPricer<'a, A> {
    pub fn new(authority: &'a A, config: &'a PricingConfig) -> Self {
        Self { authority, config }
    }

    /// Build the urban fare matrix for a combined journey.
    ///
    /// The matrix holds one entry per window (`n * (n + 1) / 2` for `n`
    /// legs) plus the whole-journey entry. Any authority failure aborts
    /// the whole request.
    pub async fn price(
        &self,
        journey: &Journey,
        request: &UrbanFareRequest,
    ) -> Result<FareMatrix, PricingError> {
        let peak = request.is_peak();
        let mut matrix = FareMatrix::new();

        let origin = journey.origin();
        let destination = journey.destination();
        let candidates = self
            .fares(origin, destination, request.discount_card)
            .await?;
        matrix.set_whole_journey(FareEntry::new(
            origin.clone(),
            destination.clone(),
            cheapest_fare(&candidates),
        ));

        let windows: Vec<_> = journey.sub_journeys().collect();

        for batch in windows.chunks(self.config.effective_batch_size()) {
            let futures = batch.iter().map(|window| async move {
                let candidates = self
                    .fares(window.origin, window.destination, request.discount_card)
                    .await?;
                Ok::<_, PricingError>((window, select_fare(&candidates, peak)))
            });

            for (window, cost) in try_join_all(futures).await? {
                matrix.insert(
                    window.start,
                    window.end,
                    FareEntry::new(window.origin.clone(), window.destination.clone(), cost),
                );
            }
        }

        debug!(
            origin = %origin,
            destination = %destination,
            legs = journey.len(),
            peak,
            entries = matrix.len(),
            "Priced urban fares"
        );

        Ok(matrix)
    }

    async fn fares(
        &self,
        origin: &StationCode,
        destination: &StationCode,
        discount_card: bool,
    ) -> Result<Vec<FareCandidate>, PricingError> {
        self.authority
            .find_fares(origin, destination, discount_card)
            .await
            .map_err(|source| PricingError::UrbanFare {
                origin: origin.clone(),
                destination: destination.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawLeg;
    use crate::lookup::LookupError;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Authority with a fixed fare table; unknown pairs have no fares.
    #[derive(Default)]
    struct MockAuthority {
        fares: HashMap<(String, String), Vec<FareCandidate>>,
        fail_on: Option<(String, String)>,
        calls: Mutex<Vec<(String, String, bool)>>,
    }

    impl MockAuthority {
        fn with(mut self, from: &str, to: &str, fares: Vec<FareCandidate>) -> Self {
            self.fares.insert((from.into(), to.into()), fares);
            self
        }

        fn failing_on(mut self, from: &str, to: &str) -> Self {
            self.fail_on = Some((from.into(), to.into()));
            self
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl UrbanFareAuthority for MockAuthority {
        async fn find_fares(
            &self,
            origin: &StationCode,
            destination: &StationCode,
            discount_card: bool,
        ) -> Result<Vec<FareCandidate>, LookupError> {
            let key = (origin.to_string(), destination.to_string());
            self.calls
                .lock()
                .unwrap()
                .push((key.0.clone(), key.1.clone(), discount_card));
            if self.fail_on.as_ref() == Some(&key) {
                return Err(LookupError::Unavailable("fare table down".into()));
            }
            Ok(self.fares.get(&key).cloned().unwrap_or_default())
        }
    }

    fn journey(legs: &[(&str, &str)]) -> Journey {
        let raw: Vec<_> = legs.iter().map(|(f, t)| RawLeg::new(*f, *t)).collect();
        Journey::parse(&raw).unwrap()
    }

    fn off_peak() -> UrbanFareRequest {
        UrbanFareRequest::new(TimeOfDay::hm(12, 0), true, false)
    }

    fn peak() -> UrbanFareRequest {
        UrbanFareRequest::new(TimeOfDay::hm(8, 0), true, false)
    }

    #[test]
    fn request_peak_status() {
        assert!(peak().is_peak());
        assert!(!off_peak().is_peak());
        assert!(!UrbanFareRequest::new(TimeOfDay::hm(8, 0), false, false).is_peak());
    }

    #[test]
    fn select_fare_filters_peak_and_alternative() {
        let candidates = [
            FareCandidate::new(1.0, false, true),
            FareCandidate::new(2.8, false, false),
            FareCandidate::new(2.5, false, false),
            FareCandidate::new(3.4, true, false),
        ];
        assert_eq!(select_fare(&candidates, false), Cost::new(2.5));
        assert_eq!(select_fare(&candidates, true), Cost::new(3.4));
    }

    #[test]
    fn select_fare_with_no_survivors_is_unavailable() {
        let candidates = [FareCandidate::new(1.0, true, true)];
        assert_eq!(select_fare(&candidates, true), Cost::UNAVAILABLE);
        assert_eq!(select_fare(&candidates, false), Cost::UNAVAILABLE);
        assert_eq!(select_fare(&[], false), Cost::UNAVAILABLE);
    }

    #[test]
    fn cheapest_fare_ignores_flags() {
        let candidates = [
            FareCandidate::new(3.4, true, false),
            FareCandidate::new(1.0, true, true),
        ];
        assert_eq!(cheapest_fare(&candidates), Cost::new(1.0));
        assert_eq!(cheapest_fare(&[]), Cost::UNAVAILABLE);
    }

    #[tokio::test]
    async fn matrix_covers_every_window() {
        let authority = MockAuthority::default();
        let config = PricingConfig::default().with_batch_size(2);
        let pricer = UrbanPricer::new(&authority, &config);

        let j = journey(&[("940A", "940B"), ("910B", "910C"), ("940C", "940D")]);
        let matrix = pricer.price(&j, &off_peak()).await.unwrap();

        // 3 legs: 6 windows plus the whole-journey entry
        assert_eq!(matrix.len(), 7);
        for start in 0..3 {
            for end in start..3 {
                let entry = matrix.get(start, end).unwrap();
                assert_eq!(entry.origin, *j.legs()[start].origin());
                assert_eq!(entry.destination, *j.legs()[end].destination());
            }
        }
        // Whole journey looked up once up front and once as a window
        assert_eq!(authority.call_count(), 7);
    }

    #[tokio::test]
    async fn windows_use_filtered_minimum() {
        let authority = MockAuthority::default()
            .with(
                "940A",
                "940B",
                vec![
                    FareCandidate::new(2.8, false, false),
                    FareCandidate::new(3.4, true, false),
                    FareCandidate::new(1.5, false, true),
                ],
            )
            .with("910B", "910C", vec![FareCandidate::new(5.0, true, false)]);
        let config = PricingConfig::default();
        let pricer = UrbanPricer::new(&authority, &config);

        let j = journey(&[("940A", "940B"), ("910B", "910C")]);

        let matrix = pricer.price(&j, &off_peak()).await.unwrap();
        assert_eq!(matrix.cost(0, 0), Some(Cost::new(2.8)));
        assert_eq!(matrix.cost(1, 1), Some(Cost::UNAVAILABLE));

        let matrix = pricer.price(&j, &peak()).await.unwrap();
        assert_eq!(matrix.cost(0, 0), Some(Cost::new(3.4)));
        assert_eq!(matrix.cost(1, 1), Some(Cost::new(5.0)));
    }

    #[tokio::test]
    async fn whole_journey_is_unfiltered() {
        // Only an alternative peak fare exists for the full journey
        let authority = MockAuthority::default().with(
            "940A",
            "910C",
            vec![FareCandidate::new(6.1, true, true)],
        );
        let config = PricingConfig::default();
        let pricer = UrbanPricer::new(&authority, &config);

        let j = journey(&[("940A", "940B"), ("910B", "910C")]);
        let matrix = pricer.price(&j, &off_peak()).await.unwrap();

        let whole = matrix.whole_journey().unwrap();
        assert_eq!(whole.cost, Cost::new(6.1));
        assert_eq!(whole.origin.as_str(), "940A");
        assert_eq!(whole.destination.as_str(), "910C");
        // The filtered window for the same pair has no qualifying fare
        assert_eq!(matrix.cost(0, 1), Some(Cost::UNAVAILABLE));
    }

    #[tokio::test]
    async fn whole_journey_with_no_fares_is_unavailable() {
        let authority = MockAuthority::default();
        let config = PricingConfig::default();
        let pricer = UrbanPricer::new(&authority, &config);

        let matrix = pricer
            .price(&journey(&[("940A", "940B")]), &off_peak())
            .await
            .unwrap();

        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix.whole_journey().unwrap().cost, Cost::UNAVAILABLE);
        assert_eq!(matrix.cost(0, 0), Some(Cost::UNAVAILABLE));
    }

    #[tokio::test]
    async fn discount_card_is_forwarded() {
        let authority = MockAuthority::default();
        let config = PricingConfig::default();
        let pricer = UrbanPricer::new(&authority, &config);

        let request = UrbanFareRequest::new(TimeOfDay::hm(12, 0), true, true);
        pricer
            .price(&journey(&[("940A", "940B")]), &request)
            .await
            .unwrap();

        let calls = authority.calls.lock().unwrap();
        assert!(calls.iter().all(|(_, _, card)| *card));
    }

    #[tokio::test]
    async fn authority_failure_aborts_with_pair_context() {
        let authority = MockAuthority::default().failing_on("910B", "910C");
        let config = PricingConfig::default();
        let pricer = UrbanPricer::new(&authority, &config);

        let j = journey(&[("940A", "940B"), ("910B", "910C")]);
        let err = pricer.price(&j, &off_peak()).await.unwrap_err();

        match err {
            PricingError::UrbanFare {
                origin,
                destination,
                source,
            } => {
                assert_eq!(origin.as_str(), "910B");
                assert_eq!(destination.as_str(), "910C");
                assert!(matches!(source, LookupError::Unavailable(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
