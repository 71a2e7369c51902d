use chrono::{DateTime, Utc};
use rand_distr::{Distribution, Normal, Uniform};
use serde::{Deserialize, Serialize};

// Figures for the landing page activity widget. Everything here is sampled
// from fixed distributions per request; nothing reads real fleet data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub vehicles_online: u32,
    pub rides_in_progress: u32,
    pub estimated_wait_minutes: u32,
    pub sampled_at: DateTime<Utc>,
}

pub fn sample() -> Snapshot {
    let mut rng = rand::thread_rng();

    let vehicles_dist = Uniform::from(12..48);
    let rides_dist = Uniform::from(3..20);
    let wait_dist = Normal::new(7.0, 2.0).unwrap();

    let wait: f64 = wait_dist.sample(&mut rng);

    Snapshot {
        vehicles_online: vehicles_dist.sample(&mut rng),
        rides_in_progress: rides_dist.sample(&mut rng),
        estimated_wait_minutes: wait.clamp(2.0, 15.0).round() as u32,
        sampled_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_in_display_range() {
        for _ in 0..100 {
            let snapshot = sample();

            assert!((12..48).contains(&snapshot.vehicles_online));
            assert!((3..20).contains(&snapshot.rides_in_progress));
            assert!((2..=15).contains(&snapshot.estimated_wait_minutes));
        }
    }
}
