//! Stress helpers for GymStore.
//!
//! These verify behavior under heavy load and concurrent access.

use gymstore_core::{EntityId, Gym, Trainee, TrainingType, TypedStore};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Result of a stress test run.
#[derive(Debug, Clone)]
pub struct StressTestResult {
    /// Total operations performed.
    pub total_ops: usize,
    /// Successful operations.
    pub successful_ops: usize,
    /// Failed operations.
    pub failed_ops: usize,
    /// Total duration.
    pub duration: Duration,
    /// Operations per second.
    pub ops_per_second: f64,
}

impl StressTestResult {
    /// Creates a new result.
    pub fn new(successful: usize, failed: usize, duration: Duration) -> Self {
        let total = successful + failed;
        let ops_per_second = if duration.as_secs_f64() > 0.0 {
            total as f64 / duration.as_secs_f64()
        } else {
            0.0
        };

        Self {
            total_ops: total,
            successful_ops: successful,
            failed_ops: failed,
            duration,
            ops_per_second,
        }
    }

    /// Prints a summary of the test.
    pub fn print_summary(&self, name: &str) {
        println!("\n=== {name} ===");
        println!("Total operations: {}", self.total_ops);
        println!("Successful: {}", self.successful_ops);
        println!("Failed: {}", self.failed_ops);
        println!("Duration: {:?}", self.duration);
        println!("Throughput: {:.2} ops/sec", self.ops_per_second);
    }
}

/// Configuration for stress tests.
#[derive(Debug, Clone)]
pub struct StressConfig {
    /// Number of operations to perform.
    pub operations: usize,
    /// Number of concurrent threads (for concurrent tests).
    pub threads: usize,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            operations: 10_000,
            threads: 4,
        }
    }
}

/// Generates ids from many threads at once.
///
/// An id handed out more than once counts as a failed operation.
pub fn stress_concurrent_id_generation(
    store: Arc<TypedStore>,
    config: &StressConfig,
) -> StressTestResult {
    let ops_per_thread = config.operations / config.threads;
    let start = Instant::now();

    let handles: Vec<_> = (0..config.threads)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                (0..ops_per_thread)
                    .map(|_| store.generate_id::<TrainingType>())
                    .collect::<Vec<EntityId>>()
            })
        })
        .collect();

    let mut seen = HashSet::new();
    let mut failed = 0usize;
    for handle in handles {
        for id in handle.join().expect("Thread panicked") {
            if !seen.insert(id) {
                failed += 1;
            }
        }
    }

    StressTestResult::new(seen.len(), failed, start.elapsed())
}

/// Creates trainees from many threads at once through the facade.
///
/// Each thread uses its own last name so usernames stay unique. A created
/// trainee that cannot be read back counts as a failed operation.
pub fn stress_concurrent_creates(gym: &Gym, config: &StressConfig) -> StressTestResult {
    let successful = Arc::new(AtomicUsize::new(0));
    let failed = Arc::new(AtomicUsize::new(0));
    let ops_per_thread = config.operations / config.threads;

    let start = Instant::now();

    let handles: Vec<_> = (0..config.threads)
        .map(|t| {
            let gym = gym.clone();
            let successful = Arc::clone(&successful);
            let failed = Arc::clone(&failed);

            thread::spawn(move || {
                for _ in 0..ops_per_thread {
                    let created = gym.create_trainee(Trainee::new("Stress", format!("Thread{t}")));
                    let readable = created
                        .id()
                        .is_some_and(|id| gym.select_trainee(id).is_ok());
                    if readable {
                        successful.fetch_add(1, Ordering::Relaxed);
                    } else {
                        failed.fetch_add(1, Ordering::Relaxed);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    StressTestResult::new(
        successful.load(Ordering::Relaxed),
        failed.load(Ordering::Relaxed),
        start.elapsed(),
    )
}

/// Runs a create/select/update/delete cycle sequentially.
///
/// Any unexpected outcome counts as a failed operation.
pub fn stress_mixed_operations(gym: &Gym, config: &StressConfig) -> StressTestResult {
    let start = Instant::now();
    let mut successful = 0usize;
    let mut failed = 0usize;
    let mut last: Option<EntityId> = None;

    for i in 0..config.operations {
        let ok = match (i % 4, last) {
            (0, _) | (_, None) => {
                last = gym.create_trainee(Trainee::new("Mixed", "Ops")).id();
                last.is_some()
            }
            (1, Some(id)) => gym.select_trainee(id).is_ok(),
            (2, Some(id)) => gym
                .update_trainee(id, &Trainee::new("Mixed", "Updated"))
                .is_ok_and(|t| t.profile.last_name == "Updated"),
            (_, Some(id)) => {
                gym.delete_trainee(id);
                last = None;
                gym.select_trainee(id).is_err()
            }
        };

        if ok {
            successful += 1;
        } else {
            failed += 1;
        }
    }

    StressTestResult::new(successful, failed, start.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gymstore_core::Entity;

    #[test]
    fn test_concurrent_id_generation() {
        let store = Arc::new(TypedStore::new());
        let config = StressConfig {
            operations: 4_000,
            threads: 8,
        };

        let result = stress_concurrent_id_generation(Arc::clone(&store), &config);
        assert_eq!(result.failed_ops, 0);
        assert_eq!(result.successful_ops, 4_000);
        assert_eq!(store.current_id(&TrainingType::namespace()), 4_000);
    }

    #[test]
    fn test_concurrent_creates() {
        let gym = Gym::in_memory();
        let config = StressConfig {
            operations: 400,
            threads: 4,
        };

        let result = stress_concurrent_creates(&gym, &config);
        assert_eq!(result.failed_ops, 0);
        assert_eq!(gym.trainees().count(), 400);
    }

    #[test]
    fn test_mixed_operations() {
        let gym = Gym::in_memory();
        let config = StressConfig {
            operations: 1_000,
            ..Default::default()
        };

        let result = stress_mixed_operations(&gym, &config);
        assert_eq!(result.failed_ops, 0);
        assert_eq!(gym.trainees().count(), 0);
    }
}
