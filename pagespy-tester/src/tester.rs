use colored::Colorize;
use pagespy_core::PageConfig;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::scenarios::{Scenario, ScenarioCtx};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed: u64,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

pub struct ScenarioRunner<'a> {
    config: &'a PageConfig,
    verbose: bool,
}

impl<'a> ScenarioRunner<'a> {
    pub const fn new(config: &'a PageConfig, verbose: bool) -> Self {
        Self { config, verbose }
    }

    pub fn run_scenario(
        &self,
        scenario: &Scenario,
        seeds: &[u64],
        iterations: usize,
    ) -> Vec<ScenarioResult> {
        seeds
            .iter()
            .map(|&seed| {
                if self.verbose {
                    println!(
                        "🧪 Testing scenario: {} (seed: {seed})",
                        scenario.name.bright_white()
                    );
                }
                self.run_single(scenario, seed, iterations)
            })
            .collect()
    }

    fn run_single(&self, scenario: &Scenario, seed: u64, iterations: usize) -> ScenarioResult {
        let mut failures = Vec::new();
        let mut durations = Vec::with_capacity(iterations);

        for iteration in 0..iterations {
            let ctx = ScenarioCtx {
                config: self.config,
                seed,
                iteration,
            };
            let started = Instant::now();
            let outcome = scenario.run(&ctx);
            durations.push(started.elapsed());
            if let Err(err) = outcome {
                log::debug!("{} seed {seed} iteration {iteration} failed: {err:#}", scenario.name);
                failures.push(format!("iteration {iteration}: {err:#}"));
            }
        }

        let average_duration = if durations.is_empty() {
            Duration::ZERO
        } else {
            durations.iter().sum::<Duration>() / u32::try_from(durations.len()).unwrap_or(u32::MAX)
        };

        ScenarioResult {
            scenario_name: scenario.name.to_string(),
            seed,
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: iterations - failures.len(),
            failures,
            average_duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::get_scenario;

    #[test]
    fn runner_reports_one_result_per_seed() {
        let config = PageConfig::default();
        let runner = ScenarioRunner::new(&config, false);
        let scenario = get_scenario("sweep").expect("sweep registered");
        let results = runner.run_scenario(scenario, &[1, 2, 3], 2);
        assert_eq!(results.len(), 3);
        for result in &results {
            assert!(result.passed, "{:?}", result.failures);
            assert_eq!(result.iterations_run, 2);
            assert_eq!(result.successful_iterations, 2);
        }
        assert_eq!(results[1].seed, 2);
    }

    #[test]
    fn zero_iterations_pass_vacuously() {
        let config = PageConfig::default();
        let runner = ScenarioRunner::new(&config, false);
        let scenario = get_scenario("jitter").expect("jitter registered");
        let results = runner.run_scenario(scenario, &[5], 0);
        assert!(results[0].passed);
        assert_eq!(results[0].average_duration, Duration::ZERO);
    }

    #[test]
    fn result_serializes_duration_as_millis() {
        let result = ScenarioResult {
            scenario_name: "sweep".into(),
            seed: 1,
            passed: true,
            iterations_run: 1,
            successful_iterations: 1,
            failures: Vec::new(),
            average_duration: Duration::from_millis(12),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["average_duration"], 12);
    }
}
