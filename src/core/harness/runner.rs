use std::path::Path;

use log::{info, warn};

use super::cases::{default_cases, CaseError, ComponentCase};
use super::config::{HarnessConfig, ImplementationSelection};
use super::fixture::Fixture;
use crate::core::descriptor::ComponentPackage;
use crate::core::errors::HarnessError;
use crate::core::ports::CheckFailure;
use crate::core::sandbox::{LaunchRequest, Sandbox};

/// Result of one case against one implementation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    Passed,
    /// An assertion did not hold
    Failed(CheckFailure),
    /// setUp, the case body or tearDown raised
    Errored(String),
}

#[derive(Debug, Clone)]
pub struct CaseResult {
    pub implementation: String,
    pub case: String,
    pub outcome: CaseOutcome,
}

/// Outcomes of a harness run, in execution order
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    results: Vec<CaseResult>,
}

impl RunReport {
    pub fn results(&self) -> &[CaseResult] {
        &self.results
    }

    pub fn passed(&self) -> usize {
        self.count(|outcome| matches!(outcome, CaseOutcome::Passed))
    }

    pub fn failed(&self) -> usize {
        self.count(|outcome| matches!(outcome, CaseOutcome::Failed(_)))
    }

    pub fn errored(&self) -> usize {
        self.count(|outcome| matches!(outcome, CaseOutcome::Errored(_)))
    }

    /// True when nothing failed or errored
    pub fn is_success(&self) -> bool {
        self.failed() == 0 && self.errored() == 0
    }

    /// Process exit status for the run
    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    fn count(&self, predicate: impl Fn(&CaseOutcome) -> bool) -> usize {
        self.results.iter().filter(|r| predicate(&r.outcome)).count()
    }
}

impl std::fmt::Display for RunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for result in &self.results {
            let status = match &result.outcome {
                CaseOutcome::Passed => "ok".to_string(),
                CaseOutcome::Failed(failure) => format!("FAIL: {}", failure),
                CaseOutcome::Errored(reason) => format!("ERROR: {}", reason),
            };
            writeln!(f, "{} [{}] ... {}", result.case, result.implementation, status)?;
        }
        write!(
            f,
            "Ran {} tests: {} passed, {} failed, {} errors",
            self.results.len(),
            self.passed(),
            self.failed(),
            self.errored()
        )
    }
}

/// Runs test cases against every selected implementation of a component
pub struct HarnessRunner<S: Sandbox> {
    sandbox: S,
    config: HarnessConfig,
    cases: Vec<Box<dyn ComponentCase>>,
}

impl<S: Sandbox> HarnessRunner<S> {
    /// Create a runner with the default test cases
    pub fn new(sandbox: S, config: HarnessConfig) -> Self {
        Self {
            sandbox,
            config,
            cases: default_cases(),
        }
    }

    /// Add a test case after the existing ones
    pub fn add_case(&mut self, case: Box<dyn ComponentCase>) {
        self.cases.push(case);
    }

    pub fn sandbox(&self) -> &S {
        &self.sandbox
    }

    /// Run every selected case against every selected implementation.
    ///
    /// Configuration problems are returned as errors before anything is
    /// launched; problems inside a test are recorded in the report.
    pub fn run(&mut self) -> Result<RunReport, HarnessError> {
        let spd_path = self.config.resolved_spd_path();
        let package = ComponentPackage::load(&spd_path)?;
        let implementations = select_implementations(&package, &self.config.implementations)?;
        let cases = self.selected_cases()?;

        info!(
            "Testing {} ({} implementation(s), {} case(s))",
            package.name(),
            implementations.len(),
            cases.len()
        );

        let mut report = RunReport::default();
        for implementation in &implementations {
            for &index in &cases {
                let case = self.cases[index].as_ref();
                let outcome = run_case(&mut self.sandbox, &spd_path, implementation, case);
                match &outcome {
                    CaseOutcome::Passed => info!("{} [{}] ... ok", case.name(), implementation),
                    CaseOutcome::Failed(failure) => {
                        warn!("{} [{}] ... FAIL: {}", case.name(), implementation, failure)
                    }
                    CaseOutcome::Errored(reason) => {
                        warn!("{} [{}] ... ERROR: {}", case.name(), implementation, reason)
                    }
                }
                report.results.push(CaseResult {
                    implementation: implementation.clone(),
                    case: case.name().to_string(),
                    outcome,
                });
            }
        }

        Ok(report)
    }

    /// Indices of the cases to run, in registration order
    fn selected_cases(&self) -> Result<Vec<usize>, HarnessError> {
        let Some(names) = &self.config.cases else {
            return Ok((0..self.cases.len()).collect());
        };

        for name in names {
            if !self.cases.iter().any(|case| case.name() == name) {
                return Err(HarnessError::UnknownCase(name.clone()));
            }
        }
        Ok(self
            .cases
            .iter()
            .enumerate()
            .filter(|(_, case)| names.iter().any(|name| name == case.name()))
            .map(|(index, _)| index)
            .collect())
    }
}

fn select_implementations(
    package: &ComponentPackage,
    selection: &ImplementationSelection,
) -> Result<Vec<String>, HarnessError> {
    let available: Vec<String> = package
        .implementation_ids()
        .into_iter()
        .map(str::to_string)
        .collect();

    match selection {
        ImplementationSelection::All => Ok(available),
        ImplementationSelection::Only(ids) => {
            for id in ids {
                if !available.contains(id) {
                    return Err(HarnessError::UnknownImplementation {
                        package: package.name().to_string(),
                        id: id.clone(),
                        available,
                    });
                }
            }
            Ok(ids.clone())
        }
    }
}

/// setUp, run and tearDown for one case
fn run_case<S: Sandbox>(
    sandbox: &mut S,
    spd_path: &Path,
    implementation: &str,
    case: &dyn ComponentCase,
) -> CaseOutcome {
    let request = LaunchRequest::new(spd_path).with_implementation(implementation);
    let mut fixture = match Fixture::set_up(sandbox, &request) {
        Ok(fixture) => fixture,
        Err(err) => return CaseOutcome::Errored(format!("setUp failed: {}", err)),
    };

    let result = case.run(fixture.component_mut());
    let teardown = fixture.tear_down();

    match (result, teardown) {
        (Ok(()), Ok(())) => CaseOutcome::Passed,
        (Ok(()), Err(err)) => CaseOutcome::Errored(format!("tearDown failed: {}", err)),
        (Err(CaseError::Failure(failure)), _) => CaseOutcome::Failed(failure),
        (Err(CaseError::Sandbox(err)), _) => CaseOutcome::Errored(err.to_string()),
    }
}
