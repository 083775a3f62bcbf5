//! Task requests, per-device outcomes, and the batch report.

use std::fmt;

use indexmap::IndexMap;
use secrecy::{ExposeSecret, SecretString};

use crate::scope::ScopeSelection;

/// The operational task to run against each targeted device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Fetch the full running configuration for external storage.
    GetRunningConfig,
    /// Fetch the running configuration of one interface.
    InterfaceRunningConfig,
    /// Show the VLAN table.
    ShowVlanInterfaces,
    /// Persist the running configuration, nothing else.
    SaveConfiguration,
    /// Configure an interface as a trunk port.
    ConfigureTrunk,
    /// Configure an interface as an access port (with an optional
    /// voice/data branch).
    ConfigureAccess,
    /// Default, quarantine, and shut down an interface.
    ShutdownInterface,
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::GetRunningConfig => "Get Running Config",
            Self::InterfaceRunningConfig => "Interface Running Config",
            Self::ShowVlanInterfaces => "Show VLAN Interfaces",
            Self::SaveConfiguration => "Save Configuration",
            Self::ConfigureTrunk => "Configure Trunk Port",
            Self::ConfigureAccess => "Configure Access Port",
            Self::ShutdownInterface => "Shutdown Interface",
        };
        f.write_str(name)
    }
}

/// Login credentials supplied per run, never stored in the inventory.
///
/// The password is held as a [`SecretString`] and only exposed at the
/// session-factory boundary.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Login username.
    pub username: String,

    /// Login password.
    pub password: SecretString,
}

impl Credentials {
    /// Create credentials from plain strings.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Expose the password for the session-factory boundary.
    pub fn expose_password(&self) -> &str {
        self.password.expose_secret()
    }
}

/// One run invocation: a task kind, credentials, and the scope to target.
///
/// Created per run, consumed by [`BatchOrchestrator::run`], and discarded
/// once the report is produced.
///
/// [`BatchOrchestrator::run`]: crate::batch::BatchOrchestrator::run
#[derive(Debug, Clone)]
pub struct TaskRequest {
    /// Which task to run.
    pub kind: TaskKind,

    /// Credentials for every device session in the run.
    pub credentials: Credentials,

    /// Which devices to target.
    pub scope: ScopeSelection,
}

impl TaskRequest {
    /// Create a new task request.
    pub fn new(kind: TaskKind, credentials: Credentials, scope: ScopeSelection) -> Self {
        Self {
            kind,
            credentials,
            scope,
        }
    }
}

/// Disposition of one device after its task protocol finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    /// The task completed; detail carries the human-facing output,
    /// including the verification read-back where applicable.
    Succeeded { detail: String },

    /// The task was not attempted on this device (missing input,
    /// declined confirmation, or batch cancellation).
    Skipped { reason: String },

    /// The task failed; error carries the last known detail.
    Failed { error: String },
}

impl TaskOutcome {
    /// Check whether this outcome is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }
}

impl fmt::Display for TaskOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded { detail } => write!(f, "succeeded: {detail}"),
            Self::Skipped { reason } => write!(f, "skipped: {reason}"),
            Self::Failed { error } => write!(f, "failed: {error}"),
        }
    }
}

/// Aggregated per-device outcomes of one run, in scope-resolution order.
///
/// This is the sole externally visible output of a run; rendering it
/// (dialog, log, file) belongs to the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    outcomes: IndexMap<String, TaskOutcome>,
}

impl BatchReport {
    /// Build a report from (device name, outcome) pairs in resolution order.
    pub fn new(outcomes: impl IntoIterator<Item = (String, TaskOutcome)>) -> Self {
        Self {
            outcomes: outcomes.into_iter().collect(),
        }
    }

    /// Look up one device's outcome.
    pub fn get(&self, name: &str) -> Option<&TaskOutcome> {
        self.outcomes.get(name)
    }

    /// Iterate outcomes in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TaskOutcome)> {
        self.outcomes.iter().map(|(n, o)| (n.as_str(), o))
    }

    /// Number of targeted devices.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Check if the report is empty.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Count of succeeded devices.
    pub fn succeeded(&self) -> usize {
        self.count(|o| matches!(o, TaskOutcome::Succeeded { .. }))
    }

    /// Count of skipped devices.
    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, TaskOutcome::Skipped { .. }))
    }

    /// Count of failed devices.
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, TaskOutcome::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&TaskOutcome) -> bool) -> usize {
        self.outcomes.values().filter(|o| pred(o)).count()
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, outcome) in &self.outcomes {
            writeln!(f, "{name}: {outcome}")?;
        }
        Ok(())
    }
}
