//! Per-device task protocol.
//!
//! A [`SessionRunner`] drives exactly one device through one task:
//! connect, gather parameters, optionally confirm, execute, persist,
//! disconnect. Every failure is converted to a [`TaskOutcome`] here; nothing
//! escapes past the device boundary, which is what lets the batch layer
//! treat partial failure as an ordinary result shape.
//!
//! Two steps are unconditional for every session that was opened, success or
//! failure: the persist step (`copy run start`) and the disconnect. Persist
//! uses a plain command round-trip, never a configuration push, so a task
//! aborted before execution still sends zero configuration lines.

use std::future::Future;
use std::time::Duration;

use log::{debug, info, warn};

use crate::catalog;
use crate::error::SessionError;
use crate::inventory::Device;
use crate::prompter::Prompter;
use crate::session::{Session, SessionFactory};
use crate::task::{Credentials, TaskKind, TaskOutcome};

/// Why the protocol stopped before producing a success detail.
enum Abort {
    /// Required input missing or confirmation declined.
    Skipped(String),
    /// A session operation failed.
    Failed(String),
}

impl From<SessionError> for Abort {
    fn from(err: SessionError) -> Self {
        Abort::Failed(err.to_string())
    }
}

type StepResult<T> = Result<T, Abort>;

/// Drives one device through one task's protocol.
pub struct SessionRunner<'a, P: Prompter> {
    name: &'a str,
    device: &'a Device,
    kind: TaskKind,
    prompter: &'a P,
    step_timeout: Option<Duration>,
}

impl<'a, P: Prompter> SessionRunner<'a, P> {
    /// Create a runner for one device and task.
    pub fn new(name: &'a str, device: &'a Device, kind: TaskKind, prompter: &'a P) -> Self {
        Self {
            name,
            device,
            kind,
            prompter,
            step_timeout: None,
        }
    }

    /// Bound every session round-trip (open included) by a timeout.
    pub fn step_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.step_timeout = timeout;
        self
    }

    /// Run the full protocol against this device. Never returns an error;
    /// every disposition is a [`TaskOutcome`].
    pub async fn run<F: SessionFactory>(
        &self,
        factory: &F,
        credentials: &Credentials,
    ) -> TaskOutcome {
        info!(
            "{}: connecting to {} ({})",
            self.name, self.device.address, self.device.platform
        );

        let mut session = match self
            .step(factory.open(self.name, self.device, credentials))
            .await
        {
            Ok(session) => session,
            Err(err) => {
                warn!("{}: connection failed: {err}", self.name);
                self.prompter
                    .show_error("Connection Error", &format!("{}: {err}", self.name))
                    .await;
                return TaskOutcome::Failed {
                    error: err.to_string(),
                };
            }
        };

        let outcome = match self.drive(&mut session).await {
            Ok(detail) => TaskOutcome::Succeeded { detail },
            Err(Abort::Skipped(reason)) => {
                info!("{}: skipped: {reason}", self.name);
                TaskOutcome::Skipped { reason }
            }
            Err(Abort::Failed(error)) => {
                warn!("{}: failed: {error}", self.name);
                TaskOutcome::Failed { error }
            }
        };

        // Persisting and Disconnecting run for every opened session.
        let outcome = self.persist(&mut session, outcome).await;
        if let Err(err) = session.close().await {
            warn!("{}: close failed: {err}", self.name);
        }
        debug!("{}: session released", self.name);
        outcome
    }

    /// GatheringParameters through Executing, per task kind.
    async fn drive<S: Session>(&self, session: &mut S) -> StepResult<String> {
        match self.kind {
            TaskKind::GetRunningConfig => {
                let destination = self
                    .required_text(&format!(
                        "Enter destination for {}'s running config:",
                        self.name
                    ))
                    .await?;
                let output = self.step(session.send_command(catalog::SHOW_RUNNING_CONFIG)).await?;
                Ok(format!(
                    "retrieved running config for {destination}\n{output}"
                ))
            }

            TaskKind::InterfaceRunningConfig => {
                let interface = self.ask_interface(session).await?;
                let output = self
                    .step(session.send_command(&catalog::show_interface_running_config(&interface)))
                    .await?;
                Ok(output)
            }

            TaskKind::ShowVlanInterfaces => {
                let output = self.step(session.send_command(catalog::SHOW_VLAN)).await?;
                Ok(output)
            }

            // The unconditional Persisting step is the save; nothing to
            // gather or push here.
            TaskKind::SaveConfiguration => Ok("configuration saved".to_string()),

            TaskKind::ConfigureTrunk => {
                let interface = self.ask_interface(session).await?;
                let description = self
                    .required_text(&format!(
                        "Enter Description for {} interface {interface}:",
                        self.name
                    ))
                    .await?;
                self.confirm(session, &interface, "trunk configuration").await?;
                self.execute(session, &catalog::trunk_commands(&interface, &description))
                    .await?;
                let readback = self.verify(session, &interface).await?;
                Ok(format!("configured {interface} as trunk\n{readback}"))
            }

            TaskKind::ConfigureAccess => self.configure_access(session).await,

            TaskKind::ShutdownInterface => {
                let interface = self.ask_interface(session).await?;
                self.confirm(
                    session,
                    &interface,
                    "default and shutdown interface configuration",
                )
                .await?;
                self.execute(session, &catalog::shutdown_commands(&interface))
                    .await?;
                let readback = self.verify(session, &interface).await?;
                Ok(format!("defaulted and shut down {interface}\n{readback}"))
            }
        }
    }

    /// Access-port workflow, including the voice/data branch. The voice
    /// branch takes no preflight and no confirmation; the platform family
    /// decides the command dialect.
    async fn configure_access<S: Session>(&self, session: &mut S) -> StepResult<String> {
        let interface = self.ask_interface(session).await?;

        let voice = self
            .prompter
            .ask_yes_no(
                "Phone Included?",
                &format!("Does interface {interface} include data and voice?"),
            )
            .await;

        if voice {
            self.execute(
                session,
                &catalog::voice_commands(self.device.family(), &interface),
            )
            .await?;
            let readback = self.verify(session, &interface).await?;
            return Ok(format!(
                "configured {interface} for voice and data\n{readback}"
            ));
        }

        self.confirm(session, &interface, "access port configuration").await?;
        let vlan = self
            .required_text(&format!(
                "Enter VLAN for {} interface {interface}:",
                self.name
            ))
            .await?;
        let description = self
            .required_text(&format!(
                "Enter Description for {} interface {interface}:",
                self.name
            ))
            .await?;
        self.execute(
            session,
            &catalog::access_commands(&interface, &vlan, &description),
        )
        .await?;
        let readback = self.verify(session, &interface).await?;
        Ok(format!("configured {interface} for VLAN {vlan}\n{readback}"))
    }

    /// Ask for an interface identifier, embedding a live status listing as
    /// an aid. Empty input aborts with `Skipped`.
    async fn ask_interface<S: Session>(&self, session: &mut S) -> StepResult<String> {
        let listing = self
            .step(session.send_command(catalog::SHOW_INTERFACE_STATUS))
            .await?;
        self.required_text(&format!(
            "Interface status list:\n{listing}\n\nEnter interface for {}:",
            self.name
        ))
        .await
    }

    /// Ask for a required text parameter under the task's title. `None` or
    /// blank input aborts with `Skipped`.
    async fn required_text(&self, message: &str) -> StepResult<String> {
        let title = self.kind.to_string();
        match self.prompter.ask_text(&title, message).await {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(Abort::Skipped("no input provided".to_string())),
        }
    }

    /// Show the preflight inspection (interface status + running config)
    /// and ask for go-ahead. Declining aborts with `Skipped`.
    async fn confirm<S: Session>(
        &self,
        session: &mut S,
        interface: &str,
        what: &str,
    ) -> StepResult<()> {
        let status = self
            .step(session.send_command(&catalog::show_interface_status(interface)))
            .await?;
        let running = self
            .step(session.send_command(&catalog::show_interface_running_config(interface)))
            .await?;
        let info = format!("Interface Status:\n{status}\n\nRunning Config:\n{running}");

        let proceed = self
            .prompter
            .ask_yes_no(
                &format!("{interface} Info"),
                &format!("{info}\n\nProceed with {what}?"),
            )
            .await;
        if proceed {
            Ok(())
        } else {
            Err(Abort::Skipped("user declined".to_string()))
        }
    }

    /// Push a configuration sequence.
    async fn execute<S: Session>(&self, session: &mut S, commands: &[String]) -> StepResult<String> {
        debug!("{}: pushing {} configuration lines", self.name, commands.len());
        Ok(self.step(session.send_config_set(commands)).await?)
    }

    /// Verification read-back included in the success detail so the
    /// operator can audit the change.
    async fn verify<S: Session>(&self, session: &mut S, interface: &str) -> StepResult<String> {
        Ok(self
            .step(session.send_command(&catalog::show_interface_running_config(interface)))
            .await?)
    }

    /// Issue the save command. Its own failure never overrides an existing
    /// `Failed` outcome and never demotes a success; it only annotates the
    /// detail text.
    async fn persist<S: Session>(&self, session: &mut S, outcome: TaskOutcome) -> TaskOutcome {
        debug!("{}: persisting configuration", self.name);
        match self.step(session.send_command(catalog::PERSIST_COMMAND)).await {
            Ok(_) => outcome,
            Err(err) => {
                warn!("{}: persist failed: {err}", self.name);
                match outcome {
                    TaskOutcome::Succeeded { detail } => TaskOutcome::Succeeded {
                        detail: format!("{detail}\nwarning: persist failed: {err}"),
                    },
                    other => other,
                }
            }
        }
    }

    /// Apply the per-step timeout, when configured, to one session
    /// round-trip.
    async fn step<T>(
        &self,
        fut: impl Future<Output = Result<T, SessionError>>,
    ) -> Result<T, SessionError> {
        match self.step_timeout {
            Some(limit) => tokio::time::timeout(limit, fut)
                .await
                .map_err(|_| SessionError::Timeout(limit))?,
            None => fut.await,
        }
    }
}
