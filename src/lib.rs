//! # Switchfleet
//!
//! Async batch task orchestration for fleets of network switches.
//!
//! Switchfleet is the device-targeting and task-orchestration engine behind a
//! fleet configuration tool: it resolves an abstract scope selection into a
//! concrete set of target devices, generates the platform-aware command
//! sequence for one operational task (fetch config, trunk/access port
//! configuration, interface shutdown, ...), and drives every selected device
//! through an interactive, fault-isolated session protocol, producing one
//! per-device outcome report.
//!
//! The interactive prompting surface and the concrete SSH transport are
//! injected capabilities ([`Prompter`], [`SessionFactory`]), so the engine
//! runs equally well behind a GUI, a terminal, or a fully scripted
//! non-interactive deployment.
//!
//! ## Features
//!
//! - Scope resolution: all devices, one, an explicit list, or by site/state
//! - Declarative command catalog with an IOS-family/other-family voice branch
//! - Per-device fault isolation: one failure never aborts the batch
//! - Unconditional persist-and-disconnect on every opened session
//! - Bounded worker pool with order-preserving reports and cooperative
//!   cancellation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use switchfleet::{
//!     BatchOrchestrator, CancelToken, Credentials, Inventory, ScopeSelection,
//!     ScriptedPrompter, TaskKind, TaskRequest,
//! };
//! # use switchfleet::{Device, Session, SessionError, SessionFactory};
//! # use async_trait::async_trait;
//! # struct SshSession;
//! # #[async_trait]
//! # impl Session for SshSession {
//! #     async fn send_command(&mut self, _command: &str) -> Result<String, SessionError> {
//! #         Ok(String::new())
//! #     }
//! #     async fn send_config_set(&mut self, _commands: &[String]) -> Result<String, SessionError> {
//! #         Ok(String::new())
//! #     }
//! #     async fn close(&mut self) -> Result<(), SessionError> {
//! #         Ok(())
//! #     }
//! # }
//! # struct SshFactory;
//! # #[async_trait]
//! # impl SessionFactory for SshFactory {
//! #     type Session = SshSession;
//! #     async fn open(
//! #         &self,
//! #         _name: &str,
//! #         _device: &Device,
//! #         _credentials: &Credentials,
//! #     ) -> Result<SshSession, SessionError> {
//! #         Ok(SshSession)
//! #     }
//! # }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), switchfleet::Error> {
//!     let inventory = Inventory::from_json(
//!         r#"{
//!         "sw1": {"device_type": "cisco_ios", "ip": "10.0.0.1", "site": "hq", "state": "TX"}
//!     }"#,
//!     )?;
//!
//!     // Answers the interface prompt and the confirmation without a UI.
//!     let prompter = ScriptedPrompter::new()
//!         .with_text("Gi0/1")
//!         .with_answer(true);
//!
//!     let orchestrator = BatchOrchestrator::new(inventory, SshFactory, prompter).concurrency(4);
//!
//!     let request = TaskRequest::new(
//!         TaskKind::ShutdownInterface,
//!         Credentials::new("admin", "secret"),
//!         ScopeSelection::All,
//!     );
//!     let report = orchestrator.run(request, &CancelToken::new()).await?;
//!     print!("{report}");
//!     Ok(())
//! }
//! ```

pub mod batch;
pub mod catalog;
pub mod error;
pub mod inventory;
pub mod prompter;
pub mod runner;
pub mod scope;
pub mod session;
pub mod task;

// Re-export main types for convenience
pub use batch::{BatchOrchestrator, CancelToken};
pub use error::{BatchError, Error, InventoryError, SessionError};
pub use inventory::{Device, Inventory, PlatformFamily};
pub use prompter::{Prompter, ScriptedPrompter};
pub use runner::SessionRunner;
pub use scope::ScopeSelection;
pub use session::{Session, SessionFactory};
pub use task::{BatchReport, Credentials, TaskKind, TaskOutcome, TaskRequest};
