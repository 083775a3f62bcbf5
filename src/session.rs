//! Session capability: the abstract command channel to one device.
//!
//! The concrete transport (SSH, telnet, a lab simulator) lives outside this
//! crate. The core only needs to open a session, exchange opaque text, and
//! release it; every operation is fallible and recovered at the per-device
//! boundary by the [`SessionRunner`](crate::runner::SessionRunner).

use async_trait::async_trait;

use crate::error::SessionError;
use crate::inventory::Device;
use crate::task::Credentials;

/// An open command session to one device.
#[async_trait]
pub trait Session: Send {
    /// Send a single operational command and return its output text.
    async fn send_command(&mut self, command: &str) -> Result<String, SessionError>;

    /// Push an ordered set of configuration lines and return the combined
    /// output text.
    async fn send_config_set(&mut self, commands: &[String]) -> Result<String, SessionError>;

    /// Release the session. Best-effort; callers treat failure as advisory.
    async fn close(&mut self) -> Result<(), SessionError>;
}

/// Opens sessions to devices. Implemented by the external transport layer.
#[async_trait]
pub trait SessionFactory: Send + Sync {
    /// The session type this factory produces.
    type Session: Session;

    /// Open a session to `device` using the supplied credentials.
    /// `name` is the inventory key, provided for logging and error context.
    async fn open(
        &self,
        name: &str,
        device: &Device,
        credentials: &Credentials,
    ) -> Result<Self::Session, SessionError>;
}
