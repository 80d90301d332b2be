use std::sync::Mutex;

use futures::future::BoxFuture;

use crate::error::LedgerError;

/// External wallet capability. Key custody and user approval live outside
/// this process; `request_address` resolves once the user approves (or
/// rejects) the connection in their wallet, so callers must be prepared to
/// suspend on it.
pub trait WalletCapability: Send + Sync {
    fn request_address(&self) -> BoxFuture<'_, Result<String, String>>;
}

#[derive(Debug, Clone, PartialEq)]
enum SessionState {
    Disconnected,
    Connected { address: String },
}

/// Read-only view of the session handed to the pipeline. A refresh pass
/// never mutates session state through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub address: String,
    pub connected: bool,
}

/// In-memory wallet connection state. Two states, no persistence, no
/// automatic reconnection; everything resets with the process.
pub struct WalletSession {
    state: Mutex<SessionState>,
}

impl WalletSession {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SessionState::Disconnected),
        }
    }

    /// Waits on the external capability. On success the session moves to
    /// `Connected` and the granted address is returned; on rejection,
    /// unavailability, or a malformed address the session stays
    /// `Disconnected`.
    pub async fn connect(
        &self,
        capability: &dyn WalletCapability,
    ) -> Result<String, LedgerError> {
        let address = match capability.request_address().await {
            Ok(address) => address,
            Err(reason) => {
                log::warn!("Wallet connection failed: {}", reason);
                return Err(LedgerError::Connection(reason));
            }
        };

        // Connected implies a well-formed address.
        if !is_valid_address(&address) {
            log::warn!("Wallet returned malformed address: {}", address);
            return Err(LedgerError::Connection(format!(
                "malformed wallet address: {}",
                address
            )));
        }

        let mut state = self.state.lock().expect("session lock poisoned");
        *state = SessionState::Connected {
            address: address.clone(),
        };
        log::info!("Wallet connected: {}", address);

        Ok(address)
    }

    /// Always succeeds; no network round trip.
    pub fn disconnect(&self) {
        let mut state = self.state.lock().expect("session lock poisoned");
        if let SessionState::Connected { address } = &*state {
            log::info!("Wallet disconnected: {}", address);
        }
        *state = SessionState::Disconnected;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        match &*self.state.lock().expect("session lock poisoned") {
            SessionState::Disconnected => SessionSnapshot {
                address: String::new(),
                connected: false,
            },
            SessionState::Connected { address } => SessionSnapshot {
                address: address.clone(),
                connected: true,
            },
        }
    }
}

impl Default for WalletSession {
    fn default() -> Self {
        Self::new()
    }
}

/// `0x`-prefixed hex with at most 32 bytes of payload.
pub fn is_valid_address(address: &str) -> bool {
    match address.strip_prefix("0x") {
        Some(hex) => {
            !hex.is_empty() && hex.len() <= 64 && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}
