use std::fmt;

use yewdux::prelude::*;

/// Connection status of the ERP integration as last observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Unknown,
    Connected,
    Disconnected,
}

impl ConnectionState {
    /// Map a status-check outcome onto a state.
    ///
    /// Fails closed: a check that errors reads as disconnected rather than
    /// leaving a stale connected flag in place.
    pub fn from_status_check<E>(result: &Result<bool, E>) -> Self {
        match result {
            Ok(true) => Self::Connected,
            Ok(false) | Err(_) => Self::Disconnected,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    // === ERP connection (managed by use_connection) ===
    pub connection: ConnectionState,
    pub connection_error: Option<String>,
}

impl State {
    /// Fold the result of a status check into the store.
    pub fn apply_status_check<E: fmt::Display>(
        &mut self,
        result: &Result<bool, E>,
    ) {
        self.connection = ConnectionState::from_status_check(result);
        self.connection_error = match result {
            Ok(_) => None,
            Err(e) => Some(e.to_string()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_check_failure_reads_as_disconnected() {
        let result: Result<bool, String> = Err("tempo esgotado".to_string());
        assert_eq!(
            ConnectionState::from_status_check(&result),
            ConnectionState::Disconnected
        );

        let mut state = State {
            connection: ConnectionState::Connected,
            connection_error: None,
        };
        state.apply_status_check(&result);
        assert_eq!(state.connection, ConnectionState::Disconnected);
        assert_eq!(state.connection_error.as_deref(), Some("tempo esgotado"));
    }

    #[test]
    fn status_check_success_updates_connection() {
        let mut state = State::default();
        state.apply_status_check::<String>(&Ok(true));
        assert!(state.connection.is_connected());
        assert_eq!(state.connection_error, None);

        state.apply_status_check::<String>(&Ok(false));
        assert_eq!(state.connection, ConnectionState::Disconnected);
    }
}
