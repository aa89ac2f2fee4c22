//! Who is inside the club and what they are doing.

use std::collections::HashMap;

use crate::types::{ClientName, TableNumber};

/// Status of a client who is inside the club.
///
/// A client who is not inside has no entry in the [`ClientRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientState {
    /// Arrived, neither seated nor waiting.
    Present,
    /// Occupying a table.
    Seated(TableNumber),
    /// In the waiting queue.
    Waiting,
}

/// Mapping from client name to current status.
#[derive(Debug, Clone, Default)]
pub struct ClientRegistry {
    clients: HashMap<ClientName, ClientState>,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, client: &ClientName) -> Option<ClientState> {
        self.clients.get(client).copied()
    }

    pub fn contains(&self, client: &ClientName) -> bool {
        self.clients.contains_key(client)
    }

    /// Sets a client's status, returning the previous one.
    pub fn set(&mut self, client: ClientName, state: ClientState) -> Option<ClientState> {
        self.clients.insert(client, state)
    }

    /// Drops all tracking for a client, returning its last status.
    pub fn remove(&mut self, client: &ClientName) -> Option<ClientState> {
        self.clients.remove(client)
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Removes every client, returned in ascending name order.
    pub fn drain_sorted(&mut self) -> Vec<(ClientName, ClientState)> {
        let mut clients: Vec<_> = self.clients.drain().collect();
        clients.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        clients
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ClientName, ClientState)> {
        self.clients.iter().map(|(name, state)| (name, *state))
    }
}
