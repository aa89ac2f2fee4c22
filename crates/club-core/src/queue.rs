//! First-come, first-served queue of clients waiting for a table.

use std::collections::VecDeque;

use crate::types::ClientName;

/// Waiting clients in arrival order, bounded by the number of tables.
#[derive(Debug, Clone)]
pub struct WaitingQueue {
    clients: VecDeque<ClientName>,
    capacity: usize,
}

impl WaitingQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            clients: VecDeque::new(),
            capacity,
        }
    }

    pub fn is_full(&self) -> bool {
        self.clients.len() >= self.capacity
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    pub fn contains(&self, client: &ClientName) -> bool {
        self.clients.contains(client)
    }

    /// Appends a client. Returns the client back if the queue is full.
    pub fn push(&mut self, client: ClientName) -> Result<(), ClientName> {
        if self.is_full() {
            return Err(client);
        }
        debug_assert!(!self.contains(&client), "{client} is already queued");
        self.clients.push_back(client);
        Ok(())
    }

    /// Takes the client who has waited longest.
    pub fn pop(&mut self) -> Option<ClientName> {
        self.clients.pop_front()
    }

    /// Removes a client from anywhere in the queue. Returns whether it was queued.
    pub fn remove(&mut self, client: &ClientName) -> bool {
        match self.clients.iter().position(|queued| queued == client) {
            Some(index) => {
                self.clients.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClientName> {
        self.clients.iter()
    }
}
