#![cfg(feature = "std")]

use std::collections::HashMap;

use crate::session::PlayerId;

/// Resolves players to display names for session summaries. Optional: the
/// engine plays the same without it.
#[async_trait::async_trait]
pub trait PlayerDirectory: Send + Sync {
    async fn display_name(&self, player: PlayerId) -> anyhow::Result<Option<String>>;
}

/// Fixed name table.
#[derive(Debug, Default, Clone)]
pub struct StaticDirectory {
    names: HashMap<PlayerId, String>,
}

impl StaticDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, player: PlayerId, name: impl Into<String>) -> Self {
        self.names.insert(player, name.into());
        self
    }
}

#[async_trait::async_trait]
impl PlayerDirectory for StaticDirectory {
    async fn display_name(&self, player: PlayerId) -> anyhow::Result<Option<String>> {
        Ok(self.names.get(&player).cloned())
    }
}
