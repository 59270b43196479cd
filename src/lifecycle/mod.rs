//! # Lifecycle
//!
//! Spawning and tearing down the engine task, plus tracing setup.

pub mod tracing;

use crate::engine::{EngineActor, EngineClient};
use crate::producer::OrderGenerator;
use ::tracing::{error, info};

/// Channel capacity for engine commands.
const COMMAND_BUFFER: usize = 32;

/// Owns the running engine task and hands out its client.
///
/// # Example
///
/// ```ignore
/// let system = DashboardSystem::new();
///
/// system.engine.add_order(order).await?;
/// let summary = system.engine.summary().await?;
///
/// system.shutdown().await?;
/// ```
pub struct DashboardSystem {
    /// Client for the engine actor. Clone it freely for UI consumers.
    pub engine: EngineClient,

    /// Handle to the engine task, joined on shutdown.
    handle: tokio::task::JoinHandle<()>,
}

impl DashboardSystem {
    /// Spawns the engine actor and returns the running system.
    pub fn new() -> Self {
        Self::with_generator(OrderGenerator::new())
    }

    /// Variant with a caller-supplied (e.g. seeded) order generator.
    pub fn with_generator(generator: OrderGenerator) -> Self {
        let (actor, engine) = EngineActor::with_generator(COMMAND_BUFFER, generator);
        let handle = tokio::spawn(actor.run());
        Self { engine, handle }
    }

    /// Gracefully shuts the system down.
    ///
    /// Dropping the client closes the command channel; the actor drains what
    /// is queued and exits its loop. Returns an error if the engine task
    /// panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down dashboard system...");

        drop(self.engine);

        if let Err(e) = self.handle.await {
            error!("Engine task failed: {:?}", e);
            return Err(format!("Engine task failed: {:?}", e));
        }

        info!("Dashboard system shutdown complete.");
        Ok(())
    }
}

impl Default for DashboardSystem {
    fn default() -> Self {
        Self::new()
    }
}
