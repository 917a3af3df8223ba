//! Shared grove session
//!
//! ## Concurrency
//!
//! The current state is an `Arc<GroveStore>` behind a `Mutex`. Each command
//! runs inside one critical section, so id allocation and edge append are
//! a single linearizable step. Writers mutate through `Arc::make_mut`: while
//! no snapshot is outstanding the store is edited in place, otherwise it is
//! cloned first and outstanding snapshots keep the old version.
//!
//! Readers never hold the lock while rendering. They take a
//! [`GroveSnapshot`] and render that.
//!
//! ## Logging Ownership
//!
//! This module emits `log_op_start!`/`log_op_end!`/`log_op_error!` for
//! `apply` and `render_snapshot`. Core code below it logs only at
//! `debug`/`warn`.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use grove_core::errors::{GroveError, Result};
use grove_core::{
    execute, log_op_end, log_op_error, log_op_start, Command, GroveSnapshot, GroveStore, NodeId,
    NodeType, Receipt, RenderConfig,
};

pub struct SharedGrove {
    current: Mutex<Arc<GroveStore>>,
}

impl Default for SharedGrove {
    fn default() -> Self {
        Self::new(GroveStore::new())
    }
}

impl SharedGrove {
    pub fn new(store: GroveStore) -> Self {
        Self {
            current: Mutex::new(Arc::new(store)),
        }
    }

    /// Run one command atomically against the current state
    ///
    /// # Errors
    ///
    /// * Any error of [`grove_core::execute`]; the state is unchanged
    /// * `LockPoisoned` if a writer panicked while holding the lock
    pub fn apply(&self, cmd: Command) -> Result<Receipt> {
        let op = cmd.op_name();
        log_op_start!(op);
        let start = Instant::now();

        let receipt = self.apply_impl(cmd).map_err(|e| {
            log_op_error!(
                op,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            op,
            duration_ms = start.elapsed().as_millis() as u64,
            edge_id = receipt.edge_id().get()
        );

        Ok(receipt)
    }

    fn apply_impl(&self, cmd: Command) -> Result<Receipt> {
        let mut current = self.lock()?;
        execute(Arc::make_mut(&mut current), cmd)
    }

    /// Freeze the current state
    ///
    /// # Errors
    ///
    /// Returns `LockPoisoned` if a writer panicked while holding the lock.
    pub fn snapshot(&self) -> Result<GroveSnapshot> {
        let current = self.lock()?;
        Ok(GroveSnapshot::new(Arc::clone(&current)))
    }

    /// Declare a new root in the shared state
    ///
    /// # Errors
    ///
    /// Returns `LockPoisoned` if a writer panicked while holding the lock,
    /// or `IdExhausted` when no node id is left.
    pub fn declare_root(&self, node_type: NodeType) -> Result<NodeId> {
        let mut current = self.lock()?;
        Arc::make_mut(&mut current).declare_root(node_type)
    }

    /// Render a frozen snapshot
    ///
    /// # Errors
    ///
    /// Any render error; see [`grove_core::render_with`].
    pub fn render_snapshot(
        &self,
        snapshot: &GroveSnapshot,
        root: NodeId,
        root_type: &NodeType,
        config: &RenderConfig,
    ) -> Result<String> {
        render_logged(snapshot, root, root_type, config)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Arc<GroveStore>>> {
        self.current.lock().map_err(|_| GroveError::LockPoisoned)
    }
}

pub(crate) fn render_logged(
    snapshot: &GroveSnapshot,
    root: NodeId,
    root_type: &NodeType,
    config: &RenderConfig,
) -> Result<String> {
    log_op_start!("render", root_id = root.get());
    let start = Instant::now();

    let html = snapshot.render(root, root_type, config).map_err(|e| {
        log_op_error!(
            "render",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "render",
        duration_ms = start.elapsed().as_millis() as u64,
        output_len = html.len() as u64
    );
    Ok(html)
}
