//! Background search execution.
//!
//! A search runs on its own thread against an owned snapshot of the game, so
//! the caller's `GameState` is never shared. The result comes back once over
//! a channel. Cancelling a handle raises the shared stop flag and any result
//! that arrives afterwards is discarded.

use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    mpsc::{self, Receiver, TryRecvError},
    Arc,
};
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use crate::engines::engine_trait::{Engine, EngineOutput, EngineResult};
use crate::errors::ChessError;
use crate::game_state::game_state::GameState;

/// Shared cancellation + accounting state between a caller and a running search.
#[derive(Debug, Clone, Default)]
pub struct SearchControl {
    stop: Arc<AtomicBool>,
    nodes_visited: Arc<AtomicU64>,
}

impl SearchControl {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn should_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn add_nodes(&self, nodes: u64) {
        self.nodes_visited.fetch_add(nodes, Ordering::Relaxed);
    }

    #[inline]
    pub fn nodes_visited(&self) -> u64 {
        self.nodes_visited.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Finished(EngineOutput),
    Cancelled,
    Failed(ChessError),
}

/// Hands out search requests with increasing ids.
#[derive(Debug, Default)]
pub struct SearchWorker {
    next_id: u64,
}

impl SearchWorker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `engine` on its own thread over `snapshot`.
    pub fn spawn<E>(&mut self, mut engine: E, snapshot: GameState) -> SearchHandle
    where
        E: Engine + 'static,
    {
        self.next_id += 1;
        let id = self.next_id;
        let control = SearchControl::new();
        let (sender, receiver) = mpsc::channel();

        let worker_control = control.clone();
        let join = thread::spawn(move || {
            let result = engine.choose_move(&snapshot, &worker_control);
            debug!(
                id,
                engine = engine.name(),
                nodes = worker_control.nodes_visited(),
                "search finished"
            );
            // The receiver is gone when the handle was dropped; nothing to report.
            let _ = sender.send(result);
        });

        SearchHandle {
            id,
            control,
            receiver,
            join: Some(join),
            outcome: None,
        }
    }
}

/// Caller-side view of one in-flight search.
#[derive(Debug)]
pub struct SearchHandle {
    id: u64,
    control: SearchControl,
    receiver: Receiver<EngineResult<EngineOutput>>,
    join: Option<JoinHandle<()>>,
    outcome: Option<SearchOutcome>,
}

impl SearchHandle {
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn control(&self) -> &SearchControl {
        &self.control
    }

    /// Ask the search to stop. Whatever it produces from now on is dropped.
    pub fn cancel(&mut self) {
        if self.outcome.is_none() {
            debug!(id = self.id, "search cancelled");
            self.control.request_stop();
            self.outcome = Some(SearchOutcome::Cancelled);
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.outcome, Some(SearchOutcome::Cancelled))
    }

    /// Non-blocking poll. `None` while the search is still running.
    pub fn try_result(&mut self) -> Option<SearchOutcome> {
        if self.outcome.is_none() {
            match self.receiver.try_recv() {
                Ok(result) => self.finish(result),
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => self.finish_disconnected(),
            }
        }
        self.outcome.clone()
    }

    /// Block until the search reports, then reap its thread.
    pub fn wait(mut self) -> SearchOutcome {
        if self.outcome.is_none() {
            match self.receiver.recv() {
                Ok(result) => self.finish(result),
                Err(_) => self.finish_disconnected(),
            }
        }
        if let Some(join) = self.join.take() {
            if join.join().is_err() {
                warn!(id = self.id, "search thread panicked");
            }
        }
        self.outcome.take().unwrap_or(SearchOutcome::Cancelled)
    }

    fn finish(&mut self, result: EngineResult<EngineOutput>) {
        self.outcome = Some(match result {
            Ok(output) => SearchOutcome::Finished(output),
            Err(err) => SearchOutcome::Failed(err),
        });
    }

    fn finish_disconnected(&mut self) {
        warn!(id = self.id, "search thread exited without a result");
        self.outcome = Some(SearchOutcome::Failed(ChessError::Engine(
            "search thread exited without a result".to_owned(),
        )));
    }
}

impl Drop for SearchHandle {
    fn drop(&mut self) {
        // Detach: the thread sees the flag and winds down on its own.
        self.control.request_stop();
    }
}
