//! Background query loader for the catalog.
//!
//! A worker thread owns the catalog query. It runs once on start and again
//! whenever the provider reports a change, then hands the rows back to the
//! interaction thread over a channel. The interaction thread never blocks on
//! the database for list refreshes.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::contract::PetUri;
use crate::models::PetSummary;
use crate::provider::{ContentObserver, PetProvider};

/// Results delivered to the screen that owns the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderEvent {
    /// A query completed; these rows replace whatever is displayed.
    Finished(Vec<PetSummary>),
    /// The previous rows are no longer valid and must not be displayed.
    Reset,
}

enum LoaderCommand {
    Reload,
    Stop,
}

/// Forwards provider changes to the worker. Once the worker has gone away the
/// send fails and the provider drops this observer.
struct ReloadOnChange {
    commands: Sender<LoaderCommand>,
}

impl ContentObserver for ReloadOnChange {
    fn on_change(&self, uri: PetUri) -> bool {
        log::debug!("content changed at {uri}, scheduling reload");
        self.commands.send(LoaderCommand::Reload).is_ok()
    }
}

/// Handle on a running catalog query. Dropping it stops the worker.
pub struct QueryLoader {
    commands: Sender<LoaderCommand>,
    events: Receiver<LoaderEvent>,
    worker: Option<JoinHandle<()>>,
}

impl QueryLoader {
    /// Register for change notifications and start the worker, which
    /// immediately performs the first query.
    pub fn start(provider: Arc<dyn PetProvider>) -> Result<Self> {
        let (command_tx, command_rx) = channel();
        let (event_tx, event_rx) = channel();

        provider.register_observer(Box::new(ReloadOnChange {
            commands: command_tx.clone(),
        }));

        let worker = thread::Builder::new()
            .name("catalog-loader".into())
            .spawn(move || run_worker(provider, command_rx, event_tx))
            .context("failed to spawn catalog loader thread")?;

        Ok(Self {
            commands: command_tx,
            events: event_rx,
            worker: Some(worker),
        })
    }

    /// Ask for a fresh query even though nothing changed.
    pub fn force_load(&self) {
        if self.commands.send(LoaderCommand::Reload).is_err() {
            log::warn!("catalog loader is not running, reload ignored");
        }
    }

    /// Next pending event, if any, without blocking.
    pub fn try_next(&self) -> Option<LoaderEvent> {
        self.events.try_recv().ok()
    }

    /// Wait up to `timeout` for the next event.
    pub fn next_timeout(&self, timeout: Duration) -> Option<LoaderEvent> {
        self.events.recv_timeout(timeout).ok()
    }
}

impl Drop for QueryLoader {
    fn drop(&mut self) {
        let _ = self.commands.send(LoaderCommand::Stop);
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("catalog loader thread panicked");
            }
        }
    }
}

fn run_worker(
    provider: Arc<dyn PetProvider>,
    commands: Receiver<LoaderCommand>,
    events: Sender<LoaderEvent>,
) {
    log::debug!("catalog loader started");
    if !load(provider.as_ref(), &events) {
        return;
    }

    while let Ok(command) = commands.recv() {
        if matches!(command, LoaderCommand::Stop) {
            break;
        }

        // Collapse a burst of change notifications into one query.
        let mut stop = false;
        while let Ok(pending) = commands.try_recv() {
            if matches!(pending, LoaderCommand::Stop) {
                stop = true;
                break;
            }
        }
        if stop || !load(provider.as_ref(), &events) {
            break;
        }
    }
    log::debug!("catalog loader stopped");
}

/// Run the query and publish the outcome. Returns `false` when nobody is
/// listening any more.
fn load(provider: &dyn PetProvider, events: &Sender<LoaderEvent>) -> bool {
    let event = match provider.query_catalog() {
        Ok(rows) => {
            log::debug!("catalog query returned {} row(s)", rows.len());
            LoaderEvent::Finished(rows)
        }
        Err(err) => {
            log::error!("catalog query failed: {err:#}");
            LoaderEvent::Reset
        }
    };
    events.send(event).is_ok()
}
