//! Native bridge: named actions invoked from hosted script content.
//!
//! Script calls arrive on whatever thread the browser host uses for its
//! script interface; registered actions always run on the host main thread,
//! posted through a `MainThread` capability.

use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use thiserror::Error;

/// Action that opens the platform's "open supported links" settings for this app.
pub const ACTION_OPEN_LINK_SETTINGS: &str = "openLinkSettings";

pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Host capability to run a task on its main (UI) thread.
pub trait MainThread {
    fn post(&self, task: Task);
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    #[error("unknown bridge action: {0}")]
    UnknownAction(String),
}

/// Main-thread task queue for hosts that own their event loop.
///
/// Hand out `handle()`s to other threads; the owning thread drains with
/// `run_pending()`.
pub struct MainThreadQueue {
    tx: Sender<Task>,
    rx: Receiver<Task>,
}

impl MainThreadQueue {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    pub fn handle(&self) -> MainThreadHandle {
        MainThreadHandle {
            tx: self.tx.clone(),
        }
    }

    /// Runs every queued task on the calling thread; returns how many ran.
    pub fn run_pending(&self) -> usize {
        let mut ran = 0;
        while let Ok(task) = self.rx.try_recv() {
            task();
            ran += 1;
        }
        ran
    }
}

impl Default for MainThreadQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub struct MainThreadHandle {
    tx: Sender<Task>,
}

impl MainThread for MainThreadHandle {
    fn post(&self, task: Task) {
        if self.tx.send(task).is_err() {
            tracing::warn!("main thread queue closed; task dropped");
        }
    }
}

type Action = Arc<dyn Fn() + Send + Sync + 'static>;

pub struct NativeBridge<M> {
    main: M,
    actions: HashMap<String, Action>,
}

impl<M: MainThread> NativeBridge<M> {
    pub fn new(main: M) -> Self {
        Self {
            main,
            actions: HashMap::new(),
        }
    }

    /// Registers (or replaces) the action called `name`.
    pub fn register<F>(&mut self, name: &str, action: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.actions.insert(name.to_string(), Arc::new(action));
    }

    pub fn has_action(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    pub fn action_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.actions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Posts the named action to the main thread. Returns once queued.
    pub fn invoke(&self, name: &str) -> Result<(), BridgeError> {
        let action = self.actions.get(name).cloned().ok_or_else(|| {
            tracing::warn!(action = name, "script invoked unknown bridge action");
            BridgeError::UnknownAction(name.to_string())
        })?;
        tracing::debug!(action = name, "bridge action queued");
        self.main.post(Box::new(move || action()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    #[test]
    fn invoke_runs_on_main_thread_only_when_drained() {
        let queue = MainThreadQueue::new();
        let mut bridge = NativeBridge::new(queue.handle());
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        bridge.register(ACTION_OPEN_LINK_SETTINGS, move || {
            c.fetch_add(1, Ordering::SeqCst);
        });

        bridge.invoke(ACTION_OPEN_LINK_SETTINGS).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(queue.run_pending(), 1);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(queue.run_pending(), 0);
    }

    #[test]
    fn invoke_from_script_thread() {
        let queue = MainThreadQueue::new();
        let mut bridge = NativeBridge::new(queue.handle());
        let main_id = thread::current().id();
        let ran_on = Arc::new(std::sync::Mutex::new(None));
        let r = Arc::clone(&ran_on);
        bridge.register("ping", move || {
            *r.lock().unwrap() = Some(thread::current().id());
        });
        let bridge = Arc::new(bridge);

        let b = Arc::clone(&bridge);
        thread::spawn(move || b.invoke("ping").unwrap())
            .join()
            .unwrap();

        assert_eq!(queue.run_pending(), 1);
        assert_eq!(*ran_on.lock().unwrap(), Some(main_id));
    }

    #[test]
    fn unknown_action() {
        let queue = MainThreadQueue::new();
        let bridge = NativeBridge::new(queue.handle());
        assert_eq!(
            bridge.invoke("launchMissiles"),
            Err(BridgeError::UnknownAction("launchMissiles".to_string()))
        );
        assert_eq!(queue.run_pending(), 0);
    }

    #[test]
    fn action_names_sorted() {
        let queue = MainThreadQueue::new();
        let mut bridge = NativeBridge::new(queue.handle());
        bridge.register("b", || {});
        bridge.register("a", || {});
        assert_eq!(bridge.action_names(), vec!["a", "b"]);
        assert!(bridge.has_action("a"));
    }
}
