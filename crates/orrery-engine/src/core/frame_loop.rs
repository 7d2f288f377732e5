//! Frame loop driven by a host scheduler.
//!
//! The host (browser `requestAnimationFrame`, a native event loop, or a test
//! fake) implements `FrameScheduler`. `start` keeps the loop alive by asking
//! for the next frame at the top of every frame body.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Callback invoked once with the host timestamp in milliseconds.
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Host frame-callback mechanism.
pub trait FrameScheduler {
    /// Call `callback` once on the next display refresh.
    fn request_frame(&self, callback: FrameCallback);
}

/// Handle to a running loop. Cloning shares the same loop.
#[derive(Debug, Clone, Default)]
pub struct LoopHandle {
    stopped: Rc<Cell<bool>>,
    frames: Rc<Cell<u64>>,
}

impl LoopHandle {
    /// Stop the loop. The next scheduled callback returns without running
    /// the frame body or rescheduling.
    pub fn stop(&self) {
        self.stopped.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }

    /// Number of frame bodies run so far.
    pub fn frame_count(&self) -> u64 {
        self.frames.get()
    }
}

/// Start a self-rescheduling loop that calls `on_frame(timestamp_ms)` once per frame.
pub fn start<S, F>(scheduler: Rc<S>, on_frame: F) -> LoopHandle
where
    S: FrameScheduler + 'static,
    F: FnMut(f64) + 'static,
{
    let handle = LoopHandle::default();
    schedule(scheduler, Rc::new(RefCell::new(on_frame)), handle.clone());
    handle
}

fn schedule<S, F>(scheduler: Rc<S>, on_frame: Rc<RefCell<F>>, handle: LoopHandle)
where
    S: FrameScheduler + 'static,
    F: FnMut(f64) + 'static,
{
    let next = Rc::clone(&scheduler);
    scheduler.request_frame(Box::new(move |timestamp| {
        if handle.is_stopped() {
            return;
        }
        schedule(next, Rc::clone(&on_frame), handle.clone());
        handle.frames.set(handle.frames.get() + 1);
        (on_frame.borrow_mut())(timestamp);
    }));
}

/// Deterministic scheduler for tests and headless hosts.
/// Callbacks queue up until `fire` is called.
#[derive(Default)]
pub struct ManualScheduler {
    pending: RefCell<Vec<FrameCallback>>,
    now_ms: Cell<f64>,
    step_ms: f64,
}

impl ManualScheduler {
    /// Scheduler whose clock advances `step_ms` per fired frame.
    pub fn new(step_ms: f64) -> Self {
        Self {
            pending: RefCell::new(Vec::new()),
            now_ms: Cell::new(0.0),
            step_ms,
        }
    }

    /// Fire up to `frames` rounds of pending callbacks. Returns the number fired.
    pub fn fire(&self, frames: usize) -> usize {
        let mut fired = 0;
        for _ in 0..frames {
            let batch = std::mem::take(&mut *self.pending.borrow_mut());
            if batch.is_empty() {
                break;
            }
            let now = self.now_ms.get() + self.step_ms;
            self.now_ms.set(now);
            for callback in batch {
                callback(now);
                fired += 1;
            }
        }
        fired
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&self, callback: FrameCallback) {
        self.pending.borrow_mut().push(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_bounded_number_of_frames() {
        let scheduler = Rc::new(ManualScheduler::new(16.0));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let handle = start(Rc::clone(&scheduler), move |ts| sink.borrow_mut().push(ts));

        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.fire(5), 5);
        assert_eq!(handle.frame_count(), 5);
        assert_eq!(*seen.borrow(), vec![16.0, 32.0, 48.0, 64.0, 80.0]);
        // Next frame is already requested
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn next_frame_requested_before_body_runs() {
        let scheduler = Rc::new(ManualScheduler::new(16.0));
        let probe = Rc::clone(&scheduler);
        let pending_during_body = Rc::new(Cell::new(0));
        let out = Rc::clone(&pending_during_body);
        start(Rc::clone(&scheduler), move |_| out.set(probe.pending()));

        scheduler.fire(1);
        assert_eq!(pending_during_body.get(), 1);
    }

    #[test]
    fn stop_ends_the_loop() {
        let scheduler = Rc::new(ManualScheduler::new(16.0));
        let handle = start(Rc::clone(&scheduler), |_| {});
        scheduler.fire(3);
        handle.stop();
        assert_eq!(scheduler.fire(10), 1);
        assert_eq!(handle.frame_count(), 3);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn frame_body_can_stop_its_own_loop() {
        let scheduler = Rc::new(ManualScheduler::new(16.0));
        let slot: Rc<RefCell<Option<LoopHandle>>> = Rc::new(RefCell::new(None));
        let inner = Rc::clone(&slot);
        let handle = start(Rc::clone(&scheduler), move |ts| {
            if ts >= 48.0 {
                if let Some(h) = inner.borrow().as_ref() {
                    h.stop();
                }
            }
        });
        *slot.borrow_mut() = Some(handle.clone());

        scheduler.fire(10);
        assert_eq!(handle.frame_count(), 3);
        assert!(handle.is_stopped());
    }
}
