/// Input event types the engine understands.
/// Generic — no game-specific semantics.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A touch/click began at viewport pixel (x, y).
    PointerDown { x: f32, y: f32 },
    /// A touch/click ended at viewport pixel (x, y).
    PointerUp { x: f32, y: f32 },
    /// A touch/cursor moved to viewport pixel (x, y).
    PointerMove { x: f32, y: f32 },
    /// Mouse wheel; negative `delta_y` scrolls up.
    Wheel { delta_y: f32 },
    /// A UI button was clicked. `id` is the button's DOM id.
    Button { id: String },
}

/// A queue of input events.
/// The host writes events into the queue; Rust reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        q.push(InputEvent::Button { id: "front".into() });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1], InputEvent::Button { id: "front".into() });
        assert!(q.is_empty());
    }
}
