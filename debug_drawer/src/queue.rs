use crate::request::DrawRequest;

/// Draw requests accumulated during one frame.
///
/// Insertion order is render order. The queue holds at most `capacity`
/// requests per frame; pushes beyond that are dropped and counted so the
/// flush can report them.
#[derive(Debug)]
pub struct DrawQueue {
    requests: Vec<DrawRequest>,
    capacity: usize,
    dropped: usize,
}

impl DrawQueue {
    /// Create an empty queue accepting up to `capacity` requests per frame.
    pub fn new(capacity: usize) -> Self {
        Self {
            requests: Vec::new(),
            capacity,
            dropped: 0,
        }
    }

    /// Append a request. Returns `false` if the frame cap was reached and the
    /// request was dropped.
    pub fn push(&mut self, request: DrawRequest) -> bool {
        if self.requests.len() >= self.capacity {
            self.dropped += 1;
            return false;
        }
        self.requests.push(request);
        true
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Per-frame cap.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
    }

    /// Requests dropped by the cap since the last clear.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Requests in render order.
    pub fn requests(&self) -> &[DrawRequest] {
        &self.requests
    }

    /// Clears requests and the drop counter. Keeps allocated capacity for reuse.
    pub fn clear(&mut self) {
        self.requests.clear();
        self.dropped = 0;
    }
}
