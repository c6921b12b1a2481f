use cobweb_core::Snapshot;

/// Event emitted by the fixed-point solver after each step.
///
/// `iter` is 1-based: the first event describes the step from the initial
/// guess to the first iterate.
#[derive(Debug)]
pub struct Event<'a, I, O> {
    /// Iteration counter.
    pub iter: usize,

    /// The iterate the step started from.
    pub x: f64,

    /// The image `f(x)`.
    pub image: f64,

    /// The relaxed next iterate `(1 - α)·x + α·f(x)`.
    pub next: f64,

    /// Model input and output at `x`.
    pub snapshot: &'a Snapshot<I, O>,
}

impl<I, O> Event<'_, I, O> {
    /// Returns the step size `|next - x|` compared against the tolerance.
    #[must_use]
    pub fn step(&self) -> f64 {
        (self.next - self.x).abs()
    }
}
