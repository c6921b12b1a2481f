//! Cobweb tables and stair-step segments.
//!
//! A [`Cobweb`] holds the iterates `x_0, x_1, …, x_n` of an iteration along
//! with the images `f(x_0), …, f(x_{n-1})`. From those it produces:
//!
//! - [`Cobweb::rows`]: the `(n, x_n, f(x_n))` diagnostic table
//! - [`Cobweb::segments`]: alternating horizontal and vertical segments that
//!   trace the iteration between `y = f(x)` and `y = x`
//! - [`Cobweb::path`]: the same segments joined into one polyline
//!
//! Build one from a function with [`Cobweb::trace`], or record one while
//! solving by passing `&mut Cobweb` as the solver observer.

use std::fmt;

use cobweb_core::{Model, Observer};

use crate::traits::HasIterate;

/// One line of the cobweb table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Row {
    /// Iteration index.
    pub n: usize,

    /// The iterate `x_n`.
    #[cfg_attr(feature = "serde", serde(rename = "x_n"))]
    pub x: f64,

    /// The image `f(x_n)`.
    #[cfg_attr(feature = "serde", serde(rename = "f(x_n)"))]
    pub image: f64,
}

/// A straight segment between two plot points.
pub type Segment = [[f64; 2]; 2];

/// The data behind a cobweb diagram.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cobweb {
    iterates: Vec<f64>,
    images: Vec<f64>,
}

impl Cobweb {
    /// Creates an empty cobweb, ready to be filled by a solver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Traces `steps` undamped iterations `x_{k+1} = f(x_k)` from `x0`.
    ///
    /// # Errors
    ///
    /// Returns the model's error if any evaluation of `f` fails.
    pub fn trace<M>(f: &M, x0: f64, steps: usize) -> Result<Self, M::Error>
    where
        M: Model<Input = f64, Output = f64>,
    {
        let mut cobweb = Self::new();
        let mut x = x0;
        for _ in 0..steps {
            let image = f.call(&x)?;
            cobweb.record(x, image, image);
            x = image;
        }
        Ok(cobweb)
    }

    /// Records one step of an iteration.
    ///
    /// The first record also stores `x` as the starting iterate. Later records
    /// are expected to start where the previous one ended.
    pub fn record(&mut self, x: f64, image: f64, next: f64) {
        if self.iterates.is_empty() {
            self.iterates.push(x);
        }
        self.images.push(image);
        self.iterates.push(next);
    }

    /// Returns the number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns true if no step has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Returns the iterates `x_0..=x_n`, one more than [`len`](Self::len).
    #[must_use]
    pub fn iterates(&self) -> &[f64] {
        &self.iterates
    }

    /// Returns the table rows `(n, x_n, f(x_n))`, one per recorded step.
    pub fn rows(&self) -> impl Iterator<Item = Row> + '_ {
        self.iterates
            .iter()
            .zip(&self.images)
            .enumerate()
            .map(|(n, (&x, &image))| Row { n, x, image })
    }

    /// Returns the stair-step segments of the diagram.
    ///
    /// Step `n` contributes a horizontal segment from `(x_n, f(x_n))` to
    /// `(x_{n+1}, f(x_n))`. Every step except the last also contributes a
    /// vertical segment from `(x_{n+1}, f(x_n))` up or down to
    /// `(x_{n+1}, f(x_{n+1}))`. For undamped iteration `x_{n+1} = f(x_n)`, so
    /// the horizontal segments end on `y = x`.
    #[must_use]
    pub fn segments(&self) -> Vec<Segment> {
        let steps = self.len();
        let mut segments = Vec::with_capacity((2 * steps).saturating_sub(1));
        for n in 0..steps {
            let x = self.iterates[n];
            let next = self.iterates[n + 1];
            let image = self.images[n];

            segments.push([[x, image], [next, image]]);
            if n + 1 < steps {
                segments.push([[next, image], [next, self.images[n + 1]]]);
            }
        }
        segments
    }

    /// Returns the segments joined into a single polyline.
    #[must_use]
    pub fn path(&self) -> Vec<[f64; 2]> {
        let segments = self.segments();
        let mut path = Vec::with_capacity(segments.len() + 1);
        if let Some(first) = segments.first() {
            path.push(first[0]);
        }
        path.extend(segments.iter().map(|segment| segment[1]));
        path
    }

    /// Returns the smallest interval holding every iterate and image.
    ///
    /// Returns `None` for an empty cobweb.
    #[must_use]
    pub fn bounds(&self) -> Option<[f64; 2]> {
        if self.is_empty() {
            return None;
        }
        let values = self.iterates.iter().chain(&self.images).copied();
        let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
            (min.min(v), max.max(v))
        });
        Some([min, max])
    }
}

impl fmt::Display for Cobweb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>4}  {:>20}  {:>20}", "n", "x_n", "f(x_n)")?;
        for row in self.rows() {
            writeln!(f, "{:>4}  {:>20.15}  {:>20.15}", row.n, row.x, row.image)?;
        }
        Ok(())
    }
}

impl<E: HasIterate, A> Observer<E, A> for Cobweb {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event.x(), event.image(), event.next());
        None
    }
}

/// Allows `&mut Cobweb` to be passed to solvers that take an observer by value,
/// so the recorded cobweb can be used after the solve completes.
impl<E: HasIterate, A> Observer<E, A> for &mut Cobweb {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
