use crate::SplineValue;

/// Local polynomial `a + b*dt + c*dt² + d*dt³` with `dt = t - knot`.
pub(crate) type Segment<T> = [T; 4];

/// Evaluates segment `index` of a piecewise polynomial over `knots`.
///
/// Segment `i` covers `[knots[i], knots[i + 1])`; the last one also owns the
/// final knot. Parameters outside the knot range use the nearest boundary
/// segment, extended as a polynomial.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Piecewise<T> {
    segments: Vec<Segment<T>>,
}

impl<T: SplineValue> Piecewise<T> {
    /// Wraps one segment per knot interval.
    pub(crate) fn new(segments: Vec<Segment<T>>) -> Self {
        Self { segments }
    }

    /// Returns the index of the segment whose polynomial applies at `t`.
    ///
    /// Binary search over the interior knots, so lookup is `O(log n)`.
    pub(crate) fn locate(knots: &[f64], t: f64) -> usize {
        let interior = &knots[1..knots.len() - 1];
        interior.partition_point(|&knot| knot <= t)
    }

    pub(crate) fn evaluate(&self, knots: &[f64], t: f64) -> T {
        let index = Self::locate(knots, t);
        let dt = t - knots[index];
        let [a, b, c, d] = self.segments[index];
        a + (b + (c + d * dt) * dt) * dt
    }

    pub(crate) fn derivative(&self, knots: &[f64], t: f64) -> T {
        let index = Self::locate(knots, t);
        let dt = t - knots[index];
        let [_, b, c, d] = self.segments[index];
        b + (c * 2.0 + d * (3.0 * dt)) * dt
    }

    #[cfg(test)]
    pub(crate) fn segments(&self) -> &[Segment<T>] {
        &self.segments
    }
}
