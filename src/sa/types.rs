//! Problem model for the tour annealer.

/// A tour: a permutation of city indices, read as a closed cycle.
pub type Tour = Vec<usize>;

/// A city at fixed 2D coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub x: f64,
    pub y: f64,
    /// Identifier, unique within an instance.
    pub index: usize,
}

impl City {
    pub fn new(x: f64, y: f64, index: usize) -> Self {
        Self { x, y, index }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &City) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Symmetric table of pairwise Euclidean distances.
///
/// Built once in O(n²) time and space, then read-only. Rows follow the
/// order of the city slice it was built from; tours index into that order.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    pub fn new(cities: &[City]) -> Self {
        let n = cities.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = cities[i].distance_to(&cities[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { n, data }
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between cities `a` and `b`.
    #[inline]
    pub fn get(&self, a: usize, b: usize) -> f64 {
        self.data[a * self.n + b]
    }

    /// Length of `tour` as a closed cycle, including the edge from the last
    /// city back to the first. O(n).
    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        match (tour.first(), tour.last()) {
            (Some(&first), Some(&last)) => {
                let open: f64 = tour.windows(2).map(|w| self.get(w[0], w[1])).sum();
                open + self.get(last, first)
            }
            _ => 0.0,
        }
    }
}

/// Whether `tour` contains every index `0..n` exactly once.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in tour {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}
