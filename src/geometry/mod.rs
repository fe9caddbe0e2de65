use num_traits::{Num, Signed, Float};


/// Manhattan distance
/// Admissible heuristic for 4-connected grids with unit step cost
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Copy + Signed,
    {
    (x1 - x2).abs() + (y1 - y2).abs()
}

/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
}

/// Squared Euclidean distance
pub fn squared_euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    (x1 - x2).powi(2) + (y1 - y2).powi(2)
}

/// Chebyshev distance
/// Admissible heuristic for 8-connected grids where diagonal steps cost
/// the same as cardinal steps
pub fn chebyshev<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Copy + Signed + PartialOrd,
    {
    let dx = (x1 - x2).abs();
    let dy = (y1 - y2).abs();
    if dx > dy { dx } else { dy }
}
