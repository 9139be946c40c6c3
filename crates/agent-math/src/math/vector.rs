use std::ops::{Add, Mul};

/// Component-wise sum of two vectors.
///
/// Panics if `a` and `b` differ in length.
pub fn vector_add<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Copy + Add<Output = T>,
{
    assert_eq!(
        a.len(),
        b.len(),
        "Vector addition requires vectors of equal length"
    );
    a.iter().zip(b.iter()).map(|(x, y)| *x + *y).collect()
}

/// Element-wise (Hadamard) product of two vectors.
///
/// Panics if `x` and `y` differ in length.
pub fn element_wise_product<T>(x: &[T], y: &[T]) -> Vec<T>
where
    T: Copy + Mul<Output = T>,
{
    assert_eq!(
        x.len(),
        y.len(),
        "Element-wise product requires vectors of equal length"
    );
    x.iter().zip(y.iter()).map(|(a, b)| *a * *b).collect()
}

/// Product of a scalar and a vector.
pub fn scalar_vector_product<T>(s: T, v: &[T]) -> Vec<T>
where
    T: Copy + Mul<Output = T>,
{
    v.iter().map(|x| s * *x).collect()
}
