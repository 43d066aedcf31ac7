//! Pure correction rules applied to raw slider positions.
//!
//! Every function here maps raw positions to corrected positions and never
//! fails: live slider manipulation routinely produces values a filter cannot
//! use, and those are coerced rather than rejected.

/// Returns the smallest odd integer greater or equal to `max(n, 1)`.
///
/// # Examples
///
/// ```
/// use cvscope::validate::ensure_odd;
///
/// assert_eq!(ensure_odd(0), 1);
/// assert_eq!(ensure_odd(4), 5);
/// assert_eq!(ensure_odd(7), 7);
/// ```
pub fn ensure_odd(n: i32) -> i32 {
    let n = n.max(1);
    if n % 2 == 0 {
        n + 1
    } else {
        n
    }
}

/// Forces a zero kernel extent to 1 when the gaussian sigma is also zero.
///
/// OpenCV derives the y sigma from the x sigma when the former is zero, so the
/// x sigma gates both axes. Each axis is corrected on its own.
///
/// # Arguments
///
/// * `sigma_x` - The raw sigma x position.
/// * `ksize` - The raw kernel extents `(x, y)`.
///
/// # Returns
///
/// The corrected kernel extents.
pub fn gaussian_kernel_fallback(sigma_x: i32, ksize: (i32, i32)) -> (i32, i32) {
    if sigma_x != 0 {
        return ksize;
    }
    let fallback = |k: i32| if k == 0 { 1 } else { k };
    (fallback(ksize.0), fallback(ksize.1))
}

/// Makes the gradient orders mutually exclusive.
///
/// A `dx` of 1 clears `dy`, a `dy` of 1 clears `dx`, and when both end up at
/// zero `dy` is raised to 1. The checks run in that order, so `dx` wins a tie.
pub fn gradient_exclusive(dx: i32, dy: i32) -> (i32, i32) {
    let (mut dx, mut dy) = (dx, dy);
    if dx == 1 {
        dy = 0;
    }
    if dy == 1 {
        dx = 0;
    }
    if dx == 0 && dy == 0 {
        dy = 1;
    }
    (dx, dy)
}
