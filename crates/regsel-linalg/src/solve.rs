use regsel_core::{Float, Matrix, MatrixError, MatrixResult};

use crate::decomposition::qr;

/// Solve the upper-triangular system `R x = b` (R square).
pub fn back_substitute<T: Float>(r: &Matrix<T>, b: &[T]) -> MatrixResult<Vec<T>> {
    let (n, n2) = r.shape();
    if n != n2 || b.len() != n {
        return Err(MatrixError::DimensionMismatch(format!(
            "back_substitute: R is {}x{}, b has {} elements",
            n,
            n2,
            b.len()
        )));
    }
    let mut x = vec![T::ZERO; n];
    for i in (0..n).rev() {
        let mut sum = T::ZERO;
        for j in (i + 1)..n {
            sum += r.get(i, j)? * x[j];
        }
        let diag = r.get(i, i)?;
        if diag.abs() < T::EPSILON {
            return Err(MatrixError::SingularMatrix);
        }
        x[i] = (b[i] - sum) / diag;
    }
    Ok(x)
}

/// Least-squares solution: minimize ||Ax - b||² using QR decomposition.
///
/// Requires `m >= n`. A rank-deficient `A` is reported as
/// [`MatrixError::SingularMatrix`] rather than producing huge weights.
pub fn lstsq<T: Float>(a: &Matrix<T>, b: &[T]) -> MatrixResult<Vec<T>> {
    let (m, n) = a.shape();
    if b.len() != m {
        return Err(MatrixError::DimensionMismatch(format!(
            "lstsq: b must have {} elements, got {}",
            m,
            b.len()
        )));
    }
    if n == 0 {
        return Ok(Vec::new());
    }
    if m < n {
        return Err(MatrixError::DimensionMismatch(format!(
            "lstsq: underdetermined system with {} rows and {} columns",
            m, n
        )));
    }

    let decomp = qr(a)?;

    // Relative rank check on the diagonal of R
    let diag: Vec<T> = (0..n)
        .map(|i| decomp.r.get(i, i).map(T::abs))
        .collect::<MatrixResult<_>>()?;
    let largest = diag.iter().copied().fold(T::ZERO, T::max);
    let tol = T::EPSILON * largest * T::from_usize(m.max(n));
    if largest <= T::ZERO || diag.iter().any(|&d| d <= tol) {
        return Err(MatrixError::SingularMatrix);
    }

    let qtb = decomp.q.t().matvec(b)?;
    back_substitute(&decomp.r, &qtb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_back_substitute() {
        // 2x + y = 5, 3y = 6 → y = 2, x = 1.5
        let r: Matrix<f64> = Matrix::new(vec![2.0, 1.0, 0.0, 3.0], 2, 2).unwrap();
        let x = back_substitute(&r, &[5.0, 6.0]).unwrap();
        assert_abs_diff_eq!(x[0], 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(x[1], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_lstsq() {
        // Overdetermined system: fit y = 2x + 1
        let a: Matrix<f64> = Matrix::new(vec![1.0, 1.0, 1.0, 2.0, 1.0, 3.0], 3, 2).unwrap();
        let x = lstsq(&a, &[3.0, 5.0, 7.0]).unwrap();
        assert_abs_diff_eq!(x[0], 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(x[1], 2.0, epsilon = 1e-10);
    }

    #[test]
    fn test_lstsq_rank_deficient() {
        // Second column is twice the first
        let a: Matrix<f64> =
            Matrix::from_rows(&[vec![1.0, 2.0], vec![2.0, 4.0], vec![3.0, 6.0]]).unwrap();
        assert_eq!(lstsq(&a, &[1.0, 2.0, 3.0]), Err(MatrixError::SingularMatrix));
    }

    #[test]
    fn test_lstsq_underdetermined() {
        let a: Matrix<f64> = Matrix::from_rows(&[vec![1.0, 2.0, 3.0]]).unwrap();
        assert!(matches!(
            lstsq(&a, &[1.0]),
            Err(MatrixError::DimensionMismatch(_))
        ));
    }
}
