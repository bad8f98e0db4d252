use regsel_core::{Float, Matrix, MatrixResult};

/// Thin QR decomposition result: A = Q * R
///
/// For an m×n input with k = min(m, n), `q` is m×k with orthonormal columns
/// and `r` is k×n upper triangular.
pub struct QrDecomposition<T: Float> {
    pub q: Matrix<T>,
    pub r: Matrix<T>,
}

/// QR decomposition via Householder reflections.
pub fn qr<T: Float>(a: &Matrix<T>) -> MatrixResult<QrDecomposition<T>> {
    let (m, n) = a.shape();
    let k = m.min(n);

    let mut r_data = a.data().to_vec();
    let mut q_data = vec![T::ZERO; m * m];
    for i in 0..m {
        q_data[i * m + i] = T::ONE;
    }

    for j in 0..k {
        // Column j below the diagonal
        let mut v: Vec<T> = (j..m).map(|i| r_data[i * n + j]).collect();

        let norm_x = T::l2_norm(&v);
        if norm_x < T::EPSILON {
            continue;
        }

        let head = v[0];
        v[0] += head.sign() * norm_x;

        let norm_v = T::l2_norm(&v);
        if norm_v < T::EPSILON {
            continue;
        }
        for x in v.iter_mut() {
            *x /= norm_v;
        }

        // R ← H R on columns j..n
        for col in j..n {
            let dot: T = (j..m).map(|i| v[i - j] * r_data[i * n + col]).sum();
            for i in j..m {
                r_data[i * n + col] -= T::TWO * v[i - j] * dot;
            }
        }

        // Q ← Q H
        for row in 0..m {
            let dot: T = (j..m).map(|i| q_data[row * m + i] * v[i - j]).sum();
            for i in j..m {
                q_data[row * m + i] -= T::TWO * dot * v[i - j];
            }
        }
    }

    let mut q_thin = Vec::with_capacity(m * k);
    for i in 0..m {
        q_thin.extend_from_slice(&q_data[i * m..i * m + k]);
    }
    let r_thin = r_data[..k * n].to_vec();

    Ok(QrDecomposition {
        q: Matrix::new(q_thin, m, k)?,
        r: Matrix::new(r_thin, k, n)?,
    })
}
