use log::{debug, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use regsel_core::{Estimator, Float, LinearModel, Matrix, MatrixError, MatrixResult};

/// Linear Support Vector Regression.
///
/// Uses ε-insensitive loss: L(y, f(x)) = max(0, |y - f(x)| - ε), solved in the
/// dual with coordinate descent. The bias is learned as the weight of an
/// appended constant feature. Coordinates are visited in an order drawn from
/// a seeded RNG, so two fits on the same data give identical weights.
#[derive(Debug, Clone)]
pub struct LinearSVR<T: Float> {
    pub c: T,
    pub epsilon: T,
    pub tol: T,
    pub max_iter: usize,
    pub seed: u64,
    weights: Option<Vec<T>>,
    bias: T,
    n_iter: usize,
}

impl<T: Float> LinearSVR<T> {
    pub fn new(c: T, epsilon: T) -> Self {
        LinearSVR {
            c,
            epsilon,
            tol: T::from_f64(1e-3),
            max_iter: 1000,
            seed: 42,
            weights: None,
            bias: T::ZERO,
            n_iter: 0,
        }
    }

    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    pub fn with_tol(mut self, tol: T) -> Self {
        self.tol = tol;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn bias(&self) -> T {
        self.bias
    }

    /// Number of sweeps the last `fit` ran.
    pub fn n_iter(&self) -> usize {
        self.n_iter
    }

    pub fn fit(&mut self, x: &Matrix<T>, y: &[T]) -> MatrixResult<()> {
        let (n, p) = x.shape();
        if n == 0 {
            return Err(MatrixError::EmptyMatrix);
        }
        if y.len() != n {
            return Err(MatrixError::DimensionMismatch(format!(
                "X has {} rows but y has {} elements",
                n,
                y.len()
            )));
        }

        let xa = x.with_leading_ones();
        let dim = p + 1;
        let qd: Vec<T> = (0..n)
            .map(|i| xa.row(i).map(|r| r.iter().map(|&v| v * v).sum()))
            .collect::<MatrixResult<_>>()?;

        let mut beta = vec![T::ZERO; n];
        let mut w = vec![T::ZERO; dim];
        let mut order: Vec<usize> = (0..n).collect();
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut initial_violation = T::ZERO;
        let mut converged = false;
        let mut sweeps = 0;

        for iter in 0..self.max_iter {
            sweeps = iter + 1;
            order.shuffle(&mut rng);
            let mut violation = T::ZERO;

            for &i in &order {
                let row = xa.row(i)?;
                let g: T = row.iter().zip(&w).map(|(&a, &b)| a * b).sum::<T>() - y[i];
                let gp = g + self.epsilon;
                let gn = g - self.epsilon;
                let b = beta[i];

                // Projected gradient of the dual objective at beta[i]
                violation += if b == T::ZERO {
                    if gp < T::ZERO {
                        -gp
                    } else if gn > T::ZERO {
                        gn
                    } else {
                        T::ZERO
                    }
                } else if b >= self.c {
                    gp.max(T::ZERO)
                } else if b <= -self.c {
                    (-gn).max(T::ZERO)
                } else if b > T::ZERO {
                    gp.abs()
                } else {
                    gn.abs()
                };

                let h = qd[i];
                if h <= T::ZERO {
                    continue;
                }
                let step = if gp < h * b {
                    -gp / h
                } else if gn > h * b {
                    -gn / h
                } else {
                    -b
                };
                let updated = (b + step).max(-self.c).min(self.c);
                let delta = updated - b;
                if delta.abs() > T::from_f64(1e-12) {
                    beta[i] = updated;
                    for (wj, &xj) in w.iter_mut().zip(row) {
                        *wj += delta * xj;
                    }
                }
            }

            if iter == 0 {
                initial_violation = violation;
            }
            if violation <= self.tol * initial_violation {
                converged = true;
                break;
            }
        }

        if converged {
            debug!("LinearSVR converged after {} sweeps", sweeps);
        } else {
            warn!(
                "LinearSVR did not converge within {} sweeps; using last iterate",
                self.max_iter
            );
        }

        self.bias = w[0];
        self.weights = Some(w[1..].to_vec());
        self.n_iter = sweeps;
        Ok(())
    }

    pub fn predict(&self, x: &Matrix<T>) -> MatrixResult<Vec<T>> {
        let w = self.weights.as_ref().ok_or(MatrixError::NotFitted)?;
        let mut pred = x.matvec(w)?;
        for v in pred.iter_mut() {
            *v += self.bias;
        }
        Ok(pred)
    }
}

impl<T: Float> Default for LinearSVR<T> {
    /// C = 1, ε = 0.1.
    fn default() -> Self {
        Self::new(T::ONE, T::from_f64(0.1))
    }
}

impl<T: Float> Estimator<T> for LinearSVR<T> {
    fn fit(&mut self, x: &Matrix<T>, y: &[T]) -> MatrixResult<()> {
        LinearSVR::fit(self, x, y)
    }

    fn predict(&self, x: &Matrix<T>) -> MatrixResult<Vec<T>> {
        LinearSVR::predict(self, x)
    }
}

impl<T: Float> LinearModel<T> for LinearSVR<T> {
    fn coefficients(&self) -> Option<&[T]> {
        self.weights.as_deref()
    }
}
