use regsel_core::Float;

// All metrics take `(y_true, y_pred)` slices of equal, non-zero length and
// accumulate in f64. Callers that cannot guarantee this should go through
// `RegressionMetrics::from_predictions`, which checks it.

/// Mean Squared Error.
pub fn mse<T: Float>(y_true: &[T], y_pred: &[T]) -> f64 {
    assert_eq!(y_true.len(), y_pred.len());
    let sum: f64 = y_true
        .iter()
        .zip(y_pred)
        .map(|(&t, &p)| {
            let d = (t - p).to_f64();
            d * d
        })
        .sum();
    sum / y_true.len() as f64
}

/// Root Mean Squared Error.
pub fn rmse<T: Float>(y_true: &[T], y_pred: &[T]) -> f64 {
    mse(y_true, y_pred).sqrt()
}

/// Mean Absolute Error.
pub fn mae<T: Float>(y_true: &[T], y_pred: &[T]) -> f64 {
    assert_eq!(y_true.len(), y_pred.len());
    let sum: f64 = y_true
        .iter()
        .zip(y_pred)
        .map(|(&t, &p)| (t - p).to_f64().abs())
        .sum();
    sum / y_true.len() as f64
}

/// Ratio score `1 - num / den` with the degenerate-denominator convention:
/// a constant target scores 1.0 when the numerator is also zero, else 0.0.
fn variance_ratio_score(num: f64, den: f64) -> f64 {
    if den == 0.0 {
        if num == 0.0 {
            1.0
        } else {
            0.0
        }
    } else {
        1.0 - num / den
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    sum / n as f64
}

/// R² (coefficient of determination).
pub fn r2_score<T: Float>(y_true: &[T], y_pred: &[T]) -> f64 {
    assert_eq!(y_true.len(), y_pred.len());
    let mean_true = mean(y_true.iter().map(|v| v.to_f64()));

    let ss_res: f64 = y_true
        .iter()
        .zip(y_pred)
        .map(|(&t, &p)| {
            let d = t.to_f64() - p.to_f64();
            d * d
        })
        .sum();

    let ss_tot: f64 = y_true
        .iter()
        .map(|&t| {
            let d = t.to_f64() - mean_true;
            d * d
        })
        .sum();

    variance_ratio_score(ss_res, ss_tot)
}

/// Adjusted R² — R² adjusted for number of predictors.
///
/// adj_R² = 1 - (1 - R²) * (n - 1) / (n - p - 1)
pub fn adjusted_r2<T: Float>(y_true: &[T], y_pred: &[T], n_features: usize) -> f64 {
    let r2 = r2_score(y_true, y_pred);
    let n = y_true.len() as f64;
    let p = n_features as f64;
    if n - p - 1.0 <= 0.0 {
        return r2;
    }
    1.0 - (1.0 - r2) * (n - 1.0) / (n - p - 1.0)
}

/// Explained Variance Score.
///
/// EV = 1 - Var(y - ŷ) / Var(y)
pub fn explained_variance<T: Float>(y_true: &[T], y_pred: &[T]) -> f64 {
    assert_eq!(y_true.len(), y_pred.len());
    let residuals: Vec<f64> = y_true
        .iter()
        .zip(y_pred)
        .map(|(&t, &p)| t.to_f64() - p.to_f64())
        .collect();

    let res_mean = mean(residuals.iter().copied());
    let var_res = mean(residuals.iter().map(|&r| (r - res_mean) * (r - res_mean)));

    let y_mean = mean(y_true.iter().map(|v| v.to_f64()));
    let var_y = mean(y_true.iter().map(|v| {
        let d = v.to_f64() - y_mean;
        d * d
    }));

    variance_ratio_score(var_res, var_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mse() {
        let y_true = [1.0, 2.0, 3.0];
        assert_abs_diff_eq!(mse(&y_true, &y_true), 0.0);
        assert_abs_diff_eq!(mse(&y_true, &[2.0, 2.0, 5.0]), 5.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rmse(&[0.0, 0.0], &[3.0, 4.0]), 12.5_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_r2_perfect() {
        let y = [1.0, 2.0, 3.0, 4.0];
        assert_abs_diff_eq!(r2_score(&y, &y), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_r2_mean_predictor_is_zero() {
        let y = [1.0, 2.0, 3.0, 4.0];
        assert_abs_diff_eq!(r2_score(&y, &[2.5; 4]), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_r2_constant_target() {
        let y = [3.0, 3.0, 3.0];
        assert_eq!(r2_score(&y, &y), 1.0);
        assert_eq!(r2_score(&y, &[3.0, 3.0, 4.0]), 0.0);
    }

    #[test]
    fn test_mae() {
        assert_abs_diff_eq!(mae(&[1.0, 2.0, 3.0], &[1.5, 2.5, 3.5]), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_explained_variance_ignores_bias() {
        // A constant offset leaves residual variance at zero
        let y = [1.0, 2.0, 3.0, 4.0];
        let shifted = [2.0, 3.0, 4.0, 5.0];
        assert_abs_diff_eq!(explained_variance(&y, &shifted), 1.0, epsilon = 1e-12);
        assert!(r2_score(&y, &shifted) < 1.0);
    }

    #[test]
    fn test_adjusted_r2() {
        let y = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let pred = [1.1, 1.9, 3.2, 3.8, 5.1, 6.0];
        let r2 = r2_score(&y, &pred);
        let adj = adjusted_r2(&y, &pred, 2);
        assert_abs_diff_eq!(adj, 1.0 - (1.0 - r2) * 5.0 / 3.0, epsilon = 1e-12);
        // Too few rows for the correction
        assert_eq!(adjusted_r2(&y, &pred, 5), r2);
    }
}
