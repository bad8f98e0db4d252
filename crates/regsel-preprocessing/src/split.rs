use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use regsel_core::{Float, Matrix, MatrixError, MatrixResult};

/// Fraction of rows held out for evaluation.
pub const TEST_RATIO: f64 = 0.2;

/// Seed shared by every hold-out split, so a dataset's rows land on the same
/// side of the split whatever columns are kept.
pub const SPLIT_SEED: u64 = 42;

/// Rows of `x`/`y` partitioned into training and evaluation sets.
#[derive(Debug, Clone)]
pub struct TrainTestSplit<T: Float> {
    pub x_train: Matrix<T>,
    pub x_test: Matrix<T>,
    pub y_train: Vec<T>,
    pub y_test: Vec<T>,
}

/// Shuffle `0..n` with a seeded RNG and cut it into `(train, test)` indices.
///
/// The test side gets `ceil(n * test_ratio)` rows. Membership depends only
/// on `(n, test_ratio, seed)`.
pub fn split_indices(n: usize, test_ratio: f64, seed: u64) -> MatrixResult<(Vec<usize>, Vec<usize>)> {
    if !(0.0..1.0).contains(&test_ratio) || test_ratio == 0.0 {
        return Err(MatrixError::InvalidOperation(format!(
            "test_ratio must be in (0, 1), got {}",
            test_ratio
        )));
    }
    let test_size = (n as f64 * test_ratio).ceil() as usize;
    if test_size == 0 || test_size >= n {
        return Err(MatrixError::InvalidOperation(format!(
            "cannot split {} rows into non-empty train and test sets",
            n
        )));
    }

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let test = indices.split_off(n - test_size);
    Ok((indices, test))
}

/// Split data into training and test sets.
pub fn train_test_split<T: Float>(
    x: &Matrix<T>,
    y: &[T],
    test_ratio: f64,
    seed: u64,
) -> MatrixResult<TrainTestSplit<T>> {
    let n = x.nrows();
    if y.len() != n {
        return Err(MatrixError::DimensionMismatch(format!(
            "X has {} rows but y has {} elements",
            n,
            y.len()
        )));
    }

    let (train, test) = split_indices(n, test_ratio, seed)?;
    Ok(TrainTestSplit {
        x_train: x.select_rows(&train)?,
        x_test: x.select_rows(&test)?,
        y_train: train.iter().map(|&i| y[i]).collect(),
        y_test: test.iter().map(|&i| y[i]).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_train_test_split() {
        let x: Matrix<f64> = Matrix::from_rows(&[
            vec![1.0, 2.0],
            vec![3.0, 4.0],
            vec![5.0, 6.0],
            vec![7.0, 8.0],
            vec![9.0, 10.0],
        ])
        .unwrap();
        let y = [0.0, 1.0, 2.0, 3.0, 4.0];

        let split = train_test_split(&x, &y, 0.4, 42).unwrap();
        assert_eq!(split.x_train.nrows(), 3);
        assert_eq!(split.x_test.nrows(), 2);
        assert_eq!(split.y_train.len(), 3);
        assert_eq!(split.y_test.len(), 2);

        // Rows stay paired with their targets
        for (i, &t) in split.y_test.iter().enumerate() {
            assert_eq!(split.x_test.get(i, 0).unwrap(), 2.0 * t + 1.0);
        }
    }

    #[test]
    fn test_test_size_rounds_up() {
        let (train, test) = split_indices(11, TEST_RATIO, SPLIT_SEED).unwrap();
        assert_eq!(test.len(), 3);
        assert_eq!(train.len(), 8);
    }

    #[test]
    fn test_membership_is_stable() {
        let a = split_indices(50, TEST_RATIO, SPLIT_SEED).unwrap();
        let b = split_indices(50, TEST_RATIO, SPLIT_SEED).unwrap();
        assert_eq!(a, b);

        let mut all: Vec<usize> = a.0.iter().chain(&a.1).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_split_ignores_column_count() {
        let wide: Matrix<f64> = Matrix::from_columns(&[
            (0..10).map(|v| v as f64).collect(),
            (0..10).map(|v| v as f64 * 10.0).collect(),
        ])
        .unwrap();
        let narrow = wide.select_columns(&[0]).unwrap();
        let y: Vec<f64> = (0..10).map(|v| v as f64).collect();

        let a = train_test_split(&wide, &y, TEST_RATIO, SPLIT_SEED).unwrap();
        let b = train_test_split(&narrow, &y, TEST_RATIO, SPLIT_SEED).unwrap();
        assert_eq!(a.y_test, b.y_test);
        assert_eq!(a.y_train, b.y_train);
    }

    #[test]
    fn test_too_few_rows() {
        let x: Matrix<f64> = Matrix::zeros(1, 2);
        assert!(train_test_split(&x, &[1.0], TEST_RATIO, SPLIT_SEED).is_err());
        assert!(split_indices(0, TEST_RATIO, SPLIT_SEED).is_err());
        assert!(split_indices(10, 1.5, SPLIT_SEED).is_err());
    }
}
