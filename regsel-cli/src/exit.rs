use regsel::io::IoError;
use regsel::selection::SelectionError;

pub const EXIT_FAILURE: i32 = 1;
/// An input file does not exist.
pub const EXIT_NOT_FOUND: i32 = 2;

/// Process exit code for a failed command.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    let not_found = err.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<SelectionError>(),
            Some(SelectionError::NotFound(_))
        ) || matches!(cause.downcast_ref::<IoError>(), Some(IoError::NotFound(_)))
    });
    if not_found {
        EXIT_NOT_FOUND
    } else {
        EXIT_FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::path::PathBuf;

    #[test]
    fn test_not_found_maps_to_two() {
        let err = anyhow::Error::from(SelectionError::NotFound(PathBuf::from("x.csv")));
        assert_eq!(exit_code(&err), EXIT_NOT_FOUND);

        let wrapped: anyhow::Result<()> =
            Err(IoError::NotFound(PathBuf::from("x.csv"))).context("Failed to load dataset");
        assert_eq!(exit_code(&wrapped.unwrap_err()), EXIT_NOT_FOUND);
    }

    #[test]
    fn test_other_errors_map_to_one() {
        let err = anyhow::Error::from(SelectionError::InvalidConfig("rfe_step".into()));
        assert_eq!(exit_code(&err), EXIT_FAILURE);
        assert_eq!(exit_code(&anyhow::anyhow!("boom")), EXIT_FAILURE);
    }
}
