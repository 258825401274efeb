//! Error handling and exit codes.

use calctest_core::constants::exit_codes;
use calctest_core::error::CalcTestError;

/// Map an application error to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<CalcTestError>() {
        Some(CalcTestError::Config(_) | CalcTestError::UnknownCalculator(_)) => {
            exit_codes::ERROR_CONFIG
        }
        Some(CalcTestError::Pool(_)) | None => exit_codes::ERROR_GENERIC,
    }
}
