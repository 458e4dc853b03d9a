//! Conversions from external infrastructure errors into domain errors.

use gymbook_domain::GymbookError;
use rusqlite::Error as SqlError;

/// Error newtype that keeps conversions on the infrastructure side and can
/// be converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub GymbookError);

impl From<InfraError> for GymbookError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<GymbookError> for InfraError {
    fn from(value: GymbookError) -> Self {
        InfraError(value)
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        use rusqlite::ffi::ErrorCode;

        let mapped = match value {
            SqlError::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => {
                        GymbookError::Database("database is busy".into())
                    }
                    (ErrorCode::DatabaseLocked, _) => {
                        GymbookError::Database("database is locked".into())
                    }
                    (ErrorCode::ConstraintViolation, 2067) => {
                        GymbookError::Database("unique constraint violation".into())
                    }
                    (ErrorCode::ConstraintViolation, 787) => {
                        GymbookError::Database("foreign key constraint violation".into())
                    }
                    _ => GymbookError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            SqlError::QueryReturnedNoRows => {
                GymbookError::NotFound("no rows returned by query".into())
            }
            SqlError::FromSqlConversionFailure(_, _, cause) => {
                GymbookError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            SqlError::InvalidColumnType(_, _, ty) => {
                GymbookError::Database(format!("invalid column type: {ty}"))
            }
            SqlError::InvalidQuery => GymbookError::Database("invalid SQL query".into()),
            other => GymbookError::Database(other.to_string()),
        };

        InfraError(mapped)
    }
}

impl From<r2d2::Error> for InfraError {
    fn from(value: r2d2::Error) -> Self {
        InfraError(GymbookError::Database(format!("connection pool error: {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_rows_maps_to_not_found() {
        let err: GymbookError = InfraError::from(SqlError::QueryReturnedNoRows).into();
        assert!(matches!(err, GymbookError::NotFound(_)));
    }

    #[test]
    fn invalid_query_maps_to_database() {
        let err: GymbookError = InfraError::from(SqlError::InvalidQuery).into();
        assert!(matches!(err, GymbookError::Database(_)));
    }
}
