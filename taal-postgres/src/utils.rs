use heapless::String as HeaplessString;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;
use std::str::FromStr;
use taal_api::{TaalError, TaalResult};

/// A trait for converting a database row into a model.
pub trait TryFromRow<R>: Sized {
    /// Performs the conversion.
    fn try_from_row(row: &R) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

/// Retrieves a required `HeaplessString` from a row.
pub fn get_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    let s: String = row.try_get(col_name)?;
    HeaplessString::from_str(&s).map_err(|_| {
        format!("Value for column '{col_name}' is too long (max {N} chars)").into()
    })
}

/// Converts `value` into a `HeaplessString`, failing with a configuration
/// error naming `field` when it does not fit.
pub fn to_heapless_string<const N: usize>(field: &str, value: &str) -> TaalResult<HeaplessString<N>> {
    HeaplessString::from_str(value).map_err(|_| {
        TaalError::Configuration(format!("{field} '{value}' is too long (max {N} chars)"))
    })
}

/// Maps a row conversion failure into a database error.
pub fn row_error(err: Box<dyn Error + Send + Sync>) -> TaalError {
    TaalError::Database(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_heapless_string() {
        let code: HeaplessString<4> = to_heapless_string("language", "en").unwrap();
        assert_eq!(code.as_str(), "en");

        let err = to_heapless_string::<4>("language", "english").unwrap_err();
        assert!(matches!(err, TaalError::Configuration(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: language 'english' is too long (max 4 chars)"
        );
    }
}
