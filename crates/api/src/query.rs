//! Query parameter types and the validating extractor used by listing
//! endpoints.
//!
//! Limits must lie in `MIN_LIMIT..=MAX_LIMIT`; out-of-range values and
//! unknown sort keys are rejected with a 422, never clamped.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use screenplay_core::error::CoreError;
use screenplay_core::listing::{
    CharacterSort, LineSort, MovieSort, DEFAULT_LIMIT, MAX_LIMIT, MIN_LIMIT,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use validator::Validate;

use crate::error::AppError;

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

/// Pagination parameters (`?limit=&offset=`).
#[derive(Debug, Deserialize, Validate)]
pub struct PaginationParams {
    #[serde(default = "default_limit")]
    #[validate(range(min = MIN_LIMIT, max = MAX_LIMIT))]
    pub limit: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub offset: i64,
}

/// Parameters of `GET /characters/`.
#[derive(Debug, Deserialize, Validate)]
pub struct CharacterListParams {
    /// Substring of the character name.
    pub name: Option<String>,
    #[serde(default = "default_limit")]
    #[validate(range(min = MIN_LIMIT, max = MAX_LIMIT))]
    pub limit: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub offset: i64,
    #[serde(default)]
    pub sort: CharacterSort,
}

/// Parameters of `GET /movies/`.
#[derive(Debug, Deserialize, Validate)]
pub struct MovieListParams {
    /// Substring of the movie title.
    pub name: Option<String>,
    #[serde(default = "default_limit")]
    #[validate(range(min = MIN_LIMIT, max = MAX_LIMIT))]
    pub limit: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub offset: i64,
    #[serde(default)]
    pub sort: MovieSort,
}

/// Parameters of `GET /lines/`.
#[derive(Debug, Deserialize, Validate)]
pub struct LineListParams {
    /// Substring of the line text.
    pub text: Option<String>,
    #[serde(default = "default_limit")]
    #[validate(range(min = MIN_LIMIT, max = MAX_LIMIT))]
    pub limit: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub offset: i64,
    #[serde(default)]
    pub sort: LineSort,
}

/// Query-string extractor that deserializes `T` and runs its
/// [`Validate`] rules.
///
/// Both deserialization failures (bad numbers, unknown sort keys) and rule
/// violations become [`CoreError::Validation`].
#[derive(Debug)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| CoreError::Validation(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| CoreError::Validation(errors.to_string()))?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse<T: DeserializeOwned>(query: &str) -> Result<T, String> {
        let uri: axum::http::Uri = format!("/?{query}").parse().unwrap();
        Query::<T>::try_from_uri(&uri)
            .map(|Query(value)| value)
            .map_err(|e| e.body_text())
    }

    #[test]
    fn list_params_apply_defaults() {
        let params: CharacterListParams = parse("").unwrap();
        assert_eq!(params.name, None);
        assert_eq!(params.limit, DEFAULT_LIMIT);
        assert_eq!(params.offset, 0);
        assert_eq!(params.sort, CharacterSort::Character);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn sort_keys_parse_in_snake_case() {
        let params: CharacterListParams = parse("sort=number_of_lines").unwrap();
        assert_eq!(params.sort, CharacterSort::NumberOfLines);
        let params: MovieListParams = parse("sort=rating").unwrap();
        assert_eq!(params.sort, MovieSort::Rating);
        let params: LineListParams = parse("sort=movie_title&text=father").unwrap();
        assert_eq!(params.sort, LineSort::MovieTitle);
        assert_eq!(params.text.as_deref(), Some("father"));
    }

    #[test]
    fn unknown_sort_key_fails_to_parse() {
        assert!(parse::<MovieListParams>("sort=budget").is_err());
    }

    #[test]
    fn limit_bounds_are_enforced() {
        let too_big: PaginationParams = parse(&format!("limit={}", MAX_LIMIT + 1)).unwrap();
        assert!(too_big.validate().is_err());
        let too_small: PaginationParams = parse(&format!("limit={}", MIN_LIMIT - 1)).unwrap();
        assert!(too_small.validate().is_err());
        let max: PaginationParams = parse(&format!("limit={MAX_LIMIT}")).unwrap();
        assert!(max.validate().is_ok());
        let min: PaginationParams = parse(&format!("limit={MIN_LIMIT}")).unwrap();
        assert!(min.validate().is_ok());
    }

    #[test]
    fn negative_offset_is_rejected() {
        let params: PaginationParams = parse("offset=-1").unwrap();
        assert!(params.validate().is_err());
    }
}
