use crate::domain::input::{coerce_float, coerce_int, coerce_text, is_provided, is_truthy};
use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::cmp::Ordering;
use utoipa::ToSchema;

pub const MISSING_MOVIE_FIELDS: &str = "Please provide title, year, and rating for the movie.";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub year: i64,
    pub rating: f64,
}

/// A validated movie that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: i64,
    pub rating: f64,
}

/// A validated partial update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub rating: Option<f64>,
}

impl MoviePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.rating.is_none()
    }

    pub fn apply(&self, movie: &mut Movie) {
        if let Some(title) = &self.title {
            movie.title = title.clone();
        }
        if let Some(rating) = self.rating {
            movie.rating = rating;
        }
    }
}

/// Raw create body. Fields may arrive as numbers or numeric strings.
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct MovieInput {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub title: Option<JsonValue>,
    #[serde(default)]
    #[schema(value_type = Option<i64>)]
    pub year: Option<JsonValue>,
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub rating: Option<JsonValue>,
}

impl MovieInput {
    /// Requires all three fields to be provided, then coerces them.
    pub fn validate(&self) -> Result<NewMovie> {
        if !(is_provided(self.title.as_ref())
            && is_provided(self.year.as_ref())
            && is_provided(self.rating.as_ref()))
        {
            return Err(CatalogError::Validation(MISSING_MOVIE_FIELDS.to_string()));
        }

        let title = self
            .title
            .as_ref()
            .and_then(coerce_text)
            .ok_or_else(|| CatalogError::Validation("title must be a string".to_string()))?;
        let year = self
            .year
            .as_ref()
            .and_then(coerce_int)
            .ok_or_else(|| CatalogError::Validation("year must be an integer".to_string()))?;
        let rating = self
            .rating
            .as_ref()
            .and_then(coerce_float)
            .ok_or_else(|| CatalogError::Validation("rating must be a number".to_string()))?;

        Ok(NewMovie {
            title,
            year,
            rating,
        })
    }
}

/// Raw update body. `year` is accepted but never applied.
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct MovieUpdateInput {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub title: Option<JsonValue>,
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub rating: Option<JsonValue>,
}

impl MovieUpdateInput {
    pub fn validate(&self) -> Result<MoviePatch> {
        let title = match self.title.as_ref().filter(|v| is_truthy(v)) {
            Some(v) => Some(
                coerce_text(v)
                    .ok_or_else(|| CatalogError::Validation("title must be a string".to_string()))?,
            ),
            None => None,
        };
        let rating = match self.rating.as_ref().filter(|v| is_truthy(v)) {
            Some(v) => Some(
                coerce_float(v)
                    .ok_or_else(|| CatalogError::Validation("rating must be a number".to_string()))?,
            ),
            None => None,
        };
        Ok(MoviePatch { title, rating })
    }
}

/// Fields a movie list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Title,
    Year,
    Rating,
}

impl SortKey {
    /// Maps a `?sort=` value to a field. Names are exact and case-sensitive.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "id" => Some(SortKey::Id),
            "title" => Some(SortKey::Title),
            "year" => Some(SortKey::Year),
            "rating" => Some(SortKey::Rating),
            _ => None,
        }
    }

    /// Ascending comparison of the field's value. Incomparable values are equal.
    pub fn compare(self, a: &Movie, b: &Movie) -> Ordering {
        match self {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Title => a.title.cmp(&b.title),
            SortKey::Year => a.year.cmp(&b.year),
            SortKey::Rating => a.rating.partial_cmp(&b.rating).unwrap_or(Ordering::Equal),
        }
    }
}

/// Stable ascending sort by `key`.
pub fn sort_movies(movies: &mut [Movie], key: SortKey) {
    movies.sort_by(|a, b| key.compare(a, b));
}

pub fn seed_movies() -> Vec<Movie> {
    vec![
        Movie {
            id: 1,
            title: "Jaws".to_string(),
            year: 1975,
            rating: 8.0,
        },
        Movie {
            id: 2,
            title: "Avatar".to_string(),
            year: 2009,
            rating: 7.8,
        },
        Movie {
            id: 3,
            title: "Brazil".to_string(),
            year: 1985,
            rating: 8.0,
        },
        Movie {
            id: 4,
            title: "الإرهاب والكباب".to_string(),
            year: 1992,
            rating: 6.2,
        },
    ]
}
