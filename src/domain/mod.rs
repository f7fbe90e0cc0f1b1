//! Domain types for the movie catalog and the user directory.

pub mod input;
pub mod movie;
pub mod user;

pub use movie::{seed_movies, sort_movies, Movie, MovieInput, MoviePatch, MovieUpdateInput, NewMovie, SortKey};
pub use user::{NewUser, User, UserInput, UserPatch};
