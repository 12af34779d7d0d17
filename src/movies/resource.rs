use fake::Dummy;

/// Defines movie data structure.
///
/// Every field is a presentation string exactly as delivered by the service.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq)]
pub struct MovieItem {
    pub id: String,
    pub title: String,
    pub poster_url: String,
    pub synopsis: String,
    pub release_date: String,
    pub rating: String,       // Content rating, e.g. "PG-13"
    pub review_score: String, // Kept as text, the service mixes "8.1" and "81%"
    pub runtime: String,
}
