use crate::models::CandidateItem;

fn item(title: &str, release_date: &str, popularity: f64, genre_ids: &[u32]) -> CandidateItem {
    CandidateItem {
        title: title.to_string(),
        release_date: release_date.to_string(),
        popularity,
        genre_ids: genre_ids.to_vec(),
    }
}

/// Static movie catalogue served when the provider API is unreachable
pub fn fallback_movies() -> Vec<CandidateItem> {
    vec![
        item("The Shawshank Redemption", "1994-09-23", 89.5, &[18, 80]),
        item("The Godfather", "1972-03-14", 92.3, &[18, 80]),
        item("The Dark Knight", "2008-07-18", 95.1, &[28, 80, 18]),
        item("Inception", "2010-07-16", 88.7, &[28, 878, 53]),
        item("Pulp Fiction", "1994-10-14", 87.2, &[80, 53]),
        item("Forrest Gump", "1994-07-06", 86.1, &[35, 18, 10749]),
        item("The Matrix", "1999-03-31", 90.3, &[28, 878]),
        item("Interstellar", "2014-11-07", 91.8, &[12, 18, 878]),
        item("Parasite", "2019-05-30", 88.9, &[35, 53, 18]),
        item("Spirited Away", "2001-07-20", 87.5, &[16, 14]),
    ]
}

/// Static TV catalogue served when the provider API is unreachable
pub fn fallback_tv() -> Vec<CandidateItem> {
    vec![
        item("Breaking Bad", "2008-01-20", 91.4, &[18, 80]),
        item("Game of Thrones", "2011-04-17", 89.8, &[10765, 18, 10759]),
        item("Stranger Things", "2016-07-15", 93.2, &[10765, 9648, 18]),
        item("The Office", "2005-03-24", 86.5, &[35]),
        item("The Crown", "2016-11-04", 84.3, &[18]),
        item("Friends", "1994-09-22", 92.7, &[35]),
        item("Sherlock", "2010-07-25", 88.2, &[80, 18, 9648]),
        item("The Mandalorian", "2019-11-12", 90.5, &[10765, 10759]),
        item("Ted Lasso", "2020-08-14", 87.9, &[35, 18]),
        item("Dark", "2017-12-01", 85.6, &[18, 9648, 10765]),
    ]
}
