/**
 * GenreCo
 * Copyright (C) 2018 Sebastian Schelter
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

use fnv::FnvHashMap;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::model::GenreModel;
use crate::types;
use crate::types::{GenreId, JoinedRecord, UserGenres};
use crate::vocabulary::Vocabulary;

/// Groups the joined records by user and reduces each group to the set of distinct genres the
/// user listened to. Users are returned in ascending order of their identifiers.
pub fn group_by_user(joined: &[JoinedRecord]) -> Vec<UserGenres> {

    let mut genres_per_user: FnvHashMap<&str, Vec<GenreId>> =
        FnvHashMap::with_capacity_and_hasher(100, Default::default());

    for record in joined.iter() {
        genres_per_user.entry(record.user.as_str())
            .or_insert_with(Vec::new)
            .extend(record.genres.iter().cloned());
    }

    let mut users: Vec<UserGenres> = genres_per_user.into_iter()
        .map(|(user, mut genres)| {
            genres.sort_unstable();
            genres.dedup();
            UserGenres { user: user.to_owned(), genres }
        })
        .collect();

    users.sort_by(|a, b| a.user.cmp(&b.user));

    users
}

/// All 2-combinations of the given elements, each unordered pair exactly once, in the order of
/// their positions.
pub fn pairs<'a, T: Copy>(elements: &'a [T]) -> impl Iterator<Item=(T, T)> + 'a {
    elements.iter()
        .enumerate()
        .flat_map(move |(position, first)| {
            elements[position + 1..].iter().map(move |second| (*first, *second))
        })
}

/// Accumulates the genre co-occurrence matrix and the genre scores over all users. Every user
/// adds one to the score of each of their genres and one to both symmetric matrix cells of each
/// pair of their genres.
pub fn aggregate(vocabulary: &Vocabulary, joined: &[JoinedRecord]) -> Result<GenreModel> {

    let num_genres = vocabulary.len();

    let mut matrix = types::new_dense_matrix(num_genres);
    let mut scores = types::new_dense_vector(num_genres);

    let users = group_by_user(joined);

    let mut num_pairs: u64 = 0;

    for user_genres in users.iter() {

        debug!("Accumulating {} genres of user {}", user_genres.genres.len(), user_genres.user);

        let indices = user_genres.genres.iter()
            .map(|genre| vocabulary.index(*genre).ok_or(Error::UnknownGenre(*genre)))
            .collect::<Result<Vec<usize>>>()?;

        for index in indices.iter() {
            scores[*index] += 1;
        }

        for (first, second) in pairs(&indices) {
            matrix[first][second] += 1;
            matrix[second][first] += 1;
            num_pairs += 1;
        }
    }

    info!(
        "Accumulated {} genre pairs from {} users over {} genres",
        num_pairs,
        users.len(),
        num_genres,
    );

    GenreModel::new(vocabulary.clone(), matrix, scores)?.with_num_users(users.len())
}
