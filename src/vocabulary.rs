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

use crate::error::{Error, Result};
use crate::types::{GenreId, Song};

/// The distinct genre ids of a catalog in ascending order. The position of a genre in the
/// vocabulary is its row and column in the co-occurrence matrix and its entry in the scores.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct Vocabulary {
    genres: Vec<GenreId>,
    index: FnvHashMap<GenreId, usize>,
}

impl Vocabulary {

    pub fn from_songs(songs: &[Song]) -> Self {
        let genres = songs.iter()
            .flat_map(|song| song.genres.iter().cloned())
            .collect();

        Vocabulary::from_genres(genres)
    }

    /// Builds a vocabulary from arbitrary genre ids, duplicates are removed.
    pub fn from_genres(mut genres: Vec<GenreId>) -> Self {
        genres.sort_unstable();
        genres.dedup();

        Vocabulary::with_sorted_genres(genres)
    }

    /// Restores a persisted vocabulary. The ids must be strictly ascending, as we would
    /// otherwise silently change the meaning of the matrix and score positions.
    pub fn from_persisted(genres: Vec<GenreId>) -> Result<Self> {
        if let Some(window) = genres.windows(2).find(|window| window[0] >= window[1]) {
            return Err(Error::InvalidModel(format!(
                "genre vocabulary is not strictly ascending at {} -> {}", window[0], window[1])));
        }

        Ok(Vocabulary::with_sorted_genres(genres))
    }

    fn with_sorted_genres(genres: Vec<GenreId>) -> Self {
        let mut index = FnvHashMap::with_capacity_and_hasher(genres.len(), Default::default());
        for (position, genre) in genres.iter().enumerate() {
            index.insert(*genre, position);
        }

        Vocabulary { genres, index }
    }

    pub fn len(&self) -> usize {
        self.genres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }

    pub fn index(&self, genre: GenreId) -> Option<usize> {
        self.index.get(&genre).cloned()
    }

    pub fn genre(&self, index: usize) -> GenreId {
        self.genres[index]
    }

    pub fn genres(&self) -> &[GenreId] {
        &self.genres
    }
}
