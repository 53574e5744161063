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

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::types::{DenseMatrix, DenseVector, GenreId};
use crate::vocabulary::Vocabulary;

/// Genre co-occurrence matrix, genre vocabulary and genre scores of one run. Position i of the
/// vocabulary corresponds to row and column i of the matrix and to entry i of the scores.
///
/// A freshly aggregated model also knows how many users contributed to it. The persisted
/// artifacts do not carry that number, so loaded models leave it unset.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct GenreModel {
    vocabulary: Vocabulary,
    matrix: DenseMatrix,
    scores: DenseVector,
    num_users: Option<usize>,
}

impl GenreModel {

    pub fn new(vocabulary: Vocabulary, matrix: DenseMatrix, scores: DenseVector) -> Result<Self> {
        let model = GenreModel { vocabulary, matrix, scores, num_users: None };
        model.validate()?;

        Ok(model)
    }

    /// Records the number of users the model was aggregated from. No genre can have been
    /// listened to by more users than that.
    pub fn with_num_users(mut self, num_users: usize) -> Result<Self> {
        self.num_users = Some(num_users);
        self.validate()?;

        Ok(self)
    }

    /// Number of users with at least one positive listening event for a song in the catalog,
    /// if known
    pub fn num_users(&self) -> Option<usize> {
        self.num_users
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn matrix(&self) -> &DenseMatrix {
        &self.matrix
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    /// Checks that matrix and scores line up with the vocabulary, that the matrix is symmetric
    /// with an empty diagonal, and that no pair is counted for more users than either genre.
    pub fn validate(&self) -> Result<()> {

        let num_genres = self.vocabulary.len();

        if self.scores.len() != num_genres {
            return Err(Error::InvalidModel(format!(
                "{} scores for {} genres", self.scores.len(), num_genres)));
        }

        if let Some(num_users) = self.num_users {
            if let Some(score) = self.scores.iter().find(|score| **score as usize > num_users) {
                return Err(Error::InvalidModel(format!(
                    "genre score {} exceeds the number of users {}", score, num_users)));
            }
        }

        if self.matrix.len() != num_genres {
            return Err(Error::InvalidModel(format!(
                "{} matrix rows for {} genres", self.matrix.len(), num_genres)));
        }

        for (row_index, row) in self.matrix.iter().enumerate() {

            if row.len() != num_genres {
                return Err(Error::InvalidModel(format!(
                    "matrix row {} has {} columns instead of {}", row_index, row.len(), num_genres)));
            }

            if row[row_index] != 0 {
                return Err(Error::InvalidModel(format!(
                    "non-zero diagonal entry for genre {}", self.vocabulary.genre(row_index))));
            }

            for (column_index, count) in row.iter().enumerate().skip(row_index + 1) {

                if self.matrix[column_index][row_index] != *count {
                    return Err(Error::InvalidModel(format!(
                        "matrix is not symmetric for genres {} and {}",
                        self.vocabulary.genre(row_index),
                        self.vocabulary.genre(column_index),
                    )));
                }

                if *count > self.scores[row_index].min(self.scores[column_index]) {
                    return Err(Error::InvalidModel(format!(
                        "co-occurrence count of genres {} and {} exceeds their scores",
                        self.vocabulary.genre(row_index),
                        self.vocabulary.genre(column_index),
                    )));
                }
            }
        }

        Ok(())
    }

    /// Number of users who listened to the genre
    pub fn score(&self, genre: GenreId) -> Option<u32> {
        self.vocabulary.index(genre).map(|index| self.scores[index])
    }

    /// Number of users who listened to both genres
    pub fn cooccurrence(&self, genre: GenreId, other_genre: GenreId) -> Option<u32> {
        let index = self.vocabulary.index(genre)?;
        let other_index = self.vocabulary.index(other_genre)?;

        Some(self.matrix[index][other_index])
    }

    /// The at most `k` genres which co-occur most often with the given genre, most frequent
    /// first. Genres which never co-occur with it are left out.
    pub fn related(&self, genre: GenreId, k: usize) -> Vec<(GenreId, u32)> {

        let index = match self.vocabulary.index(genre) {
            Some(index) => index,
            None => return Vec::new(),
        };

        let mut heap = BinaryHeap::with_capacity(k);

        for (other_index, count) in self.matrix[index].iter().enumerate() {

            if *count == 0 {
                continue;
            }

            let counted_genre = CountedGenre {
                genre: self.vocabulary.genre(other_index),
                count: *count,
            };

            if heap.len() < k {
                heap.push(counted_genre);
            } else if let Some(mut top) = heap.peek_mut() {
                if counted_genre < *top {
                    *top = counted_genre;
                }
            }
        }

        heap.into_sorted_vec()
            .into_iter()
            .map(|counted_genre| (counted_genre.genre, counted_genre.count))
            .collect()
    }
}

/// Heap entry for the top-k search, the weakest entry is the greatest, so that it sits on top
/// of the max-heap. Ties in the count are broken in favor of the smaller genre id.
#[derive(PartialEq, Eq, Debug)]
struct CountedGenre {
    genre: GenreId,
    count: u32,
}

impl Ord for CountedGenre {
    fn cmp(&self, other: &Self) -> Ordering {
        other.count.cmp(&self.count).then(self.genre.cmp(&other.genre))
    }
}

impl PartialOrd for CountedGenre {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}
