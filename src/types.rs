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
use serde::Deserializer;
use serde::de::Error as _;
use serde_derive::Deserialize;

pub type GenreId = i64;

pub type DenseVector = Vec<u32>;
pub type DenseMatrix = Vec<DenseVector>;

/// Genre ids per song, keyed by song id
pub type SongIndex = FnvHashMap<String, Vec<GenreId>>;

pub fn new_dense_vector(dimensions: usize) -> DenseVector {
    vec![0; dimensions]
}

pub fn new_dense_matrix(dimensions: usize) -> DenseMatrix {
    vec![new_dense_vector(dimensions); dimensions]
}

/// A song from the catalog together with its parsed genre ids, in the order they were listed.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Song {
    pub song_id: String,
    pub genres: Vec<GenreId>,
}

/// A single row of the listening log. Field names follow the columns of the input file.
#[derive(Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct ListeningEvent {
    #[serde(rename = "msno")]
    pub user: String,
    pub song_id: String,
    #[serde(deserialize_with = "deserialize_target")]
    pub target: u8,
}

/// Reads the target flag. Exports of the listening log sometimes write the flag as a float, so
/// `1.0` and `0.0` are accepted as well; anything other than zero or one is rejected.
fn deserialize_target<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let raw: String = serde::Deserialize::deserialize(deserializer)?;

    match raw.trim().parse::<f64>() {
        Ok(value) if value == 0.0 => Ok(0),
        Ok(value) if value == 1.0 => Ok(1),
        _ => Err(D::Error::custom(format!("target must be 0 or 1, found '{}'", raw))),
    }
}

impl ListeningEvent {

    pub fn new(user: &str, song_id: &str, target: u8) -> Self {
        ListeningEvent { user: user.to_owned(), song_id: song_id.to_owned(), target }
    }

    /// Only events with a target of exactly 1 count as positive interactions
    pub fn is_positive(&self) -> bool {
        self.target == 1
    }
}

/// A positive listening event enriched with the genres of its song.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct JoinedRecord {
    pub user: String,
    pub song_id: String,
    pub genres: Vec<GenreId>,
}

/// The distinct genres a user listened to, sorted ascending.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct UserGenres {
    pub user: String,
    pub genres: Vec<GenreId>,
}
