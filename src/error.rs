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

use std::io;

use thiserror::Error;

use crate::types::GenreId;

/// Errors that can occur while reading inputs, aggregating genres or persisting the results.
#[derive(Error, Debug)]
pub enum Error {

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A token of a song's genre field is not an integer genre id
    #[error("Malformed genre id '{token}' for song {song_id}")]
    MalformedGenre { song_id: String, token: String },

    /// A joined genre has no index in the vocabulary
    #[error("Genre {0} is not part of the vocabulary")]
    UnknownGenre(GenreId),

    /// Matrix, vocabulary and scores do not line up
    #[error("Invalid genre model: {0}")]
    InvalidModel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
