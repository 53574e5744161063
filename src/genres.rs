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

use tracing::warn;

use crate::error::{Error, Result};
use crate::types::GenreId;

/// Separator between genre ids in the `genre_ids` column of the song catalog
pub const GENRE_SEPARATOR: char = '|';

/// How to deal with tokens in a genre field that are not integer genre ids.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum GenreParsing {
    /// Fail on the first malformed token
    Strict,
    /// Skip malformed tokens and keep the rest of the field
    Lenient,
}

impl Default for GenreParsing {
    fn default() -> Self {
        GenreParsing::Strict
    }
}

/// Parses a `|`-separated genre field into genre ids. A missing or blank field yields no genres.
/// Tokens are trimmed before parsing, an empty token (as in `12||13`) counts as malformed.
pub fn parse_genre_ids(
    song_id: &str,
    field: Option<&str>,
    parsing: GenreParsing,
) -> Result<Vec<GenreId>> {

    let field = match field {
        Some(field) if !field.trim().is_empty() => field,
        _ => return Ok(Vec::new()),
    };

    let mut genres = Vec::with_capacity(4);

    for token in field.split(GENRE_SEPARATOR) {
        match token.trim().parse::<GenreId>() {
            Ok(genre) => genres.push(genre),
            Err(_) => match parsing {
                GenreParsing::Strict => {
                    return Err(Error::MalformedGenre {
                        song_id: song_id.to_owned(),
                        token: token.to_owned(),
                    });
                }
                GenreParsing::Lenient => {
                    warn!("Skipping malformed genre id '{}' of song {}", token, song_id);
                }
            },
        }
    }

    Ok(genres)
}
