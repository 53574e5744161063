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

pub mod types;
pub mod error;
pub mod genres;
pub mod vocabulary;
pub mod join;
pub mod aggregate;
pub mod model;
pub mod io;
pub mod inspect;
pub mod config;
mod usage_tests;

use tracing::info;

use crate::error::Result;
use crate::model::GenreModel;
use crate::types::{JoinedRecord, ListeningEvent, Song};
use crate::vocabulary::Vocabulary;

/// Computes the genre co-occurrence matrix and the genre scores for a song catalog and a
/// listening log. Only positive listening events for songs in the catalog are taken into account.
pub fn genre_model(songs: &[Song], events: &[ListeningEvent]) -> Result<GenreModel> {

    let vocabulary = Vocabulary::from_songs(songs);
    info!("Found {} distinct genres in {} songs", vocabulary.len(), songs.len());

    let joined = joined_records(songs, events);

    aggregate::aggregate(&vocabulary, &joined)
}

/// Positive listening events for songs in the catalog, together with the genres of their songs.
pub fn joined_records(songs: &[Song], events: &[ListeningEvent]) -> Vec<JoinedRecord> {

    let song_index = join::song_index(songs);
    let joined = join::join(events, &song_index);
    info!("{} of {} listening events are positive and refer to known songs",
        joined.len(), events.len());

    joined
}
