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
use tracing::{debug, warn};

use crate::types::{JoinedRecord, ListeningEvent, Song, SongIndex};

/// Indexes the genres of the catalog by song id. Should a song id occur more than once, the
/// genres of all its rows are merged, so a listen counts for every genre the song was tagged with.
pub fn song_index(songs: &[Song]) -> SongIndex {

    let mut index: SongIndex =
        FnvHashMap::with_capacity_and_hasher(songs.len(), Default::default());

    for song in songs.iter() {
        match index.get_mut(&song.song_id) {
            Some(genres) => {
                warn!("Merging genres of duplicate catalog entry for song {}", song.song_id);
                genres.extend(song.genres.iter().cloned());
            }
            None => {
                index.insert(song.song_id.clone(), song.genres.clone());
            }
        }
    }

    index
}

/// Attaches the genres of its song to every positive listening event. Negative events and events
/// for songs missing from the catalog are dropped. The output keeps the order of the events.
pub fn join(events: &[ListeningEvent], songs: &SongIndex) -> Vec<JoinedRecord> {

    let mut joined = Vec::with_capacity(events.len());
    let mut num_unmatched: u64 = 0;

    for event in events.iter().filter(|event| event.is_positive()) {
        match songs.get(&event.song_id) {
            Some(genres) => joined.push(JoinedRecord {
                user: event.user.clone(),
                song_id: event.song_id.clone(),
                genres: genres.clone(),
            }),
            None => num_unmatched += 1,
        }
    }

    debug!(
        "Joined {} of {} listening events, {} positive events referenced unknown songs",
        joined.len(),
        events.len(),
        num_unmatched,
    );

    joined
}
