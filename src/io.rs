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

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_derive::Deserialize;

use crate::config::OutputPaths;
use crate::error::Result;
use crate::genres::{self, GenreParsing};
use crate::model::GenreModel;
use crate::types::{DenseMatrix, DenseVector, GenreId, ListeningEvent, Song};
use crate::vocabulary::Vocabulary;

/// Creates a reader for CSV input. We expect a header line, columns are matched by name and
/// columns we do not need are ignored.
pub fn csv_reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input)
}

pub fn csv_reader_from_path<P: AsRef<Path>>(path: P) -> Result<csv::Reader<File>> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    Ok(reader)
}

/// Row of the song catalog, we only care about the identifier and the genres.
#[derive(Deserialize)]
struct SongRecord {
    song_id: String,
    genre_ids: Option<String>,
}

pub fn read_songs<R: Read>(
    reader: &mut csv::Reader<R>,
    genre_parsing: GenreParsing,
) -> Result<Vec<Song>> {

    let mut songs = Vec::new();

    for result in reader.deserialize() {
        let record: SongRecord = result?;
        let genres = genres::parse_genre_ids(
            &record.song_id,
            record.genre_ids.as_ref().map(String::as_str),
            genre_parsing,
        )?;

        songs.push(Song { song_id: record.song_id, genres });
    }

    Ok(songs)
}

pub fn read_listening_events<R: Read>(reader: &mut csv::Reader<R>) -> Result<Vec<ListeningEvent>> {
    let mut events = Vec::new();

    for result in reader.deserialize() {
        let event: ListeningEvent = result?;
        events.push(event);
    }

    Ok(events)
}

pub fn write_json<W: Write, T: Serialize + ?Sized>(value: &T, out: W) -> Result<()> {
    let mut out = BufWriter::new(out);
    serde_json::to_writer(&mut out, value)?;
    out.flush()?;

    Ok(())
}

fn write_json_file<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    write_json(value, File::create(path)?)
}

fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let reader = BufReader::new(File::open(path)?);
    let value = serde_json::from_reader(reader)?;

    Ok(value)
}

/// Persists the co-occurrence matrix (as an array of rows), the vocabulary (as an array of genre
/// ids) and the scores (as an array of counts) to three separate JSON files.
pub fn write_model(model: &GenreModel, paths: &OutputPaths) -> Result<()> {
    write_json_file(model.matrix(), &paths.matrix)?;
    write_json_file(model.vocabulary().genres(), &paths.genres)?;
    write_json_file(model.scores(), &paths.scores)?;

    Ok(())
}

/// Loads the artifacts written by `write_model` and checks that they still line up.
pub fn read_model(paths: &OutputPaths) -> Result<GenreModel> {
    let matrix: DenseMatrix = read_json_file(&paths.matrix)?;
    let genres: Vec<GenreId> = read_json_file(&paths.genres)?;
    let scores: DenseVector = read_json_file(&paths.scores)?;

    GenreModel::new(Vocabulary::from_persisted(genres)?, matrix, scores)
}
