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

use std::path::{Path, PathBuf};
use std::str::FromStr;

use getopts::{Matches, Options};

use crate::genres::GenreParsing;

pub const DEFAULT_PREVIEW_ROWS: usize = 5;

pub const MATRIX_FILE: &str = "similarity_matrix.json";
pub const GENRES_FILE: &str = "genres.json";
pub const SCORES_FILE: &str = "genre_scores.json";

/// What to do with the joined listening data
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Mode {
    /// Accumulate and persist the co-occurrence matrix, vocabulary and scores
    Aggregate,
    /// Print the genre pairs of every user and a preview of the joined data
    Inspect,
}

/// Locations of the three persisted artifacts of a run.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct OutputPaths {
    pub matrix: PathBuf,
    pub genres: PathBuf,
    pub scores: PathBuf,
}

impl OutputPaths {

    pub fn in_directory<P: AsRef<Path>>(directory: P) -> Self {
        let directory = directory.as_ref();

        OutputPaths {
            matrix: directory.join(MATRIX_FILE),
            genres: directory.join(GENRES_FILE),
            scores: directory.join(SCORES_FILE),
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Config {
    pub songs_path: String,
    pub listens_path: String,
    pub output: OutputPaths,
    pub mode: Mode,
    pub preview_rows: usize,
    pub genre_parsing: GenreParsing,
}

/// Command line options understood by the `genreco` binary
pub fn options() -> Options {

    let mut opts = Options::new();
    opts.optopt("s", "songs", "Song catalog (required). A CSV file with a header, which must \
        contain the columns 'song_id' and 'genre_ids'. Genre ids are separated by '|'.", "PATH");
    opts.optopt("l", "listens", "Listening log (required). A CSV file with a header, which must \
        contain the columns 'msno', 'song_id' and 'target'.", "PATH");
    opts.optopt("o", "outputdir", "Directory to write the similarity matrix, genres and genre \
        scores to (optional, defaults to the current directory).", "DIR");
    opts.optflag("", "inspect", "Print the genre pairs of every user and a preview of the \
        joined data instead of computing the matrix.");
    opts.optopt("", "preview-rows", "Number of joined rows to preview in inspect mode \
        (optional, defaults to 5).", "NUMBER");
    opts.optflag("", "lenient-genres", "Skip malformed genre ids instead of aborting.");
    opts.optflag("h", "help", "Print this help menu");

    opts
}

impl Config {

    /// Builds the configuration from parsed options, returns a hint for the user on failure.
    pub fn from_matches(matches: &Matches) -> Result<Self, String> {

        let songs_path = matches.opt_str("s")
            .ok_or_else(|| String::from("Please specify a song catalog via --songs."))?;

        let listens_path = matches.opt_str("l")
            .ok_or_else(|| String::from("Please specify a listening log via --listens."))?;

        let output_directory = matches.opt_str("o").unwrap_or_else(|| String::from("."));

        let mode = if matches.opt_present("inspect") { Mode::Inspect } else { Mode::Aggregate };

        let preview_rows = parse_or_default(matches, "preview-rows", DEFAULT_PREVIEW_ROWS)?;

        let genre_parsing = if matches.opt_present("lenient-genres") {
            GenreParsing::Lenient
        } else {
            GenreParsing::Strict
        };

        Ok(Config {
            songs_path,
            listens_path,
            output: OutputPaths::in_directory(output_directory),
            mode,
            preview_rows,
            genre_parsing,
        })
    }
}

fn parse_or_default<T: FromStr>(matches: &Matches, name: &str, default: T) -> Result<T, String>
    where T::Err: ToString {

    matches.opt_get_default(name, default)
        .map_err(|failure| format!("Problem with option '{}': {}", name, failure.to_string()))
}

#[cfg(test)]
mod tests {

    use super::*;

    fn config(args: &[&str]) -> Result<Config, String> {
        let matches = options().parse(args).unwrap();
        Config::from_matches(&matches)
    }

    #[test]
    fn defaults() {
        let config = config(&["-s", "songs.csv", "-l", "train.csv"]).unwrap();

        assert_eq!(config.songs_path, "songs.csv");
        assert_eq!(config.listens_path, "train.csv");
        assert_eq!(config.mode, Mode::Aggregate);
        assert_eq!(config.preview_rows, DEFAULT_PREVIEW_ROWS);
        assert_eq!(config.genre_parsing, GenreParsing::Strict);
        assert_eq!(config.output, OutputPaths::in_directory("."));
    }

    #[test]
    fn all_options() {
        let config = config(&[
            "--songs", "songs.csv",
            "--listens", "train.csv",
            "--outputdir", "/tmp/out",
            "--inspect",
            "--preview-rows", "12",
            "--lenient-genres",
        ]).unwrap();

        assert_eq!(config.mode, Mode::Inspect);
        assert_eq!(config.preview_rows, 12);
        assert_eq!(config.genre_parsing, GenreParsing::Lenient);
        assert_eq!(config.output.matrix, Path::new("/tmp/out").join(MATRIX_FILE));
        assert_eq!(config.output.genres, Path::new("/tmp/out").join(GENRES_FILE));
        assert_eq!(config.output.scores, Path::new("/tmp/out").join(SCORES_FILE));
    }

    #[test]
    fn required_inputs() {
        assert!(config(&["-s", "songs.csv"]).is_err());
        assert!(config(&["-l", "train.csv"]).is_err());
    }

    #[test]
    fn invalid_preview_rows() {
        let hint = config(&["-s", "a", "-l", "b", "--preview-rows", "many"]).unwrap_err();
        assert!(hint.contains("preview-rows"));
    }
}
