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

use std::env;
use std::error::Error;
use std::io::stdout;
use std::process;

use getopts::Options;
use tracing::{error, info};

use genreco::aggregate;
use genreco::config::{self, Config, Mode};
use genreco::inspect;
use genreco::io;
use genreco::types::{ListeningEvent, Song};

fn main() {

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let opts = config::options();

    let matches = match opts.parse(&args[1..]) {
        Ok(matches) => matches,
        Err(failure) => {
            let hint = failure.to_string();
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    if matches.opt_present("h") {
        print_usage(&program, &opts, None);
        return;
    }

    let config = match Config::from_matches(&matches) {
        Ok(config) => config,
        Err(hint) => return print_usage_and_exit(&program, opts, Some(&hint)),
    };

    if let Err(failure) = run(&config) {
        error!("{}", failure);
        process::exit(1);
    }
}

fn print_usage(program: &str, opts: &Options, hint: Option<&str>) {

    if let Some(hint) = hint {
        eprintln!("\n{}\n", hint);
    }

    let brief = format!("Usage: {} [options]", program);
    eprint!("{}", opts.usage(&brief));
}

fn print_usage_and_exit(program: &str, opts: Options, hint: Option<&str>) {
    print_usage(program, &opts, hint);
    process::exit(2);
}

fn run(config: &Config) -> Result<(), Box<dyn Error>> {

    info!("Reading song catalog from {}", config.songs_path);
    let mut songs_reader = io::csv_reader_from_path(&config.songs_path)?;
    let songs: Vec<Song> = io::read_songs(&mut songs_reader, config.genre_parsing)?;

    info!("Reading listening log from {}", config.listens_path);
    let mut listens_reader = io::csv_reader_from_path(&config.listens_path)?;
    let events: Vec<ListeningEvent> = io::read_listening_events(&mut listens_reader)?;

    info!("Found {} songs and {} listening events.", songs.len(), events.len());

    match config.mode {
        Mode::Aggregate => {
            let model = genreco::genre_model(&songs, &events)?;

            info!(
                "Writing similarity matrix, genres and genre scores to {}, {} and {}",
                config.output.matrix.display(),
                config.output.genres.display(),
                config.output.scores.display(),
            );
            io::write_model(&model, &config.output)?;
        },
        Mode::Inspect => {
            let joined = genreco::joined_records(&songs, &events);
            let users = aggregate::group_by_user(&joined);

            let out = stdout();
            let mut out = out.lock();

            let num_pairs = inspect::write_pairs(&users, &mut out)?;
            inspect::write_preview(&joined, config.preview_rows, &mut out)?;

            info!("Listed {} genre pairs of {} users", num_pairs, users.len());
        },
    }

    Ok(())
}
