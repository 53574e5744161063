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
use std::io::Write;

use crate::aggregate;
use crate::types::{JoinedRecord, UserGenres};

/// Writes every unordered genre pair of every user, one `(first, second)` pair per line.
/// Returns the number of pairs written.
pub fn write_pairs<W: Write>(users: &[UserGenres], out: &mut W) -> io::Result<u64> {

    let mut num_pairs: u64 = 0;

    for user_genres in users.iter() {
        for (first, second) in aggregate::pairs(&user_genres.genres) {
            writeln!(out, "({}, {})", first, second)?;
            num_pairs += 1;
        }
    }

    Ok(num_pairs)
}

/// Writes the first `num_rows` joined records as a tab separated table with a header.
pub fn write_preview<W: Write>(
    joined: &[JoinedRecord],
    num_rows: usize,
    out: &mut W,
) -> io::Result<()> {

    writeln!(out, "\tmsno\tsong_id\tgenre_ids")?;

    for (row, record) in joined.iter().take(num_rows).enumerate() {
        writeln!(out, "{}\t{}\t{}\t{:?}", row, record.user, record.song_id, record.genres)?;
    }

    Ok(())
}
