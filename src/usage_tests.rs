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

#[cfg(test)]
mod tests {

    use rand::{Rng, XorShiftRng};
    use fnv::{FnvHashMap, FnvHashSet};

    use crate::{genre_model, joined_records};
    use crate::aggregate;
    use crate::genres::GenreParsing;
    use crate::inspect;
    use crate::io;
    use crate::types::{GenreId, ListeningEvent, Song};

    fn song(song_id: &str, genres: &[GenreId]) -> Song {
        Song { song_id: song_id.to_owned(), genres: genres.to_vec() }
    }

    #[test]
    fn programmatic_usage() {

        /* The catalog tells us which genres each song belongs to, the listening log tells us
           which user listened to which song, and whether that was a positive interaction. */
        let songs = io::read_songs(
            &mut io::csv_reader("song_id,genre_ids\nsong1,10|20\nsong2,20|30\n".as_bytes()),
            GenreParsing::Strict,
        ).unwrap();

        let events = io::read_listening_events(
            &mut io::csv_reader("msno,song_id,target\nuserA,song1,1\nuserA,song2,1\n".as_bytes())
        ).unwrap();

        let model = genre_model(&songs, &events).unwrap();

        assert_eq!(model.num_users(), Some(1));
        assert_eq!(model.vocabulary().genres(), &[10, 20, 30]);
        assert_eq!(model.scores(), &[1, 1, 1]);
        assert_eq!(model.matrix(), &vec![vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]]);
    }

    #[test]
    fn negative_events_are_ignored() {
        let songs = vec![song("song1", &[10, 20]), song("song2", &[20, 30])];

        let with_negative = vec![
            ListeningEvent::new("userA", "song1", 1),
            ListeningEvent::new("userA", "song2", 0),
            ListeningEvent::new("userB", "song2", 0),
        ];
        let without_negative = vec![ListeningEvent::new("userA", "song1", 1)];

        let model = genre_model(&songs, &with_negative).unwrap();

        assert_eq!(model, genre_model(&songs, &without_negative).unwrap());
        assert_eq!(model.score(30), Some(0));
        assert_eq!(model.cooccurrence(10, 20), Some(1));
        assert_eq!(model.cooccurrence(20, 30), Some(0));
    }

    #[test]
    fn unknown_songs_are_ignored() {
        let songs = vec![song("song1", &[10, 20])];

        let with_unknown = vec![
            ListeningEvent::new("userA", "song1", 1),
            ListeningEvent::new("userA", "not-in-catalog", 1),
            ListeningEvent::new("userB", "not-in-catalog", 1),
        ];
        let known_only = vec![ListeningEvent::new("userA", "song1", 1)];

        assert_eq!(
            genre_model(&songs, &with_unknown).unwrap(),
            genre_model(&songs, &known_only).unwrap()
        );
    }

    #[test]
    fn empty_inputs() {
        let model = genre_model(&[], &[]).unwrap();
        assert_eq!(model.num_users(), Some(0));
        assert!(model.vocabulary().is_empty());
        assert!(model.matrix().is_empty());
        assert!(model.scores().is_empty());

        let model = genre_model(&[song("song1", &[1, 2])], &[]).unwrap();
        assert_eq!(model.scores(), &[0, 0]);
        assert_eq!(model.matrix(), &vec![vec![0, 0], vec![0, 0]]);
    }

    #[test]
    fn runs_are_reproducible() {
        let songs = vec![song("a", &[5, 3]), song("b", &[9, 3, 1]), song("c", &[])];
        let events = vec![
            ListeningEvent::new("u2", "b", 1),
            ListeningEvent::new("u1", "a", 1),
            ListeningEvent::new("u1", "b", 1),
            ListeningEvent::new("u3", "c", 1),
        ];

        let first = genre_model(&songs, &events).unwrap();
        let second = genre_model(&songs, &events).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.vocabulary().genres(), &[1, 3, 5, 9]);
    }

    #[test]
    fn inspecting_pairs_and_preview() {

        let songs = io::read_songs(
            &mut io::csv_reader("song_id,genre_ids\ns1,3|1\ns2,2\ns3,9\ns4,\n".as_bytes()),
            GenreParsing::Strict,
        ).unwrap();

        /* The event for s3 is negative and s5 is not in the catalog, so genre 9 never shows up. */
        let events = io::read_listening_events(&mut io::csv_reader("msno,song_id,target
bob,s2,1
alice,s1,1
bob,s3,0
alice,s2,1
carol,s5,1
bob,s4,1
alice,s1,1
".as_bytes())).unwrap();

        let joined = joined_records(&songs, &events);
        let users = aggregate::group_by_user(&joined);

        assert_eq!(users.len(), 2);

        let mut pairs = Vec::new();
        let num_pairs = inspect::write_pairs(&users, &mut pairs).unwrap();

        assert_eq!(num_pairs, 3);
        assert_eq!(String::from_utf8(pairs).unwrap(), "(1, 2)\n(1, 3)\n(2, 3)\n");

        let mut preview = Vec::new();
        inspect::write_preview(&joined, 3, &mut preview).unwrap();

        assert_eq!(
            String::from_utf8(preview).unwrap(),
            "\tmsno\tsong_id\tgenre_ids\n\
             0\tbob\ts2\t[2]\n\
             1\talice\ts1\t[3, 1]\n\
             2\talice\ts2\t[2]\n"
        );

        let model = genre_model(&songs, &events).unwrap();
        assert_eq!(model.num_users(), Some(2));
        assert_eq!(model.score(9), Some(0));
    }

    /* Compares the aggregation against a direct count over random catalogs and logs. */
    #[test]
    fn matches_brute_force_counts() {

        let mut rng = XorShiftRng::new_unseeded();

        for _ in 0..20 {

            let num_songs: usize = rng.gen_range(1, 30);
            let songs: Vec<Song> = (0..num_songs)
                .map(|n| {
                    let num_genres: usize = rng.gen_range(0, 4);
                    let genres: Vec<GenreId> = (0..num_genres)
                        .map(|_| rng.gen_range(100, 112))
                        .collect();
                    song(&format!("song{}", n), &genres)
                })
                .collect();

            let num_events: usize = rng.gen_range(0, 200);
            let events: Vec<ListeningEvent> = (0..num_events)
                .map(|_| {
                    let user = format!("user{}", rng.gen_range(0, 15));
                    /* Some song ids are outside of the catalog */
                    let song_id = format!("song{}", rng.gen_range(0, num_songs + 5));
                    let target = rng.gen_range(0, 2);
                    ListeningEvent { user, song_id, target }
                })
                .collect();

            let model = genre_model(&songs, &events).unwrap();

            let catalog: FnvHashMap<&str, &Vec<GenreId>> = songs.iter()
                .map(|song| (song.song_id.as_str(), &song.genres))
                .collect();

            let mut user_genres: FnvHashMap<&str, FnvHashSet<GenreId>> = FnvHashMap::default();
            for event in events.iter().filter(|event| event.target == 1) {
                if let Some(genres) = catalog.get(event.song_id.as_str()) {
                    user_genres.entry(event.user.as_str())
                        .or_insert_with(FnvHashSet::default)
                        .extend(genres.iter().cloned());
                }
            }

            let vocabulary = model.vocabulary().genres();

            for (i, genre) in vocabulary.iter().enumerate() {
                let expected_score = user_genres.values()
                    .filter(|genres| genres.contains(genre))
                    .count();
                assert_eq!(model.scores()[i] as usize, expected_score);

                for (j, other_genre) in vocabulary.iter().enumerate() {
                    let expected_count = if i == j {
                        0
                    } else {
                        user_genres.values()
                            .filter(|genres| genres.contains(genre) && genres.contains(other_genre))
                            .count()
                    };
                    assert_eq!(model.matrix()[i][j] as usize, expected_count);
                }
            }

            let total_pairs: usize = model.matrix().iter()
                .map(|row| row.iter().map(|count| *count as usize).sum::<usize>())
                .sum();
            let expected_pairs: usize = user_genres.values()
                .map(|genres| genres.len() * genres.len().saturating_sub(1) / 2)
                .sum();
            assert_eq!(total_pairs, 2 * expected_pairs);
        }
    }
}
