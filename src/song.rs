use log::trace;

use crate::consts::*;
use crate::error::Error;
use crate::hal::Sound;
use crate::pitch;

/// Maps the duration code of a note to a hold time in milliseconds.
#[derive(Debug, Clone, Copy)]
pub struct DurationTable<'a> {
    millis: &'a [u16],
}

impl<'a> DurationTable<'a> {
    pub const fn new(millis: &'a [u16]) -> Self {
        DurationTable { millis }
    }

    pub fn get(&self, code: u8) -> Option<u32> {
        self.millis.get(usize::from(code)).map(|&ms| u32::from(ms))
    }

    /// Like `get`, but unknown codes hold for zero milliseconds.
    pub fn millis(&self, code: u8) -> u32 {
        self.get(code).unwrap_or(0)
    }
}

/// One step of the melody: a pitch for each voice and how long to hold it.
///
/// Pitches are MIDI note numbers, and 0 silences the voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    pub pitches: [u8; NUM_VOICES],
    pub duration: u8,
}

impl Note {
    /// Unpack a note from its `NOTE_LENGTH` byte form.
    fn from_bytes(bytes: &[u8]) -> Note {
        let mut pitches = [0; NUM_VOICES];
        pitches.copy_from_slice(&bytes[..NUM_VOICES]);

        Note {
            pitches,
            duration: bytes[NUM_VOICES],
        }
    }

    pub fn frequencies(&self) -> [u16; NUM_VOICES] {
        let mut frequencies = [0; NUM_VOICES];
        for (frequency, &pitch) in frequencies.iter_mut().zip(self.pitches.iter()) {
            *frequency = pitch::frequency(pitch);
        }

        frequencies
    }
}

/// Position of the next note to play: an index into the song's sequence and
/// a note index within the measure found there.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub position: usize,
    pub note: usize,
}

impl Cursor {
    pub const START: Cursor = Cursor {
        position: 0,
        note: 0,
    };
}

/// A `Song` is a table of measures and the order to play them in.
///
/// Each measure is a flat byte slice holding `NOTE_LENGTH` bytes per note.
/// The slice length is the measure's limit; a trailing partial note is
/// ignored. A measure may be empty. The sequence lists measure indices and
/// repeats forever.
#[derive(Debug, Clone, Copy)]
pub struct Song<'a> {
    measures: &'a [&'a [u8]],
    sequence: &'a [u8],
    durations: DurationTable<'a>,
}

impl<'a> Song<'a> {
    /// Create a new `Song`.
    ///
    /// ```rust
    /// use nyanbadge::Song;
    ///
    /// // Two notes of A4 over A3, then a rest.
    /// static MEASURE: [u8; 8] = [69, 57, 0, 1, 0, 0, 0, 2];
    /// static SONG: Song = Song::new(&[&MEASURE], &[0], &[0, 100, 200]);
    ///
    /// assert_eq!(SONG.validate(), Ok(()));
    /// assert_eq!(SONG.total_notes(), 2);
    /// ```
    pub const fn new(measures: &'a [&'a [u8]], sequence: &'a [u8], durations: &'a [u16]) -> Self {
        Song {
            measures,
            sequence,
            durations: DurationTable::new(durations),
        }
    }

    pub fn durations(&self) -> DurationTable<'a> {
        self.durations
    }

    /// Number of entries in the play order.
    pub fn sequence_len(&self) -> usize {
        self.sequence.len()
    }

    /// The measure played at sequence `position`. Positions past the end of
    /// the sequence, and sequence entries naming a missing measure, are empty.
    pub fn measure(&self, position: usize) -> &'a [u8] {
        self.sequence
            .get(position)
            .and_then(|&index| self.measures.get(usize::from(index)))
            .copied()
            .unwrap_or(&[])
    }

    pub fn note_count(&self, position: usize) -> usize {
        self.measure(position).len() / NOTE_LENGTH
    }

    pub fn note(&self, cursor: Cursor) -> Option<Note> {
        let start = cursor.note.checked_mul(NOTE_LENGTH)?;
        let end = start.checked_add(NOTE_LENGTH)?;
        self.measure(cursor.position)
            .get(start..end)
            .map(Note::from_bytes)
    }

    /// Number of notes in one full pass over the sequence.
    pub fn total_notes(&self) -> usize {
        (0..self.sequence.len()).map(|i| self.note_count(i)).sum()
    }

    /// Play the note at `cursor` (or the first note after it, skipping empty
    /// measures) on `sound`.
    ///
    /// Returns how long to hold the note, and the cursor of the note that
    /// follows it. Returns `None` without touching `sound` when no measure in
    /// the song has any notes.
    pub fn advance<S: Sound>(&self, cursor: Cursor, sound: &mut S) -> Option<(u32, Cursor)> {
        let cursor = self.playable(cursor)?;
        let note = self.note(cursor)?;

        for (voice, &frequency) in note.frequencies().iter().enumerate() {
            sound.set_voice_frequency(voice, frequency);
        }
        let duration = self.durations.millis(note.duration);
        trace!("note {:?} at {:?} for {}ms", note.pitches, cursor, duration);

        Some((duration, self.next(cursor)))
    }

    /// The cursor following `cursor`, which must address a note.
    ///
    /// Empty measures later in the sequence are stepped over, but the search
    /// stops at the end of the sequence: the cursor always comes back to
    /// `Cursor::START` once per pass, even when the first measure is empty.
    fn next(&self, cursor: Cursor) -> Cursor {
        if cursor.note + 1 < self.note_count(cursor.position) {
            return Cursor {
                note: cursor.note + 1,
                ..cursor
            };
        }

        let position = (cursor.position + 1..self.sequence.len())
            .find(|&position| self.note_count(position) > 0)
            .unwrap_or(0);

        Cursor { position, note: 0 }
    }

    /// First cursor at or after `cursor` that addresses a note, searching at
    /// most one full pass over the sequence.
    fn playable(&self, cursor: Cursor) -> Option<Cursor> {
        if self.note(cursor).is_some() {
            return Some(cursor);
        }

        let len = self.sequence.len();
        (1..=len)
            .map(|step| (cursor.position % len + step) % len)
            .find(|&position| self.note_count(position) > 0)
            .map(|position| Cursor { position, note: 0 })
    }

    /// Check that the sequence is non-empty, every sequence entry names an
    /// existing measure, and every note uses a known duration code.
    pub fn validate(&self) -> Result<(), Error> {
        if self.sequence.is_empty() {
            return Err(Error::EmptySequence);
        }

        for (position, &measure) in self.sequence.iter().enumerate() {
            if usize::from(measure) >= self.measures.len() {
                return Err(Error::InvalidMeasure { position, measure });
            }
        }

        for (measure, bytes) in self.measures.iter().enumerate() {
            for (note, bytes) in bytes.chunks_exact(NOTE_LENGTH).enumerate() {
                let code = Note::from_bytes(bytes).duration;
                if self.durations.get(code).is_none() {
                    return Err(Error::InvalidDuration {
                        measure,
                        note,
                        code,
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::mock::RecordingSound;

    const DURATIONS: &[u16] = &[0, 50, 100, 150, 200];

    const FOUR_NOTES: &[u8] = &[
        69, 57, 45, 2, //
        71, 59, 0, 2, //
        72, 60, 48, 3, //
        0, 0, 0, 1,
    ];
    const TWO_NOTES: &[u8] = &[64, 0, 0, 4, 62, 0, 0, 1];
    const EMPTY: &[u8] = &[];

    #[test]
    fn durations() {
        let table = DurationTable::new(DURATIONS);

        assert_eq!(table.get(3), Some(150));
        assert_eq!(table.get(5), None);
        assert_eq!(table.millis(5), 0);
    }

    #[test]
    fn note_frequencies() {
        let song = Song::new(&[FOUR_NOTES], &[0], DURATIONS);
        let note = song.note(Cursor::START).unwrap();

        assert_eq!(note.pitches, [69, 57, 45]);
        assert_eq!(note.duration, 2);
        assert_eq!(note.frequencies(), [440, 220, 110]);
    }

    #[test]
    fn partial_note_ignored() {
        let song = Song::new(&[&[69, 0, 0, 1, 70, 0]], &[0], DURATIONS);

        assert_eq!(song.note_count(0), 1);
        assert_eq!(song.note(Cursor { position: 0, note: 1 }), None);
    }

    #[test]
    fn single_measure_durations() {
        let song = Song::new(&[FOUR_NOTES], &[0], DURATIONS);
        let mut sound = RecordingSound::default();
        let mut cursor = Cursor::START;
        let mut durations = [0; 4];

        for duration in durations.iter_mut() {
            let (ms, next) = song.advance(cursor, &mut sound).unwrap();
            *duration = ms;
            cursor = next;
        }

        assert_eq!(durations, [100, 100, 150, 50]);
        assert_eq!(cursor, Cursor::START);
        assert_eq!(sound.voices, [0, 0, 0]);
    }

    #[test]
    fn measure_rolls_over() {
        let song = Song::new(&[FOUR_NOTES, TWO_NOTES], &[0, 1], DURATIONS);
        let mut sound = RecordingSound::default();
        let mut cursor = Cursor::START;

        for _ in 0..4 {
            cursor = song.advance(cursor, &mut sound).unwrap().1;
        }
        assert_eq!(cursor, Cursor { position: 1, note: 0 });

        let (ms, cursor) = song.advance(cursor, &mut sound).unwrap();
        assert_eq!(ms, 200);
        assert_eq!(sound.voices, [pitch::frequency(64), 0, 0]);
        assert_eq!(cursor, Cursor { position: 1, note: 1 });
    }

    #[test]
    fn full_song_cycles() {
        let song = Song::new(&[FOUR_NOTES, TWO_NOTES], &[0, 1, 1, 0, 1], DURATIONS);
        let mut sound = RecordingSound::default();
        let mut cursor = Cursor::START;

        assert_eq!(song.total_notes(), 14);
        for i in 0..song.total_notes() {
            if i > 0 {
                assert_ne!(cursor, Cursor::START);
            }
            cursor = song.advance(cursor, &mut sound).unwrap().1;
        }
        assert_eq!(cursor, Cursor::START);
    }

    #[test]
    fn empty_measures_skipped() {
        let song = Song::new(&[FOUR_NOTES, EMPTY, TWO_NOTES], &[1, 0, 1, 1, 2, 1], DURATIONS);
        let mut sound = RecordingSound::default();

        // The starting measure is empty, so the first note comes from position 1.
        let (ms, cursor) = song.advance(Cursor::START, &mut sound).unwrap();
        assert_eq!(ms, 100);
        assert_eq!(cursor, Cursor { position: 1, note: 1 });

        let mut cursor = Cursor { position: 1, note: 3 };
        cursor = song.advance(cursor, &mut sound).unwrap().1;
        assert_eq!(cursor, Cursor { position: 4, note: 0 });

        cursor = song.advance(cursor, &mut sound).unwrap().1;
        cursor = song.advance(cursor, &mut sound).unwrap().1;
        // The trailing empty measure is dropped and the cursor wraps to the top.
        assert_eq!(cursor, Cursor::START);

        // Playing from the top steps over the leading empty measure.
        let (ms, cursor) = song.advance(cursor, &mut sound).unwrap();
        assert_eq!(ms, 100);
        assert_eq!(cursor, Cursor { position: 1, note: 1 });
    }

    #[test]
    fn leading_empty_measure_cycles() {
        let song = Song::new(&[EMPTY, &[69, 0, 0, 1, 70, 0, 0, 1]], &[0, 1], DURATIONS);
        let mut sound = RecordingSound::default();
        let mut cursor = Cursor::START;

        assert_eq!(song.total_notes(), 2);
        for _ in 0..song.total_notes() {
            cursor = song.advance(cursor, &mut sound).unwrap().1;
        }
        assert_eq!(cursor, Cursor::START);
        assert_eq!(sound.voices, [pitch::frequency(70), 0, 0]);
    }

    #[test]
    fn trailing_empty_measure_cycles() {
        let song = Song::new(&[TWO_NOTES, EMPTY], &[0, 1, 0, 1], DURATIONS);
        let mut sound = RecordingSound::default();
        let mut cursor = Cursor::START;

        for _ in 0..song.total_notes() {
            cursor = song.advance(cursor, &mut sound).unwrap().1;
        }
        assert_eq!(cursor, Cursor::START);
    }

    #[test]
    fn huge_note_index_is_absent() {
        let song = Song::new(&[FOUR_NOTES], &[0], DURATIONS);
        let cursor = Cursor {
            position: usize::MAX,
            note: usize::MAX / NOTE_LENGTH,
        };

        assert_eq!(song.note(cursor), None);
        assert_eq!(song.note(Cursor { position: 0, note: usize::MAX / NOTE_LENGTH }), None);

        let mut sound = RecordingSound::default();
        assert_eq!(
            song.advance(cursor, &mut sound),
            Some((100, Cursor { position: 0, note: 1 }))
        );
    }

    #[test]
    fn missing_measure_is_empty() {
        let song = Song::new(&[TWO_NOTES], &[0, 7], DURATIONS);
        let mut sound = RecordingSound::default();

        assert_eq!(song.measure(1), EMPTY);
        let cursor = song.advance(Cursor { position: 0, note: 1 }, &mut sound).unwrap().1;
        assert_eq!(cursor, Cursor::START);
    }

    #[test]
    fn silent_song_makes_progress() {
        let song = Song::new(&[EMPTY], &[0, 0], DURATIONS);
        let mut sound = RecordingSound::default();

        assert_eq!(song.advance(Cursor::START, &mut sound), None);
        assert!(sound.writes.is_empty());

        let song = Song::new(&[], &[], DURATIONS);
        assert_eq!(song.advance(Cursor::START, &mut sound), None);
    }

    #[test]
    fn unknown_duration_code() {
        let song = Song::new(&[&[69, 0, 0, 9]], &[0], DURATIONS);
        let mut sound = RecordingSound::default();

        assert_eq!(song.advance(Cursor::START, &mut sound), Some((0, Cursor::START)));
    }

    #[test]
    fn validate() {
        assert_eq!(Song::new(&[FOUR_NOTES, TWO_NOTES], &[0, 1], DURATIONS).validate(), Ok(()));
        assert_eq!(
            Song::new(&[FOUR_NOTES], &[], DURATIONS).validate(),
            Err(Error::EmptySequence)
        );
        assert_eq!(
            Song::new(&[FOUR_NOTES], &[0, 2], DURATIONS).validate(),
            Err(Error::InvalidMeasure {
                position: 1,
                measure: 2,
            })
        );
        assert_eq!(
            Song::new(&[TWO_NOTES, &[60, 0, 0, 1, 60, 0, 0, 8]], &[0, 1], DURATIONS).validate(),
            Err(Error::InvalidDuration {
                measure: 1,
                note: 1,
                code: 8,
            })
        );
    }
}
