//! Conversion from the per-voice note bytes stored in measures to tone
//! generator frequencies.

/// Get a `note` frequency on the exponential scale defined by reference
/// frequency `ref_freq` and reference pitch `ref_pitch`, using the interval
/// `semitone`.
fn get_frequency(ref_freq: f32, semitone: f32, note: u8, ref_pitch: u8) -> f32 {
    ref_freq * libm::powf(semitone, f32::from(note) - f32::from(ref_pitch))
}

/// Get the frequency in Hz for a MIDI note number on the 12-TET scale
/// (A4 = 69 = 440 Hz). Note 0 is reserved for silence and maps to 0 Hz.
pub fn frequency(note: u8) -> u16 {
    const SEMITONE: f32 = 1.059_463_1; // Twelfth root of 2

    if note == 0 {
        return 0;
    }

    libm::roundf(get_frequency(440.0, SEMITONE, note, 69)) as u16
}
