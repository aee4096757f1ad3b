#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![forbid(unsafe_code)]

use colored::Colorize;
use error_iter::ErrorIter as _;
use nyanbadge::hal::Sound;
use nyanbadge::{assets, Cursor, Error as BadgeError, NUM_VOICES};
use riff_wave::{WaveWriter, WriteError};
use std::{fs::File, io::BufWriter, process::ExitCode};
use thiserror::Error;

const SAMPLE_RATE: u32 = 44100;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing wav-file argument\nUsage: writer <wav-file> [loops]")]
    MissingWavFilename,

    #[error("Invalid loop count: {0}")]
    InvalidLoops(String),

    #[error("Song does not validate")]
    Badge(#[from] BadgeError),

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("Wave writer error")]
    Writer(#[from] WriteError),
}

/// Three square-wave voices mixed down to mono, standing in for the badge
/// tone generator.
#[derive(Debug, Default)]
struct SquareVoices {
    frequencies: [u16; NUM_VOICES],
    phases: [f32; NUM_VOICES],
}

impl Sound for SquareVoices {
    fn set_voice_frequency(&mut self, voice: usize, frequency: u16) {
        self.frequencies[voice] = frequency;
    }
}

impl SquareVoices {
    fn next_sample(&mut self) -> f32 {
        let mut sample = 0.0;

        for (phase, &frequency) in self.phases.iter_mut().zip(self.frequencies.iter()) {
            if frequency == 0 {
                continue;
            }
            *phase = (*phase + f32::from(frequency) / SAMPLE_RATE as f32).fract();
            sample += if *phase < 0.5 { 1.0 } else { -1.0 };
        }

        sample * 0.25 / NUM_VOICES as f32
    }
}

fn main() -> ExitCode {
    match writer() {
        Err(e) => {
            eprintln!("{} {}", "error:".red(), e);

            for cause in e.sources().skip(1) {
                eprintln!("{} {}", "caused by:".bright_red(), cause);
            }

            ExitCode::FAILURE
        }
        Ok(()) => ExitCode::SUCCESS,
    }
}

fn writer() -> Result<(), Error> {
    let mut args = std::env::args().skip(1);
    let wav_filename = args.next().ok_or(Error::MissingWavFilename)?;
    let loops = match args.next() {
        Some(arg) => arg.parse::<usize>().map_err(|_| Error::InvalidLoops(arg))?,
        None => 1,
    };

    let song = &assets::SONG;
    song.validate()?;

    // Write the wav file
    let file = File::create(wav_filename)?;
    let writer = BufWriter::new(file);
    let mut wave_writer = WaveWriter::new(1, SAMPLE_RATE, 16, writer)?;

    let mut voices = SquareVoices::default();
    let mut cursor = Cursor::START;
    for _ in 0..song.total_notes() * loops {
        let Some((duration, next)) = song.advance(cursor, &mut voices) else {
            break;
        };
        cursor = next;

        for _ in 0..SAMPLE_RATE * duration / 1000 {
            let sample = (voices.next_sample() * f32::from(i16::MAX)).round() as i16;
            wave_writer.write_sample_i16(sample)?;
        }
    }

    Ok(())
}
