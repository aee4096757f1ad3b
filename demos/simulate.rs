#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![forbid(unsafe_code)]

use colored::Colorize;
use error_iter::ErrorIter as _;
use log::info;
use nyanbadge::hal::{Buttons, Clock, Display, Keypad, Sound, Window};
use nyanbadge::{assets, Config, Error as BadgeError, Player, Rgb, DISPLAY_HEIGHT, DISPLAY_WIDTH};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::process::ExitCode;
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::util::SubscriberInitExt as _;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing ppm-file argument\nUsage: simulate <ppm-file> [seconds]")]
    MissingPpmFilename,

    #[error("Invalid duration: {0}")]
    InvalidSeconds(String),

    #[error("Assets do not validate")]
    Badge(#[from] BadgeError),

    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Default)]
struct SimClock {
    now: u32,
}

impl Clock for SimClock {
    fn now_ms(&mut self) -> u32 {
        self.now
    }
}

/// Display emulator backed by a full framebuffer.
#[derive(Debug)]
struct Framebuffer {
    pixels: Vec<Rgb>,
    window: Window,
    offset: usize,
}

impl Framebuffer {
    fn new() -> Self {
        Framebuffer {
            pixels: vec![Rgb::BLACK; DISPLAY_WIDTH * DISPLAY_HEIGHT],
            window: Window::new(0, 0, DISPLAY_WIDTH, DISPLAY_HEIGHT),
            offset: 0,
        }
    }

    fn write_ppm(&self, path: &str) -> Result<(), Error> {
        let mut out = BufWriter::new(File::create(path)?);

        write!(out, "P6\n{DISPLAY_WIDTH} {DISPLAY_HEIGHT}\n255\n")?;
        for color in &self.pixels {
            out.write_all(&color.to_bytes())?;
        }
        out.flush()?;

        Ok(())
    }
}

impl Display for Framebuffer {
    fn set_window(&mut self, window: Window) {
        self.window = window;
        self.offset = 0;
    }

    fn begin_write(&mut self) {
        self.offset = 0;
    }

    fn write_pixel(&mut self, color: Rgb) {
        let x = usize::from(self.window.x0) + self.offset % self.window.width();
        let y = usize::from(self.window.y0) + self.offset / self.window.width();
        self.offset += 1;

        if x < DISPLAY_WIDTH && y < DISPLAY_HEIGHT {
            self.pixels[y * DISPLAY_WIDTH + x] = color;
        }
    }
}

#[derive(Debug, Default)]
struct CountingSound {
    voices: [u16; nyanbadge::NUM_VOICES],
    changes: usize,
}

impl Sound for CountingSound {
    fn set_voice_frequency(&mut self, voice: usize, frequency: u16) {
        if self.voices[voice] != frequency {
            self.changes += 1;
        }
        self.voices[voice] = frequency;
    }
}

/// Keypad whose buttons are set by the simulation script.
#[derive(Debug, Default)]
struct ScriptedKeypad {
    buttons: Buttons,
}

impl Keypad for ScriptedKeypad {
    fn sample(&mut self) -> Buttons {
        self.buttons
    }

    fn release(&mut self) {}
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .compact()
        .finish()
        .init();

    match simulate() {
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

fn simulate() -> Result<(), Error> {
    let mut args = std::env::args().skip(1);
    let ppm_filename = args.next().ok_or(Error::MissingPpmFilename)?;
    let seconds = match args.next() {
        Some(arg) => arg.parse::<u32>().map_err(|_| Error::InvalidSeconds(arg))?,
        None => 10,
    };

    assets::ANIMATION.validate()?;
    assets::SONG.validate()?;

    // Start close to the top of the clock range so the run crosses a wrap.
    let start = u32::MAX - 2_000;
    let mut player = Player::new(
        SimClock { now: start },
        Framebuffer::new(),
        CountingSound::default(),
        ScriptedKeypad::default(),
        &assets::ANIMATION,
        &assets::SONG,
        Config::default(),
    );

    let end_ms = seconds.saturating_mul(1000);
    for elapsed in 0..end_ms {
        player.clock_mut().now = start.wrapping_add(elapsed);

        // Press mute for a moment a third of the way in, then unmute.
        let buttons = match elapsed * 3 / end_ms.max(1) {
            1 if elapsed % 1000 < 20 => Buttons::from_active_low(false, true),
            2 if elapsed % 1000 < 20 => Buttons::from_active_low(true, false),
            _ => Buttons::from_active_low(true, true),
        };
        player.keypad_mut().buttons = buttons;

        player.poll();
    }

    let (_, framebuffer, sound, _) = player.into_parts();
    info!("{} voice changes in {}s", sound.changes, seconds);
    framebuffer.write_ppm(&ppm_filename)?;

    Ok(())
}
