//! Button driven output mode cycling
//!
//! A four state counter advanced by debounced button edges. The state is
//! written from the button interrupt and read by the main loop, so the
//! shared variant keeps it behind a `critical-section` mutex.

use core::cell::Cell;

use critical_section::Mutex;
use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::config::DEBOUNCE_INTERVAL;
use crate::matrix::MatrixColor;

const MODE_NAME_RED: &str = "red";
const MODE_NAME_YELLOW: &str = "yellow";
const MODE_NAME_GREEN: &str = "green";
const MODE_NAME_BLUE: &str = "blue";

const MODE_ID_RED: u8 = 0;
const MODE_ID_YELLOW: u8 = 1;
const MODE_ID_GREEN: u8 = 2;
const MODE_ID_BLUE: u8 = 3;

/// Output color modes, in cycling order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
    #[default]
    Red = MODE_ID_RED,
    Yellow = MODE_ID_YELLOW,
    Green = MODE_ID_GREEN,
    Blue = MODE_ID_BLUE,
}

impl Mode {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_RED => Self::Red,
            MODE_ID_YELLOW => Self::Yellow,
            MODE_ID_GREEN => Self::Green,
            MODE_ID_BLUE => Self::Blue,
            _ => return None,
        })
    }

    /// Following mode, wrapping from blue back to red
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Red => Self::Yellow,
            Self::Yellow => Self::Green,
            Self::Green => Self::Blue,
            Self::Blue => Self::Red,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => MODE_NAME_RED,
            Self::Yellow => MODE_NAME_YELLOW,
            Self::Green => MODE_NAME_GREEN,
            Self::Blue => MODE_NAME_BLUE,
        }
    }

    /// Three letter name that fits a display line
    pub const fn label(self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Yellow => "YEL",
            Self::Green => "GRN",
            Self::Blue => "BLU",
        }
    }

    /// Which of the red, green and blue LED pins are on
    pub const fn led_pins(self) -> (bool, bool, bool) {
        match self {
            Self::Red => (true, false, false),
            Self::Yellow => (true, true, false),
            Self::Green => (false, true, false),
            Self::Blue => (false, false, true),
        }
    }

    pub const fn matrix_color(self) -> MatrixColor {
        match self {
            Self::Red => MatrixColor::Red,
            Self::Yellow => MatrixColor::Yellow,
            Self::Green => MatrixColor::Green,
            Self::Blue => MatrixColor::Blue,
        }
    }
}

/// Mode counter with edge debouncing
#[derive(Debug, Clone, Copy, Default)]
pub struct ModeCycle {
    mode: Mode,
    last_press: Option<Instant>,
}

impl ModeCycle {
    pub const fn new() -> Self {
        Self {
            mode: Mode::Red,
            last_press: None,
        }
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Register a button edge at `now`.
    ///
    /// Returns `true` if the edge was accepted and the mode advanced.
    /// Edges closer than [`DEBOUNCE_INTERVAL`] to the last accepted one
    /// are dropped.
    pub fn press(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_press {
            let settled = now
                .checked_duration_since(last)
                .is_some_and(|elapsed| elapsed >= DEBOUNCE_INTERVAL);
            if !settled {
                return false;
            }
        }

        self.last_press = Some(now);
        self.mode = self.mode.next();
        true
    }
}

/// [`ModeCycle`] shared between an interrupt handler and the main loop.
///
/// Can be placed in a `static`.
pub struct SharedModeCycle {
    inner: Mutex<Cell<ModeCycle>>,
}

impl SharedModeCycle {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(ModeCycle::new())),
        }
    }

    /// Register a button edge, see [`ModeCycle::press`]
    pub fn press(&self, now: Instant) -> bool {
        #[cfg_attr(not(feature = "esp32-log"), allow(unused_variables))]
        let (accepted, mode) = critical_section::with(|cs| {
            let cell = self.inner.borrow(cs);
            let mut cycle = cell.get();
            let accepted = cycle.press(now);
            cell.set(cycle);
            (accepted, cycle.mode())
        });
        #[cfg(feature = "esp32-log")]
        if accepted {
            println!("[SharedModeCycle.press] mode changed to {}", mode.as_str());
        }
        accepted
    }

    /// Current mode
    pub fn mode(&self) -> Mode {
        critical_section::with(|cs| self.inner.borrow(cs).get().mode())
    }
}

impl Default for SharedModeCycle {
    fn default() -> Self {
        Self::new()
    }
}
