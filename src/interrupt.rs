//! Button interrupt dispatch
//!
//! The mode button advances the shared mode cycle. The reset button leaves
//! the firmware for the boot ROM and never returns to the main loop.

use embassy_time::Instant;

use crate::mode_cycle::{Mode, SharedModeCycle};

/// Falling edge on one of the board buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    Mode,
    Reset,
}

/// What the interrupt handler has to do after dispatching an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptCommand {
    /// Edge was debounced away
    Ignored,
    /// The mode advanced
    ModeChanged(Mode),
    /// Jump to the bootloader
    EnterBootloader,
}

/// Platform capability to restart into the USB boot mode
pub trait BootloaderEntry {
    fn enter_bootloader(&mut self) -> !;
}

/// Decide what a button edge at `now` does
pub fn dispatch(event: ButtonEvent, now: Instant, modes: &SharedModeCycle) -> InterruptCommand {
    match event {
        ButtonEvent::Mode => {
            if modes.press(now) {
                InterruptCommand::ModeChanged(modes.mode())
            } else {
                InterruptCommand::Ignored
            }
        }
        ButtonEvent::Reset => InterruptCommand::EnterBootloader,
    }
}

/// Dispatch an event and carry out the bootloader jump if requested
pub fn handle<B: BootloaderEntry>(
    event: ButtonEvent,
    now: Instant,
    modes: &SharedModeCycle,
    boot: &mut B,
) -> InterruptCommand {
    match dispatch(event, now, modes) {
        InterruptCommand::EnterBootloader => boot.enter_bootloader(),
        command => command,
    }
}
