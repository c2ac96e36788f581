//! Translation of a decoded [`ControllerState`] into input events.

use hid_powera_protocol::{Axis, Button, ControllerState};
use powera_hid_common::{InputEvent, InputSink};

/// Events in one batch: every button, every axis, then the sync marker.
pub const EVENTS_PER_REPORT: usize = Button::ALL.len() + Axis::ALL.len() + 1;

/// Push the full snapshot to `sink`, closed by [`InputEvent::Sync`].
///
/// Nothing is filtered against earlier reports; unchanged fields are sent
/// again and the host input core drops the duplicates.
pub fn emit_state<S: InputSink + ?Sized>(sink: &mut S, state: &ControllerState) {
    for button in Button::ALL {
        sink.emit(InputEvent::key(button.code(), state.pressed(button)));
    }
    for axis in Axis::ALL {
        sink.emit(InputEvent::abs(axis.code(), state.axis(axis)));
    }
    sink.emit(InputEvent::Sync);
}
