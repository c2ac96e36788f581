//! Collaborator traits: HID transport, host input backend, output sink

use crate::{CapabilitySet, HidCommonResult, InputDeviceSpec, InputEvent};

/// Raw HID channel owned by the host transport layer.
///
/// Bring-up is `parse`, `start`, `open`; teardown is `close`, `stop`.
pub trait HidTransport: Send {
    /// Parse the device's report descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`HidCommonError::Transport`](crate::HidCommonError::Transport)
    /// if the descriptor cannot be parsed.
    fn parse(&mut self) -> HidCommonResult<()>;

    /// Start the hardware channel.
    ///
    /// # Errors
    ///
    /// Returns [`HidCommonError::Transport`](crate::HidCommonError::Transport)
    /// if the channel cannot be started.
    fn start(&mut self) -> HidCommonResult<()>;

    /// Open the channel so reports begin to arrive.
    ///
    /// # Errors
    ///
    /// Returns [`HidCommonError::Transport`](crate::HidCommonError::Transport)
    /// if the channel cannot be opened. The channel stays started.
    fn open(&mut self) -> HidCommonResult<()>;

    fn close(&mut self);

    fn stop(&mut self);
}

/// A registered output device of the host input subsystem.
///
/// Implementations are called from the report delivery context: `emit` must
/// not block and should not allocate.
pub trait InputSink: Send {
    fn emit(&mut self, event: InputEvent);
}

/// Host input subsystem: allocates output devices and registers capabilities.
pub trait InputBackend {
    type Sink: InputSink;

    /// # Errors
    ///
    /// Returns [`HidCommonError::Allocation`](crate::HidCommonError::Allocation)
    /// if no output device can be created.
    fn allocate(&mut self, spec: &InputDeviceSpec) -> HidCommonResult<Self::Sink>;

    /// Declare `caps` on `sink` and make it visible to consumers.
    ///
    /// # Errors
    ///
    /// Returns [`HidCommonError::Registration`](crate::HidCommonError::Registration)
    /// if the host rejects the device. The caller still owns `sink`.
    fn register(&mut self, sink: &mut Self::Sink, caps: &CapabilitySet) -> HidCommonResult<()>;
}

pub mod mock {
    use super::*;
    use crate::HidCommonError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex, PoisonError};

    /// Transport call, as recorded by [`MockHidTransport`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum TransportCall {
        Parse,
        Start,
        Open,
        Close,
        Stop,
    }

    /// Transport that records every call and can be told to fail one step.
    #[derive(Clone, Default)]
    pub struct MockHidTransport {
        calls: Arc<Mutex<Vec<TransportCall>>>,
        fail_on: Option<TransportCall>,
    }

    impl MockHidTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing_on(step: TransportCall) -> Self {
            Self {
                fail_on: Some(step),
                ..Self::default()
            }
        }

        /// Calls made so far, shared with every clone of this transport.
        pub fn calls(&self) -> Vec<TransportCall> {
            let calls = self.calls.lock().unwrap_or_else(PoisonError::into_inner);
            calls.clone()
        }

        fn record(&self, call: TransportCall) {
            let mut calls = self.calls.lock().unwrap_or_else(PoisonError::into_inner);
            calls.push(call);
        }

        fn step(&self, call: TransportCall) -> HidCommonResult<()> {
            self.record(call);
            if self.fail_on == Some(call) {
                return Err(HidCommonError::Transport(format!("{call:?} failed")));
            }
            Ok(())
        }
    }

    impl HidTransport for MockHidTransport {
        fn parse(&mut self) -> HidCommonResult<()> {
            self.step(TransportCall::Parse)
        }

        fn start(&mut self) -> HidCommonResult<()> {
            self.step(TransportCall::Start)
        }

        fn open(&mut self) -> HidCommonResult<()> {
            self.step(TransportCall::Open)
        }

        fn close(&mut self) {
            self.record(TransportCall::Close);
        }

        fn stop(&mut self) {
            self.record(TransportCall::Stop);
        }
    }

    /// Shared event log observed by tests while a sink lives inside a session.
    #[derive(Clone, Default)]
    pub struct EventLog {
        events: Arc<Mutex<Vec<InputEvent>>>,
        live_sinks: Arc<AtomicUsize>,
    }

    impl EventLog {
        pub fn new() -> Self {
            Self::default()
        }

        /// New sink appending to this log.
        pub fn sink(&self) -> RecordingSink {
            self.live_sinks.fetch_add(1, Ordering::SeqCst);
            RecordingSink { log: self.clone() }
        }

        pub fn events(&self) -> Vec<InputEvent> {
            let events = self.events.lock().unwrap_or_else(PoisonError::into_inner);
            events.clone()
        }

        /// Number of sync markers seen, i.e. completed batches.
        pub fn sync_count(&self) -> usize {
            let events = self.events.lock().unwrap_or_else(PoisonError::into_inner);
            events.iter().filter(|e| e.is_sync()).count()
        }

        pub fn clear(&self) {
            let mut events = self.events.lock().unwrap_or_else(PoisonError::into_inner);
            events.clear();
        }

        /// Sinks created from this log that have not been dropped yet.
        pub fn live_sinks(&self) -> usize {
            self.live_sinks.load(Ordering::SeqCst)
        }
    }

    /// Sink that appends every event to an [`EventLog`].
    pub struct RecordingSink {
        log: EventLog,
    }

    impl RecordingSink {
        pub fn log(&self) -> EventLog {
            self.log.clone()
        }
    }

    impl InputSink for RecordingSink {
        fn emit(&mut self, event: InputEvent) {
            let mut events = self.log.events.lock().unwrap_or_else(PoisonError::into_inner);
            events.push(event);
        }
    }

    impl Drop for RecordingSink {
        fn drop(&mut self) {
            self.log.live_sinks.fetch_sub(1, Ordering::SeqCst);
        }
    }

    /// Backend handing out [`RecordingSink`]s, with optional failure injection.
    #[derive(Default)]
    pub struct MockInputBackend {
        log: EventLog,
        fail_allocate: bool,
        fail_register: bool,
        allocated: Vec<InputDeviceSpec>,
        registered: Vec<CapabilitySet>,
    }

    impl MockInputBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing_allocate() -> Self {
            Self {
                fail_allocate: true,
                ..Self::default()
            }
        }

        pub fn failing_register() -> Self {
            Self {
                fail_register: true,
                ..Self::default()
            }
        }

        /// Log shared by every sink this backend allocates.
        pub fn log(&self) -> EventLog {
            self.log.clone()
        }

        pub fn allocated(&self) -> &[InputDeviceSpec] {
            &self.allocated
        }

        pub fn registered(&self) -> &[CapabilitySet] {
            &self.registered
        }
    }

    impl InputBackend for MockInputBackend {
        type Sink = RecordingSink;

        fn allocate(&mut self, spec: &InputDeviceSpec) -> HidCommonResult<RecordingSink> {
            if self.fail_allocate {
                return Err(HidCommonError::Allocation("out of memory".to_string()));
            }
            self.allocated.push(spec.clone());
            Ok(self.log.sink())
        }

        fn register(
            &mut self,
            _sink: &mut RecordingSink,
            caps: &CapabilitySet,
        ) -> HidCommonResult<()> {
            if self.fail_register {
                return Err(HidCommonError::Registration(
                    "rejected by input core".to_string(),
                ));
            }
            self.registered.push(caps.clone());
            Ok(())
        }
    }
}
