//! Attach and detach orchestration.

use std::sync::Arc;

use hid_powera_protocol::{
    DEVICE_TABLE, DeviceIdEntry, capabilities, is_powera_controller, output_device_spec,
};
use powera_errors::{DriverError, DriverResult, TransportStage};
use powera_hid_common::{HidCommonError, HidDeviceInfo, HidTransport, InputBackend, InputSink};
use tracing::{debug, error, info};

use crate::session::{ControllerSession, ReportOutcome};

/// Strip the collaborator's own prefix so the driver error reads once.
fn reason(err: HidCommonError) -> String {
    match err {
        HidCommonError::Transport(msg)
        | HidCommonError::Allocation(msg)
        | HidCommonError::Registration(msg) => msg,
        other => other.to_string(),
    }
}

/// Entry points the host calls when a matching HID device appears or goes away.
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerADriver;

impl PowerADriver {
    /// Ids advertised to host enumeration.
    pub fn id_table() -> &'static [DeviceIdEntry] {
        &DEVICE_TABLE
    }

    pub fn matches(info: &HidDeviceInfo) -> bool {
        is_powera_controller(&info.name, info.vendor_id, info.product_id)
    }

    /// Attach to a device offered by the host.
    ///
    /// Brings up the transport, allocates and registers the output device,
    /// then activates the session. Whatever was acquired before a failing step
    /// is released in reverse order before the error is returned.
    ///
    /// # Errors
    ///
    /// - [`DriverError::NotAMatch`] if the device is not a PowerA controller
    /// - [`DriverError::Transport`] if parse, start or open fails
    /// - [`DriverError::ResourceExhaustion`] if the output device cannot be allocated
    /// - [`DriverError::SinkRegistrationFailure`] if capability registration is rejected
    pub fn probe<T, B>(
        info: HidDeviceInfo,
        mut transport: T,
        backend: &mut B,
    ) -> DriverResult<AttachedController<T, B::Sink>>
    where
        T: HidTransport,
        B: InputBackend,
    {
        if !Self::matches(&info) {
            debug!(
                "Skipping '{}' VID=0x{:04X} PID=0x{:04X}",
                info.name, info.vendor_id, info.product_id
            );
            return Err(DriverError::not_a_match(
                info.name,
                info.vendor_id,
                info.product_id,
            ));
        }

        let name = info.display_name();
        info!("PowerA controller detected: {}", name);
        let session = Arc::new(ControllerSession::new());

        if let Err(err) = transport.parse() {
            error!("HID parse failed for {}: {}", name, err);
            return Err(DriverError::transport(TransportStage::Parse, reason(err)));
        }

        if let Err(err) = transport.start() {
            error!("HID hw start failed for {}: {}", name, err);
            return Err(DriverError::transport(TransportStage::Start, reason(err)));
        }

        if let Err(err) = transport.open() {
            error!("HID hw open failed for {}: {}", name, err);
            transport.stop();
            return Err(DriverError::transport(TransportStage::Open, reason(err)));
        }

        let spec = output_device_spec(&info);
        let mut sink = match backend.allocate(&spec) {
            Ok(sink) => sink,
            Err(err) => {
                error!("Failed to allocate input device for {}: {}", name, err);
                transport.close();
                transport.stop();
                return Err(DriverError::resource_exhaustion(reason(err)));
            }
        };

        if let Err(err) = backend.register(&mut sink, &capabilities()) {
            error!("Failed to register input device for {}: {}", name, err);
            drop(sink);
            transport.close();
            transport.stop();
            return Err(DriverError::sink_registration(reason(err)));
        }

        if let Err(err) = session.activate(sink) {
            error!("Session activation failed for {}: {}", name, err);
            transport.close();
            transport.stop();
            return Err(err);
        }

        info!("PowerA controller ready: {}", spec.name);
        Ok(AttachedController {
            info,
            transport,
            session,
        })
    }

    /// Detach a controller.
    ///
    /// Waits for any report being emitted, releases the output device, then
    /// closes and stops the transport.
    pub fn remove<T, S>(controller: AttachedController<T, S>)
    where
        T: HidTransport,
        S: InputSink,
    {
        let AttachedController {
            info,
            mut transport,
            session,
        } = controller;

        info!("PowerA controller disconnected: {}", info.display_name());
        drop(session.teardown());
        transport.close();
        transport.stop();
    }
}

/// A successfully attached controller.
///
/// Hand [`AttachedController::session`] to the report delivery context and
/// pass this value back to [`PowerADriver::remove`] on detach.
#[derive(Debug)]
pub struct AttachedController<T, S> {
    info: HidDeviceInfo,
    transport: T,
    session: Arc<ControllerSession<S>>,
}

impl<T, S> AttachedController<T, S> {
    pub fn info(&self) -> &HidDeviceInfo {
        &self.info
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Shared handle to the session gate.
    pub fn session(&self) -> Arc<ControllerSession<S>> {
        Arc::clone(&self.session)
    }
}

impl<T, S: InputSink> AttachedController<T, S> {
    /// Shortcut for [`ControllerSession::handle_raw_report`].
    pub fn handle_raw_report(&self, data: &[u8]) -> ReportOutcome {
        self.session.handle_raw_report(data)
    }
}
