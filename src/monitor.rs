//! Connectivity monitor for the controller's serial port.
//!
//! A cancellable task polls the list of available ports on a fixed interval
//! and reports connection changes over a one-way event channel. It never sees
//! effect models, frames or emitted source.
//!
//! ```ignore
//! let control = MonitorControl::new();
//! let events = MonitorEventChannel::new();
//! let monitor = ConnectivityMonitor::new(probe, config.monitor.poll_interval());
//!
//! join(monitor.run(&control, events.sender()), async {
//!     control.select_port(Some("/dev/ttyACM0".into()));
//!     let event = events.receive().await;
//!     // ...
//!     control.shutdown();
//! })
//! .await;
//! ```

use embassy_futures::select::{Either3, select3};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Sender};
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Timer};

/// Capacity of the event channel. Events beyond it are dropped.
pub const EVENT_QUEUE_SIZE: usize = 8;

pub type MonitorEventChannel = Channel<CriticalSectionRawMutex, MonitorEvent, EVENT_QUEUE_SIZE>;
pub type MonitorEventSender<'a> =
    Sender<'a, CriticalSectionRawMutex, MonitorEvent, EVENT_QUEUE_SIZE>;

/// Source of the ports currently attached to the host
pub trait PortProbe {
    fn available_ports(&mut self) -> Result<Vec<String>, ProbeError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("port probe failed: {0}")]
pub struct ProbeError(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorEvent {
    Connected { port: String },
    Disconnected { port: String },
    NoPortSelected,
    ProbeFailed { reason: String },
}

/// Connection state machine, independent of any timer or channel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionTracker {
    selected: Option<String>,
    connected: bool,
}

impl ConnectionTracker {
    pub const fn new() -> Self {
        Self {
            selected: None,
            connected: false,
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    /// Change the watched port.
    ///
    /// Switching away from a connected port reports it as disconnected.
    /// Clearing the selection is reported by the next [`check`].
    ///
    /// [`check`]: ConnectionTracker::check
    pub fn select_port(&mut self, port: Option<String>) -> Option<MonitorEvent> {
        let previous = core::mem::replace(&mut self.selected, port);
        match previous {
            Some(previous)
                if self.connected && self.selected.as_ref().is_some_and(|p| *p != previous) =>
            {
                self.connected = false;
                Some(MonitorEvent::Disconnected { port: previous })
            }
            _ => None,
        }
    }

    /// Compare the selection against the ports present right now
    pub fn check(&mut self, available: &[String]) -> Option<MonitorEvent> {
        let Some(port) = &self.selected else {
            if self.connected {
                self.connected = false;
                return Some(MonitorEvent::NoPortSelected);
            }
            return None;
        };

        let present = available.iter().any(|candidate| candidate == port);
        match (present, self.connected) {
            (true, false) => {
                self.connected = true;
                Some(MonitorEvent::Connected { port: port.clone() })
            }
            (false, true) => {
                self.connected = false;
                let port = self.selected.take().unwrap_or_default();
                Some(MonitorEvent::Disconnected { port })
            }
            _ => None,
        }
    }
}

/// Commands from the application to a running monitor
pub struct MonitorControl {
    port: Signal<CriticalSectionRawMutex, Option<String>>,
    shutdown: Signal<CriticalSectionRawMutex, ()>,
}

impl MonitorControl {
    pub const fn new() -> Self {
        Self {
            port: Signal::new(),
            shutdown: Signal::new(),
        }
    }

    /// Watch `port`, or nothing. Triggers an immediate check.
    pub fn select_port(&self, port: Option<String>) {
        self.port.signal(port);
    }

    /// Stop the monitor at its next await point
    pub fn shutdown(&self) {
        self.shutdown.signal(());
    }
}

impl Default for MonitorControl {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ConnectivityMonitor<P: PortProbe> {
    probe: P,
    interval: Duration,
    tracker: ConnectionTracker,
}

impl<P: PortProbe> ConnectivityMonitor<P> {
    pub const fn new(probe: P, interval: Duration) -> Self {
        Self {
            probe,
            interval,
            tracker: ConnectionTracker::new(),
        }
    }

    /// Poll until [`MonitorControl::shutdown`] is called
    pub async fn run(mut self, control: &MonitorControl, events: MonitorEventSender<'_>) {
        log::info!(
            "monitor: started, polling every {} ms",
            self.interval.as_millis()
        );

        loop {
            self.poll(&events);

            match select3(
                control.shutdown.wait(),
                control.port.wait(),
                Timer::after(self.interval),
            )
            .await
            {
                Either3::First(()) => break,
                Either3::Second(port) => {
                    log::debug!("monitor: watching {:?}", port);
                    if let Some(event) = self.tracker.select_port(port) {
                        emit(&events, event);
                    }
                }
                Either3::Third(()) => {}
            }
        }

        log::info!("monitor: stopped");
    }

    fn poll(&mut self, events: &MonitorEventSender<'_>) {
        let event = match self.probe.available_ports() {
            Ok(ports) => self.tracker.check(&ports),
            Err(e) => Some(MonitorEvent::ProbeFailed {
                reason: e.0,
            }),
        };
        if let Some(event) = event {
            emit(events, event);
        }
    }
}

fn emit(events: &MonitorEventSender<'_>, event: MonitorEvent) {
    if let Err(e) = events.try_send(event) {
        log::warn!("monitor: event queue full, dropping {:?}", e);
    }
}
