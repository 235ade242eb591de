mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use embassy_futures::block_on;
    use embassy_futures::join::join;
    use embassy_time::Duration;
    use myrtio_light_forge::monitor::{
        ConnectionTracker, ConnectivityMonitor, MonitorControl, MonitorEvent,
        MonitorEventChannel, PortProbe, ProbeError,
    };

    type SharedPorts = Rc<RefCell<Result<Vec<String>, ProbeError>>>;

    struct FakeProbe {
        ports: SharedPorts,
        polls: Rc<RefCell<usize>>,
    }

    impl PortProbe for FakeProbe {
        fn available_ports(&mut self) -> Result<Vec<String>, ProbeError> {
            *self.polls.borrow_mut() += 1;
            self.ports.borrow().clone()
        }
    }

    fn ports(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn test_tracker_connects_and_disconnects() {
        let mut tracker = ConnectionTracker::new();
        assert_eq!(tracker.check(&ports(&["COM3"])), None);

        assert_eq!(tracker.select_port(Some("COM3".into())), None);
        assert_eq!(
            tracker.check(&ports(&["COM1", "COM3"])),
            Some(MonitorEvent::Connected {
                port: "COM3".into()
            })
        );
        assert!(tracker.is_connected());
        assert_eq!(tracker.check(&ports(&["COM3"])), None);

        assert_eq!(
            tracker.check(&ports(&["COM1"])),
            Some(MonitorEvent::Disconnected {
                port: "COM3".into()
            })
        );
        assert!(!tracker.is_connected());
        assert_eq!(tracker.selected(), None);
        assert_eq!(tracker.check(&ports(&["COM3"])), None);
    }

    #[test]
    fn test_tracker_missing_port_stays_disconnected() {
        let mut tracker = ConnectionTracker::new();
        tracker.select_port(Some("/dev/ttyUSB0".into()));
        assert_eq!(tracker.check(&ports(&["/dev/ttyACM0"])), None);
        assert!(!tracker.is_connected());
        assert_eq!(tracker.selected(), Some("/dev/ttyUSB0"));
    }

    #[test]
    fn test_tracker_clearing_selection() {
        let mut tracker = ConnectionTracker::new();
        tracker.select_port(Some("COM3".into()));
        tracker.check(&ports(&["COM3"]));

        assert_eq!(tracker.select_port(None), None);
        assert_eq!(
            tracker.check(&ports(&["COM3"])),
            Some(MonitorEvent::NoPortSelected)
        );
        assert_eq!(tracker.check(&ports(&["COM3"])), None);
    }

    #[test]
    fn test_tracker_switching_ports() {
        let mut tracker = ConnectionTracker::new();
        tracker.select_port(Some("COM3".into()));
        tracker.check(&ports(&["COM3", "COM4"]));

        assert_eq!(tracker.select_port(Some("COM3".into())), None);
        assert!(tracker.is_connected());

        assert_eq!(
            tracker.select_port(Some("COM4".into())),
            Some(MonitorEvent::Disconnected {
                port: "COM3".into()
            })
        );
        assert_eq!(
            tracker.check(&ports(&["COM3", "COM4"])),
            Some(MonitorEvent::Connected {
                port: "COM4".into()
            })
        );
    }

    #[test]
    fn test_monitor_reports_changes_until_shutdown() {
        let shared: SharedPorts = Rc::new(RefCell::new(Ok(ports(&["COM3"]))));
        let polls = Rc::new(RefCell::new(0));
        let probe = FakeProbe {
            ports: shared.clone(),
            polls: polls.clone(),
        };

        let control = MonitorControl::new();
        let events = MonitorEventChannel::new();
        let monitor = ConnectivityMonitor::new(probe, Duration::from_millis(5));

        block_on(join(monitor.run(&control, events.sender()), async {
            control.select_port(Some("COM3".into()));
            assert_eq!(
                events.receive().await,
                MonitorEvent::Connected {
                    port: "COM3".into()
                }
            );

            *shared.borrow_mut() = Ok(Vec::new());
            assert_eq!(
                events.receive().await,
                MonitorEvent::Disconnected {
                    port: "COM3".into()
                }
            );

            *shared.borrow_mut() = Err(ProbeError("access denied".into()));
            assert_eq!(
                events.receive().await,
                MonitorEvent::ProbeFailed {
                    reason: "access denied".into()
                }
            );

            control.shutdown();
        }));

        assert!(*polls.borrow() >= 3);
    }

    #[test]
    fn test_monitor_stops_on_early_shutdown() {
        let polls = Rc::new(RefCell::new(0));
        let probe = FakeProbe {
            ports: Rc::new(RefCell::new(Ok(Vec::new()))),
            polls: polls.clone(),
        };

        let control = MonitorControl::new();
        let events = MonitorEventChannel::new();
        control.shutdown();

        block_on(
            ConnectivityMonitor::new(probe, Duration::from_secs(60)).run(&control, events.sender()),
        );

        assert_eq!(*polls.borrow(), 1);
        assert!(events.try_receive().is_err());
    }
}
