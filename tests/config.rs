mod tests {
    use embassy_time::Duration;
    use myrtio_light_forge::bounds::{LedSpan, center_of_len};
    use myrtio_light_forge::color::{RED, Rgb};
    use myrtio_light_forge::config::{ConfigError, ForgeConfig};

    #[test]
    fn test_defaults() {
        let config = ForgeConfig::default();
        assert_eq!(config.total_leds, 70);
        assert_eq!(config.strip_length(), 70);
        assert_eq!(config.firmware.data_pins, vec![2, 3, 4, 5, 6, 7]);
        assert_eq!(config.firmware.chipset, "WS2812B");
        assert_eq!(config.firmware.color_order, "GRB");
        assert_eq!(config.firmware.baud_rate, 9600);
        assert_eq!(config.monitor.poll_interval(), Duration::from_millis(2000));
        assert_eq!(config.letters.len(), 8);
        assert_eq!(config.letters.get("P"), Some(LedSpan::new(0, 6)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_document() {
        let config = ForgeConfig::from_json(
            r#"{"total_leds": 20, "letters": {"a": [0, 4], "b": [9, 5]},
                "firmware": {"data_pins": [9]}}"#,
        )
        .unwrap();
        assert_eq!(config.total_leds, 20);
        assert_eq!(config.letters.get("A"), Some(LedSpan::new(0, 4)));
        assert_eq!(config.letters.get("B"), Some(LedSpan { start: 5, end: 9 }));
        assert_eq!(config.firmware.data_pins, vec![9]);
        assert_eq!(config.firmware.chipset, "WS2812B");
        assert_eq!(config.monitor.poll_interval_ms, 2000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_letters_keep_strip_order() {
        let config = ForgeConfig::default();
        let letters: Vec<&str> = config.letters.letters().collect();
        assert_eq!(letters, vec!["P", "H", "O", "N", "E", "A", "I", "D"]);

        let config = ForgeConfig::from_json(
            r#"{"letters": {"z": [10, 12], "b": [0, 4], "m": [5, 9], "B": [0, 3]}}"#,
        )
        .unwrap();
        let letters: Vec<&str> = config.letters.letters().collect();
        assert_eq!(letters, vec!["Z", "B", "M"]);
        assert_eq!(config.letters.get("B"), Some(LedSpan::new(0, 3)));

        let json = config.to_json().unwrap();
        let z = json.find("\"Z\"").unwrap();
        let b = json.find("\"B\"").unwrap();
        let m = json.find("\"M\"").unwrap();
        assert!(z < b && b < m);
        assert_eq!(ForgeConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_validate() {
        let config = ForgeConfig {
            total_leds: 0,
            ..ForgeConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::EmptyStrip)));

        let config = ForgeConfig {
            total_leds: 50,
            ..ForgeConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpanOutOfRange { ref letter, end: 55, .. }) if letter == "D"
        ));

        let mut config = ForgeConfig::default();
        config.firmware.color_order = "G-R-B".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidIdentifier(_))
        ));

        let mut config = ForgeConfig::default();
        config.firmware.data_pins.clear();
        assert!(matches!(config.validate(), Err(ConfigError::NoDataPins)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        assert_eq!(ForgeConfig::load(&path).unwrap(), ForgeConfig::default());

        let mut config = ForgeConfig::default();
        config.total_leds = 120;
        config.firmware.brightness = 64;
        config.save(&path).unwrap();
        assert_eq!(ForgeConfig::load(&path).unwrap(), config);

        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(ForgeConfig::load(&path), Err(ConfigError::Json(_))));
        assert_eq!(ForgeConfig::load_or_default(&path), ForgeConfig::default());
    }

    #[test]
    fn test_span_helpers() {
        let span = LedSpan::new(7, 13);
        assert_eq!(span.count(), 7);
        assert_eq!(span.center(), 4);
        assert!(span.fits(14));
        assert!(!span.fits(13));

        let frame: Vec<Rgb> = (0..20).map(|i| Rgb::new(i, 0, 0)).collect();
        let letter = span.slice(&frame).unwrap();
        assert_eq!(letter.len(), 7);
        assert_eq!(letter[0], Rgb::new(7, 0, 0));
        assert!(LedSpan::new(18, 25).slice(&frame).is_none());
        assert!(LedSpan::new(3, 3).slice(&[RED; 4]).is_some());

        assert_eq!(center_of_len(0), 0);
        assert_eq!(center_of_len(1), 1);
        assert_eq!(center_of_len(6), 3);
    }
}
