mod tests {
    use myrtio_ambient_light::display::{self, LINE_CAPACITY};
    use myrtio_ambient_light::{DisplayConfig, Mode, RawColorSample, Sample};

    fn texts(lines: &[display::DisplayLine]) -> Vec<&str> {
        lines.iter().map(|line| line.text.as_str()).collect()
    }

    #[test]
    fn test_telemetry_lines() {
        let sample = Sample::new(RawColorSample::new(300, 100, 50, 450), 500);
        let lines = display::telemetry(&sample, &DisplayConfig::new());

        assert_eq!(
            texts(&lines),
            ["AMB LIGHT", "RGB + LUX", "R:300", "G:100", "B:50", "Lux:500"]
        );
        let positions: Vec<(i32, i32)> = lines.iter().map(|line| (line.x, line.y)).collect();
        assert_eq!(
            positions,
            [(8, 6), (20, 16), (14, 30), (14, 40), (14, 50), (60, 40)]
        );
    }

    #[test]
    fn test_telemetry_extremes() {
        let sample = Sample::new(RawColorSample::new(0, u16::MAX, 7, 0), u16::MAX);
        let lines = display::telemetry(&sample, &DisplayConfig::new());
        assert_eq!(&texts(&lines)[2..], ["R:0", "G:65535", "B:7", "Lux:65535"]);
    }

    #[test]
    fn test_banner_truncation() {
        let config = DisplayConfig {
            banner: ["A VERY LONG BANNER TEXT", ""],
        };
        let lines = display::sensor_error(&config);
        assert_eq!(texts(&lines), ["A VERY LO", "", "NO SENSOR"]);
        assert_eq!(lines[0].text.len(), LINE_CAPACITY);
    }

    #[test]
    fn test_lines_fit_buffer() {
        let config = DisplayConfig::new();
        let widest = Sample::new(
            RawColorSample::new(u16::MAX, u16::MAX, u16::MAX, u16::MAX),
            u16::MAX,
        );
        let mut screens = vec![
            display::telemetry(&widest, &config),
            display::sensor_error(&config),
        ];
        for mode in [Mode::Red, Mode::Yellow, Mode::Green, Mode::Blue] {
            screens.push(display::mode_screen(mode, &config));
        }

        for line in screens.iter().flatten() {
            assert!(line.text.len() <= LINE_CAPACITY, "{:?}", line.text);
        }
        assert_eq!(display::telemetry(&widest, &config)[5].text.as_str(), "Lux:65535");
    }

    #[test]
    fn test_mode_screen() {
        let lines = display::mode_screen(Mode::Yellow, &DisplayConfig::new());
        assert_eq!(texts(&lines), ["AMB LIGHT", "RGB + LUX", "Mode:YEL"]);
    }
}
