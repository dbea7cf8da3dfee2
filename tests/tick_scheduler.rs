mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_ambient_light::{
        ButtonCycled, ButtonCycledConfig, BuzzerSink, DisplaySink, Frame, FrameSink, OutputDriver,
        OutputSinks, PwmChannel, PwmSink, Rgb, SharedModeCycle, TickScheduler,
    };

    #[derive(Default)]
    struct FrameRecorder(Vec<Frame>);

    impl FrameSink for FrameRecorder {
        fn apply(&mut self, frame: &Frame) {
            self.0.push(frame.clone());
        }
    }

    #[derive(Default)]
    struct PwmRecorder(Vec<(PwmChannel, u16)>);

    impl PwmSink for PwmRecorder {
        fn set_duty(&mut self, channel: PwmChannel, value: u16) {
            self.0.push((channel, value));
        }
    }

    #[derive(Default)]
    struct MatrixRecorder(Vec<Rgb>);

    impl OutputDriver for MatrixRecorder {
        fn write(&mut self, colors: &[Rgb]) {
            self.0 = colors.to_vec();
        }
    }

    #[derive(Default)]
    struct BuzzerRecorder(Option<u16>);

    impl BuzzerSink for BuzzerRecorder {
        fn set_duty(&mut self, value: u16) {
            self.0 = Some(value);
        }
    }

    #[derive(Default)]
    struct DisplayRecorder(Vec<String>);

    impl DisplaySink for DisplayRecorder {
        fn clear(&mut self) {
            self.0.push("clear".into());
        }

        fn draw_text(&mut self, line: &str, x: i32, y: i32) {
            self.0.push(format!("{line}@{x},{y}"));
        }

        fn flush(&mut self) {
            self.0.push("flush".into());
        }
    }

    #[test]
    fn test_tick_pacing() {
        let modes = SharedModeCycle::new();
        let policy = ButtonCycled::new(&modes, ButtonCycledConfig::new());
        let mut scheduler = TickScheduler::new(policy, FrameRecorder::default());

        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(500));
        assert_eq!(result.sleep_duration, Duration::from_millis(500));

        let result = scheduler.tick(Instant::from_millis(520));
        assert_eq!(result.next_deadline, Instant::from_millis(1000));
        assert_eq!(result.sleep_duration, Duration::from_millis(480));

        assert_eq!(scheduler.sinks().0.len(), 2);
    }

    #[test]
    fn test_tick_behind_schedule() {
        let modes = SharedModeCycle::new();
        let policy = ButtonCycled::new(&modes, ButtonCycledConfig::new());
        let mut scheduler = TickScheduler::new(policy, FrameRecorder::default());

        scheduler.tick(Instant::from_millis(0));
        // Late, but within the drift window: no sleep, keep the schedule
        let result = scheduler.tick(Instant::from_millis(1200));
        assert_eq!(result.next_deadline, Instant::from_millis(1000));
        assert_eq!(result.sleep_duration, Duration::from_millis(0));
    }

    #[test]
    fn test_tick_drift_reset() {
        let modes = SharedModeCycle::new();
        let policy = ButtonCycled::new(&modes, ButtonCycledConfig::new());
        let mut scheduler = TickScheduler::new(policy, FrameRecorder::default());

        scheduler.tick(Instant::from_millis(0));
        let result = scheduler.tick(Instant::from_millis(5000));
        assert_eq!(result.next_deadline, Instant::from_millis(5500));
        assert_eq!(result.sleep_duration, Duration::from_millis(500));
    }

    #[test]
    fn test_output_sinks_apply() {
        let modes = SharedModeCycle::new();
        let policy = ButtonCycled::new(&modes, ButtonCycledConfig::new());
        let sinks = OutputSinks::new(
            PwmRecorder::default(),
            MatrixRecorder::default(),
            BuzzerRecorder::default(),
            DisplayRecorder::default(),
        );
        let mut scheduler = TickScheduler::new(policy, sinks);
        scheduler.tick(Instant::from_millis(0));

        let sinks = scheduler.sinks();
        assert_eq!(
            sinks.pwm.0,
            [
                (PwmChannel::Red, u16::MAX),
                (PwmChannel::Green, 0),
                (PwmChannel::Blue, 0)
            ]
        );
        assert_eq!(sinks.matrix.0.len(), 25);
        assert_eq!(sinks.buzzer.0, Some(0));
        assert_eq!(
            sinks.display.0,
            [
                "clear",
                "AMB LIGHT@8,6",
                "RGB + LUX@20,16",
                "Mode:RED@14,30",
                "flush"
            ]
        );
    }
}
