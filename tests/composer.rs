mod tests {
    use myrtio_ambient_light::composer::scale_color;
    use myrtio_ambient_light::gamma::square;
    use myrtio_ambient_light::math8::percent8;
    use myrtio_ambient_light::{Composition, Intensity, PwmChannel, PwmLevels, Rgb};

    #[test]
    fn test_square() {
        assert_eq!(square(0), 0);
        assert_eq!(square(16), 256);
        assert_eq!(square(255), 65025);
    }

    #[test]
    fn test_pwm_levels_are_squares() {
        for level in 0..=255u8 {
            let pwm = PwmLevels::gamma_corrected(Rgb::new(level, 0, 255 - level));
            assert_eq!(pwm.r, u16::from(level) * u16::from(level));
            assert!(pwm.b <= 65025);
        }
    }

    #[test]
    fn test_composition() {
        let composition = Composition::new(Rgb::new(255, 85, 43), Intensity::from_lux(500, 1000));
        assert_eq!(composition.brightness, Rgb::new(128, 43, 22));
        assert_eq!(
            composition.pwm,
            PwmLevels {
                r: 16384,
                g: 1849,
                b: 484
            }
        );
    }

    #[test]
    fn test_composition_darkness() {
        let composition = Composition::new(Rgb::new(255, 255, 255), Intensity::ZERO);
        assert_eq!(composition.brightness, Rgb::new(0, 0, 0));
        assert_eq!(composition.pwm, PwmLevels::OFF);
    }

    #[test]
    fn test_scale_color_full() {
        let color = Rgb::new(255, 85, 43);
        assert_eq!(scale_color(color, Intensity::FULL), color);
    }

    #[test]
    fn test_digital_levels() {
        let pwm = PwmLevels::digital(true, false, true);
        assert_eq!(
            pwm.channels(),
            [
                (PwmChannel::Red, u16::MAX),
                (PwmChannel::Green, 0),
                (PwmChannel::Blue, u16::MAX)
            ]
        );
    }

    #[test]
    fn test_percent8() {
        assert_eq!(percent8(0), 0);
        assert_eq!(percent8(50), 127);
        assert_eq!(percent8(100), 255);
        assert_eq!(percent8(200), 255);
    }
}
