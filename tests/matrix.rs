mod tests {
    use myrtio_ambient_light::color::BLACK;
    use myrtio_ambient_light::matrix::{MATRIX_LEDS, render};
    use myrtio_ambient_light::{Glyph, MatrixColor, Rgb};

    const LEFT_EDGE_ROW_1: Glyph = Glyph::from_rows([
        [0, 0, 0, 0, 0],
        [1, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
    ]);

    #[test]
    fn test_digit_glyphs() {
        assert_eq!(Glyph::digit(0), Some(Glyph::FULL));
        assert_eq!(Glyph::digit(10), None);

        let one = Glyph::digit(1).unwrap();
        let lit: Vec<usize> = (0..MATRIX_LEDS).filter(|&i| one.is_lit(i)).collect();
        assert_eq!(lit, [2, 7, 8, 12, 17, 21, 22, 23]);

        let eight = Glyph::DIGITS[8];
        let lit = (0..MATRIX_LEDS).filter(|&i| eight.is_lit(i)).count();
        assert_eq!(lit, 13);
        for (i, glyph) in Glyph::DIGITS.iter().enumerate().skip(1) {
            assert_ne!(*glyph, Glyph::FULL, "digit {i}");
        }
    }

    #[test]
    fn test_render_full_glyph() {
        let color = Rgb::new(128, 43, 22);
        assert_eq!(render(&Glyph::FULL, color), [color; MATRIX_LEDS]);
        assert_eq!(render(&Glyph::EMPTY, color), [BLACK; MATRIX_LEDS]);
    }

    #[test]
    fn test_render_reverse_order() {
        let top_left = Glyph::from_rows([
            [1, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
        ]);
        let frame = render(&top_left, Rgb::new(1, 2, 3));
        assert_eq!(frame[24], Rgb::new(1, 2, 3));
        assert_eq!(frame.iter().filter(|pixel| **pixel != BLACK).count(), 1);
    }

    #[test]
    fn test_render_serpentine_rows() {
        let frame = render(&LEFT_EDGE_ROW_1, Rgb::new(9, 9, 9));
        // Row 1 is wired right to left: cell 5 sits at strip position 9
        assert_eq!(frame[15], Rgb::new(9, 9, 9));
        assert_eq!(frame.iter().filter(|pixel| **pixel != BLACK).count(), 1);
    }

    #[test]
    fn test_to_serpentine() {
        let wired = LEFT_EDGE_ROW_1.to_serpentine();
        assert!(wired.is_lit(9));
        assert!(!wired.is_lit(5));
        assert_eq!(wired.to_serpentine(), LEFT_EDGE_ROW_1);
        assert!(!wired.is_lit(MATRIX_LEDS));
    }

    #[test]
    fn test_compose_colors() {
        assert_eq!(MatrixColor::Red.compose(100), Rgb::new(255, 0, 0));
        assert_eq!(MatrixColor::Green.compose(100), Rgb::new(0, 255, 0));
        assert_eq!(MatrixColor::Blue.compose(50), Rgb::new(0, 0, 127));
        assert_eq!(MatrixColor::Yellow.compose(100), Rgb::new(127, 127, 0));
        assert_eq!(MatrixColor::Purple.compose(10), Rgb::new(12, 0, 12));
        assert_eq!(MatrixColor::White.compose(100), Rgb::new(85, 85, 85));
        assert_eq!(MatrixColor::BlueMarine.compose(100), Rgb::new(0, 127, 127));
    }

    #[test]
    fn test_compose_clamps_percent() {
        assert_eq!(MatrixColor::Red.compose(250), MatrixColor::Red.compose(100));
        assert_eq!(MatrixColor::White.compose(0), BLACK);
    }
}
