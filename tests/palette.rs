use pricechart_rs::chart::palette::{distinct_colors, series_color, Rgb, PALETTE, REFERENCE_LINE};

#[test]
fn palette_cycles_past_eighteen_entries() {
    assert_eq!(PALETTE.len(), 18);
    for i in 0..PALETTE.len() {
        assert_eq!(series_color(i), PALETTE[i]);
        assert_eq!(series_color(i + PALETTE.len()), PALETTE[i]);
    }
}

#[test]
fn distinct_colors_yields_one_per_series() {
    assert!(distinct_colors(0).is_empty());
    assert_eq!(distinct_colors(3).len(), 3);

    let colors = distinct_colors(40);
    assert_eq!(colors.len(), 40);
    for i in 0..22 {
        assert_eq!(colors[i], colors[i + 18]);
    }
}

#[test]
fn hex_form_is_lowercase_rrggbb() {
    assert_eq!(PALETTE[0].to_string(), "#0d6efd");
    assert_eq!(PALETTE[17].to_string(), "#f0e68c");
    assert_eq!(REFERENCE_LINE.to_string(), "#ff4d4f");
}

#[test]
fn adjust_zero_percent_keeps_channels_bit_identical() {
    for color in PALETTE {
        let tinted = color.adjust(0.0, 0.6);
        assert_eq!((tinted.r, tinted.g, tinted.b), (color.r, color.g, color.b));
        assert_eq!(tinted.alpha, 0.6);
    }
}

#[test]
fn adjust_truncates_then_clamps() {
    // 13 * 1.2 = 15.6 truncates to 15; 253 * 1.2 = 303.6 clamps to 255
    let lightened = Rgb::new(13, 110, 253).adjust(20.0, 0.6);
    assert_eq!((lightened.r, lightened.g, lightened.b), (15, 132, 255));

    // darkening can only shrink, never wrap below zero
    let darkened = Rgb::new(10, 200, 255).adjust(-200.0, 1.0);
    assert_eq!((darkened.r, darkened.g, darkened.b), (0, 0, 0));
}

#[test]
fn alpha_prints_in_shortest_css_form() {
    assert_eq!(
        Rgb::new(1, 2, 3).adjust(0.0, 1.0).to_string(),
        "rgba(1, 2, 3, 1)"
    );
    assert_eq!(
        Rgb::new(1, 2, 3).adjust(0.0, 0.8).to_string(),
        "rgba(1, 2, 3, 0.8)"
    );
    assert_eq!(
        Rgb::new(255, 77, 79).adjust(-10.0, 0.8).to_string(),
        "rgba(229, 69, 71, 0.8)"
    );
}
