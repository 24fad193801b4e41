use telco_colors::colors::{
    all_pairs, color_from_pair_number, pair_number_from_color, ColorPair, MajorColor, MinorColor,
    NUMBER_OF_PAIRS,
};
use telco_colors::errors::{ColorCodeError, ColorKind};

#[test]
fn test_known_pair_numbers() {
    let test_cases = [
        (1, MajorColor::White, MinorColor::Blue),
        (4, MajorColor::White, MinorColor::Brown),
        (5, MajorColor::White, MinorColor::Slate),
        (6, MajorColor::Red, MinorColor::Blue),
        (12, MajorColor::Black, MinorColor::Orange),
        (25, MajorColor::Violet, MinorColor::Slate),
    ];

    for (pair_number, major, minor) in test_cases {
        let pair = color_from_pair_number(pair_number).unwrap();
        assert_eq!(pair.major(), major, "major for pair {}", pair_number);
        assert_eq!(pair.minor(), minor, "minor for pair {}", pair_number);
    }
}

#[test]
fn test_known_color_combinations() {
    assert_eq!(
        pair_number_from_color(MajorColor::Black, MinorColor::Orange),
        12
    );
    assert_eq!(
        pair_number_from_color(MajorColor::Violet, MinorColor::Slate),
        25
    );
    assert_eq!(pair_number_from_color(MajorColor::White, MinorColor::Blue), 1);
}

#[test]
fn test_round_trip_from_pair_number() {
    for n in 1..=NUMBER_OF_PAIRS {
        let pair = color_from_pair_number(n).unwrap();
        assert_eq!(pair_number_from_color(pair.major(), pair.minor()), n);
    }
}

#[test]
fn test_round_trip_from_colors() {
    for major in MajorColor::ALL {
        for minor in MinorColor::ALL {
            let n = pair_number_from_color(major, minor);
            let pair = color_from_pair_number(n).unwrap();
            assert_eq!(pair, ColorPair::new(major, minor));
        }
    }
}

#[test]
fn test_pair_numbers_are_unique() {
    let mut seen: Vec<u32> = MajorColor::ALL
        .iter()
        .flat_map(|&major| {
            MinorColor::ALL
                .iter()
                .map(move |&minor| pair_number_from_color(major, minor))
        })
        .collect();
    seen.sort_unstable();
    assert_eq!(seen, (1..=NUMBER_OF_PAIRS).collect::<Vec<_>>());
}

#[test]
fn test_out_of_range_pair_numbers() {
    for pair_number in [0, 26, 100, u32::MAX] {
        match color_from_pair_number(pair_number) {
            Err(ColorCodeError::PairNumberOutOfRange {
                pair_number: got,
                max,
            }) => {
                assert_eq!(got, pair_number);
                assert_eq!(max, 25);
            }
            other => panic!("expected range error for {}, got {:?}", pair_number, other),
        }
    }
}

#[test]
fn test_color_pair_display() {
    let pair = ColorPair::new(MajorColor::Yellow, MinorColor::Green);
    assert_eq!(pair.to_string(), "Yellow Green");
    assert_eq!(pair.pair_number(), 18);
}

#[test]
fn test_color_names() {
    let majors: Vec<&str> = MajorColor::ALL.iter().map(|c| c.name()).collect();
    let minors: Vec<&str> = MinorColor::ALL.iter().map(|c| c.name()).collect();

    assert_eq!(majors, ["White", "Red", "Black", "Yellow", "Violet"]);
    assert_eq!(minors, ["Blue", "Orange", "Green", "Brown", "Slate"]);
}

#[test]
fn test_from_name_case_insensitive() {
    let test_cases = [
        ("White", MajorColor::White),
        ("white", MajorColor::White),
        ("VIOLET", MajorColor::Violet),
        (" bLaCk ", MajorColor::Black),
    ];
    for (name, expected) in test_cases {
        assert_eq!(MajorColor::from_name(name).unwrap(), expected);
    }

    assert_eq!("slate".parse::<MinorColor>().unwrap(), MinorColor::Slate);
    assert_eq!("Orange".parse::<MinorColor>().unwrap(), MinorColor::Orange);
}

#[test]
fn test_every_color_parses_from_its_name() {
    for color in MajorColor::ALL {
        assert_eq!(MajorColor::from_name(color.name()).unwrap(), color);
        assert_eq!(color.to_string().parse::<MajorColor>().unwrap(), color);
        assert_eq!(MajorColor::from_name(&color.name().to_uppercase()).unwrap(), color);
    }

    for color in MinorColor::ALL {
        assert_eq!(MinorColor::from_name(color.name()).unwrap(), color);
        assert_eq!(color.to_string().parse::<MinorColor>().unwrap(), color);
        assert_eq!(MinorColor::from_name(&color.name().to_uppercase()).unwrap(), color);
    }
}

#[test]
fn test_from_name_unknown() {
    match MajorColor::from_name("Blue") {
        Err(ColorCodeError::UnknownColor { kind, name }) => {
            assert_eq!(kind, ColorKind::Major);
            assert_eq!(name, "Blue");
        }
        other => panic!("expected unknown color, got {:?}", other),
    }

    assert!(MinorColor::from_name("White").is_err());
    assert!(MinorColor::from_name("").is_err());
}

#[test]
fn test_all_pairs_order() {
    let pairs: Vec<(u32, ColorPair)> = all_pairs().collect();

    assert_eq!(pairs.len(), 25);
    for (i, (n, pair)) in pairs.iter().enumerate() {
        assert_eq!(*n, i as u32 + 1);
        assert_eq!(color_from_pair_number(*n).unwrap(), *pair);
    }
}

#[test]
fn test_color_pair_serializes_names() {
    let pair = color_from_pair_number(12).unwrap();
    let json = serde_json::to_value(pair).unwrap();

    assert_eq!(json, serde_json::json!({ "major": "Black", "minor": "Orange" }));
}
