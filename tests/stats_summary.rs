use pricechart_rs::models::{GroupKey, MonthKey, PricePoint, ReferencePoint, SeriesBundle};
use pricechart_rs::stats::grouped_summary;
use std::collections::BTreeMap;

fn pp(name: &str, region: &str, month: u32, price: f64) -> PricePoint {
    PricePoint {
        name: name.into(),
        region: region.into(),
        date: MonthKey::new(2024, month).unwrap(),
        price,
    }
}

#[test]
fn grouped_stats_track_axis_gaps_and_median_even_odd() {
    // Axis spans 2024-01..2024-04; the fourth month only exists through a
    // reference row, so every group is missing at least that one.
    // (A, East) has [1,2,3,4] -> median (2+3)/2 = 2.5
    // (B, East) has [10, 30] over the same axis -> missing = 2, median = 20
    let bundle = SeriesBundle {
        project_data: vec![
            pp("A", "East", 1, 1.0),
            pp("A", "East", 2, 2.0),
            pp("A", "East", 3, 3.0),
            pp("B", "East", 1, 10.0),
            pp("B", "East", 3, 30.0),
            pp("A", "East", 4, 4.0),
        ],
        reference_price_data: vec![ReferencePoint {
            date: MonthKey::new(2024, 4).unwrap(),
            prices: BTreeMap::from([("East".to_string(), 50.0)]),
        }],
        regions: vec!["East".into()],
    };

    let mut got = grouped_summary(&bundle);
    got.sort_by(|a, b| a.key.cmp(&b.key));
    assert_eq!(got.len(), 2);

    let a = &got[0];
    assert_eq!(
        a.key,
        GroupKey {
            name: "A".into(),
            region: "East".into()
        }
    );
    assert_eq!(a.count, 4);
    assert_eq!(a.missing, 0);
    assert_eq!(a.min, Some(1.0));
    assert_eq!(a.max, Some(4.0));
    assert!((a.mean.unwrap() - 2.5).abs() < 1e-9);
    assert!((a.median.unwrap() - 2.5).abs() < 1e-9);

    let b = &got[1];
    assert_eq!(
        b.key,
        GroupKey {
            name: "B".into(),
            region: "East".into()
        }
    );
    assert_eq!(b.count, 2);
    assert_eq!(b.missing, 2);
    assert_eq!(b.min, Some(10.0));
    assert_eq!(b.max, Some(30.0));
    assert_eq!(b.mean.unwrap(), 20.0);
    assert_eq!(b.median.unwrap(), 20.0);
}

#[test]
fn empty_bundle_has_no_groups() {
    assert!(grouped_summary(&SeriesBundle::default()).is_empty());
}

#[test]
fn same_project_in_two_regions_forms_two_groups() {
    let bundle = SeriesBundle {
        project_data: vec![pp("A", "East", 1, 10.0), pp("A", "West", 1, 20.0)],
        reference_price_data: vec![],
        regions: vec![],
    };
    let got = grouped_summary(&bundle);
    assert_eq!(got.len(), 2);
    assert!(got.iter().all(|s| s.count == 1 && s.missing == 0));
}
