use crate::models::SeriesBundle;
use anyhow::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save a fetched bundle as CSV with header: one row per project observation,
/// then the sparse reference rows in long form (one row per region entry,
/// encoded zeros included as the service sent them).
pub fn save_csv<P: AsRef<Path>>(bundle: &SeriesBundle, path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("kind", "name", "region", "date", "price"))?;
    for p in &bundle.project_data {
        wtr.serialize(("project", &p.name, &p.region, p.date, p.price))?;
    }
    for r in &bundle.reference_price_data {
        for (region, price) in &r.prices {
            wtr.serialize(("reference", "", region, r.date, price))?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Save a fetched bundle as a pretty JSON document in the wire layout.
pub fn save_json<P: AsRef<Path>>(bundle: &SeriesBundle, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(bundle)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MonthKey, PricePoint, ReferencePoint};
    use std::collections::BTreeMap;
    use tempfile::tempdir;

    #[test]
    fn write_csv_and_json() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("x.csv");
        let jsonp = dir.path().join("x.json");
        let bundle = SeriesBundle {
            project_data: vec![PricePoint {
                name: "Riverside".into(),
                region: "East City".into(),
                date: MonthKey::new(2024, 3).unwrap(),
                price: 410.5,
            }],
            reference_price_data: vec![ReferencePoint {
                date: MonthKey::new(2024, 3).unwrap(),
                prices: BTreeMap::from([("East City".to_string(), 455.0)]),
            }],
            regions: vec!["East City".into()],
        };
        save_csv(&bundle, &csvp).unwrap();
        save_json(&bundle, &jsonp).unwrap();
        assert!(csvp.exists());
        assert!(jsonp.exists());

        let raw = std::fs::read_to_string(&jsonp).unwrap();
        let back: SeriesBundle = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, bundle);
    }
}
