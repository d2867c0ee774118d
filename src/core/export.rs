// ParcelScout - core/export.rs
//
// CSV and JSON export of a filtered listing view.
// Core layer: writes to any Write trait object.

use crate::core::model::Listing;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Export listings to CSV format.
///
/// Writes: id, title, state, county, category, acres, price, features,
/// listed. Returns the number of rows written.
pub fn export_csv<W: Write>(
    listings: &[Listing],
    writer: W,
    export_path: &Path,
    max_entries: usize,
) -> Result<usize, ExportError> {
    check_limit(listings.len(), max_entries)?;

    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "id", "title", "state", "county", "category", "acres", "price", "features", "listed",
        ])
        .map_err(|e| ExportError::Csv {
            path: export_path.to_path_buf(),
            source: e,
        })?;

    let mut count = 0;
    for listing in listings {
        let price = listing
            .price
            .map(|p| p.to_string())
            .unwrap_or_default();
        let listed = listing
            .listed
            .map(|d| d.to_string())
            .unwrap_or_default();

        csv_writer
            .write_record([
                &listing.id,
                &listing.title,
                &listing.state,
                &listing.county,
                listing.category.label(),
                &listing.acres.to_string(),
                &price,
                &listing.features.join("; "),
                &listed,
            ])
            .map_err(|e| ExportError::Csv {
                path: export_path.to_path_buf(),
                source: e,
            })?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(rows = count, path = %export_path.display(), "CSV export complete");
    Ok(count)
}

/// Export listings as a pretty-printed JSON array.
///
/// Returns the number of listings written.
pub fn export_json<W: Write>(
    listings: &[Listing],
    mut writer: W,
    export_path: &Path,
    max_entries: usize,
) -> Result<usize, ExportError> {
    check_limit(listings.len(), max_entries)?;

    serde_json::to_writer_pretty(&mut writer, listings).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(listings = listings.len(), path = %export_path.display(), "JSON export complete");
    Ok(listings.len())
}

fn check_limit(count: usize, max_entries: usize) -> Result<(), ExportError> {
    if count > max_entries {
        return Err(ExportError::TooManyEntries {
            count,
            max: max_entries,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::ListingCategory;
    use std::path::PathBuf;

    fn sample() -> Vec<Listing> {
        vec![Listing {
            id: "test-1".into(),
            title: "Test Parcel, \"The Flats\"".into(),
            state: "AZ".into(),
            county: "Pima".into(),
            category: ListingCategory::Land,
            acres: 10.0,
            price: Some(15_000.0),
            features: vec!["Road Access".into(), "No HOA".into()],
            description: String::new(),
            listed: None,
        }]
    }

    #[test]
    fn test_csv_export_header_and_row() {
        let mut buf = Vec::new();
        let count =
            export_csv(&sample(), &mut buf, &PathBuf::from("out.csv"), 100).unwrap();
        assert_eq!(count, 1);

        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("id,title,state"));
        let row = lines.next().unwrap();
        assert!(row.contains("test-1"));
        assert!(row.contains("Road Access; No HOA"));
    }

    #[test]
    fn test_json_export_round_trips() {
        let mut buf = Vec::new();
        export_json(&sample(), &mut buf, &PathBuf::from("out.json"), 100).unwrap();
        let parsed: Vec<Listing> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].id, "test-1");
        assert_eq!(parsed[0].price, Some(15_000.0));
    }

    #[test]
    fn test_export_limit_enforced() {
        let mut buf = Vec::new();
        let result = export_csv(&sample(), &mut buf, &PathBuf::from("out.csv"), 0);
        assert!(matches!(
            result,
            Err(ExportError::TooManyEntries { count: 1, max: 0 })
        ));
    }
}
