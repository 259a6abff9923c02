// Integration tests for the long -> wide -> scored pipeline and the basemap view,
// driven through the public API on census-shaped tables.

use approx::assert_relative_eq;
use geodiversity::{
    BasemapOptions, DiversityError, ENTROPY_COLUMN, GeoId, JsonRenderer, basemap_view, create_basemap,
    entropy, proportions, restructure, score_dataset,
};
use polars::prelude::*;

const GEO: &str = "Lower tier local authorities Code";
const VAR: &str = "Ethnic group (6 categories)";

fn census() -> DataFrame {
    df!(
        GEO => ["E06000001", "E06000001", "E06000001", "E06000002", "E06000002", "E06000003", "E06000004"],
        "Lower tier local authorities" => ["Hartlepool", "Hartlepool", "Hartlepool", "Middlesbrough", "Middlesbrough", "Redcar", "Stockton"],
        VAR => ["White ", " Asian", "Mixed", "White", "Asian ", "White", "Black"],
        "Observation" => [90i64, 5, 5, 50, 50, 10, 0],
    ).unwrap()
}

#[test]
fn census_extract_scores_end_to_end() {
    let wide = restructure(&census(), VAR, GEO).unwrap();
    assert_eq!(wide.categories(), &["Asian", "Black", "Mixed", "White"].map(String::from));
    assert_eq!(wide.num_areas(), 4);

    let scored = score_dataset(&wide).unwrap();

    let hartlepool = GeoId::new("E06000001");
    let expected = entropy([0.9, 0.05, 0.05]);
    assert_relative_eq!(scored.entropy_of(&hartlepool).unwrap(), expected, epsilon = 1e-12);

    let middlesbrough = GeoId::new("E06000002");
    assert_relative_eq!(scored.entropy_of(&middlesbrough).unwrap(), 2f64.ln(), epsilon = 1e-12);

    let redcar = GeoId::new("E06000003");
    assert_eq!(scored.entropy_of(&redcar), Some(0.0));

    // An area whose only record is a zero count has no data, not zero diversity.
    let stockton = GeoId::new("E06000004");
    assert!(scored.entropy_of(&stockton).unwrap().is_nan());
}

#[test]
fn scores_are_bounded_by_ln_k() {
    let wide = restructure(&census(), VAR, GEO).unwrap();
    let max = (wide.num_categories() as f64).ln();
    let scored = score_dataset(&wide).unwrap();
    for (_, score) in scored.scores().filter(|(_, s)| !s.is_nan()) {
        assert!((0.0..=max + 1e-12).contains(&score));
    }
}

#[test]
fn proportions_sum_to_one_for_populated_areas() {
    let wide = restructure(&census(), VAR, GEO).unwrap();
    let props = proportions(&wide);
    for (row, counts) in props.values().rows().into_iter().zip(wide.counts().rows()) {
        if counts.sum() > 0.0 {
            assert_relative_eq!(row.sum(), 1.0, epsilon = 1e-12);
        } else {
            assert!(row.iter().all(|p| p.is_nan()));
        }
    }
}

#[test]
fn scored_table_has_one_extra_column() {
    let wide = restructure(&census(), VAR, GEO).unwrap();
    let table = score_dataset(&wide).unwrap().to_dataframe().unwrap();

    assert_eq!(table.height(), wide.num_areas());
    assert_eq!(table.width(), wide.to_dataframe().unwrap().width() + 1);
    let names = table.get_column_names().iter().map(|name| name.to_string()).collect::<Vec<_>>();
    assert_eq!(names.first().map(String::as_str), Some(GEO));
    assert_eq!(names.last().map(String::as_str), Some(ENTROPY_COLUMN));
}

#[test]
fn wrong_variable_name_reports_field() {
    let err = restructure(&census(), "Religion", GEO).unwrap_err();
    assert!(err.to_string().contains("'Religion'"));
    assert!(err.to_string().contains("reshape::restructure"));
    assert!(matches!(err, DiversityError::Schema { .. }));
}

#[test]
fn basemap_over_area_centroids() {
    let centroids = df!(
        GEO => ["E06000001", "E06000002", "E06000003"],
        "lat" => [54.68, 54.54, 54.59],
        "long" => [-1.21, -1.23, -1.02],
    ).unwrap();

    let view = basemap_view(&centroids, "lat", "long", &BasemapOptions::default()).unwrap();
    assert_relative_eq!(view.center.y, (54.68 + 54.54 + 54.59) / 3.0, epsilon = 1e-12);
    assert_relative_eq!(view.bounds.min().y, 54.54 - 2.0, epsilon = 1e-12);
    assert_relative_eq!(view.bounds.max().y, 54.68 + 5.0, epsilon = 1e-12);
    assert_relative_eq!(view.bounds.min().x, -1.23 - 4.0, epsilon = 1e-12);
    assert_relative_eq!(view.bounds.max().x, -1.02 + 5.0, epsilon = 1e-12);

    let json = create_basemap(&centroids, "lat", "long", &JsonRenderer).unwrap();
    assert_eq!(json["zoom_start"], 6);
    assert_eq!(json["control_scale"], true);
}
