//! Save/reload round-trip guarantees over the full shape catalogue.

use afriscope_normalize::{
    load, normalize, save, AnalyticValue, Frame, FrameIndex, Key, Label, Series,
};
use ndarray::ArrayD;

fn sample_value() -> AnalyticValue {
    AnalyticValue::Map(vec![
        (
            Key::Text("frame".into()),
            AnalyticValue::Frame(
                Frame::new(vec![
                    (
                        Label::Multi(vec!["emr".into(), "rate".into()]),
                        vec![AnalyticValue::Float(85.0), AnalyticValue::Float(f64::NAN)],
                    ),
                    (
                        Label::Name("facilities".into()),
                        vec![AnalyticValue::Int(230), AnalyticValue::Null],
                    ),
                ])
                .with_index(FrameIndex {
                    names: vec!["country".into(), "year".into()],
                    keys: vec![
                        vec![Key::Text("ken".into()), Key::Int(2024)],
                        vec![Key::Text("uga".into()), Key::Int(2024)],
                    ],
                }),
            ),
        ),
        (
            Key::Text("series".into()),
            AnalyticValue::Series(Series::new(vec![
                (Key::Int(2023), AnalyticValue::Float(0.41)),
                (Key::Int(2024), AnalyticValue::Float(0.62)),
            ])),
        ),
        (
            Key::Text("array".into()),
            AnalyticValue::Array(
                ArrayD::from_shape_vec(vec![2, 2], vec![1.0, f64::INFINITY, 0.5, -2.0]).unwrap(),
            ),
        ),
        (
            Key::Composite(vec![Key::Text("pillar".into()), Key::Text("weights".into())]),
            AnalyticValue::Set(vec![
                AnalyticValue::Text("human_capital".into()),
                AnalyticValue::Text("physical_infrastructure".into()),
            ]),
        ),
    ])
}

#[test]
fn saved_document_reloads_to_the_canonical_tree() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metrics.json");

    let value = sample_value();
    let canonical = normalize(&value);
    save(&value, &path).unwrap();
    let reloaded = load(&path).unwrap();

    assert_eq!(reloaded, canonical);
}

#[test]
fn non_finite_values_observed_as_null_after_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metrics.json");

    save(&sample_value(), &path).unwrap();
    let reloaded = load(&path).unwrap();

    // NaN frame cell.
    assert!(reloaded["frame"][1]["emr_rate"].is_null());
    // Infinity array element.
    assert!(reloaded["array"][0][1].is_null());
    // Finite neighbors survive.
    assert_eq!(reloaded["frame"][0]["emr_rate"], 85.0);
    assert_eq!(reloaded["array"][1][0], 0.5);
}

#[test]
fn expanded_index_columns_survive_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metrics.json");

    save(&sample_value(), &path).unwrap();
    let reloaded = load(&path).unwrap();

    assert_eq!(reloaded["frame"][0]["country"], "ken");
    assert_eq!(reloaded["frame"][0]["year"], 2024);
    assert_eq!(reloaded["frame"][1]["country"], "uga");
    assert_eq!(reloaded["pillar_weights"][0], "human_capital");
}

#[test]
fn normalizing_a_reloaded_tree_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metrics.json");

    save(&sample_value(), &path).unwrap();
    let reloaded = load(&path).unwrap();
    let again = normalize(&AnalyticValue::Json(reloaded.clone()));

    assert_eq!(again, reloaded);
}
