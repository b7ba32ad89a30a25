use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = ImporterConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ImporterConfig::default());
    assert_eq!(cfg.font_family, "Inter");
    assert_eq!(cfg.scene_out, None);
    assert_eq!(cfg.layout, LayoutConfig::default());
}

#[test]
fn reads_overrides() {
    let cfg = ImporterConfig::from_lookup(lookup(&[
        ("IMPORTER_FONT_FAMILY", "Roboto"),
        ("IMPORTER_SCENE_OUT", "out/scene.json"),
        ("IMPORTER_SCALE_FACTOR", "1"),
    ]))
    .unwrap();
    assert_eq!(cfg.font_family, "Roboto");
    assert_eq!(cfg.scene_out, Some(PathBuf::from("out/scene.json")));
    assert!((cfg.layout.scale_factor - 1.0).abs() < f64::EPSILON);
    assert_eq!(cfg.layout.frame_start_x, LayoutConfig::default().frame_start_x);
}

#[test]
fn blank_values_count_as_unset() {
    let cfg = ImporterConfig::from_lookup(lookup(&[("IMPORTER_FONT_FAMILY", "  "), ("IMPORTER_SCENE_OUT", "")])).unwrap();
    assert_eq!(cfg.font_family, DEFAULT_FONT_FAMILY);
    assert_eq!(cfg.scene_out, None);
}

#[test]
fn rejects_out_of_range_scale() {
    for raw in ["0", "-1", "4.5", "NaN", "inf", "quarter"] {
        let err = ImporterConfig::from_lookup(lookup(&[("IMPORTER_SCALE_FACTOR", raw)])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidScale(raw.to_owned()));
    }
}

#[test]
fn accepts_upper_bound_scale() {
    let cfg = ImporterConfig::from_lookup(lookup(&[("IMPORTER_SCALE_FACTOR", "4")])).unwrap();
    assert!((cfg.layout.scale_factor - MAX_SCALE_FACTOR).abs() < f64::EPSILON);
}
