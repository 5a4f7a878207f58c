use anyhow::Result;
use camino::{Utf8Path, Utf8PathBuf};
use schematic_assets::config::NormalizeConfig;
use schematic_assets::error::SkipReason;
use schematic_assets::model::Component;
use schematic_assets::normalize::{FileOutcome, Normalizer, normalize_dir, normalize_file};
use schematic_assets::store::ComponentStore;
use std::collections::BTreeMap;

#[derive(Default)]
struct MemStore {
    files: BTreeMap<Utf8PathBuf, String>,
    writes: Vec<Utf8PathBuf>,
    fail_writes: bool,
}

impl MemStore {
    fn with(files: &[(&str, &str)]) -> Self {
        Self {
            files: files
                .iter()
                .map(|(p, c)| (Utf8PathBuf::from(*p), c.to_string()))
                .collect(),
            ..Default::default()
        }
    }

    fn component(&self, path: &str) -> Component {
        Component::from_json(&self.files[Utf8Path::new(path)]).expect("valid component json")
    }
}

impl ComponentStore for MemStore {
    fn read_to_string(&mut self, path: &Utf8Path) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("not found: {}", path))
    }

    fn write_string(&mut self, path: &Utf8Path, content: &str) -> Result<()> {
        if self.fail_writes {
            anyhow::bail!("read-only: {}", path);
        }
        self.writes.push(path.to_path_buf());
        self.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn list_files(&mut self, dir: &Utf8Path, ext: &str) -> Result<Vec<Utf8PathBuf>> {
        Ok(self
            .files
            .keys()
            .filter(|p| p.parent() == Some(dir) && p.extension() == Some(ext))
            .cloned()
            .collect())
    }
}

const RESISTOR: &str = r#"{
  "id": "resistor",
  "name": "Resistor",
  "category": "passive",
  "description": "Resistor component",
  "svg": "<!-- viewBox: 0 0 60 20 -->\n    <path d=\"M0 10 H60\" stroke=\"black\" stroke-width=\"10\"/>",
  "width": 4,
  "height": 3,
  "endpoints": [
    { "id": "left", "x": 0, "y": 1.5, "direction": "left" },
    { "id": "right", "x": 4, "y": 1.5, "direction": "right", "label": "B" }
  ],
  "tags": ["basic"]
}"#;

const NO_VIEWBOX: &str = r#"{
  "id": "blob",
  "name": "Blob",
  "category": "passive",
  "description": "Blob component",
  "svg": "<circle r=\"5\" stroke-width=\"2\"/>",
  "width": 4,
  "height": 3,
  "endpoints": []
}"#;

fn detected() -> Normalizer {
    Normalizer::from_config(&NormalizeConfig::default())
}

#[test]
fn normalizes_worked_example_and_rescales_endpoints() {
    let mut store = MemStore::with(&[("lib/resistor.json", RESISTOR)]);
    let summary = normalize_dir(&mut store, Utf8Path::new("lib"), &detected(), false).unwrap();
    assert_eq!(summary.updated, vec!["resistor.json"]);

    let c = store.component("lib/resistor.json");
    assert_eq!((c.width, c.height), (2.0, 1.5));
    assert_eq!((c.endpoints[0].x, c.endpoints[0].y), (0.0, 0.75));
    assert_eq!((c.endpoints[1].x, c.endpoints[1].y), (2.0, 0.75));
}

#[test]
fn keeps_fields_it_does_not_know() {
    let mut store = MemStore::with(&[("lib/resistor.json", RESISTOR)]);
    normalize_dir(&mut store, Utf8Path::new("lib"), &detected(), false).unwrap();
    let c = store.component("lib/resistor.json");
    assert_eq!(c.extra["tags"], serde_json::json!(["basic"]));
    assert_eq!(c.endpoints[1].extra["label"], serde_json::json!("B"));
    assert!(store.files[Utf8Path::new("lib/resistor.json")].ends_with("}\n"));
}

#[test]
fn second_run_changes_nothing() {
    let mut store = MemStore::with(&[("lib/resistor.json", RESISTOR)]);
    let n = detected();
    normalize_dir(&mut store, Utf8Path::new("lib"), &n, false).unwrap();
    let after_first = store.files.clone();
    assert_eq!(store.writes.len(), 1);

    let summary = normalize_dir(&mut store, Utf8Path::new("lib"), &n, false).unwrap();
    assert_eq!(summary.unchanged, vec!["resistor.json"]);
    assert!(summary.updated.is_empty());
    assert_eq!(store.writes.len(), 1, "unchanged file is not rewritten");
    assert_eq!(store.files, after_first);
}

#[test]
fn missing_viewbox_skips_without_touching_the_file() {
    let mut store = MemStore::with(&[
        ("lib/blob.json", NO_VIEWBOX),
        ("lib/resistor.json", RESISTOR),
    ]);
    let summary = normalize_dir(&mut store, Utf8Path::new("lib"), &detected(), false).unwrap();
    assert_eq!(
        summary.skipped,
        vec![("blob.json".to_string(), SkipReason::MissingViewBox)]
    );
    assert_eq!(summary.updated, vec!["resistor.json"]);
    assert_eq!(store.files[Utf8Path::new("lib/blob.json")], NO_VIEWBOX);
    assert_eq!(store.writes, vec![Utf8PathBuf::from("lib/resistor.json")]);
}

#[test]
fn zero_stroke_width_is_skipped() {
    let zero = RESISTOR.replace(r#"stroke-width=\"10\""#, r#"stroke-width=\"0\""#);
    let mut store = MemStore::with(&[("lib/resistor.json", &zero)]);
    let outcome =
        normalize_file(&mut store, Utf8Path::new("lib/resistor.json"), &detected(), false).unwrap();
    assert!(matches!(
        outcome,
        FileOutcome::Skipped(SkipReason::Geometry(_))
    ));
    assert!(store.writes.is_empty());
}

#[test]
fn non_component_json_is_skipped() {
    let mut store = MemStore::with(&[("lib/index.json", r#"["resistor"]"#)]);
    let summary = normalize_dir(&mut store, Utf8Path::new("lib"), &detected(), false).unwrap();
    assert_eq!(summary.skipped.len(), 1);
    assert!(matches!(summary.skipped[0].1, SkipReason::NotAComponent(_)));
    assert!(store.writes.is_empty());
}

#[test]
fn assumed_and_detected_modes_differ_for_thin_strokes() {
    let thin = RESISTOR.replace(r#"stroke-width=\"10\""#, r#"stroke-width=\"2\""#);

    let mut store = MemStore::with(&[("lib/resistor.json", &thin)]);
    normalize_dir(&mut store, Utf8Path::new("lib"), &detected(), false).unwrap();
    let c = store.component("lib/resistor.json");
    // 3 * 60 / 20 = 9, 3 * 20 / 20 = 3
    assert_eq!((c.width, c.height), (9.0, 3.0));

    let assumed = Normalizer::from_config(&NormalizeConfig {
        stroke: schematic_assets::config::StrokeMode::Assumed,
        ..NormalizeConfig::default()
    });
    let mut store = MemStore::with(&[("lib/resistor.json", &thin)]);
    normalize_dir(&mut store, Utf8Path::new("lib"), &assumed, false).unwrap();
    let c = store.component("lib/resistor.json");
    assert_eq!((c.width, c.height), (2.0, 1.5));
}

#[test]
fn dry_run_reports_but_does_not_write() {
    let mut store = MemStore::with(&[("lib/resistor.json", RESISTOR)]);
    let summary = normalize_dir(&mut store, Utf8Path::new("lib"), &detected(), true).unwrap();
    assert_eq!(summary.updated, vec!["resistor.json"]);
    assert!(store.writes.is_empty());
    assert_eq!(store.files[Utf8Path::new("lib/resistor.json")], RESISTOR);
}

#[test]
fn write_failure_halts_the_batch() {
    let mut store = MemStore::with(&[("lib/resistor.json", RESISTOR)]);
    store.fail_writes = true;
    let err = normalize_dir(&mut store, Utf8Path::new("lib"), &detected(), false).unwrap_err();
    assert!(err.to_string().contains("read-only"));
}

#[test]
fn only_json_files_in_the_directory_are_visited() {
    let mut store = MemStore::with(&[
        ("lib/resistor.json", RESISTOR),
        ("lib/resistor.svg", "<svg/>"),
        ("other/blob.json", NO_VIEWBOX),
    ]);
    let summary = normalize_dir(&mut store, Utf8Path::new("lib"), &detected(), false).unwrap();
    assert_eq!(summary.total(), 1);
}
