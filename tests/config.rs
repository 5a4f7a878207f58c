use camino::Utf8PathBuf;
use schematic_assets::config::{CONFIG_FILE_NAME, NormalizeConfig, PipelineConfig, StrokeMode};
use std::fs;
use tempfile::tempdir;

#[test]
fn shipped_metadata_table_parses() {
    let cfg = PipelineConfig::from_str(include_str!("../data/pipeline.toml")).unwrap();
    assert_eq!(cfg.components.len(), 10);
    let resistor = &cfg.components["resistor"];
    assert_eq!((resistor.width, resistor.height), (6.0, 2.0));
    assert_eq!(cfg.components["ground"].category, "power");
    assert_eq!(cfg.components["npn-transistor"].category, "active");
    assert_eq!(cfg.normalize, NormalizeConfig::default());
}

#[test]
fn unknown_ids_use_defaults() {
    let cfg = PipelineConfig::from_str(include_str!("../data/pipeline.toml")).unwrap();
    let meta = cfg.metadata_for("capacitor");
    assert_eq!((meta.width, meta.height), (4.0, 3.0));
    assert_eq!(meta.category, "passive");
}

#[test]
fn partial_sections_keep_defaults() {
    let cfg = PipelineConfig::from_str(
        r#"
[normalize]
stroke = "assumed"
min_width = 2

[components.probe]
width = 2
height = 3
"#,
    )
    .unwrap();
    assert_eq!(cfg.normalize.stroke, StrokeMode::Assumed);
    assert_eq!(cfg.normalize.min_width, 2.0);
    assert_eq!(cfg.normalize.min_height, 1.5);
    assert_eq!(cfg.normalize.target_stroke, 3.0);
    assert_eq!(cfg.components["probe"].category, "passive");
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(PipelineConfig::from_str("[normalize]\ntarget = 3\n").is_err());
    assert!(PipelineConfig::from_str("[components.led]\ncolour = \"red\"\n").is_err());
    assert!(PipelineConfig::from_str("[normalize]\nstroke = \"guessed\"\n").is_err());
}

#[test]
fn resolve_prefers_explicit_then_directory_file() {
    let tmp = tempdir().unwrap();
    let dir = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap();

    let cfg = PipelineConfig::resolve(None, &dir).unwrap();
    assert_eq!(cfg, PipelineConfig::builtin().unwrap());
    assert_eq!(cfg.components["ground"].category, "power");

    fs::write(dir.join(CONFIG_FILE_NAME), "[normalize]\ntarget_stroke = 2.0\n").unwrap();
    let cfg = PipelineConfig::resolve(None, &dir).unwrap();
    assert_eq!(cfg.normalize.target_stroke, 2.0);

    let explicit = dir.join("other.toml");
    fs::write(&explicit, "[normalize]\ntarget_stroke = 4.0\n").unwrap();
    let cfg = PipelineConfig::resolve(Some(explicit.as_path()), &dir).unwrap();
    assert_eq!(cfg.normalize.target_stroke, 4.0);

    let missing = dir.join("missing.toml");
    assert!(PipelineConfig::resolve(Some(missing.as_path()), &dir).is_err());
}
