use std::path::PathBuf;

use habitability::{
    config::{ProfileConfig, ProfileLoader},
    presets::Preset,
    scoring::score,
    AxisUnit, Tolerance,
};

fn profile_loader() -> ProfileLoader {
    ProfileLoader::new(env!("CARGO_MANIFEST_DIR"))
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from("profiles").join(name)
}

#[test]
fn loader_reads_fixture() {
    let config = profile_loader().load(fixture("humanoid.yaml")).expect("profile parses");
    assert_eq!(config.name, "Humanoid");
    assert_eq!(config.axes.len(), 3);
    assert_eq!(config.axes[1].unit, AxisUnit::Temperature);
}

#[test]
fn fixture_matches_preset() {
    let (_, profile) = profile_loader()
        .load_profile(fixture("humanoid.yaml"))
        .unwrap();
    assert_eq!(profile, Preset::Humanoid.profile().unwrap());
}

#[test]
fn fixtures_score() {
    let loader = profile_loader();
    let expected = [
        ("humanoid.yaml", 3_293_786),
        ("humanoid_immune_temp.yaml", 4_427_908),
        ("immune_single.yaml", 66_607),
        ("open_single.yaml", 26_239),
    ];
    for (file, expected) in expected {
        let (_, profile) = loader.load_profile(fixture(file)).unwrap();
        assert_eq!(score(&profile), expected, "{file}");
    }
}

#[test]
fn immune_fixture_has_no_bounds() {
    let (_, profile) = profile_loader()
        .load_profile(fixture("humanoid_immune_temp.yaml"))
        .unwrap();
    assert!(profile.total_terraforming());
    assert_eq!(profile.tolerances()[1], Tolerance::Immune);
}

#[test]
fn invalid_profile_is_rejected_before_scoring() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("narrow.yaml");
    std::fs::write(
        &path,
        "name: Narrow\naxes:\n  - name: Gravity\n    min: 40\n    max: 41\n",
    )
    .unwrap();

    let loader = ProfileLoader::new(temp_dir.path());
    let err = loader.load_profile("narrow.yaml").unwrap_err();
    assert!(
        format!("{err:#}").contains("too narrow"),
        "unexpected error: {err:#}"
    );
}

#[test]
fn dumped_preset_round_trips() {
    let profile = Preset::Humanoid.profile().unwrap();
    let yaml = ProfileConfig::from_profile("humanoid", &profile)
        .to_yaml_string()
        .unwrap();
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("dump.yaml"), yaml).unwrap();

    let (config, reloaded) = ProfileLoader::new(temp_dir.path())
        .load_profile("dump.yaml")
        .unwrap();
    assert_eq!(config.name, "humanoid");
    assert_eq!(reloaded, profile);
}
