use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn olens_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("olens");
    path
}

fn setup_test_env() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().to_path_buf();

    let config_dir = root.join("config");
    fs::create_dir_all(&config_dir).unwrap();

    let data_dir = root.join("data");
    fs::create_dir_all(&data_dir).unwrap();

    // Small but representative dataset: repeated events for one athlete at
    // one Games, a missing age, a veteran, and a Winter entry.
    fs::write(
        data_dir.join("athlete_events.csv"),
        "\
ID,Name,Sex,Age,Height,Weight,NOC,Year,Season,Sport,Event,Medal
1,Alice Adams,F,24,168,60,USA,2016,Summer,Swimming,100m Freestyle,Gold
1,Alice Adams,F,24,168,60,USA,2016,Summer,Swimming,200m Freestyle,NA
2,Bob Brown,M,30,180,80,USA,2016,Summer,Swimming,100m Freestyle,NA
3,Chie Sato,F,NA,160,55,JPN,2016,Summer,Judo,Women's -48kg,Silver
4,Dan Dyer,M,41,175,77,JPN,2012,Summer,Archery,Men's Individual,NA
5,Eve Ernst,F,22,170,65,GER,2012,Summer,Athletics,Women's 100m,Bronze
6,Fred Fuchs,M,28,182,90,GER,2016,Winter,Ice Hockey,Men's Ice Hockey,NA
",
    )
    .unwrap();

    fs::write(
        data_dir.join("noc_regions.csv"),
        "\
NOC,region
USA,United States
JPN,Japan
GER,Germany
",
    )
    .unwrap();

    let config_content = format!(
        r#"[data]
athletes_csv = "{}/data/athlete_events.csv"
regions_csv = "{}/data/noc_regions.csv"
"#,
        root.display(),
        root.display()
    );

    let config_path = config_dir.join("olens.toml");
    fs::write(&config_path, config_content).unwrap();

    (tmp, config_path)
}

fn run_olens(config_path: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = olens_binary();
    let output = Command::new(&binary)
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run olens binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();
    (stdout, stderr, success)
}

#[test]
fn test_stats_overview() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_olens(&config_path, &["stats"]);
    assert!(success, "stats failed: stdout={}, stderr={}", stdout, stderr);
    // 7 raw rows; the age view drops the NA-age row; the gender view keeps it.
    assert!(stdout.contains("Raw rows:             7"), "got: {}", stdout);
    assert!(stdout.contains("Age view records:     6"), "got: {}", stdout);
    assert!(stdout.contains("Gender view records:  7"), "got: {}", stdout);
    assert!(stdout.contains("Unique athletes:      6"), "got: {}", stdout);
    assert!(stdout.contains("Countries:            3"), "got: {}", stdout);
}

#[test]
fn test_stats_deterministic() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout1, _, _) = run_olens(&config_path, &["stats"]);
    let (stdout2, _, _) = run_olens(&config_path, &["stats"]);
    assert_eq!(
        stdout1, stdout2,
        "Identical inputs must produce identical output"
    );
}

#[test]
fn test_histogram_filters_combine() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_olens(
        &config_path,
        &["ages", "histogram", "--sport", "Swimming", "--year", "2016"],
    );
    assert!(success, "histogram failed: {}", stdout);
    // Alice contributes two entries at 24 (one a medal), Bob one at 30.
    assert!(stdout.contains("MEDALISTS"));
    assert!(stdout.contains("2 buckets, 3 entries"), "got: {}", stdout);
}

#[test]
fn test_histogram_medal_filter() {
    let (_tmp, config_path) = setup_test_env();

    // Only Alice's gold and Eve's bronze carry medals in the age view.
    let (stdout, _, success) =
        run_olens(&config_path, &["ages", "histogram", "--medal", "any"]);
    assert!(success, "histogram failed: {}", stdout);
    assert!(stdout.contains("2 buckets, 2 entries"), "got: {}", stdout);

    let (stdout, _, success) =
        run_olens(&config_path, &["ages", "histogram", "--medal", "Gold"]);
    assert!(success);
    assert!(stdout.contains("1 buckets, 1 entries"), "got: {}", stdout);

    let (_, stderr, success) =
        run_olens(&config_path, &["ages", "histogram", "--medal", "Platinum"]);
    assert!(!success, "Unknown medal filter should fail");
    assert!(stderr.contains("Unknown medal filter"), "got: {}", stderr);
}

#[test]
fn test_histogram_empty_selection() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_olens(&config_path, &["ages", "histogram", "--year", "1900"]);
    assert!(success, "Empty selection should not be an error");
    assert!(stdout.contains("No records match."));
}

#[test]
fn test_medal_rates_percentages() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_olens(
        &config_path,
        &["ages", "rates", "--sport", "Swimming", "--year", "2016"],
    );
    assert!(success, "rates failed: {}", stdout);
    // Age 24: two entries, one gold -> 50.0% gold rate.
    assert!(stdout.contains("50.0"), "got: {}", stdout);
}

#[test]
fn test_by_sport_minimum_sample_floor() {
    let (_tmp, config_path) = setup_test_env();

    // Default floor of 10 excludes everything in this small fixture.
    let (stdout, _, success) = run_olens(&config_path, &["ages", "by-sport"]);
    assert!(success);
    assert!(
        stdout.contains("No sport reaches the minimum sample of 10."),
        "got: {}",
        stdout
    );

    let (stdout, _, success) = run_olens(&config_path, &["ages", "by-sport", "--min-sample", "1"]);
    assert!(success);
    assert!(stdout.contains("Swimming"), "got: {}", stdout);
    assert!(stdout.contains("Archery"), "got: {}", stdout);
}

#[test]
fn test_trend_year_range() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_olens(
        &config_path,
        &["ages", "trend", "--from", "2016", "--to", "2016", "--min-sample", "1"],
    );
    assert!(success, "trend failed: {}", stdout);
    assert!(stdout.contains("2016"), "got: {}", stdout);
    assert!(!stdout.contains("2012"), "got: {}", stdout);
}

#[test]
fn test_veterans_threshold() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_olens(&config_path, &["ages", "veterans"]);
    assert!(success, "veterans failed: {}", stdout);
    // Only Dan (41) clears the default threshold of 40.
    assert!(stdout.contains("Japan"), "got: {}", stdout);
    assert!(!stdout.contains("United States"), "got: {}", stdout);
}

#[test]
fn test_gender_timeline_counts_participants() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_olens(&config_path, &["gender", "timeline"]);
    assert!(success, "timeline failed: {}", stdout);
    assert!(stdout.contains("2012"));
    assert!(stdout.contains("2016"));
    // 2016 participants: Alice (two events, one participant), Bob, Chie, Fred.
    assert!(
        stdout.lines().any(|l| l.contains("2016") && l.contains("4")),
        "got: {}",
        stdout
    );
}

#[test]
fn test_gender_timeline_country_filter() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) =
        run_olens(&config_path, &["gender", "timeline", "--country", "Japan"]);
    assert!(success, "timeline failed: {}", stdout);
    assert!(stdout.contains("2012"));
    assert!(stdout.contains("2016"));

    let (stdout, _, success) =
        run_olens(&config_path, &["gender", "timeline", "--country", "Atlantis"]);
    assert!(success, "Unknown country should not be an error");
    assert!(stdout.contains("No records match."));
}

#[test]
fn test_gender_sports_ranked_by_female_share() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_olens(&config_path, &["gender", "sports", "--year", "2016"]);
    assert!(success, "sports failed: {}", stdout);
    // Judo is all-female in 2016, so it ranks above Swimming and Ice Hockey.
    let judo_pos = stdout.find("Judo").expect("Judo missing");
    let hockey_pos = stdout.find("Ice Hockey").expect("Ice Hockey missing");
    assert!(judo_pos < hockey_pos, "got: {}", stdout);
    assert!(stdout.contains("100.0"), "got: {}", stdout);
}

#[test]
fn test_countries_list_sentinel_first() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_olens(&config_path, &["countries", "list"]);
    assert!(success, "list failed: {}", stdout);
    let all_pos = stdout.find("All Countries").expect("sentinel missing");
    let germany_pos = stdout.find("Germany").expect("Germany missing");
    assert!(all_pos < germany_pos, "Sentinel must come first: {}", stdout);
    assert!(stdout.contains("3 countries"), "got: {}", stdout);
}

#[test]
fn test_suggest_prefix_not_substring() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_olens(&config_path, &["countries", "suggest", "ja"]);
    assert!(success);
    assert!(stdout.contains("Japan"), "got: {}", stdout);

    // "pan" is a substring of "Japan" but not a prefix.
    let (stdout, _, success) = run_olens(&config_path, &["countries", "suggest", "pan"]);
    assert!(success);
    assert!(stdout.contains("No suggestions."), "got: {}", stdout);
}

#[test]
fn test_resolve_exact_and_sentinel_fallback() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_olens(&config_path, &["countries", "resolve", "japan"]);
    assert!(success);
    assert_eq!(stdout.trim(), "Japan");

    let (stdout, _, success) = run_olens(&config_path, &["countries", "resolve", "Atlantis"]);
    assert!(success, "Unresolved name should not be an error");
    assert_eq!(stdout.trim(), "all");
}

#[test]
fn test_summary_stdout_json() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_olens(&config_path, &["summary"]);
    assert!(success, "summary failed: stderr={}", stderr);

    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON");
    let usa = &parsed["USA"];
    assert_eq!(usa["region"], "United States");
    assert_eq!(usa["medals"]["gold"], 1);
    assert_eq!(usa["total_athletes"], 2);
    assert_eq!(usa["top_sport"], "Swimming");

    let jpn = &parsed["JPN"];
    assert_eq!(jpn["region"], "Japan");
    assert_eq!(jpn["medals"]["silver"], 1);
    // Chie has no age but still counts toward the summary.
    assert_eq!(jpn["total_athletes"], 2);
}

#[test]
fn test_summary_writes_file() {
    let (tmp, config_path) = setup_test_env();

    let out_path = tmp.path().join("out").join("noc_summary.json");
    let (_, stderr, success) = run_olens(
        &config_path,
        &["summary", "--output", out_path.to_str().unwrap()],
    );
    assert!(success, "summary failed: {}", stderr);
    assert!(stderr.contains("3 country summaries"), "got: {}", stderr);

    let content = fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("invalid JSON");
    assert_eq!(parsed.as_object().unwrap().len(), 3);
}

#[test]
fn test_summary_deterministic() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout1, _, _) = run_olens(&config_path, &["summary"]);
    let (stdout2, _, _) = run_olens(&config_path, &["summary"]);
    assert_eq!(stdout1, stdout2, "Summary artifact must be byte-identical");
}

#[test]
fn test_missing_config_errors() {
    let (tmp, _) = setup_test_env();

    let bogus = tmp.path().join("config").join("missing.toml");
    let (_, stderr, success) = run_olens(&bogus, &["stats"]);
    assert!(!success, "Missing config should fail");
    assert!(
        stderr.contains("Failed to read config file"),
        "got: {}",
        stderr
    );
}

#[test]
fn test_missing_data_file_errors() {
    let (tmp, config_path) = setup_test_env();

    fs::remove_file(tmp.path().join("data").join("athlete_events.csv")).unwrap();
    let (_, stderr, success) = run_olens(&config_path, &["stats"]);
    assert!(!success, "Missing data file should fail");
    assert!(
        stderr.contains("Failed to open athlete events file"),
        "got: {}",
        stderr
    );
}
