//! Race pipeline service
//!
//! Wires the stages together: directory → timing log → pairing → report.
//! The first failing stage aborts the run before anything is written.

use std::io::Write;

use crate::config::{Config, RaceConfig};
use crate::error::AppResult;
use crate::models::Leaderboard;
use crate::services::{DirectoryService, RankingService, ReportService, TimingService};

/// Race service running one ranking pass
pub struct RaceService;

impl RaceService {
    /// Load both inputs and rank every completed pair
    pub fn build_leaderboard(config: &RaceConfig) -> AppResult<Leaderboard> {
        let directory = DirectoryService::load(&config.competitors_path)?;

        let mut log = TimingService::open(&config.results_path)?;
        let mut engine = RankingService::new(&directory, config.elapsed_policy);
        engine.ingest_all(log.by_ref())?;

        tracing::info!(
            path = %log.path().display(),
            lines = log.lines_read(),
            results = engine.completed(),
            "Processed timing log"
        );
        drop(log);

        Ok(engine.finish())
    }

    /// Run the whole pipeline and write the report to `out`
    pub fn run<W: Write>(config: &Config, out: &mut W) -> AppResult<()> {
        let leaderboard = Self::build_leaderboard(&config.race)?;
        ReportService::write_report(
            out,
            config.report.format,
            &config.report.locale.headers(),
            leaderboard,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::config::{Locale, OutputFormat};
    use crate::error::AppError;
    use crate::models::ElapsedPolicy;

    struct Fixture {
        _dir: tempfile::TempDir,
        config: Config,
    }

    fn fixture(results: &str, competitors: &str) -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let results_path = dir.path().join("results_RUN.txt");
        let competitors_path = dir.path().join("competitors2.json");
        std::fs::write(&results_path, results).unwrap();
        std::fs::write(&competitors_path, competitors).unwrap();

        let mut config = Config::default();
        config.race.results_path = results_path;
        config.race.competitors_path = competitors_path;
        Fixture { _dir: dir, config }
    }

    fn run_to_string(config: &Config) -> AppResult<String> {
        let mut out = Vec::new();
        RaceService::run(config, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    const COMPETITORS: &str = r#"{
        "001": {"Name": "Ana", "Surname": "Lee"},
        "002": {"Name": "Ben", "Surname": "Okafor"},
        "003": {"Name": "Cleo"}
    }"#;

    const RESULTS: &str = "\
001 start 09:00:00,000000
001 finish 09:42:10,500000
002 start 09:00:05,000000
002 finish 09:39:00,000000
003 start 09:00:10,000000
003 finish 10:01:00,000000
";

    #[test]
    fn test_example_single_row() {
        let f = fixture(
            "001 x 00:01:00,000000\n002 x 00:02:30,000000\n",
            r#"{"002": {"Name":"Ana","Surname":"Lee"}}"#,
        );
        let text = run_to_string(&f.config).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        let cells: Vec<&str> = lines[4].split(" | ").map(str::trim).collect();
        assert_eq!(cells, ["1", "002", "Ana", "Lee", "00:01:30"]);
    }

    #[test]
    fn test_full_table() {
        let f = fixture(RESULTS, COMPETITORS);
        let text = run_to_string(&f.config).unwrap();

        let expected = "

Place | Bib Number | First Name | Last Name |          Result
------+------------+------------+-----------+----------------
    1 |        002 |        Ben |    Okafor |        00:38:55
    2 |        001 |        Ana |       Lee | 00:42:10.500000
    3 |        003 |       Cleo |           |        01:00:50
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_rows_match_pairs_and_are_sorted() {
        let f = fixture(&format!("{RESULTS}001 start 11:00:00,000000\n"), COMPETITORS);
        let board = RaceService::build_leaderboard(&f.config.race).unwrap();
        let rows = board.into_ranked_rows();

        assert_eq!(rows.len(), 3);
        assert!(rows.windows(2).all(|w| w[0].elapsed <= w[1].elapsed));
    }

    #[test]
    fn test_output_is_deterministic() {
        let f = fixture(RESULTS, COMPETITORS);
        let first = run_to_string(&f.config).unwrap();
        let second = run_to_string(&f.config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_participant_writes_nothing() {
        let f = fixture(RESULTS, r#"{"001": {"Name": "Ana"}, "002": {"Name": "Ben"}}"#);
        let mut out = Vec::new();
        let err = RaceService::run(&f.config, &mut out).unwrap_err();

        assert!(matches!(err, AppError::UnknownParticipant { ref bib } if bib == "003"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_unused_malformed_entries_still_report() {
        let f = fixture(
            "001 x 00:01:00,000000\n002 x 00:02:30,000000\n",
            r#"{"002": {"Name":"Ana","Surname":"Lee"}, "999": "retired", "998": {"Name": 7}}"#,
        );
        let text = run_to_string(&f.config).unwrap();
        let rows: Vec<&str> = text.lines().filter(|l| l.ends_with("00:01:30")).collect();
        assert_eq!(rows, ["    1 |        002 |        Ana |       Lee | 00:01:30"]);
    }

    #[test]
    fn test_malformed_entry_of_finisher_fails() {
        let f = fixture("1 x 00:00:00,0\n2 x 00:00:05,0\n", r#"{"2": {"Name": 7}}"#);
        let mut out = Vec::new();
        let err = RaceService::run(&f.config, &mut out).unwrap_err();

        assert!(matches!(err, AppError::InvalidParticipant { ref bib, .. } if bib == "2"));
        assert_eq!(err.exit_code(), 10);
        assert!(out.is_empty());
    }

    #[test]
    fn test_invalid_clock_reports_bib() {
        let f = fixture("010 x 00:00:00,0\n011 x 99:99:99,000000\n", r#"{"011": {}}"#);
        let err = run_to_string(&f.config).unwrap_err();
        assert!(matches!(err, AppError::MalformedTimestamp { ref bib, .. } if bib == "011"));
    }

    #[test]
    fn test_directory_failure_precedes_log_parsing() {
        let mut f = fixture("garbage\n", "{}");
        f.config.race.competitors_path = Path::new("/nonexistent/competitors.json").to_path_buf();
        let err = run_to_string(&f.config).unwrap_err();
        assert_eq!(err.error_code(), "DIRECTORY_LOAD_ERROR");
    }

    #[test]
    fn test_reject_negative_policy() {
        let f = fixture("1 x 00:05:00,0\n1 x 00:04:00,0\n", r#"{"1": {"Name": "A"}}"#);
        assert!(run_to_string(&f.config).unwrap().contains("-00:01:00"));

        let mut config = f.config.clone();
        config.race.elapsed_policy = ElapsedPolicy::Reject;
        let err = run_to_string(&config).unwrap_err();
        assert_eq!(err.exit_code(), 8);
    }

    #[test]
    fn test_russian_json_and_table_outputs() {
        let f = fixture(RESULTS, COMPETITORS);

        let mut config = f.config.clone();
        config.report.locale = Locale::Ru;
        assert!(run_to_string(&config).unwrap().contains("Нагрудный номер"));

        config.report.format = OutputFormat::Json;
        let json: serde_json::Value = serde_json::from_str(&run_to_string(&config).unwrap()).unwrap();
        assert_eq!(json["total"], 3);
        assert_eq!(json["results"][0]["bib"], "002");
        assert_eq!(json["results"][2]["last_name"], "");
    }
}
