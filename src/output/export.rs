use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::Write;
use std::path::Path;

use crate::analyze::ScoredUser;
use super::formatter::format_score;

/// Column order of the exported artifact. Consumers key on these names,
/// so the header must never change.
pub const CSV_HEADER: &str = "engagement_score,content_score,trust_score,impact_score,monetization_score,governance_score,social_score,tier,user_id";

/// Render scored rows as CSV: header first, one row per user in the order
/// given, no trailing index column. Scores use fixed four-decimal
/// formatting so exporting the same table twice is byte-identical.
pub fn format_csv(rows: &[ScoredUser]) -> String {
    let mut out = String::with_capacity((rows.len() + 1) * 80);
    out.push_str(CSV_HEADER);
    out.push('\n');

    for row in rows {
        let b = &row.breakdown;
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{},{}\n",
            format_score(b.engagement_score),
            format_score(b.content_score),
            format_score(b.trust_score),
            format_score(b.impact_score),
            format_score(b.monetization_score),
            format_score(b.governance_score),
            format_score(b.social_score),
            b.tier,
            row.user_id
        ));
    }

    out
}

/// Write the CSV artifact atomically: the file is never left half-written.
pub fn write_csv(path: &Path, rows: &[ScoredUser]) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(format_csv(rows).as_bytes())
        .context("Failed to write CSV rows")?;
    file.commit().context("Failed to save CSV export")?;
    Ok(())
}

/// Write the same rows as a pretty-printed JSON array, atomically.
pub fn write_json(path: &Path, rows: &[ScoredUser]) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    serde_json::to_writer_pretty(&mut file, rows).context("Failed to serialize score rows")?;
    file.commit().context("Failed to save JSON export")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::score_users;
    use crate::metrics::UserMetrics;
    use crate::scoring::ScoringWeights;
    use std::env;
    use std::fs;

    fn sample_rows() -> Vec<ScoredUser> {
        let users = vec![
            UserMetrics::uniform("user_1", 1.0),
            UserMetrics::uniform("user_2", 0.0),
        ];
        score_users(&users, &ScoringWeights::default())
    }

    #[test]
    fn test_csv_header_matches_contract() {
        let rows = sample_rows();
        let csv = format_csv(&rows);
        let first_line = csv.lines().next().unwrap();
        assert_eq!(
            first_line,
            "engagement_score,content_score,trust_score,impact_score,monetization_score,governance_score,social_score,tier,user_id"
        );
    }

    #[test]
    fn test_csv_one_row_per_user_no_index() {
        let rows = sample_rows();
        let csv = format_csv(&rows);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "1.0000,1.0000,1.0000,1.0000,1.0000,1.0000,1.0000,Elite,user_1"
        );
        assert_eq!(
            lines[2],
            "0.0000,0.0000,0.0000,0.0000,0.0000,0.0000,0.0000,Low,user_2"
        );
        // Every row has exactly the contract's nine columns
        for line in &lines[1..] {
            assert_eq!(line.split(',').count(), 9);
        }
    }

    #[test]
    fn test_csv_empty_batch_is_header_only() {
        let csv = format_csv(&[]);
        assert_eq!(csv, format!("{}\n", CSV_HEADER));
    }

    #[test]
    fn test_write_csv_idempotent() {
        let path = env::temp_dir().join("socialscore_test_export.csv");
        let rows = sample_rows();

        write_csv(&path, &rows).unwrap();
        let first = fs::read(&path).unwrap();
        write_csv(&path, &rows).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_write_json_roundtrips() {
        let path = env::temp_dir().join("socialscore_test_export.json");
        let rows = sample_rows();

        write_json(&path, &rows).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();

        let array = parsed.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["user_id"], "user_1");
        assert_eq!(array[0]["tier"], "Elite");
        assert_eq!(array[1]["social_score"], 0.0);

        let _ = fs::remove_file(&path);
    }
}
