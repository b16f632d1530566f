//! # Console Reporting
//!
//! Plain-text rendering of dataset statistics and comparison tables.
//! Renderers are pure string builders; the caller decides where the
//! text goes.

use crate::stats::{CategoryRollup, ComparisonTable, DatasetStatistics};

fn push_rollup_lines(out: &mut String, rollup: &CategoryRollup, indent: &str) {
    out.push_str(&format!("{indent}Average: {:.4}\n", rollup.average));
    out.push_str(&format!("{indent}Min: {:.4}\n", rollup.min));
    out.push_str(&format!("{indent}Max: {:.4}\n", rollup.max));
    out.push_str(&format!("{indent}Std: {:.4}\n", rollup.std));
    out.push_str(&format!("{indent}Median: {:.4}\n", rollup.median));
    out.push_str(&format!(
        "{indent}Best Post (Max): {} (Value: {:.4})\n",
        rollup.best_post.url, rollup.best_post.value
    ));
    out.push_str(&format!(
        "{indent}Worst Post (Min): {} (Value: {:.4})\n",
        rollup.worst_post.url, rollup.worst_post.value
    ));
}

/// Render dataset statistics as console text
pub fn render_dataset_statistics(stats: &DatasetStatistics) -> String {
    let mut out = String::new();
    for (category, rollup) in stats {
        out.push_str(&format!("=== {} ===\n", category.to_uppercase()));
        push_rollup_lines(&mut out, rollup, "  ");
        out.push('\n');
    }
    out
}

/// Render a comparison table as console text
pub fn render_comparison(table: &ComparisonTable, label1: &str, label2: &str) -> String {
    let mut out = String::new();
    for (category, entry) in table {
        out.push_str(&format!("=== {} ===\n", category.to_uppercase()));
        out.push_str(&format!("  [{label1}]\n"));
        push_rollup_lines(&mut out, &entry.file1, "    ");
        out.push_str(&format!("  [{label2}]\n"));
        push_rollup_lines(&mut out, &entry.file2, "    ");
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{Comparator, PostExtreme};

    fn rollup(average: f64, best: &str, worst: &str) -> CategoryRollup {
        CategoryRollup {
            average,
            median: average,
            std: 0.0,
            min: average,
            max: average,
            best_post: PostExtreme {
                url: best.to_string(),
                value: average,
            },
            worst_post: PostExtreme {
                url: worst.to_string(),
                value: average,
            },
        }
    }

    #[test]
    fn test_render_statistics_mentions_category_and_provenance() {
        let mut stats = DatasetStatistics::new();
        stats.insert("sentiment".to_string(), rollup(0.5, "best-url", "worst-url"));

        let text = render_dataset_statistics(&stats);
        assert!(text.contains("=== SENTIMENT ==="));
        assert!(text.contains("best-url"));
        assert!(text.contains("worst-url"));
        assert!(text.contains("Average: 0.5000"));
    }

    #[test]
    fn test_render_comparison_carries_both_labels() {
        let mut a = DatasetStatistics::new();
        a.insert("sentiment".to_string(), rollup(0.7, "a", "a"));
        let mut b = DatasetStatistics::new();
        b.insert("sentiment".to_string(), rollup(0.4, "b", "b"));

        let table = Comparator::new().compare(&a, &b).unwrap();
        let text = render_comparison(&table, "CK", "NZ");
        assert!(text.contains("[CK]"));
        assert!(text.contains("[NZ]"));
        assert!(text.contains("Average: 0.7000"));
        assert!(text.contains("Average: 0.4000"));
    }
}
