pub mod dto;

pub use dto::{ActivityItem, PartyPerformance, ReturnStats, StepBucket};

use crate::domain::a001_material_return::MaterialReturn;
use crate::domain::common::{is_set, js_round};
use crate::enums::WorkflowStep;

const RECENT_ACTIVITY_LEN: usize = 4;
const TOP_PARTIES_LEN: usize = 3;

pub fn compute_stats(records: &[MaterialReturn]) -> ReturnStats {
    let total = records.len();
    let completed = records.iter().filter(|r| r.is_completed()).count();
    let delayed: Vec<&MaterialReturn> = records.iter().filter(|r| r.is_delayed()).collect();

    let completion_rate = if total > 0 {
        js_round(completed as f64 / total as f64 * 100.0)
    } else {
        0.0
    };

    // only delayed records contribute to the average
    let avg_delay = if delayed.is_empty() {
        0.0
    } else {
        let sum: f64 = delayed.iter().map(|r| r.total_delay()).sum();
        js_round(sum / delayed.len() as f64 * 10.0) / 10.0
    };

    let efficiency = if total > 0 {
        let raw = completed as f64 / total as f64 * 100.0 + (100.0 - avg_delay * 10.0);
        js_round(raw).min(100.0)
    } else {
        0.0
    };

    ReturnStats {
        total,
        pending: total - completed,
        completed,
        delayed: delayed.len(),
        completion_rate,
        avg_delay,
        efficiency,
    }
}

/// Count of records per derived step, in workflow order
pub fn step_distribution(records: &[MaterialReturn]) -> Vec<StepBucket> {
    WorkflowStep::all()
        .into_iter()
        .map(|step| StepBucket {
            step,
            description: step.description().to_string(),
            count: records.iter().filter(|r| r.current_step() == step).count(),
        })
        .collect()
}

/// The last few records in collection order
pub fn recent_activity(records: &[MaterialReturn]) -> Vec<ActivityItem> {
    let start = records.len().saturating_sub(RECENT_ACTIVITY_LEN);
    records[start..]
        .iter()
        .map(|record| {
            let step = record.current_step();
            ActivityItem {
                return_no: record.return_no.clone(),
                action: step.action_label().to_string(),
                party: party_or(record, "Unknown Party"),
                step,
                completed: step.is_completed(),
            }
        })
        .collect()
}

/// Best parties by score; ties keep first-appearance order
pub fn top_parties(records: &[MaterialReturn]) -> Vec<PartyPerformance> {
    // (name, returns, completed, total delay)
    let mut groups: Vec<(String, usize, usize, f64)> = Vec::new();
    for record in records {
        let name = party_or(record, "Unknown");
        let idx = match groups.iter().position(|g| g.0 == name) {
            Some(idx) => idx,
            None => {
                groups.push((name, 0, 0, 0.0));
                groups.len() - 1
            }
        };
        let group = &mut groups[idx];
        group.1 += 1;
        if record.is_completed() {
            group.2 += 1;
        }
        group.3 += record.total_delay();
    }

    let mut parties: Vec<PartyPerformance> = groups
        .into_iter()
        .map(|(name, returns, completed, total_delay)| {
            let share = completed as f64 / returns as f64;
            let avg = total_delay / returns as f64;
            PartyPerformance {
                name,
                returns,
                completed,
                completion: js_round(share * 100.0),
                avg_delay: js_round(avg * 10.0) / 10.0,
                // scored on the unrounded average
                score: js_round(share * 50.0 + (50.0 - avg)),
            }
        })
        .collect();

    parties.sort_by(|a, b| b.score.total_cmp(&a.score));
    parties.truncate(TOP_PARTIES_LEN);
    parties
}

fn party_or(record: &MaterialReturn, fallback: &str) -> String {
    if is_set(&record.party_names) {
        record.party_names.clone()
    } else {
        fallback.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(party: &str, actual4: &str, delay1: &str) -> MaterialReturn {
        MaterialReturn {
            party_names: party.into(),
            actual1: if actual4.is_empty() { "" } else { "x" }.into(),
            actual2: if actual4.is_empty() { "" } else { "x" }.into(),
            actual3: if actual4.is_empty() { "" } else { "x" }.into(),
            actual4: actual4.into(),
            delay1: delay1.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_collection() {
        let stats = compute_stats(&[]);
        assert_eq!(stats, ReturnStats::default());
        assert!(recent_activity(&[]).is_empty());
        assert!(top_parties(&[]).is_empty());
    }

    #[test]
    fn test_counts_and_rates() {
        let records = vec![
            record("A", "done", ""),
            record("B", "done", "2"),
            record("C", "done", "abc"),
            record("D", "", "1.5 days"),
        ];
        let stats = compute_stats(&records);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 3);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.delayed, 2);
        assert_eq!(stats.completion_rate, 75.0);
        // (2 + 1.5) / 2 = 1.75 -> 1.8
        assert_eq!(stats.avg_delay, 1.8);
        // 75 + (100 - 18) = 157 -> capped
        assert_eq!(stats.efficiency, 100.0);
    }

    #[test]
    fn test_no_delays_means_zero_average() {
        let records = vec![record("A", "", ""), record("B", "", "-3"), record("C", "", "n/a")];
        let stats = compute_stats(&records);
        assert_eq!(stats.delayed, 0);
        assert_eq!(stats.avg_delay, 0.0);
        assert_eq!(stats.completion_rate, 0.0);
    }

    #[test]
    fn test_efficiency_below_cap() {
        let records = vec![record("A", "", "5"), record("B", "", "")];
        let stats = compute_stats(&records);
        assert_eq!(stats.avg_delay, 5.0);
        // 0 + (100 - 50)
        assert_eq!(stats.efficiency, 50.0);
    }

    #[test]
    fn test_step_distribution_covers_all_steps() {
        let records = vec![record("A", "", ""), record("B", "done", ""), record("C", "", "")];
        let buckets = step_distribution(&records);
        assert_eq!(buckets.len(), 5);
        assert_eq!(buckets[0].step, WorkflowStep::Step1);
        assert_eq!(buckets[0].count, 2);
        assert_eq!(buckets[4].count, 1);
        assert_eq!(buckets[4].description, "Process Completed");
    }

    #[test]
    fn test_recent_activity_takes_last_four() {
        let records: Vec<MaterialReturn> = (1..=6)
            .map(|i| MaterialReturn {
                return_no: format!("RET-{}", i),
                ..Default::default()
            })
            .collect();
        let feed = recent_activity(&records);
        assert_eq!(feed.len(), 4);
        assert_eq!(feed[0].return_no, "RET-3");
        assert_eq!(feed[3].return_no, "RET-6");
        assert_eq!(feed[0].party, "Unknown Party");
        assert_eq!(feed[0].action, "Logistics Arranged");
        assert!(!feed[0].completed);
    }

    #[test]
    fn test_top_parties_ranking() {
        let records = vec![
            record("Slow Co", "", "20"),
            record("Tie One", "done", ""),
            record("", "", ""),
            record("Tie Two", "done", ""),
            record("Best", "done", ""),
            record("Best", "done", ""),
        ];
        let top = top_parties(&records);
        assert_eq!(top.len(), 3);
        // Tie One, Tie Two and Best all score 100; first appearance wins
        assert_eq!(
            top.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
            vec!["Tie One", "Tie Two", "Best"]
        );
        assert_eq!(top[2].returns, 2);
        assert_eq!(top[2].completion, 100.0);
    }

    #[test]
    fn test_unknown_party_grouping() {
        let records = vec![record("", "", ""), record("  ", "done", "")];
        let top = top_parties(&records);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].name, "Unknown");
        assert_eq!(top[0].returns, 2);
        assert_eq!(top[0].completion, 50.0);
        // 25 + 50
        assert_eq!(top[0].score, 75.0);
    }

    #[test]
    fn test_party_avg_delay_has_one_decimal() {
        let records = vec![record("Ajay", "", "1"), record("Ajay", "", ""), record("Ajay", "", "")];
        let top = top_parties(&records);
        assert_eq!(top[0].avg_delay, 0.3);
        // 0 + (50 - 0.333..) = 49.67 -> 50
        assert_eq!(top[0].score, 50.0);

        let records = vec![record("Mira", "", "0.5"), record("Mira", "", "")];
        assert_eq!(top_parties(&records)[0].avg_delay, 0.3);
    }
}
