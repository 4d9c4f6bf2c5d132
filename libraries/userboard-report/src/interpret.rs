//! One-sentence readings of each chart.

use userboard_core::{UserFrame, ValueCount};

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

/// Shared wording for the "users per X" bar charts.
fn dominance(counts: &[ValueCount], total: usize, singular: &str, plural: &str) -> String {
    let Some(top) = counts.first() else {
        return format!("No users were loaded, so there are no {} to compare.", plural);
    };

    if counts.iter().all(|c| c.count == 1) {
        return format!(
            "Every user has a different {} ({} {} for {} users); none stands out.",
            singular,
            counts.len(),
            plural,
            total
        );
    }

    let tied = counts.iter().filter(|c| c.count == top.count).count();
    if tied > 1 {
        return format!(
            "{} {} share the lead with {} users each; {} {} appear in total.",
            tied,
            plural,
            top.count,
            counts.len(),
            plural
        );
    }

    format!(
        "{} is the most common {} with {} of {} users ({:.1}%), across {} {}.",
        top.value,
        singular,
        top.count,
        total,
        percent(top.count, total),
        counts.len(),
        plural
    )
}

pub(crate) fn domains(counts: &[ValueCount], total: usize) -> String {
    dominance(counts, total, "email domain", "domains")
}

pub(crate) fn companies(counts: &[ValueCount], total: usize) -> String {
    dominance(counts, total, "company", "companies")
}

pub(crate) fn cities(counts: &[ValueCount], total: usize) -> String {
    dominance(counts, total, "city", "cities")
}

pub(crate) fn domain_share(counts: &[ValueCount], total: usize) -> String {
    let Some(top) = counts.first() else {
        return "No users were loaded, so the distribution is empty.".to_string();
    };

    let rest = counts.len() - 1;
    if rest == 0 {
        return format!("All {} users share the domain {}.", total, top.value);
    }

    format!(
        "The largest slice, {}, holds {:.1}% of users; the remaining {} domains share the other {:.1}%.",
        top.value,
        percent(top.count, total),
        rest,
        100.0 - percent(top.count, total)
    )
}

pub(crate) fn names(frame: &UserFrame) -> String {
    if frame.is_empty() {
        return "No users were loaded, so there are no names to compare.".to_string();
    }

    let summary = frame.summary();
    let identical = frame
        .rows()
        .iter()
        .filter(|r| r.row.name == r.row.username)
        .count();

    format!(
        "Each point pairs a username with a full name across {} domains. \
         Usernames average {:.1} characters against {:.1} for names; {} of {} users reuse their name as username.",
        summary.distinct_domains,
        summary.mean_username_length,
        summary.mean_name_length,
        identical,
        summary.total_users
    )
}

pub(crate) fn name_lengths(lengths: &[usize]) -> String {
    let (Some(min), Some(max)) = (lengths.iter().min(), lengths.iter().max()) else {
        return "No users were loaded, so there are no name lengths to show.".to_string();
    };

    let mean = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;

    // Most frequent length; the shorter one wins a tie.
    let mut frequencies = std::collections::BTreeMap::new();
    for length in lengths {
        *frequencies.entry(*length).or_insert(0usize) += 1;
    }
    let (mode, mode_count) = frequencies
        .iter()
        .fold((0usize, 0usize), |best, (len, n)| if *n > best.1 { (*len, *n) } else { best });

    format!(
        "Names range from {} to {} characters, averaging {:.1}. The most frequent length is {} characters ({} users).",
        min, max, mean, mode, mode_count
    )
}
