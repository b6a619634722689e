//! Column share inference.
//!
//! Page builders size columns in percent of the row. The IR carries softer hints, so the
//! shares are inferred from the first signal present on the entries:
//!
//! 1. **Width percent.** Entries with `widthPercent` keep it; the others split what is
//!    left of 100 by `flexGrow` (weight 1 when unset, an even split when every free
//!    weight is zero). When every entry carries a percent, the hints are scaled to 100.
//! 2. **Grow weights.** When any entry has `flexGrow`, 100 is split by grow weight,
//!    again with weight 1 for entries without one.
//! 3. **Pixel widths.** When every entry has a positive `widthPx`, each share is the
//!    entry's part of the summed width.
//!
//! With no signal the function returns `None` and the target format's equal split
//! applies. Shares are integers that always add up to exactly 100 and are never zero:
//! every entry reaching this point has content, so it keeps at least one point.

use blueprint_core::Style;

const TOTAL: u32 = 100;

/// Integer percentage per column style, or `None` when no entry carries a sizing hint.
pub fn column_shares<'a>(styles: impl IntoIterator<Item = Option<&'a Style>>) -> Option<Vec<u32>> {
    let styles: Vec<Option<&Style>> = styles.into_iter().collect();
    if styles.is_empty() {
        return None;
    }

    if styles.iter().any(|s| width_percent(*s).is_some()) {
        percent_shares(&styles)
    } else if styles.iter().any(|s| s.and_then(|s| s.flex_grow).is_some()) {
        let weights: Vec<f64> = styles.iter().map(|s| grow_weight(*s)).collect();
        apportion(TOTAL, &weights)
    } else if styles.iter().all(|s| width_px(*s) > 0.0) {
        let widths: Vec<f64> = styles.iter().map(|s| width_px(*s)).collect();
        apportion(TOTAL, &widths)
    } else {
        None
    }
}

/// Explicit percent rounded to a whole point, never below one.
fn fixed_share(style: Option<&Style>) -> Option<u32> {
    width_percent(style).map(|p| (p.round() as u32).max(1))
}

fn width_percent(style: Option<&Style>) -> Option<f64> {
    style
        .and_then(|s| s.width_percent)
        .map(|p| p.clamp(0.0, f64::from(TOTAL)))
}

fn width_px(style: Option<&Style>) -> f64 {
    style.and_then(|s| s.width_px).unwrap_or(0.0)
}

fn grow_weight(style: Option<&Style>) -> f64 {
    style.and_then(|s| s.flex_grow).unwrap_or(1.0).max(0.0)
}

/// Fixed percentages, with the residual split by grow weight among the rest.
fn percent_shares(styles: &[Option<&Style>]) -> Option<Vec<u32>> {
    let fixed: Vec<Option<u32>> = styles.iter().map(|s| fixed_share(*s)).collect();
    let fixed_total: u32 = fixed.iter().flatten().sum();
    let free: Vec<f64> = styles
        .iter()
        .zip(&fixed)
        .filter(|(_, f)| f.is_none())
        .map(|(s, _)| grow_weight(*s))
        .collect();

    // Every entry fixed, or the hints leave no point for the free entries: hints
    // become relative weights and free entries keep the minimum.
    if free.is_empty() || fixed_total + free.len() as u32 > TOTAL {
        let weights: Vec<f64> = fixed.iter().map(|f| f64::from(f.unwrap_or(0))).collect();
        return apportion(TOTAL, &weights);
    }

    let weights = if free.iter().sum::<f64>() > 0.0 {
        free
    } else {
        vec![1.0; free.len()]
    };
    let mut free_shares = apportion(TOTAL - fixed_total, &weights)?.into_iter();

    fixed
        .into_iter()
        .map(|f| f.or_else(|| free_shares.next()))
        .collect()
}

/// Split `total` by `weights` into integers that sum to `total`, at least one each.
///
/// Shares are rounded cumulatively, so the rounding error lands on the last entry.
/// `None` when the weights are all zero or there are more entries than points.
fn apportion(total: u32, weights: &[f64]) -> Option<Vec<u32>> {
    let sum: f64 = weights.iter().map(|w| w.max(0.0)).sum();
    if sum <= 0.0 || weights.len() > total as usize {
        return None;
    }

    let mut shares = Vec::with_capacity(weights.len());
    let mut cumulative = 0.0_f64;
    let mut assigned = 0_u32;
    for (i, weight) in weights.iter().enumerate() {
        let reached = if i + 1 == weights.len() {
            total
        } else {
            cumulative += f64::from(total) * weight.max(0.0) / sum;
            (cumulative.round() as u32).clamp(assigned, total)
        };
        shares.push(reached - assigned);
        assigned = reached;
    }

    while let Some(empty) = shares.iter().position(|&s| s == 0) {
        let largest = (0..shares.len()).max_by_key(|&i| shares[i])?;
        shares[largest] -= 1;
        shares[empty] = 1;
    }

    Some(shares)
}
