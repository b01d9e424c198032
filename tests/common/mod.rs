//! Shared on-disk fixtures for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Render trial rows `(rt, commissions, lapses)` in the six-column file format
pub fn trial_text(rows: &[(f64, i64, i64)]) -> String {
    let mut running = 0.0;
    rows.iter()
        .enumerate()
        .map(|(i, (rt, commissions, lapses))| {
            running += rt;
            #[allow(clippy::cast_precision_loss)]
            let average = running / (i + 1) as f64;
            format!(
                "{}\t{}\t{rt}\t{average:.2}\t{commissions}\t{lapses}\n",
                i + 1,
                i32::from(*commissions > 0)
            )
        })
        .collect()
}

/// Write one trial file into `dir`, creating the directory if needed
pub fn write_trial(dir: &Path, name: &str, rows: &[(f64, i64, i64)]) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), trial_text(rows)).unwrap();
}

/// Create a condition directory with one trial whose valid mean RT is `rt`
pub fn write_condition(root: &Path, label: &str, rt: f64, commissions: i64, lapses: i64) {
    write_trial(
        &root.join(label),
        "trial_01.txt",
        &[(rt, commissions, 0), (rt, 0, lapses), (900.0, 0, 0)],
    );
}
