//! Seed Dataset Generator
//!
//! Produces demo autograph authentication records: a unique 6-digit serial,
//! the signer's role and name, and a plausible item description. Runs are
//! reproducible when a seed is supplied (argument first, then the
//! `AUTHENTICON_SEED` environment variable).
//!
//! The output doubles as the backing data for
//! [`crate::verification::SeedLedgerLookup`].

pub mod catalog;
pub mod export;

pub use export::{read_records, write_csv, write_json, write_records, OutputFormat};

use std::collections::{HashMap, HashSet};

use chrono::Datelike;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const SEED_ENV_VAR: &str = "AUTHENTICON_SEED";
pub const RECORD_SOURCE: &str = "seed-generator v1";

const SERIAL_MIN: u32 = 100_000;
const SERIAL_MAX: u32 = 999_999;
const MAX_RECORDS: usize = (SERIAL_MAX - SERIAL_MIN + 1) as usize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthRecord {
    pub serial_number: String,
    pub role: String,
    pub celebrity: String,
    pub item_description: String,
    pub year: i32,
    pub source: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("count must be between 1 and {max}, got {0}", max = MAX_RECORDS)]
    InvalidCount(usize),

    #[error("Invalid serial format: {0}")]
    InvalidSerial(String),

    #[error("Duplicate serial: {0}")]
    DuplicateSerial(String),

    #[error("Unknown template placeholder: {0}")]
    UnknownPlaceholder(String),

    #[error("Unsupported seed file format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Generate `count` records with unique, validated serial numbers.
pub fn generate_dataset(count: usize, seed: Option<u64>) -> Result<Vec<AuthRecord>, SeedError> {
    if count < 1 || count > MAX_RECORDS {
        return Err(SeedError::InvalidCount(count));
    }

    let seed = resolve_seed(seed, std::env::var(SEED_ENV_VAR).ok().as_deref());
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    debug!(count, seed = ?seed, "Generating seed dataset");

    let pool: Vec<(&str, &str)> = catalog::ROLES
        .iter()
        .flat_map(|role| catalog::celebrities(role).iter().map(move |name| (*role, *name)))
        .collect();

    let current_year = chrono::Utc::now().year();
    let mut used = HashSet::with_capacity(count);
    let mut records = Vec::with_capacity(count);

    for _ in 0..count {
        // pool is built from non-empty static catalogs
        let (role, celebrity) = pool[rng.gen_range(0..pool.len())];
        let year = pick_year(&mut rng, current_year);
        let item_description = format_item(&mut rng, role, celebrity, year)?;
        let serial_number = unique_serial(&mut rng, &mut used);

        records.push(AuthRecord {
            serial_number,
            role: role.to_string(),
            celebrity: celebrity.to_string(),
            item_description,
            year,
            source: RECORD_SOURCE.to_string(),
        });
    }

    validate(&records)?;
    Ok(records)
}

/// Every serial must be exactly six ASCII digits and appear once.
pub fn validate(records: &[AuthRecord]) -> Result<(), SeedError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !is_valid_serial(&record.serial_number) {
            return Err(SeedError::InvalidSerial(record.serial_number.clone()));
        }
        if !seen.insert(record.serial_number.as_str()) {
            return Err(SeedError::DuplicateSerial(record.serial_number.clone()));
        }
    }
    Ok(())
}

pub fn is_valid_serial(serial: &str) -> bool {
    serial.len() == 6 && serial.bytes().all(|b| b.is_ascii_digit())
}

/// Explicit seed wins; otherwise the env value if it is all digits.
fn resolve_seed(explicit: Option<u64>, env_value: Option<&str>) -> Option<u64> {
    explicit.or_else(|| {
        env_value
            .filter(|v| !v.is_empty() && v.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|v| v.parse().ok())
    })
}

// Biased towards recent years.
fn pick_year(rng: &mut StdRng, current_year: i32) -> i32 {
    let base = rng.gen_range(2004..=current_year);
    base.max(rng.gen_range(2012..=current_year))
}

fn unique_serial(rng: &mut StdRng, used: &mut HashSet<String>) -> String {
    loop {
        let serial = rng.gen_range(SERIAL_MIN..=SERIAL_MAX).to_string();
        if used.insert(serial.clone()) {
            return serial;
        }
    }
}

fn pick(rng: &mut StdRng, options: &[&str]) -> String {
    options.choose(rng).copied().unwrap_or_default().to_string()
}

fn format_item(rng: &mut StdRng, role: &str, celebrity: &str, year: i32) -> Result<String, SeedError> {
    use catalog::*;

    let template = pick(rng, item_templates(role));

    let mut fills: HashMap<&str, String> = HashMap::from([
        ("year", year.to_string()),
        ("album", pick(rng, ALBUMS)),
        ("tour", pick(rng, TOURS)),
        ("event", pick(rng, EVENTS)),
        ("film", pick(rng, FILMS)),
        ("prop", pick(rng, PROPS)),
        ("venue", pick(rng, VENUES)),
        ("special", pick(rng, SPECIALS)),
        ("series", pick(rng, SERIES)),
        ("platform", pick(rng, PLATFORMS)),
        ("book", pick(rng, BOOKS)),
        ("festival", pick(rng, FESTIVALS)),
        ("club", pick(rng, CLUBS)),
        ("org", pick(rng, ORGS)),
        ("team", pick(rng, TEAMS)),
        ("sport", "sport".to_string()),
    ]);

    match role {
        "Athlete" => {
            let (sport, team) = match sport_and_team(celebrity) {
                Some((sport, team)) => (sport.to_string(), team.to_string()),
                None => ("sport".to_string(), pick(rng, TEAMS)),
            };
            fills.insert("sport", sport);
            fills.insert("team", team);
            if rng.gen_bool(0.25) {
                fills.insert("event", pick(rng, ATHLETE_EVENTS));
            }
        }
        "Esports Athlete" => {
            fills.insert("event", pick(rng, ESPORTS_EVENTS));
            fills.insert("org", pick(rng, ORGS));
        }
        _ => {}
    }

    fill_template(&template, &fills)
}

/// Replace each `{name}` in `template` with its value from `fills`.
fn fill_template(template: &str, fills: &HashMap<&str, String>) -> Result<String, SeedError> {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after
            .find('}')
            .ok_or_else(|| SeedError::UnknownPlaceholder(after.to_string()))?;
        let name = &after[..close];
        let value = fills
            .get(name)
            .ok_or_else(|| SeedError::UnknownPlaceholder(name.to_string()))?;
        out.push_str(value);
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_dataset() {
        let a = generate_dataset(50, Some(42)).unwrap();
        let b = generate_dataset(50, Some(42)).unwrap();
        assert_eq!(a, b);

        let c = generate_dataset(50, Some(43)).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_serials_are_unique_six_digits() {
        let records = generate_dataset(500, Some(7)).unwrap();
        assert_eq!(records.len(), 500);

        let serials: HashSet<_> = records.iter().map(|r| r.serial_number.as_str()).collect();
        assert_eq!(serials.len(), 500);
        for record in &records {
            assert!(is_valid_serial(&record.serial_number));
            assert_ne!(record.serial_number.as_bytes()[0], b'0');
            assert_eq!(record.source, RECORD_SOURCE);
            assert!(record.year >= 2012);
            assert!(!record.item_description.contains('{'));
        }
    }

    #[test]
    fn test_zero_count_rejected() {
        assert!(matches!(generate_dataset(0, Some(1)), Err(SeedError::InvalidCount(0))));
    }

    #[test]
    fn test_count_beyond_serial_space_rejected() {
        assert!(matches!(
            generate_dataset(MAX_RECORDS + 1, Some(1)),
            Err(SeedError::InvalidCount(900_001))
        ));
    }

    #[test]
    fn test_seed_precedence() {
        assert_eq!(resolve_seed(Some(7), Some("42")), Some(7));
        assert_eq!(resolve_seed(None, Some("42")), Some(42));
        assert_eq!(resolve_seed(None, None), None);
    }

    #[test]
    fn test_non_digit_env_seed_ignored() {
        for raw in ["", "abc", "-1", "4 2", "0x10", "99999999999999999999999"] {
            assert_eq!(resolve_seed(None, Some(raw)), None, "{:?} should be ignored", raw);
        }
    }

    #[test]
    fn test_env_seed_reproduces_explicit_seed() {
        let from_env = resolve_seed(None, Some("42"));
        assert_eq!(
            generate_dataset(30, from_env).unwrap(),
            generate_dataset(30, Some(42)).unwrap()
        );
    }

    #[test]
    fn test_athletes_use_their_team() {
        let records = generate_dataset(400, Some(11)).unwrap();
        let jersey = records
            .iter()
            .find(|r| r.celebrity == "LeBron James" && r.item_description.ends_with("jersey"));
        if let Some(record) = jersey {
            assert!(record.item_description.contains("Cleveland Cavaliers"));
        }
        for record in records.iter().filter(|r| r.role == "Athlete") {
            assert!(!record.item_description.contains("Game-used sport ball"));
        }
    }

    #[test]
    fn test_validate_catches_bad_serials() {
        let mut records = generate_dataset(3, Some(5)).unwrap();
        records[1].serial_number = records[0].serial_number.clone();
        assert!(matches!(validate(&records), Err(SeedError::DuplicateSerial(_))));

        records[1].serial_number = "12a456".to_string();
        assert!(matches!(validate(&records), Err(SeedError::InvalidSerial(_))));

        records[1].serial_number = "1234567".to_string();
        assert!(matches!(validate(&records), Err(SeedError::InvalidSerial(_))));
    }

    #[test]
    fn test_fill_template() {
        let fills = HashMap::from([("year", "2020".to_string()), ("film", "Dune".to_string())]);
        assert_eq!(
            fill_template("Lobby card ({film}) {year}", &fills).unwrap(),
            "Lobby card (Dune) 2020"
        );
        assert_eq!(fill_template("Press kit one-sheet", &fills).unwrap(), "Press kit one-sheet");
        assert!(matches!(
            fill_template("{nope}", &fills),
            Err(SeedError::UnknownPlaceholder(name)) if name == "nope"
        ));
    }
}
