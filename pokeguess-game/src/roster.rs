use crate::creature::{CapturedCreature, CreatureError};
use anyhow::{Context, Result};

/// Load a roster of creature records from a JSON array.
///
/// Every entry is validated; the first invalid one aborts the load.
///
/// # Errors
///
/// Returns an error if the JSON is not an array of creature records or if
/// any record fails validation. The error names the offending entry.
pub fn load_roster(json: &str) -> Result<Vec<CapturedCreature>> {
    let roster: Vec<CapturedCreature> = serde_json::from_str(json)
        .map_err(CreatureError::from)
        .context("roster is not a JSON array of creature records")?;
    for (idx, creature) in roster.iter().enumerate() {
        creature
            .validate()
            .with_context(|| format!("roster entry {idx} ({:?}) is invalid", creature.name))?;
    }
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_valid_roster_in_order() {
        let json = r#"[
            {"name":"bulbasaur","image":"b.png","type1":"grass","type2":"poison","generation":1,"color":"green","habitat":"grassland"},
            {"name":"charmander","image":"c.png","type1":"fire","type2":"—","generation":1,"color":"red","habitat":"mountain"}
        ]"#;
        let roster = load_roster(json).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[1].type_label(), "Fire");
    }

    #[test]
    fn empty_array_is_an_empty_roster() {
        assert!(load_roster("[]").unwrap().is_empty());
    }

    #[test]
    fn invalid_entry_is_reported_by_index() {
        let json = r#"[{"name":"","image":"x.png","type1":"normal","generation":2}]"#;
        let err = load_roster(json).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("roster entry 0"));
        assert!(msg.contains("`name`"));
    }

    #[test]
    fn non_array_payload_is_rejected() {
        let err = load_roster(r#"{"name":"mew"}"#).unwrap_err();
        assert!(format!("{err}").contains("not a JSON array"));
    }
}
