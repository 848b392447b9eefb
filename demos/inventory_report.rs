//! Inventory report: assembling a character's equipment and listing the
//! stat tiers the armour can reach
//!
//! This example demonstrates:
//! - Loading reference data from JSON
//! - Assembling items from an inventory response
//! - Per-stat and aggregate quality
//! - Stat profiles across a loadout
//!
//! Run with `RUST_LOG=gearstat=debug` to see resolution details.

use gearstat::*;

const REFERENCE: &str = r#"{
    "talentGrids": {
        "3001": { "nodes": [
            { "steps": [ { "nodeStepHash": 11 } ] },
            { "steps": [ { "nodeStepHash": 1263323987 }, { "nodeStepHash": 1034209669 } ] },
            { "steps": [ { "nodeStepHash": 193091484 }, { "nodeStepHash": 1263323987 } ] }
        ] }
    }
}"#;

const INVENTORY: &str = r#"[
    { "bucketHash": 3448274439, "items": [ {
        "itemId": "6917529033",
        "itemHash": 1,
        "talentGridHash": 3001,
        "primaryStat": { "statHash": 3897883278, "value": 320 },
        "stats": [
            { "statHash": 1735777505, "value": 38 },
            { "statHash": 144602215, "value": 22 }
        ],
        "nodes": [
            { "stepIndex": 0, "isActivated": true },
            { "stepIndex": 0, "isActivated": true },
            { "stepIndex": 1, "isActivated": false }
        ]
    } ] },
    { "bucketHash": 14239492, "items": [ {
        "itemId": "6917529034",
        "itemHash": 2,
        "talentGridHash": 3001,
        "primaryStat": { "statHash": 3897883278, "value": 335 },
        "stats": [
            { "statHash": 144602215, "value": 44 },
            { "statHash": 4244567218, "value": 41 }
        ],
        "nodes": [
            { "stepIndex": 0, "isActivated": true },
            { "stepIndex": 1, "isActivated": false },
            { "stepIndex": 0, "isActivated": true }
        ]
    } ] },
    { "bucketHash": 20886954, "items": [ {
        "itemId": "6917529035",
        "itemHash": 3,
        "talentGridHash": 9999,
        "primaryStat": { "statHash": 3897883278, "value": 310 },
        "stats": [ { "statHash": 4244567218, "value": 60 } ],
        "nodes": []
    } ] },
    { "bucketHash": 1498876634, "items": [ {
        "itemId": "6917529036",
        "itemHash": 4,
        "talentGridHash": 3001,
        "primaryStat": { "statHash": 3897883278, "value": 330 },
        "stats": [],
        "nodes": []
    } ] }
]"#;

fn describe(range: Option<&StatRange>) -> String {
    match range {
        Some(range) => match range.quality {
            Some(quality) => format!("{:>3}-{:<3} ({:>3}%)", range.min, range.max, quality),
            None => format!("{:>3}-{:<3} (  -%)", range.min, range.max),
        },
        None => "      -       ".to_string(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("=== Inventory Report ===\n");

    let reference = ReferenceData::from_json_str(REFERENCE)?;
    let equippables: Vec<Equippable> = serde_json::from_str(INVENTORY)?;

    let assembler = ItemStatAssembler::new(&reference);
    let items = assembler.assemble_all(&equippables)?;

    println!(
        "{:<14} {:>5}  {:<16} {:<16} {:<16} {:>4}",
        "slot", "power", "discipline", "intellect", "strength", "qual"
    );
    for item in &items {
        println!(
            "{:<14} {:>5}  {:<16} {:<16} {:<16} {:>3}%",
            format!("{:?}", item.slot),
            item.primary_stat,
            describe(item.range(StatKind::Discipline)),
            describe(item.range(StatKind::Intellect)),
            describe(item.range(StatKind::Strength)),
            item.quality
        );
    }

    let inventory = Inventory::from_items(items);
    let profiles = inventory.stat_profiles();

    println!("\n=== Stat Profiles ===\n");
    for profile in &profiles {
        println!(
            "T{}: {} {} / {} {} / {} {}",
            profile.tier_count,
            StatKind::Discipline.abbreviation(),
            profile.discipline.value,
            StatKind::Intellect.abbreviation(),
            profile.intellect.value,
            StatKind::Strength.abbreviation(),
            profile.strength.value
        );
        for entry in &profile.entries {
            println!("    {:?}: {}", entry.slot, entry.selected);
        }
    }

    Ok(())
}
