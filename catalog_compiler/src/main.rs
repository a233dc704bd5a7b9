//! Compiles the editor's reference catalogs (items.json, enemies.json) from
//! engine data dumps: the internal enum table, the user-data parameter
//! dumps and the per-language message tables (predumped to JSON).

use console::style;
use indicatif::ProgressBar;
use quest_data::catalog::{Enemy, EnemyName, Item, LANGUAGE_CODES};
use quest_data::SerDeFile as _;
use regex::Regex;
use serde_json::Value;
use std::{
    collections::HashMap,
    env,
    error::Error,
    path::{Path, PathBuf},
};

/// Message-table column for a game language code.
fn language_column(code: i64) -> &'static str {
    match code {
        0 => "Japanese",
        1 => "English",
        2 => "French",
        3 => "Italian",
        4 => "German",
        5 => "Spanish",
        6 => "Russian",
        7 => "Polish",
        10 => "PortugueseBr",
        11 => "Korean",
        12 => "TraditionalChinese",
        13 => "SimplifiedChinese",
        21 => "Arabic",
        32 => "LatinAmericanSpanish",
        _ => unreachable!("not a message table column"),
    }
}

fn main() {
    let mut args = env::args();
    args.next();
    let dirname = args.next().expect("Input data directory");
    let dirname = PathBuf::from(dirname);

    // parse items
    println!("Parsing items...");
    let mut item_data_file = dirname.to_path_buf();
    item_data_file.push("itemData.user.3.json");
    if item_data_file.is_file() {
        let items = compile_items(&dirname).unwrap();
        let mut out_file = dirname.to_path_buf();
        out_file.push("items.json");
        items.save_to_json_file(&out_file).unwrap();
        println!("Generated {} items to {}", items.len(), out_file.display());
    }

    // parse enemies
    println!("Parsing enemies...");
    let mut enemy_data_file = dirname.to_path_buf();
    enemy_data_file.push("enemyData.user.3.json");
    if enemy_data_file.is_file() {
        let enemies = compile_enemies(&dirname).unwrap();
        let mut out_file = dirname.to_path_buf();
        out_file.push("enemies.json");
        enemies.save_to_json_file(&out_file).unwrap();
        println!(
            "Generated {} enemies to {}",
            enemies.len(),
            out_file.display()
        );
    }
}

/// Label-to-id map of one enum (`app.ItemDef.ID` etc) from the internal
/// enum dump.
fn load_enum_map(path: &Path, enum_name: &str) -> Result<HashMap<String, u32>, Box<dyn Error>> {
    let enums = Value::load_from_json_file(path)?;
    let mut map = HashMap::new();
    if let Some(ids) = enums.get(enum_name).and_then(Value::as_object) {
        for (label, id) in ids {
            if let Some(id) = id.as_u64() {
                map.insert(label.clone(), id as u32);
            }
        }
    }
    Ok(map)
}

/// Message table keyed by GUID, each row keyed by language column name.
fn load_msg_table(
    path: &Path,
) -> Result<HashMap<String, HashMap<String, String>>, Box<dyn Error>> {
    Ok(HashMap::load_from_json_file(path)?)
}

/// All `cData` entries of a user-data dump, flattened across chunks.
fn collect_cdata(dump: &Value, chunk_key: &str) -> Vec<Value> {
    let cdata_key = format!("{chunk_key}.cData");
    let mut out = vec![];
    let Some(chunks) = dump.as_array() else {
        return out;
    };
    for chunk in chunks {
        let Some(values) = chunk
            .get(chunk_key)
            .and_then(|c| c.get("_Values"))
            .and_then(Value::as_array)
        else {
            continue;
        };
        for entry in values {
            if let Some(cdata) = entry.get(&cdata_key) {
                out.push(cdata.clone());
            }
        }
    }
    out
}

fn compile_items(dir: &Path) -> Result<Vec<Item>, Box<dyn Error>> {
    let mut enums_file = dir.to_path_buf();
    enums_file.push("Enums_Internal.json");
    println!("\tLoading {}...", enums_file.display());
    let id_map = load_enum_map(&enums_file, "app.ItemDef.ID")?;

    let mut data_file = dir.to_path_buf();
    data_file.push("itemData.user.3.json");
    println!("\tLoading {}...", data_file.display());
    let dump = Value::load_from_json_file(&data_file)?;
    let entries = collect_cdata(&dump, "app.user_data.ItemData");

    let mut msg_file = dir.to_path_buf();
    msg_file.push("Item.msg.json");
    println!("\tLoading {}...", msg_file.display());
    let msg_table = load_msg_table(&msg_file)?;

    // entries look like { "_ItemId": "[622]ITEM_0648", "_RawName": <guid> }
    let id_pattern = Regex::new(r"^\[(\d+)\](.+)$")?;
    let progress = ProgressBar::new(entries.len() as u64);
    let mut items = vec![];
    for cdata in &entries {
        progress.inc(1);
        let Some(raw_id) = cdata.get("_ItemId").and_then(Value::as_str) else {
            continue;
        };
        let Some(caps) = id_pattern.captures(raw_id) else {
            eprintln!(
                "{}",
                style(format!("Warning: could not parse _ItemId: {raw_id}")).yellow()
            );
            continue;
        };
        let fixed_id: u32 = caps[1].parse()?;
        let label = caps[2].to_string();

        // the authoritative id comes from the enum table, not the dump
        let id = match id_map.get(&label) {
            Some(id) => *id,
            None => {
                eprintln!(
                    "{}",
                    style(format!("Warning: label '{label}' not found in app.ItemDef.ID"))
                        .yellow()
                );
                0
            }
        };

        let msg_row = cdata
            .get("_RawName")
            .and_then(Value::as_str)
            .and_then(|guid| msg_table.get(guid));
        let mut name = HashMap::new();
        for code in LANGUAGE_CODES {
            let text = msg_row
                .and_then(|row| row.get(language_column(code)))
                .filter(|t| !t.is_empty())
                .cloned()
                .unwrap_or_else(|| String::from("---"));
            name.insert(code.to_string(), text);
        }

        items.push(Item {
            id,
            fixed_id,
            label,
            name,
        });
    }
    progress.finish();

    items.sort_by_key(|i| i.fixed_id);
    Ok(items)
}

fn compile_enemies(dir: &Path) -> Result<Vec<Enemy>, Box<dyn Error>> {
    let mut enums_file = dir.to_path_buf();
    enums_file.push("Enums_Internal.json");
    println!("\tLoading {}...", enums_file.display());
    let id_map = load_enum_map(&enums_file, "app.EnemyDef.ID")?;

    let mut data_file = dir.to_path_buf();
    data_file.push("enemyData.user.3.json");
    println!("\tLoading {}...", data_file.display());
    let dump = Value::load_from_json_file(&data_file)?;
    let entries = collect_cdata(&dump, "app.user_data.EnemyData");

    let mut msg_file = dir.to_path_buf();
    msg_file.push("EnemyText.msg.json");
    println!("\tLoading {}...", msg_file.display());
    let msg_table = load_msg_table(&msg_file)?;

    let id_pattern = Regex::new(r"^\[(\d+)\](.+)$")?;
    let progress = ProgressBar::new(entries.len() as u64);
    let mut enemies = vec![];
    for cdata in &entries {
        progress.inc(1);
        let Some(raw_id) = cdata.get("_EnemyId").and_then(Value::as_str) else {
            continue;
        };
        let Some(caps) = id_pattern.captures(raw_id) else {
            eprintln!(
                "{}",
                style(format!("Warning: could not parse _EnemyId: {raw_id}")).yellow()
            );
            continue;
        };
        let fixed_id: u32 = caps[1].parse()?;
        let label = caps[2].to_string();

        let id = match id_map.get(&label) {
            Some(id) => *id,
            None => {
                eprintln!(
                    "{}",
                    style(format!(
                        "Warning: label '{label}' not found in app.EnemyDef.ID"
                    ))
                    .yellow()
                );
                0
            }
        };

        // the editor roster carries exactly three locales
        let row = cdata
            .get("_RawName")
            .and_then(Value::as_str)
            .and_then(|guid| msg_table.get(guid));
        let pick = |column: &str| {
            row.and_then(|r| r.get(column))
                .filter(|t| !t.is_empty())
                .cloned()
                .unwrap_or_else(|| String::from("---"))
        };
        let name = EnemyName {
            cn: pick("SimplifiedChinese"),
            en: pick("English"),
            jp: pick("Japanese"),
        };

        enemies.push(Enemy {
            id,
            fixed_id,
            label,
            name,
        });
    }
    progress.finish();

    enemies.sort_by_key(|e| e.fixed_id);
    Ok(enemies)
}
