use std::fs;

use crate::die;

pub fn settings_export() {
    print!("{}", pron_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        pron_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: mapping.seed_min_occurrence={}, mapping.extend_min_occurrence={}, compound.min_compound_len={}",
        s.mapping.seed_min_occurrence, s.mapping.extend_min_occurrence, s.compound.min_compound_len
    );
}

pub fn mappings_export() {
    print!("{}", pron_core::g2p::config::default_toml());
}

pub fn mappings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let m = die!(
        pron_core::g2p::config::parse_mappings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: {} clusters, {} aliases, {} known rare pairs",
        m.clusters.len(),
        m.aliases.len(),
        m.known_rare.len()
    );
}
