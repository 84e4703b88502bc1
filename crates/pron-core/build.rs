fn main() {
    // Embedded TOML must parse and carry every section the loaders expect.
    check_sections(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
        &["mapping", "compound", "variants"],
    );
    check_sections(
        "src/g2p/default_mappings.toml",
        include_str!("src/g2p/default_mappings.toml"),
        &["aliases", "vowels", "clusters", "alignment", "known_rare"],
    );
    println!("cargo:rerun-if-changed=src/default_settings.toml");
    println!("cargo:rerun-if-changed=src/g2p/default_mappings.toml");
}

fn check_sections(path: &str, content: &str, sections: &[&str]) {
    let value: toml::Table = match content.parse() {
        Ok(v) => v,
        Err(e) => panic!("{path} contains invalid TOML: {e}"),
    };
    for section in sections {
        if !value.get(*section).is_some_and(toml::Value::is_table) {
            panic!("{path} is missing the [{section}] table");
        }
    }
}
