//! Default naming convention from wire type names to domain type names.

use convert_case::{Case, Casing};

const IRREGULAR: &[(&str, &str)] = &[
    ("people", "person"),
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("statuses", "status"),
    ("buses", "bus"),
];

const UNCOUNTABLE: &[&str] = &[
    "data",
    "equipment",
    "fish",
    "information",
    "news",
    "series",
    "sheep",
    "species",
];

/// Singularize the last `_`-separated word of `word`.
pub fn singularize(word: &str) -> String {
    let (head, last) = match word.rfind('_') {
        Some(pos) => word.split_at(pos + 1),
        None => ("", word),
    };
    let lower = last.to_lowercase();

    if UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }
    if let Some((_, singular)) = IRREGULAR.iter().find(|(plural, _)| *plural == lower) {
        return format!("{}{}", head, singular);
    }

    let stem = if let Some(stem) = last.strip_suffix("ies").filter(|s| !s.is_empty()) {
        format!("{}y", stem)
    } else if ["sses", "xes", "ches", "shes", "zzes"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        last[..last.len() - 2].to_string()
    } else if lower.ends_with("ss") || lower.ends_with("us") || !lower.ends_with('s') {
        last.to_string()
    } else {
        last[..last.len() - 1].to_string()
    };

    format!("{}{}", head, stem)
}

/// Domain type name used when no type rename is declared:
/// singularize, then upper camel case (`pet_dogs` -> `PetDog`).
pub fn default_domain_type_name(wire_type: &str) -> String {
    singularize(wire_type).to_case(Case::UpperCamel)
}
