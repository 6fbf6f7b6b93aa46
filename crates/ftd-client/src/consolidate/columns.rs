use crate::consolidate::RawTable;

/// Source header synonyms, applied in order. A synonym is only renamed when
/// its canonical name is not already taken.
pub const COLUMN_SYNONYMS: [(&str, &str); 21] = [
    ("data", "date"),
    ("fecha", "date"),
    ("date_ftd", "date"),
    ("fechadep", "date"),
    ("equipo", "team"),
    ("team_name", "team"),
    ("leader_team", "team"),
    ("team_lader", "team"),
    ("pais", "country"),
    ("country_name", "country"),
    ("agente", "agent"),
    ("agent_sales", "agent"),
    ("agent_name", "agent"),
    ("afiliado", "affiliate"),
    ("affiliate_name", "affiliate"),
    ("usuario", "id"),
    ("id_user", "id"),
    ("id_usuario", "id"),
    ("monto", "usd"),
    ("usd_total", "usd"),
    ("amount_country", "usd"),
];

pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

pub fn standardize_columns(mut table: RawTable) -> RawTable {
    for column in &mut table.columns {
        *column = normalize_column_name(column);
    }

    for (synonym, canonical) in COLUMN_SYNONYMS {
        let has_synonym = table.columns.iter().any(|column| column == synonym);
        let has_canonical = table.columns.iter().any(|column| column == canonical);
        if has_synonym && !has_canonical {
            for column in table.columns.iter_mut().filter(|column| *column == synonym) {
                *column = canonical.to_string();
            }
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{normalize_column_name, standardize_columns};
    use crate::consolidate::RawTable;

    fn table_with(names: &[&str]) -> RawTable {
        RawTable::new(
            names.iter().map(|name| name.to_string()).collect(),
            Vec::new(),
        )
    }

    #[test]
    fn names_are_trimmed_lowered_and_underscored() {
        assert_eq!(normalize_column_name("  Team Name "), "team_name");
        assert_eq!(normalize_column_name("ID USUARIO"), "id_usuario");
    }

    #[test]
    fn spanish_headers_map_to_canonical_names() {
        let standardized = standardize_columns(table_with(&[
            "Fecha", "Usuario", "Equipo", "Agente", "Pais", "Afiliado", "Monto",
        ]));
        assert_eq!(
            standardized.columns,
            vec!["date", "id", "team", "agent", "country", "affiliate", "usd"]
        );
    }

    #[test]
    fn first_matching_synonym_wins_and_later_ones_stay() {
        let standardized = standardize_columns(table_with(&["data", "fecha", "usd_total"]));
        assert_eq!(standardized.columns, vec!["date", "fecha", "usd"]);
    }

    #[test]
    fn existing_canonical_column_blocks_rename() {
        let standardized =
            standardize_columns(table_with(&["team", "Team Name", "leader_team"]));
        assert_eq!(standardized.columns, vec!["team", "team_name", "leader_team"]);
    }

    #[test]
    fn unknown_columns_pass_through() {
        let standardized = standardize_columns(table_with(&["Comision", "amount_country"]));
        assert_eq!(standardized.columns, vec!["comision", "usd"]);
    }
}
