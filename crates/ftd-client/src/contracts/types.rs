use serde::Serialize;

/// One consolidated first-time-deposit row. Every field is stored as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FtdRecord {
    pub date: Option<String>,
    pub id: Option<String>,
    pub team: Option<String>,
    pub agent: Option<String>,
    pub country: Option<String>,
    pub affiliate: Option<String>,
    pub usd: Option<String>,
    pub month_name: String,
}

impl FtdRecord {
    pub fn business_fields(&self) -> [Option<&str>; 7] {
        [
            self.date.as_deref(),
            self.id.as_deref(),
            self.team.as_deref(),
            self.agent.as_deref(),
            self.country.as_deref(),
            self.affiliate.as_deref(),
            self.usd.as_deref(),
        ]
    }

    pub fn has_business_value(&self) -> bool {
        self.business_fields().iter().any(Option::is_some)
    }

    /// Values in destination column order, `month_name` last.
    pub fn column_values(&self) -> [Option<&str>; 8] {
        let [date, id, team, agent, country, affiliate, usd] = self.business_fields();
        [
            date,
            id,
            team,
            agent,
            country,
            affiliate,
            usd,
            Some(self.month_name.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsolidateOutcome {
    Consolidated,
    NoConnection,
    NoData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableStatus {
    Loaded,
    Empty,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableReport {
    pub table: String,
    pub month_label: String,
    pub status: TableStatus,
    pub original_columns: Vec<String>,
    pub raw_rows: i64,
    pub header_promoted: bool,
    pub valid_rows: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCount {
    pub month_name: String,
    pub rows: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DestinationReport {
    pub table: String,
    pub written: bool,
    pub rows_inserted: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConsolidateData {
    pub outcome: ConsolidateOutcome,
    pub message: String,
    pub database_path: String,
    pub csv_path: Option<String>,
    pub destination_table: String,
    pub tables: Vec<TableReport>,
    pub month_counts: Vec<MonthCount>,
    pub total_rows: i64,
    pub destination: Option<DestinationReport>,
    pub preview: Vec<FtdRecord>,
    pub records: Vec<FtdRecord>,
}
