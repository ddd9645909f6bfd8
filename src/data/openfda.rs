//! openFDA drug-event client, query construction, and the report model.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::info;

use crate::config::Settings;

/// Fixed page size applied uniformly to every openFDA request.
pub const PAGE_LIMIT: usize = 100;

/// Severity filter selected in the dashboard dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeverityFilter {
    #[default]
    All,
    Death,
    Hospitalization,
}

impl SeverityFilter {
    /// Map a query-string value onto a filter. Unrecognized values mean no
    /// additional clause, matching the dashboard's dropdown behaviour.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("Death") => Self::Death,
            Some("Hospitalization") => Self::Hospitalization,
            _ => Self::All,
        }
    }
}

/// Build the openFDA search expression for a drug and severity filter.
///
/// The drug name lands verbatim inside the quoted exact-match token; the
/// whole expression is percent-encoded once when the URL is assembled.
pub fn search_expression(drug_name: &str, severity: SeverityFilter) -> String {
    let mut query = format!("patient.drug.medicinalproduct:\"{drug_name}\"");
    match severity {
        SeverityFilter::Death => query.push_str("+seriousnessdeath:1"),
        SeverityFilter::Hospitalization => query.push_str("+seriousnesshospitalization:1"),
        SeverityFilter::All => {}
    }
    query
}

/// Errors surfaced by the fetch pipeline.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Drug name is required")]
    MissingDrugName,
    #[error("openFDA responded with HTTP {0}")]
    UpstreamStatus(StatusCode),
    #[error("request to openFDA failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed openFDA payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl FetchError {
    /// Whether the failure is the caller's fault rather than upstream's.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingDrugName)
    }
}

/// Thin client over the openFDA drug-event endpoint.
#[derive(Debug, Clone)]
pub struct OpenFdaClient {
    client: Client,
    base: String,
    api_key: Option<String>,
}

impl OpenFdaClient {
    pub fn new(settings: &Settings) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(settings.user_agent())
            .gzip(true)
            .brotli(true)
            .build()?;
        Ok(Self {
            client,
            base: settings.openfda_base.clone(),
            api_key: settings.openfda_api_key.clone(),
        })
    }

    /// Fetch one page of adverse events for `drug_name`.
    ///
    /// The provider's JSON body is returned unreshaped so the proxy endpoint
    /// can pass it through. Blank names fail before any network traffic.
    pub async fn fetch_events(
        &self,
        drug_name: &str,
        severity: SeverityFilter,
    ) -> Result<serde_json::Value, FetchError> {
        let drug_name = drug_name.trim();
        if drug_name.is_empty() {
            return Err(FetchError::MissingDrugName);
        }

        let query = search_expression(drug_name, severity);
        let mut url = format!(
            "{base}?search={search}&limit={limit}",
            base = self.base,
            search = urlencoding::encode(&query),
            limit = PAGE_LIMIT
        );
        if let Some(key) = self.api_key.as_deref() {
            url.push_str("&api_key=");
            url.push_str(key);
        }

        info!(%drug_name, ?severity, "querying openFDA");
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::UpstreamStatus(status));
        }
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Pull the event list out of a pass-through payload. A missing or null
/// `results` field yields an empty list rather than an error.
pub fn results_from(payload: &serde_json::Value) -> Result<Vec<EventRecord>, FetchError> {
    match payload.get("results") {
        Some(results) if !results.is_null() => Ok(serde_json::from_value(results.clone())?),
        _ => Ok(Vec::new()),
    }
}

/// One adverse-event report. Every field is optional; absence means the
/// flag is not set or the value is unknown.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventRecord {
    #[serde(default)]
    pub receivedate: Option<String>,
    #[serde(default)]
    pub serious: Option<String>,
    #[serde(default)]
    pub seriousnessdeath: Option<String>,
    #[serde(default)]
    pub seriousnesshospitalization: Option<String>,
    #[serde(default)]
    pub seriousnesslifethreatening: Option<String>,
    #[serde(default)]
    pub patient: Option<Patient>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Patient {
    #[serde(default)]
    pub patientsex: Option<String>,
    #[serde(default)]
    pub drug: Vec<DrugEntry>,
    #[serde(default)]
    pub reaction: Vec<ReactionEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DrugEntry {
    #[serde(default)]
    pub medicinalproduct: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReactionEntry {
    #[serde(default)]
    pub reactionmeddrapt: Option<String>,
}

/// openFDA encodes its seriousness booleans as the literal string "1"; any
/// other value, including absence, reads as false.
fn flag_set(value: Option<&str>) -> bool {
    value == Some("1")
}

impl EventRecord {
    pub fn is_serious(&self) -> bool {
        flag_set(self.serious.as_deref())
    }

    pub fn is_death(&self) -> bool {
        flag_set(self.seriousnessdeath.as_deref())
    }

    pub fn is_hospitalization(&self) -> bool {
        flag_set(self.seriousnesshospitalization.as_deref())
    }

    pub fn is_life_threatening(&self) -> bool {
        flag_set(self.seriousnesslifethreatening.as_deref())
    }

    /// Reported patient sex; a missing patient object reads as unknown.
    pub fn sex(&self) -> Sex {
        Sex::from_code(self.patient.as_ref().and_then(|p| p.patientsex.as_deref()))
    }

    /// Year component of the report date, when well formed.
    pub fn report_year(&self) -> Option<&str> {
        self.receivedate
            .as_deref()
            .filter(|date| date.len() >= 4 && date.is_char_boundary(4))
            .map(|date| &date[..4])
    }
}

/// Reported patient sex, decoded from the provider's numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
    Unknown,
}

impl Sex {
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("1") => Self::Male,
            Some("2") => Self::Female,
            _ => Self::Unknown,
        }
    }
}
