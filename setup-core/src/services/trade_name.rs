use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::services::ServiceError;

/// Body sent to the trade-name advisory service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeNameRequest {
    pub messages: Vec<String>,
    pub thread_id: String,
}

impl TradeNameRequest {
    /// A request for a single name on a fresh conversation thread.
    pub fn for_name(name: &str) -> Self {
        Self {
            messages: vec![name.trim().to_string()],
            thread_id: Uuid::new_v4().to_string(),
        }
    }
}

/// Advisory flags returned for a candidate trade name. None of them block
/// the wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TradeNameCheck {
    pub has_number: bool,
    pub has_region_name: bool,
    pub has_arabized_name: bool,
    pub has_global_name: bool,
    pub arabic_equivalent_name: Option<String>,
}

impl TradeNameCheck {
    /// Human-readable notes for every flag that is set.
    pub fn advisories(&self) -> Vec<&'static str> {
        [
            (self.has_number, "contains a number"),
            (self.has_region_name, "contains a region name"),
            (self.has_arabized_name, "is an arabized name"),
            (self.has_global_name, "contains a global name"),
        ]
        .into_iter()
        .filter_map(|(set, note)| set.then_some(note))
        .collect()
    }

    pub fn is_clear(&self) -> bool {
        self.advisories().is_empty()
    }
}

#[async_trait]
pub trait TradeNameChecker: Send + Sync {
    fn backend_name(&self) -> &'static str;

    async fn check(
        &self,
        request: &TradeNameRequest,
    ) -> Result<TradeNameCheck, ServiceError>;
}

/// Runs one advisory check for `name`. Failures are logged and returned;
/// callers treat them as "no annotation".
pub async fn check_name(
    checker: &dyn TradeNameChecker,
    name: &str,
) -> Result<TradeNameCheck, ServiceError> {
    let request = TradeNameRequest::for_name(name);
    debug!(backend = checker.backend_name(), thread_id = %request.thread_id, name, "checking trade name");
    checker.check(&request).await.inspect_err(|e| {
        warn!(backend = checker.backend_name(), name, error = %e, "trade name check failed");
    })
}

const REGION_WORDS: &[&str] = &[
    "dubai",
    "abu dhabi",
    "sharjah",
    "ajman",
    "fujairah",
    "ras al khaimah",
    "umm al quwain",
    "emirates",
    "uae",
    "gulf",
    "arabia",
];

const GLOBAL_WORDS: &[&str] = &[
    "global",
    "international",
    "world",
    "worldwide",
    "universal",
    "intercontinental",
];

/// Offline checker that flags names by simple text rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTradeNameChecker;

impl HeuristicTradeNameChecker {
    fn contains_word(
        name: &str,
        words: &[&str],
    ) -> bool {
        let padded = format!(" {} ", normalize_words(name));
        words.iter().any(|word| padded.contains(&format!(" {word} ")))
    }

    pub fn evaluate(name: &str) -> TradeNameCheck {
        TradeNameCheck {
            has_number: name.chars().any(|c| c.is_ascii_digit()),
            has_region_name: Self::contains_word(name, REGION_WORDS),
            has_arabized_name: name.chars().any(|c| ('\u{0600}'..='\u{06FF}').contains(&c)),
            has_global_name: Self::contains_word(name, GLOBAL_WORDS),
            arabic_equivalent_name: None,
        }
    }
}

fn normalize_words(name: &str) -> String {
    name.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[async_trait]
impl TradeNameChecker for HeuristicTradeNameChecker {
    fn backend_name(&self) -> &'static str {
        "mock"
    }

    async fn check(
        &self,
        request: &TradeNameRequest,
    ) -> Result<TradeNameCheck, ServiceError> {
        let name = request
            .messages
            .first()
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| ServiceError::InvalidRequest("no trade name to check".into()))?;
        Ok(Self::evaluate(name))
    }
}

/// Identifies one dispatched name check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameCheckTicket {
    pub request_id: u64,
    pub field: usize,
    generation: u64,
}

/// Keeps advisory results per name field and drops responses that arrive
/// after their field was re-checked or after focus moved elsewhere.
#[derive(Debug, Default)]
pub struct NameCheckTracker {
    next_request: u64,
    generation: u64,
    latest: HashMap<usize, u64>,
    results: BTreeMap<usize, TradeNameCheck>,
}

impl NameCheckTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(
        &mut self,
        field: usize,
    ) -> NameCheckTicket {
        self.next_request += 1;
        self.latest.insert(field, self.next_request);
        NameCheckTicket {
            request_id: self.next_request,
            field,
            generation: self.generation,
        }
    }

    /// Invalidates every check still in flight. Stored results are kept.
    pub fn refocus(&mut self) {
        self.generation += 1;
        self.latest.clear();
    }

    pub fn is_current(
        &self,
        ticket: &NameCheckTicket,
    ) -> bool {
        ticket.generation == self.generation
            && self.latest.get(&ticket.field) == Some(&ticket.request_id)
    }

    /// Applies a response. Returns `false` when the ticket is stale and the
    /// response was discarded. A failed check clears the field's annotation.
    pub fn apply(
        &mut self,
        ticket: NameCheckTicket,
        response: Result<TradeNameCheck, ServiceError>,
    ) -> bool {
        if !self.is_current(&ticket) {
            debug!(
                field = ticket.field,
                request_id = ticket.request_id,
                "discarding stale trade name check"
            );
            return false;
        }
        self.latest.remove(&ticket.field);
        match response {
            Ok(check) => {
                self.results.insert(ticket.field, check);
            }
            Err(_) => {
                self.results.remove(&ticket.field);
            }
        }
        true
    }

    pub fn result(
        &self,
        field: usize,
    ) -> Option<&TradeNameCheck> {
        self.results.get(&field)
    }

    /// Drops the stored result and any check in flight for `field`, whose
    /// text no longer matches what was checked.
    pub fn invalidate(
        &mut self,
        field: usize,
    ) {
        self.latest.remove(&field);
        if self.results.remove(&field).is_some() {
            debug!(field, "trade name check invalidated");
        }
    }

    /// Forgets a removed name field. Later fields shift down by one and any
    /// check in flight is invalidated.
    pub fn remove_field(
        &mut self,
        field: usize,
    ) {
        self.refocus();
        self.results = std::mem::take(&mut self.results)
            .into_iter()
            .filter(|(index, _)| *index != field)
            .map(|(index, check)| if index > field { (index - 1, check) } else { (index, check) })
            .collect();
    }

    pub fn clear(&mut self) {
        self.refocus();
        self.results.clear();
    }
}
