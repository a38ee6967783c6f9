use serde::Serialize;
use tracing::debug;

use docreads_core::geo;
use docreads_core::DocReadsError;
use docreads_store::{EventFilter, EventStore};

/// Result of a country query: one entry per matching event, in store order.
///
/// `codes` holds the canonical alpha-2 code behind each name so a continent
/// query can reuse them without touching the store again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryResolution {
    pub document_id: String,
    pub codes: Vec<String>,
    pub names: Vec<String>,
}

/// Canonical alpha-2 code for a raw 2- or 3-letter code that the country
/// table knows about.
pub fn canonical_code(raw: &str) -> Result<String, DocReadsError> {
    let code = geo::normalize_code(raw)
        .ok_or_else(|| DocReadsError::UnknownCountryCode(raw.to_string()))?;
    if geo::country_name(&code).is_none() {
        return Err(DocReadsError::UnknownCountryCode(raw.to_string()));
    }
    Ok(code)
}

/// Countries of every event on `document_id`.
pub fn countries_for_document(
    store: &EventStore,
    document_id: &str,
) -> Result<CountryResolution, DocReadsError> {
    let events = store.scan(&EventFilter::new().document(document_id));

    let mut codes = Vec::with_capacity(events.len());
    let mut names = Vec::with_capacity(events.len());
    for event in events {
        let code = canonical_code(&event.country_code)?;
        let name = geo::country_name(&code)
            .ok_or_else(|| DocReadsError::UnknownCountryCode(event.country_code.clone()))?;
        names.push(name.to_string());
        codes.push(code);
    }

    debug!(document = document_id, countries = names.len(), "Countries resolved");

    Ok(CountryResolution {
        document_id: document_id.to_string(),
        codes,
        names,
    })
}

/// Continents for the codes of a previous country query, in the same order.
pub fn continents_for(resolution: &CountryResolution) -> Result<Vec<String>, DocReadsError> {
    resolution
        .codes
        .iter()
        .map(|code| {
            geo::continent_code(code)
                .and_then(geo::continent_name)
                .map(str::to_string)
                .ok_or_else(|| DocReadsError::UnknownCountryCode(code.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use docreads_core::{Event, EventType};

    fn make_event(document: &str, country: &str, event_type: &str) -> Event {
        Event {
            visitor_id: "v".to_string(),
            document_id: document.to_string(),
            country_code: country.to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            read_time: 0.0,
            event_type: EventType::from(event_type),
        }
    }

    #[test]
    fn alpha3_and_alpha2_resolve_alike() {
        let store = EventStore::from_events(vec![
            make_event("d1", "USA", "read"),
            make_event("d1", "US", "read"),
            make_event("d2", "GB", "read"),
        ]);
        let res = countries_for_document(&store, "d1").unwrap();
        assert_eq!(res.codes, vec!["US", "US"]);
        assert_eq!(res.names[0], res.names[1]);
        assert_eq!(res.names[0], "United States");
    }

    #[test]
    fn every_event_type_counts() {
        let store = EventStore::from_events(vec![
            make_event("d1", "DE", "impression"),
            make_event("d1", "fr", "read"),
        ]);
        let res = countries_for_document(&store, "d1").unwrap();
        assert_eq!(res.names, vec!["Germany", "France"]);
    }

    #[test]
    fn unknown_code_is_an_error() {
        let store = EventStore::from_events(vec![
            make_event("d1", "US", "read"),
            make_event("d1", "ZZ", "read"),
        ]);
        match countries_for_document(&store, "d1").unwrap_err() {
            DocReadsError::UnknownCountryCode(code) => assert_eq!(code, "ZZ"),
            other => panic!("unexpected error: {other}"),
        }

        let store = EventStore::from_events(vec![make_event("d1", "QQQ", "read")]);
        assert!(matches!(
            countries_for_document(&store, "d1"),
            Err(DocReadsError::UnknownCountryCode(_))
        ));
    }

    #[test]
    fn unknown_document_is_empty() {
        let store = EventStore::from_events(vec![make_event("d1", "US", "read")]);
        let res = countries_for_document(&store, "nope").unwrap();
        assert!(res.names.is_empty());
        assert!(continents_for(&res).unwrap().is_empty());
    }

    #[test]
    fn continents_follow_codes() {
        let store = EventStore::from_events(vec![
            make_event("d1", "USA", "read"),
            make_event("d1", "JP", "read"),
            make_event("d1", "BRA", "read"),
        ]);
        let res = countries_for_document(&store, "d1").unwrap();
        assert_eq!(
            continents_for(&res).unwrap(),
            vec!["North America", "Asia", "South America"]
        );
    }
}
