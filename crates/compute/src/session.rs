use std::time::Instant;

use tracing::info;

use docreads_core::{DocReadsError, ReadPair, VisitorId};
use docreads_graph::{build_also_likes_graph, GraphStore};
use docreads_store::EventStore;

use crate::pipeline::also_likes::{self, LikesRanking, PairCount};
use crate::pipeline::browser;
use crate::pipeline::geo::{self, CountryResolution};
use crate::pipeline::ranking;

/// One analysis session over a loaded store.
///
/// Holds the result of the most recent country query so a continent query
/// can follow it. Sessions borrow the store immutably; any number of them
/// may share one store.
pub struct AnalysisSession<'a> {
    store: &'a EventStore,
    last_countries: Option<CountryResolution>,
    ranking: Box<dyn LikesRanking + 'a>,
}

impl<'a> AnalysisSession<'a> {
    pub fn new(store: &'a EventStore) -> Self {
        Self {
            store,
            last_countries: None,
            ranking: Box::new(PairCount),
        }
    }

    /// Swap the also-likes ranking strategy.
    pub fn with_ranking(mut self, ranking: impl LikesRanking + 'a) -> Self {
        self.ranking = Box::new(ranking);
        self
    }

    /// Name of the active also-likes ranking strategy.
    pub fn ranking_name(&self) -> &'static str {
        self.ranking.name()
    }

    pub fn store(&self) -> &EventStore {
        self.store
    }

    /// Country names of every event on `document_id`. Remembered for
    /// [`Self::continents_for_last_query`]; a failed query forgets the
    /// previous one.
    pub fn countries_for_document(&mut self, document_id: &str) -> Result<Vec<String>, DocReadsError> {
        self.last_countries = None;
        let resolution = geo::countries_for_document(self.store, document_id)?;
        let names = resolution.names.clone();
        self.last_countries = Some(resolution);
        Ok(names)
    }

    pub fn last_country_resolution(&self) -> Option<&CountryResolution> {
        self.last_countries.as_ref()
    }

    /// Continents for the most recent country query of this session.
    pub fn continents_for_last_query(&self) -> Result<Vec<String>, DocReadsError> {
        let resolution = self
            .last_countries
            .as_ref()
            .ok_or(DocReadsError::NoPriorCountryQuery)?;
        geo::continents_for(resolution)
    }

    pub fn browser_agents_raw(&self) -> Vec<String> {
        browser::browser_agents_raw(self.store)
    }

    pub fn browser_names(&self) -> Vec<String> {
        browser::browser_names(self.store)
    }

    pub fn top_readers(&self, n: usize) -> Vec<(VisitorId, f64)> {
        let start = Instant::now();
        let top = ranking::top_readers(self.store, n);
        info!(
            n,
            returned = top.len(),
            "Top readers computed in {:.1}ms",
            start.elapsed().as_secs_f64() * 1000.0
        );
        top
    }

    pub fn readers_of(&self, document_id: &str) -> Vec<VisitorId> {
        also_likes::readers_of(self.store, document_id)
    }

    pub fn top_likes(&self, document_id: &str, exclude: Option<&str>, n: usize) -> Vec<(ReadPair, usize)> {
        let start = Instant::now();
        let ranked = also_likes::top_likes_with(self.store, document_id, exclude, n, self.ranking.as_ref());
        info!(
            document = document_id,
            returned = ranked.len(),
            "Also-likes computed in {:.1}ms",
            start.elapsed().as_secs_f64() * 1000.0
        );
        ranked
    }

    /// Ranked also-likes pairs assembled into a visitor → document graph.
    pub fn also_likes_graph(&self, document_id: &str, exclude: Option<&str>, n: usize) -> GraphStore {
        let ranked = self.top_likes(document_id, exclude, n);
        build_also_likes_graph(document_id, exclude, &ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::also_likes::DocumentPopularity;
    use docreads_core::{EntityType, Event, EventType};

    fn make_event(visitor: &str, document: &str, country: &str) -> Event {
        Event {
            visitor_id: visitor.to_string(),
            document_id: document.to_string(),
            country_code: country.to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            read_time: 1.0,
            event_type: EventType::Read,
        }
    }

    #[test]
    fn continents_need_a_prior_country_query() {
        let store = EventStore::from_events(vec![make_event("v1", "d1", "US")]);
        let session = AnalysisSession::new(&store);
        assert!(matches!(
            session.continents_for_last_query(),
            Err(DocReadsError::NoPriorCountryQuery)
        ));
    }

    #[test]
    fn continents_follow_the_last_country_query() {
        let store = EventStore::from_events(vec![
            make_event("v1", "d1", "US"),
            make_event("v2", "d2", "FRA"),
        ]);
        let mut session = AnalysisSession::new(&store);

        assert_eq!(session.countries_for_document("d1").unwrap(), vec!["United States"]);
        assert_eq!(session.continents_for_last_query().unwrap(), vec!["North America"]);

        session.countries_for_document("d2").unwrap();
        assert_eq!(session.continents_for_last_query().unwrap(), vec!["Europe"]);
    }

    #[test]
    fn failed_country_query_clears_state() {
        let store = EventStore::from_events(vec![
            make_event("v1", "d1", "US"),
            make_event("v2", "d2", "??"),
        ]);
        let mut session = AnalysisSession::new(&store);
        session.countries_for_document("d1").unwrap();
        assert!(session.countries_for_document("d2").is_err());
        assert!(session.last_country_resolution().is_none());
        assert!(matches!(
            session.continents_for_last_query(),
            Err(DocReadsError::NoPriorCountryQuery)
        ));
    }

    #[test]
    fn graph_uses_session_ranking() {
        let store = EventStore::from_events(vec![
            make_event("v1", "d1", "US"),
            make_event("v2", "d1", "US"),
            make_event("v2", "d2", "US"),
        ]);
        let session = AnalysisSession::new(&store).with_ranking(DocumentPopularity);
        assert_eq!(session.ranking_name(), "document-popularity");
        assert_eq!(AnalysisSession::new(&store).ranking_name(), "pair-count");
        let graph = session.also_likes_graph("d1", Some("v1"), 10);
        assert_eq!(graph.edges.len(), 2);
        assert!(graph.find_node(EntityType::Visitor, "v1").unwrap().highlighted);
        assert!(graph.find_node(EntityType::Document, "d2").is_some());
    }

    #[test]
    fn empty_store_queries_are_empty() {
        let store = EventStore::default();
        let mut session = AnalysisSession::new(&store);
        assert!(session.countries_for_document("d1").unwrap().is_empty());
        assert!(session.continents_for_last_query().unwrap().is_empty());
        assert!(session.browser_agents_raw().is_empty());
        assert!(session.browser_names().is_empty());
        assert!(session.top_readers(10).is_empty());
        assert!(session.readers_of("d1").is_empty());
        assert!(session.top_likes("d1", None, 10).is_empty());
    }
}
