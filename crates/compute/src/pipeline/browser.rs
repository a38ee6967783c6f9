use docreads_store::EventStore;

/// Browser name of a user agent: everything before the first `/`, or the
/// whole string when there is no `/`.
pub fn browser_name(user_agent: &str) -> &str {
    user_agent
        .split_once('/')
        .map_or(user_agent, |(name, _)| name)
}

/// Raw user agent of every event.
pub fn browser_agents_raw(store: &EventStore) -> Vec<String> {
    store.events().map(|e| e.user_agent.clone()).collect()
}

/// Browser name of every event.
pub fn browser_names(store: &EventStore) -> Vec<String> {
    store
        .events()
        .map(|e| browser_name(&e.user_agent).to_string())
        .collect()
}
