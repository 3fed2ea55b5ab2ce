/// Resolved page route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The wallet page, with its optional pass-through inputs: a dapp
    /// connection URI from the query and the fragment hash.
    Wallet {
        uri: Option<String>,
        hash: Option<String>,
    },
    /// Catch-all for every unmatched path.
    NotFound { path: String },
}

/// Resolve a location (path, optional query, optional fragment) to a route.
///
/// Only the root path matches the wallet page. The `uri` query parameter
/// and the fragment are passed through verbatim, no percent-decoding.
pub fn resolve_route(location: &str) -> Route {
    let (rest, fragment) = match location.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (location, None),
    };
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };

    if !path.is_empty() && path != "/" {
        return Route::NotFound {
            path: path.to_string(),
        };
    }

    Route::Wallet {
        uri: query.and_then(|q| query_param(q, "uri")),
        hash: fragment.filter(|f| !f.is_empty()).map(str::to_string),
    }
}

fn query_param(query: &str, name: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}
