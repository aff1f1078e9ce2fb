//! Probe request construction
//!
//! The `orm` parameter is joined with `&`, not `?`: the only endpoint that
//! takes it already carries a query string (`?limit=10`). This is a single
//! rule for that endpoint, not a general query builder.

use serde::Serialize;

use crate::types::Selection;

/// Host every framework listens on unless configured otherwise
pub const DEFAULT_HOST: &str = "localhost";

/// Everything a run needs from the selection, captured when it starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeRequest {
    pub url: String,
    pub framework_label: String,
    pub orm_label: String,
}

impl ProbeRequest {
    pub fn from_selection(host: &str, selection: &Selection) -> Self {
        Self {
            url: build_url(host, selection),
            framework_label: selection.framework.name.to_string(),
            orm_label: selection.orm.name.to_string(),
        }
    }
}

/// `http://<host>:<port><path>`, plus `&orm=<value>` for the database probe
pub fn build_url(host: &str, selection: &Selection) -> String {
    let mut url = format!(
        "http://{}:{}{}",
        host, selection.framework.port, selection.endpoint.path
    );
    if selection.endpoint.requires_orm() {
        url.push_str("&orm=");
        url.push_str(selection.orm.value);
    }
    url
}
