//! Action rows that open an external link.
//!
//! Both rows resolve their URL at activation time and fail quietly: a
//! malformed URL means the tap does nothing.

use std::rc::Rc;
use url::Url;

use super::ActionRow;
use crate::platform::UrlOpener;

/// Query pair asking the store to jump straight to the review form
pub const REVIEW_QUERY: (&str, &str) = ("action", "write-review");

/// Open `app_url` if the host can handle it, the web fallback otherwise
pub fn dispatch_social_share(app_url: &str, web_url: &str, opener: &dyn UrlOpener) {
    let web = match Url::parse(web_url) {
        Ok(web) => web,
        Err(e) => {
            tracing::debug!("Ignoring malformed link {:?}: {}", web_url, e);
            return;
        }
    };

    if let Ok(app) = Url::parse(app_url) {
        if opener.can_open(&app) {
            tracing::debug!("Opening app link {}", app);
            opener.open(&app);
            return;
        }
    }

    tracing::debug!("Opening web link {}", web);
    opener.open(&web);
}

/// Store page URL with the review action appended
pub fn review_url(store_url: &str) -> Option<Url> {
    let mut url = Url::parse(store_url).ok()?;
    url.query_pairs_mut().append_pair(REVIEW_QUERY.0, REVIEW_QUERY.1);
    Some(url)
}

pub fn dispatch_store_review(store_url: &str, opener: &dyn UrlOpener) {
    match review_url(store_url) {
        Some(url) => {
            tracing::debug!("Opening review page {}", url);
            opener.open(&url);
        }
        None => tracing::debug!("Ignoring malformed store link {:?}", store_url),
    }
}

/// Row opening a social profile in its app, or on the web when the app is
/// not installed
pub fn social_share_row(
    icon: impl Into<String>,
    title: impl Into<String>,
    app_url: impl Into<String>,
    web_url: impl Into<String>,
    opener: Rc<dyn UrlOpener>,
) -> ActionRow {
    let app_url = app_url.into();
    let web_url = web_url.into();
    ActionRow::new(icon, title, move || {
        dispatch_social_share(&app_url, &web_url, opener.as_ref())
    })
}

/// Row sending the user to the store's review form
pub fn store_review_row(
    icon: impl Into<String>,
    title: impl Into<String>,
    store_url: impl Into<String>,
    opener: Rc<dyn UrlOpener>,
) -> ActionRow {
    let store_url = store_url.into();
    ActionRow::new(icon, title, move || {
        dispatch_store_review(&store_url, opener.as_ref())
    })
}
