//! Query construction from raw user input.

/// Build the literal query string sent to the search API.
///
/// - `latest` wins over everything: `"Latest updates about {topic} in the last 6 months"`.
/// - Otherwise comparison topics become `"What is {topic}"`.
/// - Otherwise the topic is passed through unchanged.
///
/// The topic is not validated here; callers reject empty input first.
///
/// # Examples
///
/// ```
/// use websage_search::query::build_query;
///
/// assert_eq!(build_query("cats", false, false), "cats");
/// assert_eq!(build_query("cats", false, true), "What is cats");
/// ```
pub fn build_query(topic: &str, latest: bool, comparison: bool) -> String {
    if latest {
        format!("Latest updates about {topic} in the last 6 months")
    } else if comparison {
        format!("What is {topic}")
    } else {
        topic.to_owned()
    }
}
