use chrono::Utc;
use uuid::Uuid;

/// Mints a page-unique chart identifier for surfaces that carry no stable
/// id: a time component for rough ordering plus a random component so two
/// charts minted in the same millisecond never collide.
#[must_use]
pub(crate) fn mint_chart_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let nonce = Uuid::new_v4().simple();
    format!("chart-{millis}-{nonce}")
}
