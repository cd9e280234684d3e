//! Lookup service response types.
//!
//! Internal to `trackdl-lookup`; consumers see `TrackDescriptor`.

use serde::Deserialize;
use serde_json::Value;
use trackdl_core::track::TrackDescriptor;

/// JSON body returned by the lookup endpoint.
///
/// Every key is optional. Scalar values are accepted in either string or
/// number form since the service is not consistent about it.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct TrackInfoResponse {
    #[serde(default)]
    name: Option<Value>,
    #[serde(default)]
    artist: Option<Value>,
    #[serde(default)]
    date: Option<Value>,
    #[serde(default)]
    duration: Option<Value>,
    #[serde(default)]
    thumb: Option<Value>,
    #[serde(default)]
    dlink_m4a: Option<Value>,
}

impl TrackInfoResponse {
    pub(crate) fn into_descriptor(self) -> TrackDescriptor {
        TrackDescriptor {
            name: scalar(self.name),
            artist: scalar(self.artist),
            date: scalar(self.date),
            duration: scalar(self.duration),
            thumbnail_url: scalar(self.thumb),
            audio_url: scalar(self.dlink_m4a),
        }
    }
}

/// Stringify a JSON scalar; `null`, arrays and objects count as absent.
fn scalar(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
