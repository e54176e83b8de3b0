//! Ordered field aliases for heterogeneous upstream JSON.
//!
//! Each logical field lists the keys the upstream schemas are known to use,
//! most preferred first. Resolution happens once, at ingestion; nothing past
//! this module reads raw JSON.

use serde_json::Value;

use crate::services::error::MarketDataError;

#[derive(Debug, Clone, Copy)]
pub struct FieldAliases {
    pub name: &'static str,
    pub keys: &'static [&'static str],
}

pub const QUOTE_PRICE: FieldAliases = FieldAliases {
    name: "price",
    keys: &["lastTradePrice", "last", "close", "price"],
};

pub const QUOTE_52_WEEK_HIGH: FieldAliases = FieldAliases {
    name: "fiftyTwoWeekHigh",
    keys: &["fiftyTwoWeekHigh", "yearHigh", "week52High", "high52"],
};

pub const QUOTE_52_WEEK_LOW: FieldAliases = FieldAliases {
    name: "fiftyTwoWeekLow",
    keys: &["fiftyTwoWeekLow", "yearLow", "week52Low", "low52"],
};

pub const BAR_HIGH: FieldAliases = FieldAliases {
    name: "high",
    keys: &["h", "high"],
};

pub const BAR_LOW: FieldAliases = FieldAliases {
    name: "low",
    keys: &["l", "low"],
};

pub const BAR_CLOSE: FieldAliases = FieldAliases {
    name: "close",
    keys: &["c", "close"],
};

pub const SAMPLE_TIMESTAMP: FieldAliases = FieldAliases {
    name: "timestamp",
    keys: &["t", "timestamp"],
};

pub const SAMPLE_VALUE: FieldAliases = FieldAliases {
    name: "value",
    keys: &["value", "v"],
};

pub const MACD_SIGNAL: FieldAliases = FieldAliases {
    name: "signal",
    keys: &["signal", "signal_line"],
};

pub const MACD_HISTOGRAM: FieldAliases = FieldAliases {
    name: "histogram",
    keys: &["histogram", "hist"],
};

impl FieldAliases {
    /// First alias carrying a finite number. Numeric strings are accepted.
    pub fn resolve_f64(&self, object: &Value) -> Option<f64> {
        self.keys
            .iter()
            .filter_map(|key| object.get(*key))
            .find_map(as_f64)
    }

    pub fn require_f64(&self, object: &Value) -> Result<f64, MarketDataError> {
        self.resolve_f64(object)
            .ok_or(MarketDataError::MissingField(self.name))
    }

    pub fn resolve_i64(&self, object: &Value) -> Option<i64> {
        self.keys
            .iter()
            .filter_map(|key| object.get(*key))
            .find_map(|value| match value {
                Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            })
    }
}

fn as_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}
