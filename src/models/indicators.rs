use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<(u32, u32, u32)>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsiIndicator {
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmaIndicator {
    pub value: f64,
    pub period: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmaIndicator {
    pub value: f64,
    pub period: u32,
}

/// Moving average family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MovingAverageKind {
    Sma,
    Ema,
}

impl MovingAverageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovingAverageKind::Sma => "sma",
            MovingAverageKind::Ema => "ema",
        }
    }
}

/// Point-in-time indicator values for one symbol. Every value is optional;
/// a failed or missing fetch simply leaves the slot empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndicatorSet {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub smas: Vec<SmaIndicator>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub emas: Vec<EmaIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<RsiIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<MacdIndicator>,
}

impl IndicatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sma(mut self, period: u32, value: f64) -> Self {
        self.smas.push(SmaIndicator { value, period });
        self
    }

    pub fn with_ema(mut self, period: u32, value: f64) -> Self {
        self.emas.push(EmaIndicator { value, period });
        self
    }

    pub fn with_rsi(mut self, rsi: RsiIndicator) -> Self {
        self.rsi = Some(rsi);
        self
    }

    pub fn with_macd(mut self, macd: MacdIndicator) -> Self {
        self.macd = Some(macd);
        self
    }

    pub fn sma(&self, period: u32) -> Option<f64> {
        self.smas
            .iter()
            .find(|sma| sma.period == period)
            .map(|sma| sma.value)
    }

    pub fn ema(&self, period: u32) -> Option<f64> {
        self.emas
            .iter()
            .find(|ema| ema.period == period)
            .map(|ema| ema.value)
    }

    pub fn moving_average(&self, kind: MovingAverageKind, period: u32) -> Option<f64> {
        match kind {
            MovingAverageKind::Sma => self.sma(period),
            MovingAverageKind::Ema => self.ema(period),
        }
    }
}
