//! Stock-effect classification of movement types.
//!
//! Each variant's database string matches the seed data in the
//! `tipos_movimiento.afecta_stock` column.

/// How a movement type changes a product's stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockEffect {
    /// Incoming stock (purchases, returns to inventory).
    Incrementa,
    /// Outgoing stock (sales, dispatches). Requires a sufficient-stock check.
    Decrementa,
    /// Administrative movements that leave stock untouched.
    NoAfecta,
}

impl StockEffect {
    /// Return the database string for this effect.
    pub fn as_str(self) -> &'static str {
        match self {
            StockEffect::Incrementa => "Incrementa",
            StockEffect::Decrementa => "Decrementa",
            StockEffect::NoAfecta => "No_Afecta",
        }
    }

    /// Parse the database string. Returns `None` for unknown values so the
    /// caller can surface a proper validation error instead of panicking on
    /// bad reference data.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Incrementa" => Some(StockEffect::Incrementa),
            "Decrementa" => Some(StockEffect::Decrementa),
            "No_Afecta" => Some(StockEffect::NoAfecta),
            _ => None,
        }
    }
}
