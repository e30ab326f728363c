/// Data layer: core types, loading, filtering, statistics and export.
///
/// Architecture:
/// ```text
///  Imports_Exports_Dataset.csv / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → validate schema → seeded sample
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Row>: typed TradeRecord + raw cells
///   └──────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌──────────┐   ┌──────────┐
///   │  filter   │   │  stats    │  describe / mode / min-max / pivots
///   └──────────┘   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  selected rows → CSV
///   └──────────┘
/// ```

pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
