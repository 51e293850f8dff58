/// Data layer: recorded results, derived series, validation and export.
///
/// Architecture:
/// ```text
///   recorded tables (consts)
///        │
///        ▼
///   ┌───────────┐
///   │ transform │  reverse / scale / difference / tick ranges
///   └───────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ Heatmap/Series │  validated on construction → Chart
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  chart → .csv / .json
///   └──────────┘
/// ```

pub mod error;
pub mod experiments;
pub mod export;
pub mod model;
pub mod transform;
