/*
[INPUT]:  Binance REST schema definitions and serde requirements
[OUTPUT]: Typed Rust records, enums and tables with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod enums;
pub mod models;
pub mod responses;
pub mod table;

pub use enums::*;
pub use models::*;
pub use responses::*;
pub use table::*;
