mod correction;
mod histories;
mod history;
mod index;
mod statistics;
mod table;

pub use correction::*;
pub use histories::*;
pub use history::*;
pub use index::*;
pub use statistics::*;
pub use table::*;
