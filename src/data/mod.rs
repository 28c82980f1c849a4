//! Datapijplijn: CSV-kolom → genormaliseerde waarden → kleuren.

pub mod colormap;
pub mod csv_column;
pub mod normalize;

pub use colormap::{ColorValue, color_from_unit};
pub use csv_column::{DEFAULT_COLUMN, read_column, read_column_from_reader, read_column_from_str};
pub use normalize::normalize;
