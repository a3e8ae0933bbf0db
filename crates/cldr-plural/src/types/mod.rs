mod category;

pub use category::PluralCategory;
